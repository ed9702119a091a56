pub const TRANSLATION_PROMPT_TEMPLATE: &str =
    "Translate this to Myanmar (Burmese). Output only the translation:\n\n\"{text}\"";

/// Prompt for generating the structured daily quote. The model is asked to
/// produce the translation itself, so the resolver is not involved.
pub const DAILY_QUOTE_PROMPT: &str =
    "Generate a short, powerful, inspirational daily quote about life or success. \
     Provide output in JSON format like this: \
     {\"en\": \"English quote here\", \"my\": \"Myanmar translation here\"}";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_translation_prompt(text: &str) -> String {
    // {text} is a placeholder for string replacement, not a format argument
    TRANSLATION_PROMPT_TEMPLATE.replace("{text}", text)
}
