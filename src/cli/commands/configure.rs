//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{InquireError, Text};

use crate::config::{
    ConfigManager, DEFAULT_API_KEY_ENV, GEMINI_PROVIDER, ResolveOptions, resolve_config,
};
use crate::ui::Style;

/// Runs the configure command.
///
/// With `--show`, prints the effective configuration. Otherwise prompts for
/// the model and the API key environment variable and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new();

    if show {
        print_current(&manager);
        return Ok(());
    }

    match run_configure_inner(&manager) {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>().is_some_and(|err| {
                matches!(
                    err,
                    InquireError::OperationCanceled | InquireError::OperationInterrupted
                )
            }) =>
        {
            // User backed out of a prompt; leave the config untouched
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default();
    let resolved = resolve_config(&ResolveOptions::default(), &config);

    let model = Text::new("Model:")
        .with_default(&resolved.model)
        .with_help_message("Used for translations and the daily quote")
        .prompt()?;

    if model.trim().is_empty() {
        bail!("Model name cannot be empty");
    }

    let current_env = config
        .providers
        .get(GEMINI_PROVIDER)
        .and_then(|p| p.api_key_env.clone())
        .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());

    let api_key_env = Text::new("API key environment variable:")
        .with_default(&current_env)
        .with_help_message("Where the generation API key is read from")
        .prompt()?;

    if api_key_env.trim().is_empty() {
        bail!("Environment variable name cannot be empty");
    }

    config.quotes.model = Some(model.trim().to_string());
    config
        .providers
        .entry(GEMINI_PROVIDER.to_string())
        .or_default()
        .api_key_env = Some(api_key_env.trim().to_string());

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current(manager: &ConfigManager) {
    let config = manager.load_or_default();
    let resolved = resolve_config(&ResolveOptions::default(), &config);

    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}     {}",
        Style::label("model"),
        Style::value(&resolved.model)
    );
    println!(
        "  {}   {}",
        Style::label("api_key"),
        if resolved.api_key.is_some() {
            Style::success("(set)")
        } else {
            Style::secondary("(not set)")
        }
    );
    println!(
        "  {}    {}",
        Style::label("gemini"),
        Style::secondary(&resolved.gemini_endpoint)
    );
    println!(
        "  {}  {}",
        Style::label("mymemory"),
        Style::secondary(&resolved.mymemory_endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("advice"),
        Style::secondary(&resolved.advice_endpoint)
    );
    println!();
    println!(
        "{}",
        Style::hint(format!("Config file: {}", manager.config_path().display()))
    );
}
