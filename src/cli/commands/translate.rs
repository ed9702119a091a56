use anyhow::{Context, Result, bail};
use std::io::Read;

use super::build_resolver;
use crate::config::{ResolveOptions, load_resolved};
use crate::quotes::FetchPhase;
use crate::translation::http_client;
use crate::ui::Spinner;

const MAX_INPUT_SIZE: usize = 16 * 1024; // 16KB; quotes are short

pub struct TranslateOptions {
    pub text: Option<String>,
    pub model: Option<String>,
}

/// Direct access to the translation resolver.
///
/// Unlike the quote cards this surface fails loudly: a script piping the
/// output should see an error, not the placeholder text.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_resolved(&ResolveOptions {
        model: options.model,
    });

    let source_text = read_text(options.text)?;
    if source_text.is_empty() {
        bail!("Error: Input is empty");
    }

    let http = http_client().context("Failed to build HTTP client")?;
    let resolver = build_resolver(&http, &config);

    let spinner = Spinner::new(FetchPhase::Translating.label());
    let result = resolver.resolve(&source_text).await;
    spinner.stop();

    let translation = result.context("Translation failed")?;
    println!("{translation}");

    Ok(())
}

fn read_text(arg: Option<String>) -> Result<String> {
    arg.map_or_else(read_stdin, |text| Ok(text.trim().to_string()))
}

#[allow(clippy::significant_drop_tightening)]
fn read_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 8192];
    let mut stdin = std::io::stdin().lock();

    loop {
        let bytes_read = stdin
            .read(&mut chunk)
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..bytes_read]);

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(
                "Error: Input exceeds maximum allowed size (16 KB).\n\n\
                 Pass a shorter text to translate."
            );
        }
    }

    let text = String::from_utf8(buffer).context("Input is not valid UTF-8")?;
    Ok(text.trim().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_from_arg_trims() {
        assert_eq!(
            read_text(Some("  Be yourself.\n".to_string())).unwrap(),
            "Be yourself."
        );
    }

    #[test]
    fn test_max_input_size_constant() {
        assert_eq!(MAX_INPUT_SIZE, 16 * 1024);
    }
}
