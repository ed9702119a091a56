use anyhow::Result;

use super::build_services;
use crate::config::{ResolveOptions, load_resolved};
use crate::quotes::{AdviceClient, AdviceSlip, FetchPhase, FetchSequence};
use crate::status;
use crate::translation::TranslationResolver;
use crate::ui::{Spinner, print_advice, print_daily};

pub struct ShowOptions {
    pub model: Option<String>,
    pub no_daily: bool,
}

/// The default command: both quote cards, fetched concurrently.
///
/// The two sequences are independent and never wait for each other; the
/// daily flow is silent and the advice flow drives the spinner.
pub async fn run_show(options: ShowOptions) -> Result<()> {
    let config = load_resolved(&ResolveOptions {
        model: options.model,
    });
    let services = build_services(&config)?;

    if !options.no_daily && !services.daily.has_generator() {
        status!("Note: set GEMINI_API_KEY to enable the daily quote");
    }

    let spinner = Spinner::new(FetchPhase::Fetching.label());

    let advice_flow = advice_sequence(&services.advice, &services.resolver, &spinner);
    let daily_flow = async {
        if options.no_daily {
            None
        } else {
            services.daily.today().await
        }
    };

    let (advice_result, daily_quote) = tokio::join!(advice_flow, daily_flow);
    spinner.stop();

    match daily_quote {
        Some(quote) => {
            print_daily(&quote);
            println!();
        }
        None if !options.no_daily && services.daily.has_generator() => {
            crate::warn!("Daily quote unavailable; showing advice only");
        }
        None => {}
    }

    let (slip, myanmar) = advice_result?;
    print_advice(&slip, &myanmar);

    Ok(())
}

/// Fetch one advice slip, then translate it, advancing the explicit fetch
/// state so the spinner mirrors the current phase.
async fn advice_sequence(
    advice: &AdviceClient,
    resolver: &TranslationResolver,
    spinner: &Spinner,
) -> Result<(AdviceSlip, String)> {
    let mut sequence = FetchSequence::new();

    sequence.begin_fetch();
    spinner.set_message(sequence.phase().label());
    let slip = advice.fetch_random().await?;

    sequence.begin_translate();
    spinner.set_message(sequence.phase().label());
    let myanmar = resolver.resolve_or_fallback(&slip.advice).await;

    sequence.finish();
    Ok((slip, myanmar))
}
