//! Session mode UI components.

use crate::config::ResolvedConfig;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(daily_enabled: bool) {
    println!(
        "{} {} - Daily Quotes in Burmese",
        Style::header("mingala"),
        Style::version(format!("v{VERSION}"))
    );
    if !daily_enabled {
        println!(
            "{}",
            Style::hint("No API key configured: daily quotes are off, translations use the fallback service")
        );
    }
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &ResolvedConfig, daily_enabled: bool) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}     {}",
        Style::label("api_key"),
        if config.api_key.is_some() {
            Style::success("(set)")
        } else {
            Style::secondary("(not set)")
        }
    );
    println!(
        "  {} {}",
        Style::label("daily quote"),
        if daily_enabled {
            Style::success("enabled")
        } else {
            Style::secondary("disabled")
        }
    );
    println!(
        "  {}      {}",
        Style::label("gemini"),
        Style::secondary(&config.gemini_endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("mymemory"),
        Style::secondary(&config.mymemory_endpoint)
    );
    println!(
        "  {}      {}",
        Style::label("advice"),
        Style::secondary(&config.advice_endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}   {}",
        Style::command("/daily"),
        Style::secondary("Show today's generated quote")
    );
    println!(
        "  {}  {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}    {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}    {}",
        Style::command("/quit"),
        Style::secondary("Exit the session")
    );
    println!();
    println!(
        "{}",
        Style::hint("Press Enter for a new advice quote, or type text to translate it")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
