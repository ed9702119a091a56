//! # mingala - Daily Quotes in Burmese
//!
//! `mingala` shows inspirational quotes with Burmese translations: a random
//! advice snippet on every run and one AI-generated quote per day, cached
//! until the date rolls over.
//!
//! ## Features
//!
//! - **Translation fallback**: a generative API first, a free lookup
//!   service second, a fixed placeholder last - a card is never blank
//! - **Day-keyed cache**: the generated daily quote is stored once per
//!   calendar day in a single SQLite slot
//! - **Interactive mode**: re-fetch quotes and translate free text with
//!   `mingala session`
//! - **HTTP API**: the same translate/daily endpoints via `mingala serve`
//!
//! ## Quick Start
//!
//! ```bash
//! # Today's cards
//! mingala
//!
//! # Translate something specific
//! mingala translate "Be yourself."
//!
//! # Interactive session
//! mingala session
//!
//! # JSON API on port 8787
//! mingala serve
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/mingala/config.toml`; everything has a
//! built-in default, and the API key comes from `GEMINI_API_KEY`:
//!
//! ```toml
//! [quotes]
//! model = "gemini-2.0-flash"
//!
//! [providers.gemini]
//! api_key_env = "GEMINI_API_KEY"
//! ```
//!
//! Without a key the daily quote is disabled and translations skip straight
//! to the fallback service.

/// Single-slot persistence for the daily quote.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Quote domain types, fetchers, and the day-keyed daily service.
pub mod quotes;

/// HTTP API exposing the translate and daily endpoints.
pub mod server;

/// Interactive quote session.
pub mod session;

/// Translation providers and the fallback resolver.
pub mod translation;

/// Terminal UI components (cards, spinner, colors).
pub mod ui;
