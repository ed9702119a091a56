//! Interactive quote session: Enter re-fetches, slash commands do the rest.

mod command;
mod repl;
mod ui;

pub use repl::QuoteSession;
