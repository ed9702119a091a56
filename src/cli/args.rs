use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mingala")]
#[command(about = "Inspirational quotes with Burmese translations")]
#[command(version)]
pub struct Args {
    /// Generation model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Skip the generated daily quote card
    #[arg(long)]
    pub no_daily: bool,

    /// Suppress status output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate text to Burmese (reads stdin if no text is given)
    Translate {
        /// Text to translate
        text: Option<String>,

        /// Generation model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
    /// Interactive quote session
    Session {
        /// Generation model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
    /// Serve the quote API over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short = 'p', long, default_value_t = 8787)]
        port: u16,

        /// Generation model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
    /// Configure mingala settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
