use anyhow::Result;
use clap::Parser;

use mingala_cli::cli::commands::{configure, serve, session, show, translate};
use mingala_cli::cli::{Args, Command};
use mingala_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });

    match args.command {
        Some(Command::Translate { text, model }) => {
            let options = translate::TranslateOptions { text, model };
            translate::run_translate(options).await?;
        }
        Some(Command::Session { model }) => {
            let options = session::SessionOptions { model };
            session::run_session(options).await?;
        }
        Some(Command::Serve { host, port, model }) => {
            let options = serve::ServeOptions { host, port, model };
            serve::run_serve(options).await?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = show::ShowOptions {
                model: args.model,
                no_daily: args.no_daily,
            };
            show::run_show(options).await?;
        }
    }

    Ok(())
}
