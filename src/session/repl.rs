use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::config::ResolvedConfig;
use crate::quotes::{AdviceClient, DailyQuoteService, FetchPhase, FetchSequence};
use crate::translation::TranslationResolver;
use crate::ui::{Spinner, Style, print_advice, print_daily};

/// An interactive quote session.
///
/// The empty prompt is the original's "New Advice" button: Enter starts a
/// fresh fetch-and-translate sequence. Free text goes straight to the
/// translation resolver.
pub struct QuoteSession {
    config: ResolvedConfig,
    advice: AdviceClient,
    resolver: TranslationResolver,
    daily: DailyQuoteService,
}

impl QuoteSession {
    pub fn new(
        config: ResolvedConfig,
        advice: AdviceClient,
        resolver: TranslationResolver,
        daily: DailyQuoteService,
    ) -> Self {
        Self {
            config,
            advice,
            resolver,
            daily,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.daily.has_generator());

        // Mirror the original startup: one advice card before the first prompt
        self.fetch_and_print_advice().await;

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Enter for new advice, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {
                        self.fetch_and_print_advice().await;
                    }
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.translate_and_print(&text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Daily => {
                self.show_daily().await;
                true
            }
            SlashCommand::Config => {
                ui::print_config(&self.config, self.daily.has_generator());
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    /// One full fetch-and-translate sequence. Failures end at an error line,
    /// never at a dead prompt.
    async fn fetch_and_print_advice(&self) {
        let mut sequence = FetchSequence::new();

        sequence.begin_fetch();
        let spinner = Spinner::new(sequence.phase().label());

        let slip = match self.advice.fetch_random().await {
            Ok(slip) => slip,
            Err(e) => {
                spinner.stop();
                ui::print_error(&format!("{e:#}"));
                return;
            }
        };

        sequence.begin_translate();
        spinner.set_message(sequence.phase().label());

        let myanmar = self.resolver.resolve_or_fallback(&slip.advice).await;
        sequence.finish();
        spinner.stop();

        print_advice(&slip, &myanmar);
        println!();
    }

    async fn show_daily(&self) {
        let spinner = Spinner::new(FetchPhase::Fetching.label());
        let quote = self.daily.today().await;
        spinner.stop();

        match quote {
            Some(quote) => {
                print_daily(&quote);
                println!();
            }
            None => {
                ui::print_error("Daily quote unavailable (set GEMINI_API_KEY to enable it)");
            }
        }
    }

    async fn translate_and_print(&self, text: &str) {
        let spinner = Spinner::new(FetchPhase::Translating.label());
        let myanmar = self.resolver.resolve_or_fallback(text).await;
        spinner.stop();

        println!("{}", Style::value(myanmar));
        println!();
    }
}
