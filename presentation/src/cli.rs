use crate::render;
use application::analysis_service::AnalysisService;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use domain::error::FeedbackError;
use infrastructure::classifier_client::ClassifierClient;
use infrastructure::config::Config;
use shared::stopwatch::Stopwatch;
use shared::types::Result;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "feedlens",
    about = "Classify customer feedback and track session-wide tag and sentiment trends"
)]
pub struct Cli {
    /// Classification endpoint base URL; overrides FEEDLENS_BASE_URL.
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify a single piece of feedback and exit.
    Analyze { text: Vec<String> },
    /// Interactive session (the default): classify lines of feedback until
    /// "exit" or end of input.
    Session,
}

pub struct CliApp {
    service: AnalysisService,
}

impl CliApp {
    pub fn new(base_url: Option<String>) -> Self {
        let mut config = Config::load();
        if let Some(url) = base_url {
            config.base_url = url;
        }
        let client = ClassifierClient::new(config.base_url);
        Self {
            service: AnalysisService::new(Arc::new(client)),
        }
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        match cli.command {
            Some(Command::Analyze { text }) => self.analyze_once(&text.join(" ")).await,
            Some(Command::Session) | None => self.run_session().await,
        }
    }

    async fn analyze_once(&mut self, text: &str) -> Result<()> {
        if let Err(err) = self.handle_submission(text).await {
            Self::report(&err);
            std::process::exit(1);
        }
        Ok(())
    }

    async fn run_session(&mut self) -> Result<()> {
        println!(
            "{}",
            "feedlens session - enter feedback, or \"exit\" to quit".bold()
        );
        loop {
            let line: String = match Input::new()
                .with_prompt("feedback")
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => line,
                // Closed input ends the session.
                Err(_) => break,
            };
            if line.trim().eq_ignore_ascii_case("exit") {
                break;
            }
            if let Err(err) = self.handle_submission(&line).await {
                Self::report(&err);
            }
        }
        Ok(())
    }

    /// One submission: the prompt stays blocked for its duration, so at most
    /// one request is ever outstanding.
    async fn handle_submission(&mut self, text: &str) -> std::result::Result<(), FeedbackError> {
        let watch = Stopwatch::start();
        let snapshot = self.service.submit(text).await?;

        println!();
        println!("{}", render::result_panel(&snapshot.latest));
        println!();
        println!("{}", render::bar_chart("Tag frequency", &snapshot.tag_chart));
        println!();
        println!("{}", render::sentiment_chart(&snapshot.sentiment_chart));
        println!();
        println!(
            "{} submission(s) this session ({} ms)",
            snapshot.submissions,
            watch.elapsed_ms()
        );
        Ok(())
    }

    fn report(err: &FeedbackError) {
        match err {
            FeedbackError::EmptyInput => {
                println!("{}", "Please enter some feedback!".yellow());
            }
            other => {
                eprintln!("{}", format!("Error analyzing feedback: {other}").red());
            }
        }
    }
}
