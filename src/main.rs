mod cli;

use clap::{CommandFactory, Parser};
use cli::Cli;
use decs_scores::config::{LoggingSettings, Settings};
use decs_scores::{resolve_input, ScoreClient, ScoreEntry};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let Some(arg) = cli.text.as_deref() else {
        println!("{}", Cli::command().render_usage());
        println!("TEXT is the document itself, or file=<path> to read it from a file");
        return ExitCode::FAILURE;
    };

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    if !cli.ignored.is_empty() {
        warn!(
            "Ignoring {} extra argument(s); quote the text to score all of it",
            cli.ignored.len()
        );
    }

    let text = match resolve_input(arg) {
        Ok(text) => text,
        Err(e) => {
            error!("Cannot resolve input: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match ScoreClient::new(&settings.service) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: failed to create HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", client.url());

    let scores = match client.fetch_scores(&text).await {
        Ok(scores) => scores,
        Err(e) => {
            error!("Scoring service returned an unusable response: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match render(&scores, cli.pretty) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to render scores: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn render(scores: &[ScoreEntry], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(scores)
    } else {
        serde_json::to_string(scores)
    }
}

/// Logs go to stderr; stdout carries only the URL and the scores.
/// RUST_LOG takes precedence over the configured level.
fn init_logging(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_level(true);

    match settings.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.init(),
    }
}
