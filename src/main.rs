mod analyzer;
mod config;
mod model;
mod notifier;
mod pipeline;
mod report;
mod series;
mod source;

use chrono::Utc;
use config::load_config;
use model::AppError;
use notifier::{ConsoleSink, MessageSink, TelegramNotifier};
use source::CoinGeckoSource;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let dry_run = std::env::args().skip(1).any(|arg| arg == "--dry-run");

    match run_once(dry_run).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Run aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration, wires the collaborators and runs the report once.
async fn run_once(dry_run: bool) -> Result<(), AppError> {
    let config = load_config("config.json", dry_run)?;
    info!(
        "🚀 Starting BTC trend report (history = {}, currency = {}, dry run = {})",
        config.history, config.vs_currency, dry_run
    );

    let source = CoinGeckoSource::new(config.vs_currency.clone())?;
    let sink: Box<dyn MessageSink> = match (&config.telegram, dry_run) {
        (Some(telegram), false) => Box::new(TelegramNotifier::new(
            telegram.bot_token.clone(),
            telegram.chat_id.clone(),
        )?),
        _ => Box::new(ConsoleSink),
    };

    pipeline::run(&source, sink.as_ref(), config.history, Utc::now()).await?;
    Ok(())
}
