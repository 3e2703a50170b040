#![warn(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use herald::config::{Config, Credentials};
use herald::run::{Bot, RunOutcome};

/// Draft one AI/tech post with Gemini and publish it to X.
#[derive(Parser)]
#[command(name = "herald", version, about)]
struct Cli {
    /// Path to a TOML config file; built-in defaults apply when absent.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Honor a .env file when present; the real environment wins over it.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Credentials are a precondition; fail here before any network call.
    let credentials = Credentials::from_env()?;

    let mut bot = Bot::new(&config, &credentials);
    match bot.run().await? {
        RunOutcome::Posted { post_id } => {
            tracing::info!(%post_id, "run complete, post published");
        }
        RunOutcome::Duplicate => {
            tracing::warn!("run complete, duplicate draft suppressed");
        }
    }

    Ok(())
}
