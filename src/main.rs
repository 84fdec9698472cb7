use clap::Parser;
use std::process::ExitCode;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;

/// Fatal errors that end the process with a failure status
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Api(#[from] api::privacy::ApiError),
}

#[derive(Parser, Debug)]
#[command(name = "privacy-inquiry")]
#[command(version)]
#[command(about = "Look up recent Privacy.com card transactions by amount, date or merchant", long_about = None)]
#[command(after_help = "Queries:\n  \
    <amount>        amount in cents, e.g. 1050, or -500 for a refund\n  \
    [yyyy-]mm-dd    date, e.g. 3-15 (most recent March 15) or 2024-03-15\n  \
    <merchant>      letters only, matched anywhere in the merchant name\n  \
    ls [count]      table of the most recent transactions (default 1000)\n\
    \n\
    Add `more` (or `m`) after a search to show status, card and location.")]
pub struct Cli {
    /// Amount in cents, date, merchant name, or `ls`
    #[arg(allow_hyphen_values = true)]
    pub query: Option<String>,

    /// `more`/`m` after a search, or the row count after `ls`
    #[arg(allow_hyphen_values = true)]
    pub modifier: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Logs go to stderr so stdout only carries results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("privacy_inquiry=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();
    debug!("{:?}, today is {}", cli, today);

    let result = commands::run(
        cli.query.as_deref(),
        cli.modifier.as_deref(),
        today,
        config::Config::from_env,
    )
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Exiting with {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
