use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use apns_token::cache::token_cache::TokenCache;
use apns_token::config::settings::LoggingConfig;
use apns_token::jwt::decode::inspect;
use apns_token::observability::metrics::get_metrics;
use apns_token::utils::config_loader;
use apns_token::utils::logging::{self, LogLevel};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "apns-token.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign a provider token and print the authorization header value
    Issue,
    /// Decode the header and claims of a provider token
    Inspect { token: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Issue => issue(&args.config, args.log_level).await,
        Command::Inspect { token } => {
            let mut logging_config = LoggingConfig::default();
            if let Some(level) = args.log_level {
                logging_config.level = level.as_str().to_owned();
            }
            logging::init_logging(&logging_config);
            print_inspection(&token)
        }
    }
}

async fn issue(config_path: &str, log_level: Option<LogLevel>) -> Result<()> {
    // -------------------------------
    // 1. Load YAML config
    // -------------------------------

    let service_config = config_loader::run(config_path).await?;
    logging::run(&service_config, log_level);

    // -------------------------------
    // 2. Load key and sign
    // -------------------------------

    let credentials = service_config.credentials.clone();
    let bearer = tokio::task::spawn_blocking(move || {
        let cache = TokenCache::from_credentials(&credentials)
            .with_context(|| format!("loading key '{}'", credentials.key_path))?;
        cache.get_valid_bearer().context("signing provider token")
    })
    .await??;

    info!("provider token issued");
    println!("bearer {}", bearer);

    // -------------------------------
    // 3. Dump metrics
    // -------------------------------

    let metrics_enabled = service_config
        .settings
        .metrics
        .as_ref()
        .map(|m| m.is_enabled)
        .unwrap_or(false);
    if metrics_enabled {
        eprintln!("{}", get_metrics().render()?);
    }
    Ok(())
}

fn print_inspection(token: &str) -> Result<()> {
    let (header, claims) = inspect(token.trim())?;
    println!("{}", serde_json::to_string_pretty(&header)?);
    println!("{}", serde_json::to_string_pretty(&claims)?);
    Ok(())
}
