//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - Credentials must name a key file, a key id and a team id
//! - The refresh interval must keep tokens younger than the gateway's limit

use tracing::{error, info, warn};

use crate::config::types::{CredentialsConfig, ServiceConfig};

/// The gateway rejects provider tokens older than one hour.
pub const MAX_REFRESH_INTERVAL_SECONDS: u64 = 60 * 60;
/// The gateway throttles token refreshes more frequent than 20 minutes.
pub const MIN_RECOMMENDED_REFRESH_INTERVAL_SECONDS: u64 = 20 * 60;

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub async fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_credentials(&cfg.credentials, &mut errors);

    if let Some(logging) = &cfg.settings.logging {
        if !matches!(
            logging.level.to_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            errors.push(format!(
                "settings.logging.level '{}' must be one of trace, debug, info, warn, error",
                logging.level
            ));
        }
    }

    if errors.is_empty() {
        info!("config is valid");
        Ok(())
    } else {
        for e in &errors {
            error!("config: {}", e);
        }
        Err(errors)
    }
}

fn validate_credentials(credentials: &CredentialsConfig, errors: &mut Vec<String>) {
    if credentials.key_path.trim().is_empty() {
        errors.push("credentials.key_path must not be empty".to_string());
    }
    if credentials.key_id.is_empty() {
        errors.push("credentials.key_id must not be empty".to_string());
    }
    if credentials.team_id.is_empty() {
        errors.push("credentials.team_id must not be empty".to_string());
    }

    match credentials.refresh_interval_seconds {
        Some(s) if s > MAX_REFRESH_INTERVAL_SECONDS => errors.push(format!(
            "credentials.refresh_interval_seconds ({}) exceeds {} seconds",
            s, MAX_REFRESH_INTERVAL_SECONDS
        )),
        Some(s) if s > 0 && s < MIN_RECOMMENDED_REFRESH_INTERVAL_SECONDS => warn!(
            "credentials.refresh_interval_seconds ({}) is below {} seconds, the gateway may throttle refreshes",
            s, MIN_RECOMMENDED_REFRESH_INTERVAL_SECONDS
        ),
        _ => {}
    }
}
