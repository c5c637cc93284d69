use crate::config::settings::{LoggingConfig, MetricsConfig};
use crate::config::types::ServiceConfig;

pub fn initiate_default_values(mut config: ServiceConfig) -> ServiceConfig {
    if config.settings.logging.is_none() {
        config.settings.logging = Some(LoggingConfig::default());
    }
    if config.settings.metrics.is_none() {
        config.settings.metrics = Some(MetricsConfig::default());
    }
    config.credentials.key_id = config.credentials.key_id.trim().to_owned();
    config.credentials.team_id = config.credentials.team_id.trim().to_owned();
    config
}
