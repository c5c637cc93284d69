use serde::Deserialize;

use crate::config::settings::SettingsConfig;

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    pub credentials: CredentialsConfig,
}

/// ================================
/// Provider token credentials
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct CredentialsConfig {
    /// path to the `.p8` signing key
    pub key_path: String,
    pub key_id: String,
    /// issuer of the token
    pub team_id: String,
    /// None or 0 selects the default 40 minute window
    pub refresh_interval_seconds: Option<u64>,
}
