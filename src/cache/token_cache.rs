use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use http::HeaderMap;
use tracing::{debug, error, info};

use crate::auth_key::AuthKey;
use crate::authorization::set_bearer;
use crate::cache::token_record::TokenRecord;
use crate::config::types::CredentialsConfig;
use crate::error::{Result, TokenError};
use crate::helpers::time::now_i64;
use crate::jwt::builder::generate_bearer;
use crate::observability::metrics::get_metrics;

/// Key id and team id embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialIdentity {
    pub key_id: String,
    pub team_id: String,
}

impl CredentialIdentity {
    pub fn new(key_id: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            team_id: team_id.into(),
        }
    }
}

/// Single-slot cache of the last issued provider token for one identity.
///
/// The expiry check, the signing and the store happen under one lock, so
/// callers racing on a stale record wait for a single regeneration and all
/// receive its result.
#[derive(Debug)]
pub struct TokenCache {
    key: Option<Arc<AuthKey>>,
    identity: CredentialIdentity,
    record: Mutex<TokenRecord>,
    issued: AtomicU64,
}

impl TokenCache {
    pub fn new(key: Option<AuthKey>, identity: CredentialIdentity) -> Self {
        Self {
            key: key.map(Arc::new),
            identity,
            record: Mutex::new(TokenRecord::default()),
            issued: AtomicU64::new(0),
        }
    }

    /// Loads the configured key file and builds the cache for its identity.
    pub fn from_credentials(credentials: &CredentialsConfig) -> Result<Self> {
        let key = AuthKey::from_file(&credentials.key_path)?;
        let identity = CredentialIdentity::new(&credentials.key_id, &credentials.team_id);
        Ok(Self::new(Some(key), identity).with_refresh_interval(credentials.refresh_interval_seconds.unwrap_or(0)))
    }

    /// Validity window in seconds, 0 selects the default window.
    pub fn with_refresh_interval(self, seconds: u64) -> Self {
        let refresh_interval = i64::try_from(seconds).unwrap_or(i64::MAX);
        Self {
            record: Mutex::new(TokenRecord::new(refresh_interval)),
            ..self
        }
    }

    pub fn identity(&self) -> &CredentialIdentity {
        &self.identity
    }

    /// Returns the cached bearer, signing a new one first if it is stale.
    pub fn get_valid_bearer(&self) -> Result<String> {
        self.get_or_issue(now_i64)
    }

    /// Same as [`TokenCache::get_valid_bearer`] with an explicit clock reading.
    pub fn get_valid_bearer_at(&self, now: i64) -> Result<String> {
        self.get_or_issue(|| now)
    }

    /// Signs a new bearer regardless of the cached one.
    pub fn regenerate(&self) -> Result<String> {
        let key = self.key()?;
        let mut record = self.lock_record();
        self.issue(key, &mut record, now_i64())
    }

    pub fn is_expired(&self) -> bool {
        self.lock_record().is_expired_at(now_i64())
    }

    /// Copy of the current record.
    pub fn snapshot(&self) -> TokenRecord {
        self.lock_record().clone()
    }

    /// Number of bearers this cache has signed.
    pub fn issued_count(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Sets `authorization: bearer <token>` with a currently valid token.
    pub fn set_authorization(&self, headers: &mut HeaderMap) -> Result<()> {
        let bearer = self.get_valid_bearer()?;
        set_bearer(headers, &bearer)
    }

    fn get_or_issue<F: FnOnce() -> i64>(&self, clock: F) -> Result<String> {
        let key = self.key()?;
        let mut record = self.lock_record();
        let now = clock();

        if !record.is_expired_at(now) {
            debug!(key_id = %self.identity.key_id, issued_at = record.issued_at, "bearer served from cache");
            get_metrics().bearer_cache_hits.inc();
            return Ok(record.bearer.clone());
        }

        self.issue(key, &mut record, now)
    }

    fn issue(&self, key: &AuthKey, record: &mut TokenRecord, issued_at: i64) -> Result<String> {
        let metrics = get_metrics();
        let start = Instant::now();
        let result = generate_bearer(key, &self.identity.key_id, &self.identity.team_id, issued_at);
        metrics
            .bearer_signing_duration
            .with_label_values(&[self.identity.key_id.as_str()])
            .observe(start.elapsed().as_secs_f64());

        match result {
            Ok(bearer) => {
                *record = TokenRecord {
                    bearer: bearer.clone(),
                    issued_at,
                    refresh_interval: record.refresh_interval,
                };
                self.issued.fetch_add(1, Ordering::SeqCst);
                metrics.bearer_issued.inc();
                metrics.bearer_issued_at_unix.set(issued_at);
                info!(
                    key_id = %self.identity.key_id,
                    team_id = %self.identity.team_id,
                    issued_at,
                    "issued bearer"
                );
                Ok(bearer)
            }
            Err(err) => {
                metrics.bearer_issue_failures.with_label_values(&[err.reason()]).inc();
                error!(key_id = %self.identity.key_id, "bearer issuance failed: {}", err);
                Err(err)
            }
        }
    }

    fn key(&self) -> Result<&AuthKey> {
        self.key.as_deref().ok_or_else(|| {
            get_metrics()
                .bearer_issue_failures
                .with_label_values(&[TokenError::MissingKey.reason()])
                .inc();
            TokenError::MissingKey
        })
    }

    // The record is only ever replaced whole, so a poisoned lock still guards
    // a consistent value.
    fn lock_record(&self) -> MutexGuard<'_, TokenRecord> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn seed_record(&self, bearer: &str, issued_at: i64) {
        let mut record = self.lock_record();
        record.bearer = bearer.to_owned();
        record.issued_at = issued_at;
    }
}
