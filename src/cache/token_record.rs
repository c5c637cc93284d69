/// Validity window used when no refresh interval is configured: 40 minutes.
pub const DEFAULT_REFRESH_INTERVAL_SECONDS: i64 = 2400;

/// Last issued bearer. All fields are replaced together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRecord {
    pub bearer: String,
    /// UNIX timestamp, 0 if never issued
    pub issued_at: i64,
    /// 0 means `DEFAULT_REFRESH_INTERVAL_SECONDS`
    pub refresh_interval: i64,
}

impl TokenRecord {
    pub fn new(refresh_interval: i64) -> Self {
        Self {
            refresh_interval,
            ..Self::default()
        }
    }

    pub fn effective_interval(&self) -> i64 {
        if self.refresh_interval > 0 {
            self.refresh_interval
        } else {
            DEFAULT_REFRESH_INTERVAL_SECONDS
        }
    }

    /// Stale once strictly more than the effective interval has elapsed.
    /// At exactly `issued_at + interval` the bearer is still served.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.bearer.is_empty() || now > self.issued_at.saturating_add(self.effective_interval())
    }
}
