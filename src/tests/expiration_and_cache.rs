#[cfg(test)]
mod test {
    use crate::cache::token_cache::{CredentialIdentity, TokenCache};
    use crate::cache::token_record::{TokenRecord, DEFAULT_REFRESH_INTERVAL_SECONDS};
    use crate::error::TokenError;
    use crate::helpers::time::now_i64;
    use crate::jwt::decode::inspect;
    use crate::tests::common::{load_test_key, verify_token, KEY_ID, TEAM_ID};

    fn identity() -> CredentialIdentity {
        CredentialIdentity::new(KEY_ID, TEAM_ID)
    }

    fn record(issued_at: i64, refresh_interval: i64) -> TokenRecord {
        TokenRecord {
            bearer: "cached".to_owned(),
            issued_at,
            refresh_interval,
        }
    }

    #[test]
    fn never_issued_record_is_expired() {
        let now = now_i64();
        assert!(TokenRecord::default().is_expired_at(now));
        // an empty bearer is never served, even with a recent timestamp
        let empty = TokenRecord {
            issued_at: now,
            ..TokenRecord::default()
        };
        assert!(empty.is_expired_at(now));
    }

    #[test]
    fn default_window_boundaries() {
        let now = now_i64();
        assert_eq!(TokenRecord::default().effective_interval(), 2400);
        assert!(!record(now, 0).is_expired_at(now));
        assert!(!record(now - (DEFAULT_REFRESH_INTERVAL_SECONDS - 1), 0).is_expired_at(now));
        // exactly at the boundary the bearer is still fresh
        assert!(!record(now - DEFAULT_REFRESH_INTERVAL_SECONDS, 0).is_expired_at(now));
        assert!(record(now - (DEFAULT_REFRESH_INTERVAL_SECONDS + 1), 0).is_expired_at(now));
    }

    #[test]
    fn configured_window_boundaries() {
        let now = now_i64();
        assert!(record(now - 61, 60).is_expired_at(now));
        assert!(!record(now - 60, 60).is_expired_at(now));
        assert!(!record(now - 3599, 3600).is_expired_at(now));
        assert!(!record(now, i64::MAX).is_expired_at(now));
    }

    #[test]
    fn back_to_back_reads_return_identical_bearer() {
        let cache = TokenCache::new(Some(load_test_key()), identity());

        let want = cache.get_valid_bearer().unwrap();
        let got = cache.get_valid_bearer().unwrap();
        assert_eq!(got, want);
        assert_eq!(cache.issued_count(), 1);
        assert!(!cache.is_expired());
    }

    #[test]
    fn bearer_carries_configured_identity() {
        let key = load_test_key();
        let cache = TokenCache::new(Some(key.clone()), identity());

        let bearer = cache.get_valid_bearer().unwrap();
        let (header, claims) = inspect(&bearer).unwrap();
        assert_eq!(header.kid, KEY_ID);
        assert_eq!(claims.iss, TEAM_ID);
        assert_eq!(claims.iat, cache.snapshot().issued_at);
        assert!(verify_token(&bearer, &key.verifying_key()));
    }

    #[test]
    fn fresh_record_is_served_without_signing() {
        let now = now_i64();
        let cache = TokenCache::new(Some(load_test_key()), identity());
        cache.seed_record("cached", now - DEFAULT_REFRESH_INTERVAL_SECONDS);

        assert_eq!(cache.get_valid_bearer_at(now).unwrap(), "cached");
        assert_eq!(cache.issued_count(), 0);
    }

    #[test]
    fn stale_record_is_regenerated_with_current_timestamp() {
        let now = now_i64();
        let cache = TokenCache::new(Some(load_test_key()), identity());
        cache.seed_record("cached", now - (DEFAULT_REFRESH_INTERVAL_SECONDS + 1));

        let bearer = cache.get_valid_bearer_at(now).unwrap();
        assert_ne!(bearer, "cached");
        assert_eq!(cache.issued_count(), 1);

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.bearer, bearer);
        assert_eq!(snapshot.issued_at, now);
        assert_eq!(inspect(&bearer).unwrap().1.iat, now);
    }

    #[test]
    fn custom_refresh_interval_drives_regeneration() {
        let t0 = 1_700_000_000;
        let cache = TokenCache::new(Some(load_test_key()), identity()).with_refresh_interval(60);

        let first = cache.get_valid_bearer_at(t0).unwrap();
        assert_eq!(cache.get_valid_bearer_at(t0 + 60).unwrap(), first);
        assert_eq!(cache.issued_count(), 1);

        let second = cache.get_valid_bearer_at(t0 + 61).unwrap();
        assert_ne!(second, first);
        assert_eq!(cache.issued_count(), 2);
        assert_eq!(cache.snapshot().refresh_interval, 60);
    }

    #[test]
    fn zero_refresh_interval_uses_default_window() {
        let t0 = 1_700_000_000;
        let cache = TokenCache::new(Some(load_test_key()), identity()).with_refresh_interval(0);

        let first = cache.get_valid_bearer_at(t0).unwrap();
        assert_eq!(cache.get_valid_bearer_at(t0 + 2400).unwrap(), first);
        assert_ne!(cache.get_valid_bearer_at(t0 + 2401).unwrap(), first);
    }

    #[test]
    fn regenerate_replaces_fresh_bearer() {
        let cache = TokenCache::new(Some(load_test_key()), identity());
        let first = cache.get_valid_bearer().unwrap();
        let forced = cache.regenerate().unwrap();

        assert_ne!(forced, first);
        assert_eq!(cache.get_valid_bearer().unwrap(), forced);
        assert_eq!(cache.issued_count(), 2);
    }

    #[test]
    fn missing_key_fails_without_signing() {
        let cache = TokenCache::new(None, identity());

        assert!(matches!(cache.get_valid_bearer(), Err(TokenError::MissingKey)));
        assert!(matches!(cache.regenerate(), Err(TokenError::MissingKey)));
        assert_eq!(cache.issued_count(), 0);
        assert_eq!(cache.snapshot(), TokenRecord::default());
        assert!(cache.is_expired());
    }
}
