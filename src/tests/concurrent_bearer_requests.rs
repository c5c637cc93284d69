#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use std::sync::{Arc, Barrier};

    use crate::cache::token_cache::{CredentialIdentity, TokenCache};
    use crate::helpers::time::now_i64;
    use crate::tests::common::{load_test_key, verify_token, KEY_ID, TEAM_ID};

    const CALLERS: usize = 16;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_callers_share_one_bearer() {
        let key = load_test_key();
        let cache = Arc::new(TokenCache::new(Some(key.clone()), CredentialIdentity::new(KEY_ID, TEAM_ID)));
        let barrier = Arc::new(Barrier::new(CALLERS));

        let handles: Vec<_> = (0..CALLERS)
            .map(|_| {
                let cache = cache.clone();
                let barrier = barrier.clone();
                tokio::task::spawn_blocking(move || {
                    barrier.wait();
                    cache.get_valid_bearer()
                })
            })
            .collect();

        let mut bearers = HashSet::new();
        for handle in handles {
            bearers.insert(handle.await.expect("task panicked").expect("bearer"));
        }

        assert_eq!(bearers.len(), 1, "all callers must observe the same bearer");
        assert_eq!(cache.issued_count(), 1, "only one caller may sign");
        let bearer = bearers.into_iter().next().unwrap();
        assert!(verify_token(&bearer, &key.verifying_key()));
    }

    #[test]
    fn stale_cache_is_regenerated_once_under_contention() {
        let now = now_i64();
        let cache = TokenCache::new(Some(load_test_key()), CredentialIdentity::new(KEY_ID, TEAM_ID))
            .with_refresh_interval(1200);
        cache.seed_record("expired", now - 1201);
        let barrier = Barrier::new(CALLERS);

        let bearers: HashSet<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..CALLERS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        cache.get_valid_bearer_at(now).expect("bearer")
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().expect("thread panicked")).collect()
        });

        assert_eq!(bearers.len(), 1);
        assert!(!bearers.contains("expired"));
        assert_eq!(cache.issued_count(), 1);
    }
}
