use once_cell::sync::OnceCell;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use std::sync::Arc;
use tracing::info;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::new();

/// Initializes on first use and returns the process wide `Metrics`.
pub fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE.get_or_init(|| {
        info!("Initializing Metrics ...");
        Metrics::new()
    })
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Issuance metrics
    pub bearer_issued: IntCounter,
    pub bearer_issue_failures: IntCounterVec,
    pub bearer_signing_duration: HistogramVec,
    pub bearer_issued_at_unix: IntGauge,

    // Cache metrics
    pub bearer_cache_hits: IntCounter,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("apnstoken".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            // Issuance
            bearer_issued: IntCounter::new("bearer_issued_total", "Bearer tokens signed").unwrap(),
            bearer_issue_failures: IntCounterVec::new(Opts::new("bearer_issue_failures_total", "Bearer issuance failures by reason"),&["reason"],).unwrap(),
            bearer_signing_duration: HistogramVec::new(HistogramOpts::new("bearer_signing_duration_seconds", "Bearer signing duration seconds").buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1]),&["key_id"],).unwrap(),
            bearer_issued_at_unix: IntGauge::new("bearer_issued_at_unix_seconds", "Issue timestamp of the last signed bearer").unwrap(),

            // Cache
            bearer_cache_hits: IntCounter::new("bearer_cache_hits_total", "Bearer requests served from cache").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.bearer_issued.clone())).unwrap();
        reg.register(Box::new(metrics.bearer_issue_failures.clone())).unwrap();
        reg.register(Box::new(metrics.bearer_signing_duration.clone())).unwrap();
        reg.register(Box::new(metrics.bearer_issued_at_unix.clone())).unwrap();
        reg.register(Box::new(metrics.bearer_cache_hits.clone())).unwrap();

        metrics
    }

    /// Text exposition format of every registered metric.
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
