//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - Dispatched request counts by request name and outcome
//! - Handler latency histograms
//! - Database connection pool gauges

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, GaugeVec, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Dispatch counter - tracks handled requests by name and outcome ("ok" or error kind)
pub static DISPATCH_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("dispatch_requests_total", "Total number of dispatched requests")
            .namespace("station_rental"),
        &["request", "outcome"],
    )
    .expect("Failed to create DISPATCH_REQUESTS_TOTAL metric")
});

/// Handler latency histogram - tracks handler duration in seconds
pub static DISPATCH_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    let buckets = vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];
    HistogramVec::new(
        HistogramOpts::new(
            "dispatch_duration_seconds",
            "Request handler latency in seconds",
        )
        .namespace("station_rental")
        .buckets(buckets),
        &["request"],
    )
    .expect("Failed to create DISPATCH_DURATION_SECONDS metric")
});

/// Database connection pool stats
pub static DB_POOL_CONNECTIONS: Lazy<GaugeVec> = Lazy::new(|| {
    GaugeVec::new(
        Opts::new("db_pool_connections", "Database connection pool statistics")
            .namespace("station_rental"),
        &["state"], // "idle", "active", "max"
    )
    .expect("Failed to create DB_POOL_CONNECTIONS metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(DISPATCH_REQUESTS_TOTAL.clone()))
        .expect("Failed to register DISPATCH_REQUESTS_TOTAL");
    registry
        .register(Box::new(DISPATCH_DURATION_SECONDS.clone()))
        .expect("Failed to register DISPATCH_DURATION_SECONDS");
    registry
        .register(Box::new(DB_POOL_CONNECTIONS.clone()))
        .expect("Failed to register DB_POOL_CONNECTIONS");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Record one handled request
pub fn record_dispatch(request: &str, outcome: &str, duration_secs: f64) {
    DISPATCH_REQUESTS_TOTAL
        .with_label_values(&[request, outcome])
        .inc();
    DISPATCH_DURATION_SECONDS
        .with_label_values(&[request])
        .observe(duration_secs);
}

/// Helper to update database pool stats
pub fn update_db_pool_stats(idle: u32, active: u32, max: u32) {
    DB_POOL_CONNECTIONS
        .with_label_values(&["idle"])
        .set(idle as f64);
    DB_POOL_CONNECTIONS
        .with_label_values(&["active"])
        .set(active as f64);
    DB_POOL_CONNECTIONS
        .with_label_values(&["max"])
        .set(max as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_dispatch() {
        record_dispatch("GetStationsQuery", "ok", 0.002);
        record_dispatch("GetStationsQuery", "validation", 0.0001);
        let metrics = gather_metrics();
        assert!(metrics.contains("station_rental_dispatch_requests_total"));
        assert!(metrics.contains("outcome=\"validation\""));
    }

    #[test]
    fn test_pool_stats() {
        update_db_pool_stats(3, 2, 10);
        assert!(gather_metrics().contains("station_rental_db_pool_connections"));
    }
}
