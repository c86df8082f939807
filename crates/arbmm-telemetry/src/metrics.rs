//! Prometheus metrics for the decision engine.
//!
//! Covers:
//! - Ticks processed per strategy
//! - Orders emitted per instrument and side
//! - Instruments skipped (no market, unknown instrument)
//! - Inventory guard tier hits
//! - Composite deviation from fair value
//!
//! # Panics
//!
//! Metric registration uses `unwrap()`. Registration only fails on duplicate
//! metric names, which is a programming error caught on first use.

use crate::error::{TelemetryError, TelemetryResult};
use once_cell::sync::Lazy;
use prometheus::{
    register_gauge_vec, register_int_counter_vec, Encoder, GaugeVec, IntCounterVec, TextEncoder,
};

/// Ticks processed.
pub static TICKS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "arbmm_ticks_total",
        "Total simulation ticks processed",
        &["strategy"]
    )
    .unwrap()
});

/// Orders emitted.
pub static ORDERS_EMITTED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "arbmm_orders_emitted_total",
        "Total orders emitted",
        &["instrument", "side"]
    )
    .unwrap()
});

/// Instruments skipped for a tick.
pub static INSTRUMENTS_SKIPPED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "arbmm_instruments_skipped_total",
        "Instruments skipped for a tick",
        &["instrument", "reason"]
    )
    .unwrap()
});

/// Inventory guard tier hits.
pub static INVENTORY_TIER_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "arbmm_inventory_tier_total",
        "Inventory guard tier selected per instrument tick",
        &["instrument", "tier"]
    )
    .unwrap()
});

/// Composite mid minus fair value, in ticks.
pub static FAIR_VALUE_DEVIATION: Lazy<GaugeVec> = Lazy::new(|| {
    register_gauge_vec!(
        "arbmm_fair_value_deviation",
        "Composite mid minus regression fair value (ticks)",
        &["instrument"]
    )
    .unwrap()
});

/// Metrics facade for easy access.
pub struct Metrics;

impl Metrics {
    /// Record a processed tick.
    pub fn tick_processed(strategy: &str) {
        TICKS_TOTAL.with_label_values(&[strategy]).inc();
    }

    /// Record an emitted order.
    pub fn order_emitted(instrument: &str, side: &str) {
        ORDERS_EMITTED_TOTAL
            .with_label_values(&[instrument, side])
            .inc();
    }

    /// Record an instrument skipped for the tick.
    pub fn instrument_skipped(instrument: &str, reason: &str) {
        INSTRUMENTS_SKIPPED_TOTAL
            .with_label_values(&[instrument, reason])
            .inc();
    }

    /// Record which inventory tier applied.
    pub fn inventory_tier(instrument: &str, tier: &str) {
        INVENTORY_TIER_TOTAL
            .with_label_values(&[instrument, tier])
            .inc();
    }

    /// Set the latest composite deviation.
    pub fn fair_value_deviation(instrument: &str, deviation: f64) {
        FAIR_VALUE_DEVIATION
            .with_label_values(&[instrument])
            .set(deviation);
    }

    /// Render every registered metric in the Prometheus text format.
    pub fn gather_text() -> TelemetryResult<String> {
        let encoder = TextEncoder::new();
        let mut buf = Vec::new();
        encoder
            .encode(&prometheus::gather(), &mut buf)
            .map_err(|e| TelemetryError::Metrics(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| TelemetryError::Metrics(e.to_string()))
    }
}
