//! Prometheus metrics and structured logging for arbmm.
//!
//! - Prometheus counters for ticks, emitted orders, skipped instruments and
//!   inventory tiers
//! - Structured logging with tracing (JSON in production, pretty otherwise)

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
pub use metrics::Metrics;
