//! arbmm replay driver.
//!
//! Loads a TOML configuration, builds the selected strategy and replays
//! tick snapshots from JSON lines, writing one order set per tick.

pub mod config;
pub mod error;
pub mod replay;

pub use config::{AppConfig, StrategyKind};
pub use error::{AppError, AppResult};
pub use replay::{replay, ReplaySummary, TickOrders};
