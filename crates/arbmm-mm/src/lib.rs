//! Market making decision engine for composite/underlying instrument sets.
//!
//! Provides:
//! - Regression fair value for composites
//! - Spread-regime quote placement
//! - Deviation skew and wide-book sizing
//! - Tiered inventory guard and order emission
//! - A rolling z-score sibling strategy
//!
//! # Architecture
//!
//! ```text
//! TickSnapshot → ArbMarketMaker.decide()
//!                 ├─ OrderBook::market_info (per instrument)
//!                 ├─ FairValueEstimator: composite deviation
//!                 └─ per instrument, in registration order:
//!                      QuoteEngine → SizingEngine → InventoryGuard → emit_orders
//!                           ↓
//!                 Vec<Order> (complete intent for the tick)
//! ```

pub mod config;
pub mod emitter;
pub mod fair_value;
pub mod inventory;
pub mod maker;
pub mod mean_reversion;
pub mod quote_engine;
pub mod rolling;
pub mod sizing;
pub mod strategy;

pub use config::{
    ArbConfig, HardAnchor, InstrumentConfig, InventoryPolicy, MeanReversionConfig, QuoteConfig,
    QuoteTier, SizingConfig, UnwindPrice,
};
pub use emitter::emit_orders;
pub use fair_value::{FairValueEstimate, FairValueEstimator, RegressionWeights};
pub use inventory::{Exposure, GuardContext, GuardOutcome, InventoryGuard, InventoryTier};
pub use maker::ArbMarketMaker;
pub use mean_reversion::{MeanReversionMaker, ReversionSignal};
pub use quote_engine::{QuoteEngine, QuotePair, SpreadRegime};
pub use rolling::{RollingStats, RollingWindow};
pub use sizing::{SizePair, Skew, SizingDecision, SizingEngine};
pub use strategy::Strategy;
