//! Core domain types for the arbmm decision engine.
//!
//! This crate provides the fundamental types shared by every strategy:
//! - `Price`: Integer tick price
//! - `InstrumentId`, `InstrumentKind`, `InstrumentParams`: Static instrument description
//! - `OrderBook`, `MarketInfo`, `BookState`: Per-tick book and top-of-book view
//! - `TickSnapshot`: Everything the engine sees for one simulation tick
//! - `Order`, `OrderSide`: Engine output

pub mod book;
pub mod error;
pub mod instrument;
pub mod order;
pub mod price;
pub mod snapshot;

pub use book::{BookState, MarketInfo, OrderBook};
pub use error::{CoreError, Result};
pub use instrument::{InstrumentId, InstrumentKind, InstrumentParams};
pub use order::{Order, OrderSide};
pub use price::Price;
pub use snapshot::{TickSnapshot, DEFAULT_POSITION_LIMIT};
