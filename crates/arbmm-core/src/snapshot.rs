//! Per-tick snapshot handed to a strategy by the simulator.

use crate::{InstrumentId, OrderBook};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position limit used when the environment does not specify one.
pub const DEFAULT_POSITION_LIMIT: i64 = 50;

/// Frozen view of one simulation tick.
///
/// Field names follow the simulator's JSON (`orderbook`, `pos_limit`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    /// Tick sequence number.
    #[serde(default)]
    pub tick: u64,
    /// Instruments active this tick.
    #[serde(default)]
    pub products: Vec<InstrumentId>,
    /// Order books by instrument. Missing entries mean no market.
    #[serde(default)]
    pub orderbook: HashMap<InstrumentId, OrderBook>,
    /// Signed positions by instrument. Missing entries mean flat.
    #[serde(default)]
    pub positions: HashMap<InstrumentId, i64>,
    /// Position limits by instrument.
    #[serde(default)]
    pub pos_limit: HashMap<InstrumentId, i64>,
}

impl TickSnapshot {
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            ..Default::default()
        }
    }

    /// Builder-style helper: register an active instrument with its book.
    pub fn with_book(mut self, id: &str, book: OrderBook) -> Self {
        let id = InstrumentId::from(id);
        if !self.products.contains(&id) {
            self.products.push(id.clone());
        }
        self.orderbook.insert(id, book);
        self
    }

    pub fn with_position(mut self, id: &str, position: i64) -> Self {
        self.positions.insert(id.into(), position);
        self
    }

    pub fn with_limit(mut self, id: &str, limit: i64) -> Self {
        self.pos_limit.insert(id.into(), limit);
        self
    }

    pub fn is_active(&self, id: &InstrumentId) -> bool {
        self.products.contains(id)
    }

    pub fn book(&self, id: &InstrumentId) -> Option<&OrderBook> {
        self.orderbook.get(id)
    }

    pub fn position(&self, id: &InstrumentId) -> i64 {
        self.positions.get(id).copied().unwrap_or(0)
    }

    /// Position limit, falling back to `default` when unspecified.
    pub fn position_limit(&self, id: &InstrumentId, default: i64) -> i64 {
        self.pos_limit.get(id).copied().unwrap_or(default)
    }
}
