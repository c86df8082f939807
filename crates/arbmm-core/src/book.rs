//! Order book ladders and the derived top-of-book view.
//!
//! A book is only tradeable when both ladders hold at least one level.
//! One-sided or empty books produce no `MarketInfo` and the instrument is
//! skipped for the tick.

use crate::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Book state classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookState {
    /// Both ladders present and best bid below best ask.
    Valid,
    /// No bid levels.
    NoBid,
    /// No ask levels.
    NoAsk,
    /// Both ladders empty.
    Empty,
    /// Both ladders present but best bid >= best ask. Still yields a
    /// `MarketInfo`; the emitter refuses crossing orders.
    Crossed,
}

impl BookState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::NoBid => "no_bid",
            Self::NoAsk => "no_ask",
            Self::Empty => "empty",
            Self::Crossed => "crossed",
        }
    }
}

impl fmt::Display for BookState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instrument's order book: price → resting quantity on each side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(default)]
    pub bids: BTreeMap<Price, i64>,
    #[serde(default)]
    pub asks: BTreeMap<Price, i64>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper for adding a bid level.
    pub fn with_bid(mut self, price: i64, quantity: i64) -> Self {
        self.bids.insert(Price::new(price), quantity);
        self
    }

    /// Builder-style helper for adding an ask level.
    pub fn with_ask(mut self, price: i64, quantity: i64) -> Self {
        self.asks.insert(Price::new(price), quantity);
        self
    }

    /// Highest bid price present.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    /// Lowest ask price present.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    pub fn state(&self) -> BookState {
        match (self.best_bid(), self.best_ask()) {
            (None, None) => BookState::Empty,
            (None, Some(_)) => BookState::NoBid,
            (Some(_), None) => BookState::NoAsk,
            (Some(bid), Some(ask)) if bid < ask => BookState::Valid,
            (Some(_), Some(_)) => BookState::Crossed,
        }
    }

    /// Derive the top-of-book view.
    ///
    /// Returns `None` ("no market") unless both ladders are non-empty.
    pub fn market_info(&self) -> Option<MarketInfo> {
        let best_bid = self.best_bid()?;
        let best_ask = self.best_ask()?;
        Some(MarketInfo::new(best_bid, best_ask))
    }
}

/// Top-of-book summary for one instrument on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketInfo {
    pub best_bid: Price,
    pub best_ask: Price,
    /// (best_bid + best_ask) / 2, exact.
    pub mid: Decimal,
    /// best_ask - best_bid in ticks. Non-positive only for crossed books.
    pub spread: i64,
}

impl MarketInfo {
    pub fn new(best_bid: Price, best_ask: Price) -> Self {
        Self {
            best_bid,
            best_ask,
            mid: Price::midpoint(best_bid, best_ask),
            spread: best_ask - best_bid,
        }
    }

    /// Spread is zero or negative.
    pub fn is_degenerate(&self) -> bool {
        self.spread <= 0
    }
}
