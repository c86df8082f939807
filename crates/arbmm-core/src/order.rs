//! Order side and the engine's order record.

use crate::{InstrumentId, Price};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side: buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resting limit order intent.
///
/// Quantity is signed: positive buys, negative sells. Orders carry no
/// identity; every tick's set replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub instrument: InstrumentId,
    pub price: Price,
    pub quantity: i64,
}

impl Order {
    pub fn buy(instrument: InstrumentId, price: Price, size: i64) -> Self {
        Self {
            instrument,
            price,
            quantity: size,
        }
    }

    pub fn sell(instrument: InstrumentId, price: Price, size: i64) -> Self {
        Self {
            instrument,
            price,
            quantity: -size,
        }
    }

    pub fn side(&self) -> OrderSide {
        if self.quantity >= 0 {
            OrderSide::Buy
        } else {
            OrderSide::Sell
        }
    }

    /// Unsigned order size.
    pub fn size(&self) -> i64 {
        self.quantity.abs()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}@{}",
            self.side(),
            self.instrument,
            self.size(),
            self.price
        )
    }
}
