//! Order size selection.
//!
//! Starts from the instrument's base size, skews toward the side that
//! profits from a composite's mispricing, then boosts both sides on very
//! wide books. The boost runs last and may override the skew.

use arbmm_core::InstrumentParams;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::SizingConfig;

/// Unsigned buy and sell sizes for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePair {
    pub buy: i64,
    pub sell: i64,
}

impl SizePair {
    pub fn new(buy: i64, sell: i64) -> Self {
        Self { buy, sell }
    }

    pub fn symmetric(size: i64) -> Self {
        Self::new(size, size)
    }
}

/// Multiply a size by `factor`, truncating toward zero.
///
/// Out-of-range products size to zero.
pub(crate) fn scale(size: i64, factor: Decimal) -> i64 {
    (Decimal::from(size) * factor)
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_i64()
        .unwrap_or(0)
}

/// Which way the deviation skew leaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skew {
    /// Composite above fair value: sell heavy.
    Rich,
    /// Composite below fair value: buy heavy.
    Cheap,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizingDecision {
    pub sizes: SizePair,
    pub skew: Skew,
    pub boosted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SizingEngine {
    config: SizingConfig,
}

impl SizingEngine {
    pub fn new(config: SizingConfig) -> Self {
        Self { config }
    }

    /// Size both sides. `deviation` is `None` for underlyings and for
    /// composites whose fair value is unavailable.
    pub fn size(
        &self,
        params: &InstrumentParams,
        deviation: Option<Decimal>,
        spread: i64,
    ) -> SizingDecision {
        let cfg = &self.config;
        let mut sizes = SizePair::symmetric(params.base_size);
        let shrunk = scale(params.base_size, cfg.skew_shrink_factor).max(cfg.skew_min_size);

        let skew = match deviation {
            Some(d) if d > cfg.deviation_threshold => {
                sizes = SizePair::new(shrunk, params.max_size);
                Skew::Rich
            }
            Some(d) if d < -cfg.deviation_threshold => {
                sizes = SizePair::new(params.max_size, shrunk);
                Skew::Cheap
            }
            _ => Skew::None,
        };

        let boosted = spread >= cfg.wide_spread;
        if boosted {
            let size = scale(params.base_size, cfg.wide_spread_boost).min(params.max_size);
            sizes = SizePair::symmetric(size);
        }

        SizingDecision {
            sizes,
            skew,
            boosted,
        }
    }
}
