//! Quote price selection.
//!
//! Picks a symmetric inward offset from the touch based on the spread:
//! 1. Composite with a one-tick spread joins the touch (when enabled).
//! 2. Widest configured tier whose `min_spread` is met steps inside by its offset.
//! 3. Otherwise join the touch.
//!
//! Degenerate books (spread <= 0) always join. The result is only a
//! candidate; the emitter enforces non-crossing.

use std::fmt;

use arbmm_core::{InstrumentKind, MarketInfo, Price};

use crate::config::{QuoteConfig, QuoteTier};

/// Which spread rule produced a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadRegime {
    /// Liquid composite with a one-tick spread.
    CompositeTouch,
    /// Spread tier matched; both sides step `offset` ticks inside.
    Inside { min_spread: i64, offset: i64 },
    /// Tight or degenerate book.
    Join,
}

impl fmt::Display for SpreadRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompositeTouch => write!(f, "composite_touch"),
            Self::Inside { min_spread, offset } => write!(f, "inside({min_spread}:{offset})"),
            Self::Join => write!(f, "join"),
        }
    }
}

/// Candidate bid/ask for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotePair {
    pub bid: Price,
    pub ask: Price,
    pub regime: SpreadRegime,
}

/// Spread-regime quote placement.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    join_tight_composites: bool,
    /// Sorted by `min_spread`, widest first.
    tiers: Vec<QuoteTier>,
}

impl QuoteEngine {
    pub fn new(config: &QuoteConfig) -> Self {
        let mut tiers = config.tiers.clone();
        tiers.sort_by(|a, b| b.min_spread.cmp(&a.min_spread));
        Self {
            join_tight_composites: config.join_tight_composites,
            tiers,
        }
    }

    /// Compute the candidate quote for one book.
    pub fn quote(&self, info: &MarketInfo, kind: InstrumentKind) -> QuotePair {
        let join = |regime| QuotePair {
            bid: info.best_bid,
            ask: info.best_ask,
            regime,
        };

        if info.is_degenerate() {
            return join(SpreadRegime::Join);
        }
        if self.join_tight_composites && kind.is_composite() && info.spread == 1 {
            return join(SpreadRegime::CompositeTouch);
        }

        match self.tiers.iter().find(|t| info.spread >= t.min_spread) {
            Some(tier) => QuotePair {
                bid: info.best_bid + tier.offset,
                ask: info.best_ask - tier.offset,
                regime: SpreadRegime::Inside {
                    min_spread: tier.min_spread,
                    offset: tier.offset,
                },
            },
            None => join(SpreadRegime::Join),
        }
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new(&QuoteConfig::default())
    }
}
