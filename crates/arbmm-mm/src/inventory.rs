//! Inventory guard.
//!
//! An ordered table of tiers evaluated top-down; the first tier whose
//! condition holds adjusts the candidate quote and sizes, and no other tier
//! runs. Order: emergency, hard, soft, neutral.
//!
//! Terminology: when long, the sell side *reduces* the position and the buy
//! side *grows* it. Short mirrors this.

use std::fmt;

use arbmm_core::{InstrumentParams, MarketInfo};
use rust_decimal::Decimal;

use crate::config::{HardAnchor, InventoryPolicy, UnwindPrice};
use crate::quote_engine::QuotePair;
use crate::sizing::{scale, SizePair};

/// Direction of the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    Long,
    Short,
}

impl Exposure {
    fn of(position: i64) -> Option<Self> {
        match position.signum() {
            1 => Some(Self::Long),
            -1 => Some(Self::Short),
            _ => None,
        }
    }
}

/// The tier selected for one instrument on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryTier {
    Emergency(Exposure),
    Hard(Exposure),
    Soft(Exposure),
    Neutral,
}

impl InventoryTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency(_) => "emergency",
            Self::Hard(_) => "hard",
            Self::Soft(_) => "soft",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for InventoryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs the tiers look at.
#[derive(Debug, Clone, Copy)]
pub struct GuardContext<'a> {
    pub position: i64,
    pub limit: i64,
    pub params: &'a InstrumentParams,
    pub info: &'a MarketInfo,
}

/// Quote and sizes after the guard ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardOutcome {
    pub quote: QuotePair,
    pub sizes: SizePair,
    pub tier: InventoryTier,
}

type Classify = fn(&InventoryPolicy, &GuardContext<'_>) -> Option<Exposure>;
type Adjust = fn(&InventoryPolicy, &GuardContext<'_>, Exposure, &mut QuotePair, &mut SizePair);

struct TierRule {
    tier: fn(Exposure) -> InventoryTier,
    classify: Classify,
    adjust: Adjust,
}

/// Evaluated top-down. No match is the neutral tier.
static TIERS: [TierRule; 3] = [
    TierRule {
        tier: InventoryTier::Emergency,
        classify: classify_emergency,
        adjust: adjust_emergency,
    },
    TierRule {
        tier: InventoryTier::Hard,
        classify: classify_hard,
        adjust: adjust_hard,
    },
    TierRule {
        tier: InventoryTier::Soft,
        classify: classify_soft,
        adjust: adjust_soft,
    },
];

/// Applies the tier table with a fixed set of constants.
#[derive(Debug, Clone, Default)]
pub struct InventoryGuard {
    policy: InventoryPolicy,
}

impl InventoryGuard {
    pub fn new(policy: InventoryPolicy) -> Self {
        Self { policy }
    }

    /// Pick exactly one tier and apply it.
    pub fn apply(
        &self,
        ctx: &GuardContext<'_>,
        mut quote: QuotePair,
        mut sizes: SizePair,
    ) -> GuardOutcome {
        for rule in &TIERS {
            if let Some(exposure) = (rule.classify)(&self.policy, ctx) {
                (rule.adjust)(&self.policy, ctx, exposure, &mut quote, &mut sizes);
                return GuardOutcome {
                    quote,
                    sizes,
                    tier: (rule.tier)(exposure),
                };
            }
        }
        GuardOutcome {
            quote,
            sizes,
            tier: InventoryTier::Neutral,
        }
    }
}

/// (reducing size, growing size) for the given exposure.
fn split(sizes: &mut SizePair, exposure: Exposure) -> (&mut i64, &mut i64) {
    match exposure {
        Exposure::Long => (&mut sizes.sell, &mut sizes.buy),
        Exposure::Short => (&mut sizes.buy, &mut sizes.sell),
    }
}

fn classify_emergency(policy: &InventoryPolicy, ctx: &GuardContext<'_>) -> Option<Exposure> {
    // Long is checked first so a zero limit still resolves to one side.
    if ctx.position >= ctx.limit - policy.emergency_buffer {
        Some(Exposure::Long)
    } else if ctx.position <= -ctx.limit + policy.emergency_buffer {
        Some(Exposure::Short)
    } else {
        None
    }
}

fn adjust_emergency(
    policy: &InventoryPolicy,
    ctx: &GuardContext<'_>,
    exposure: Exposure,
    quote: &mut QuotePair,
    sizes: &mut SizePair,
) {
    let info = ctx.info;
    let max_size = ctx.params.max_size;
    match exposure {
        Exposure::Long => {
            quote.ask = match policy.emergency_unwind {
                UnwindPrice::NearOpposite => info.best_bid + 1,
                UnwindPrice::InsideOwn => (info.best_ask - 1).max(info.best_bid + 1),
            };
            sizes.buy = 0;
            sizes.sell = max_size.min(ctx.limit + ctx.position).max(0);
        }
        Exposure::Short => {
            quote.bid = match policy.emergency_unwind {
                UnwindPrice::NearOpposite => info.best_ask - 1,
                UnwindPrice::InsideOwn => (info.best_bid + 1).min(info.best_ask - 1),
            };
            sizes.sell = 0;
            sizes.buy = max_size.min(ctx.limit - ctx.position).max(0);
        }
    }
}

fn classify_hard(_: &InventoryPolicy, ctx: &GuardContext<'_>) -> Option<Exposure> {
    if ctx.position.abs() > ctx.params.inventory_threshold {
        Exposure::of(ctx.position)
    } else {
        None
    }
}

fn adjust_hard(
    policy: &InventoryPolicy,
    ctx: &GuardContext<'_>,
    exposure: Exposure,
    quote: &mut QuotePair,
    sizes: &mut SizePair,
) {
    let (improve, retreat) = (policy.hard_reduce_improve, policy.hard_grow_retreat);
    if policy.hard_anchor == HardAnchor::Touch {
        quote.bid = ctx.info.best_bid;
        quote.ask = ctx.info.best_ask;
    }
    match exposure {
        Exposure::Long => {
            quote.ask = quote.ask - improve;
            quote.bid = quote.bid - retreat;
        }
        Exposure::Short => {
            quote.bid = quote.bid + improve;
            quote.ask = quote.ask + retreat;
        }
    }

    let cap = ctx.params.max_size + policy.hard_reduce_cap_extra;
    let (reduce, grow) = split(sizes, exposure);
    *reduce = scale(*reduce, policy.hard_reduce_factor).min(cap);
    *grow = scale(*grow, policy.hard_grow_factor).max(policy.hard_grow_floor);
}

fn classify_soft(policy: &InventoryPolicy, ctx: &GuardContext<'_>) -> Option<Exposure> {
    let trigger = Decimal::from(ctx.params.inventory_threshold) * policy.soft_ratio;
    if Decimal::from(ctx.position.abs()) > trigger {
        Exposure::of(ctx.position)
    } else {
        None
    }
}

fn adjust_soft(
    policy: &InventoryPolicy,
    _: &GuardContext<'_>,
    exposure: Exposure,
    _: &mut QuotePair,
    sizes: &mut SizePair,
) {
    let (reduce, grow) = split(sizes, exposure);
    *reduce = scale(*reduce, policy.soft_reduce_factor);
    *grow = scale(*grow, policy.soft_grow_factor);
}
