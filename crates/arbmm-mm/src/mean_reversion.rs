//! Rolling z-score market maker for mean-reverting products.
//!
//! Keeps the last N mids per instrument and leans sizes toward the side
//! that profits if the latest mid reverts to the window mean. Quotes,
//! inventory handling and emission reuse the arbitrage maker's stages.

use std::collections::HashMap;

use arbmm_core::{InstrumentId, MarketInfo, Order, Result, TickSnapshot};
use arbmm_telemetry::Metrics;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use crate::config::{InstrumentConfig, MeanReversionConfig};
use crate::emitter::emit_orders;
use crate::inventory::{GuardContext, InventoryGuard, InventoryTier};
use crate::quote_engine::QuoteEngine;
use crate::rolling::RollingWindow;
use crate::sizing::{scale, SizePair};
use crate::strategy::Strategy;

/// Mean-reversion signal bucket from the latest mid's z-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReversionSignal {
    VeryRich,
    Rich,
    Neutral,
    Cheap,
    VeryCheap,
}

impl ReversionSignal {
    pub fn from_z(z: f64, weak: f64, strong: f64) -> Self {
        if z > strong {
            Self::VeryRich
        } else if z > weak {
            Self::Rich
        } else if z < -strong {
            Self::VeryCheap
        } else if z < -weak {
            Self::Cheap
        } else {
            Self::Neutral
        }
    }
}

pub struct MeanReversionMaker {
    config: MeanReversionConfig,
    quotes: QuoteEngine,
    guard: InventoryGuard,
    history: HashMap<InstrumentId, RollingWindow>,
}

impl MeanReversionMaker {
    pub fn new(config: MeanReversionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            quotes: QuoteEngine::new(&config.quote),
            guard: InventoryGuard::new(config.inventory.clone()),
            history: HashMap::new(),
            config,
        })
    }

    /// Record this tick's mids and decide the order set.
    pub fn decide(&mut self, tick: &TickSnapshot) -> Vec<Order> {
        let mut orders = Vec::new();
        for inst in &self.config.instruments {
            if !tick.is_active(&inst.id) {
                continue;
            }
            let Some(info) = tick.book(&inst.id).and_then(|b| b.market_info()) else {
                debug!(tick = tick.tick, instrument = %inst.id, "No market, skipping");
                Metrics::instrument_skipped(inst.id.as_str(), "no_market");
                continue;
            };
            let signal = record_mid(&mut self.history, &self.config, &inst.id, &info);
            orders.extend(self.decide_instrument(tick, inst, &info, signal));
        }
        orders
    }

    fn size(&self, inst: &InstrumentConfig, signal: ReversionSignal) -> SizePair {
        let cfg = &self.config;
        let (base, max) = (inst.base_size, inst.max_size);
        let strong_fade = scale(base, cfg.strong_shrink_factor).max(cfg.strong_floor);
        let weak_lean = scale(base, cfg.weak_boost_factor).min(max);
        let weak_fade = scale(base, cfg.weak_shrink_factor).max(cfg.weak_floor);

        match signal {
            ReversionSignal::VeryCheap => SizePair::new(max, strong_fade),
            ReversionSignal::Cheap => SizePair::new(weak_lean, weak_fade),
            ReversionSignal::Neutral => SizePair::symmetric(base),
            ReversionSignal::Rich => SizePair::new(weak_fade, weak_lean),
            ReversionSignal::VeryRich => SizePair::new(strong_fade, max),
        }
    }

    fn decide_instrument(
        &self,
        tick: &TickSnapshot,
        inst: &InstrumentConfig,
        info: &MarketInfo,
        signal: ReversionSignal,
    ) -> Vec<Order> {
        let params = inst.params();
        let quote = self.quotes.quote(info, inst.kind);
        let sizes = self.size(inst, signal);

        let position = tick.position(&inst.id);
        let limit = tick.position_limit(&inst.id, self.config.default_position_limit);
        let ctx = GuardContext {
            position,
            limit,
            params: &params,
            info,
        };
        let outcome = self.guard.apply(&ctx, quote, sizes);
        Metrics::inventory_tier(inst.id.as_str(), outcome.tier.as_str());
        if matches!(outcome.tier, InventoryTier::Emergency(_)) {
            warn!(tick = tick.tick, instrument = %inst.id, position, limit, "Emergency inventory unwind");
        }

        let orders = emit_orders(&inst.id, info, &outcome.quote, outcome.sizes, position, limit);
        for order in &orders {
            Metrics::order_emitted(inst.id.as_str(), order.side().as_str());
        }
        debug!(
            tick = tick.tick,
            instrument = %inst.id,
            mid = %info.mid,
            ?signal,
            regime = %quote.regime,
            tier = %outcome.tier,
            orders = orders.len(),
            "Instrument decided"
        );
        orders
    }
}

/// Push the mid and classify the latest value against the window.
fn record_mid(
    history: &mut HashMap<InstrumentId, RollingWindow>,
    cfg: &MeanReversionConfig,
    id: &InstrumentId,
    info: &MarketInfo,
) -> ReversionSignal {
    let window = history
        .entry(id.clone())
        .or_insert_with(|| RollingWindow::new(cfg.window));
    let Some(mid) = info.mid.to_f64() else {
        return ReversionSignal::Neutral;
    };
    window.push(mid);
    window
        .z_score(mid, cfg.min_samples, cfg.min_std)
        .map_or(ReversionSignal::Neutral, |z| {
            ReversionSignal::from_z(z, cfg.weak_z, cfg.strong_z)
        })
}

impl Strategy for MeanReversionMaker {
    fn name(&self) -> &'static str {
        "mean_reversion"
    }

    fn on_tick(&mut self, tick: &TickSnapshot) -> Vec<Order> {
        Metrics::tick_processed(self.name());
        self.decide(tick)
    }
}
