//! Arbitrage-aware market maker.
//!
//! Per tick:
//! 1. Derive `MarketInfo` for every active, registered instrument.
//! 2. Price each composite against its regression fair value.
//! 3. For each instrument in registration order: quote, size, guard, emit.
//!
//! Holds no cross-tick state; the same snapshot always yields the same orders.

use std::collections::HashMap;

use arbmm_core::{InstrumentId, InstrumentKind, MarketInfo, Order, Result, TickSnapshot};
use arbmm_telemetry::Metrics;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{ArbConfig, InstrumentConfig};
use crate::emitter::emit_orders;
use crate::fair_value::FairValueEstimator;
use crate::inventory::{GuardContext, InventoryGuard, InventoryTier};
use crate::quote_engine::QuoteEngine;
use crate::sizing::SizingEngine;
use crate::strategy::Strategy;

pub struct ArbMarketMaker {
    instruments: Vec<InstrumentConfig>,
    default_limit: i64,
    fair_value: FairValueEstimator,
    quotes: QuoteEngine,
    sizing: SizingEngine,
    guard: InventoryGuard,
}

impl ArbMarketMaker {
    /// Build from a validated configuration.
    pub fn new(config: ArbConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fair_value: FairValueEstimator::from_config(&config.weights),
            quotes: QuoteEngine::new(&config.quote),
            sizing: SizingEngine::new(config.sizing),
            guard: InventoryGuard::new(config.inventory),
            default_limit: config.default_position_limit,
            instruments: config.instruments,
        })
    }

    /// Decide the complete order set for one tick.
    pub fn decide(&self, tick: &TickSnapshot) -> Vec<Order> {
        for product in &tick.products {
            if !self.instruments.iter().any(|i| &i.id == product) {
                debug!(tick = tick.tick, instrument = %product, "Skipping unconfigured instrument");
                Metrics::instrument_skipped(product.as_str(), "unconfigured");
            }
        }

        let markets = self.snapshot_markets(tick);
        let mids: HashMap<InstrumentId, Decimal> = self
            .instruments
            .iter()
            .filter(|i| i.kind == InstrumentKind::Underlying)
            .filter_map(|i| markets.get(&i.id).map(|info| (i.id.clone(), info.mid)))
            .collect();

        let mut orders = Vec::new();
        for inst in &self.instruments {
            if let Some(info) = markets.get(&inst.id) {
                orders.extend(self.decide_instrument(tick, inst, info, &mids));
            }
        }
        orders
    }

    /// Top-of-book for every active registered instrument with a market.
    fn snapshot_markets(&self, tick: &TickSnapshot) -> HashMap<InstrumentId, MarketInfo> {
        let mut markets = HashMap::new();
        for inst in self.instruments.iter().filter(|i| tick.is_active(&i.id)) {
            let Some(book) = tick.book(&inst.id) else {
                debug!(tick = tick.tick, instrument = %inst.id, "No book, skipping");
                Metrics::instrument_skipped(inst.id.as_str(), "no_book");
                continue;
            };
            let state = book.state();
            match book.market_info() {
                Some(info) => {
                    if info.is_degenerate() {
                        warn!(
                            tick = tick.tick,
                            instrument = %inst.id,
                            best_bid = %info.best_bid,
                            best_ask = %info.best_ask,
                            "Crossed book"
                        );
                    }
                    markets.insert(inst.id.clone(), info);
                }
                None => {
                    debug!(tick = tick.tick, instrument = %inst.id, %state, "No market, skipping");
                    Metrics::instrument_skipped(inst.id.as_str(), state.as_str());
                }
            }
        }
        markets
    }

    fn decide_instrument(
        &self,
        tick: &TickSnapshot,
        inst: &InstrumentConfig,
        info: &MarketInfo,
        mids: &HashMap<InstrumentId, Decimal>,
    ) -> Vec<Order> {
        let params = inst.params();

        let deviation = if inst.kind.is_composite() {
            self.fair_value
                .estimate(&inst.id, info.mid, mids)
                .map(|estimate| {
                    Metrics::fair_value_deviation(
                        inst.id.as_str(),
                        estimate.deviation.to_f64().unwrap_or_default(),
                    );
                    estimate.deviation
                })
        } else {
            None
        };

        let quote = self.quotes.quote(info, inst.kind);
        let sizing = self.sizing.size(&params, deviation, info.spread);

        let position = tick.position(&inst.id);
        let limit = tick.position_limit(&inst.id, self.default_limit);
        let ctx = GuardContext {
            position,
            limit,
            params: &params,
            info,
        };
        let outcome = self.guard.apply(&ctx, quote, sizing.sizes);
        Metrics::inventory_tier(inst.id.as_str(), outcome.tier.as_str());
        if let InventoryTier::Emergency(exposure) = outcome.tier {
            warn!(
                tick = tick.tick,
                instrument = %inst.id,
                position,
                limit,
                ?exposure,
                "Emergency inventory unwind"
            );
        }

        let orders = emit_orders(&inst.id, info, &outcome.quote, outcome.sizes, position, limit);
        for order in &orders {
            Metrics::order_emitted(inst.id.as_str(), order.side().as_str());
        }

        debug!(
            tick = tick.tick,
            instrument = %inst.id,
            mid = %info.mid,
            spread = info.spread,
            deviation = ?deviation,
            regime = %quote.regime,
            skew = ?sizing.skew,
            boosted = sizing.boosted,
            tier = %outcome.tier,
            orders = orders.len(),
            "Instrument decided"
        );
        orders
    }
}

impl Strategy for ArbMarketMaker {
    fn name(&self) -> &'static str {
        "arbitrage"
    }

    fn on_tick(&mut self, tick: &TickSnapshot) -> Vec<Order> {
        Metrics::tick_processed(self.name());
        self.decide(tick)
    }
}
