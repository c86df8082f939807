//! Final order emission.
//!
//! The only place that enforces the book and position invariants:
//! - a buy rests strictly below the best ask, a sell strictly above the best bid
//! - a full fill of every emitted order keeps |position| <= limit
//! - zero-quantity orders are never produced

use arbmm_core::{InstrumentId, MarketInfo, Order};
use tracing::trace;

use crate::quote_engine::QuotePair;
use crate::sizing::SizePair;

/// Turn a guarded quote into at most one buy and one sell, buy first.
pub fn emit_orders(
    instrument: &InstrumentId,
    info: &MarketInfo,
    quote: &QuotePair,
    sizes: SizePair,
    position: i64,
    limit: i64,
) -> Vec<Order> {
    let mut orders = Vec::with_capacity(2);

    let buy_room = limit - position;
    if sizes.buy > 0 && buy_room > 0 && quote.bid < info.best_ask {
        orders.push(Order::buy(
            instrument.clone(),
            quote.bid,
            sizes.buy.min(buy_room),
        ));
    } else if sizes.buy > 0 {
        trace!(%instrument, bid = %quote.bid, position, limit, "Buy suppressed");
    }

    let sell_room = limit + position;
    if sizes.sell > 0 && sell_room > 0 && quote.ask > info.best_bid {
        orders.push(Order::sell(
            instrument.clone(),
            quote.ask,
            sizes.sell.min(sell_room),
        ));
    } else if sizes.sell > 0 {
        trace!(%instrument, ask = %quote.ask, position, limit, "Sell suppressed");
    }

    orders
}
