//! JSON-lines replay loop.
//!
//! Reads one `TickSnapshot` per line, hands it to the strategy and writes
//! one `{"tick":N,"orders":[...]}` line per tick, in input order. All I/O
//! happens here, outside the decision call.

use std::io::{BufRead, Write};

use arbmm_core::{Order, TickSnapshot};
use arbmm_mm::Strategy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOrders {
    pub tick: u64,
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub ticks: usize,
    pub orders: usize,
}

/// Replay every tick from `input` through `strategy` into `output`.
///
/// Blank lines are skipped. A malformed line aborts the replay with its
/// 1-based line number.
pub fn replay<R: BufRead, W: Write>(
    strategy: &mut dyn Strategy,
    input: R,
    mut output: W,
) -> AppResult<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let tick: TickSnapshot = serde_json::from_str(&line).map_err(|source| AppError::Decode {
            line: idx + 1,
            source,
        })?;

        let orders = strategy.on_tick(&tick);
        debug!(tick = tick.tick, orders = orders.len(), "Tick replayed");
        summary.ticks += 1;
        summary.orders += orders.len();

        let record = TickOrders {
            tick: tick.tick,
            orders,
        };
        serde_json::to_writer(&mut output, &record)?;
        output.write_all(b"\n")?;
    }

    output.flush()?;
    info!(
        strategy = strategy.name(),
        ticks = summary.ticks,
        orders = summary.orders,
        "Replay complete"
    );
    Ok(summary)
}
