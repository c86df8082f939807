use arbmm_core::{Order, TickSnapshot};

/// A per-tick decision function driven by the replay loop.
///
/// Each call returns the complete set of resting orders for that tick.
/// `&mut self` lets implementations keep per-instrument history.
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn on_tick(&mut self, tick: &TickSnapshot) -> Vec<Order>;
}
