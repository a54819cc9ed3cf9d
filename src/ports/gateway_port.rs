//! Order gateway port.

use crate::domain::bar::Bar;
use crate::domain::position::PositionSide;

/// Executes orders for the single traded instrument.
///
/// Commands are fire-and-forget: a rejected order is not reported back, the
/// next bar simply observes the resulting position.
pub trait PositionGateway {
    fn current_position(&self) -> PositionSide;
    fn enter_long(&mut self);
    fn enter_short(&mut self);
    fn set_stop_loss(&mut self, ticks: u32);
    fn set_profit_target(&mut self, ticks: u32);
}

/// Gateway whose position is driven by recorded bars during a replay.
pub trait ReplayGateway: PositionGateway {
    /// Load the position snapshot recorded on `bar`.
    fn observe(&mut self, bar: &Bar);
}
