//! Replay collaborators backed by the labels recorded on each bar.

use crate::domain::bar::Bar;
use crate::domain::position::PositionSide;
use crate::domain::trend::Trend;
use crate::ports::gateway_port::{PositionGateway, ReplayGateway};
use crate::ports::trend_port::TrendClassifier;

/// Classifier that returns the trend label already stored on the bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordedTrendClassifier;

impl TrendClassifier for RecordedTrendClassifier {
    fn trend_for(&self, bar: &Bar) -> Trend {
        bar.trend
    }
}

/// A command the strategy sent to the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderCommand {
    EnterLong,
    EnterShort,
    StopLoss(u32),
    ProfitTarget(u32),
}

/// Paper gateway: reports the recorded position and keeps every command
/// without filling anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingGateway {
    position: PositionSide,
    commands: Vec<OrderCommand>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[OrderCommand] {
        &self.commands
    }
}

impl PositionGateway for RecordingGateway {
    fn current_position(&self) -> PositionSide {
        self.position
    }

    fn enter_long(&mut self) {
        self.commands.push(OrderCommand::EnterLong);
    }

    fn enter_short(&mut self) {
        self.commands.push(OrderCommand::EnterShort);
    }

    fn set_stop_loss(&mut self, ticks: u32) {
        self.commands.push(OrderCommand::StopLoss(ticks));
    }

    fn set_profit_target(&mut self, ticks: u32) {
        self.commands.push(OrderCommand::ProfitTarget(ticks));
    }
}

impl ReplayGateway for RecordingGateway {
    fn observe(&mut self, bar: &Bar) {
        self.position = bar.position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(trend: Trend, position: PositionSide) -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            open: 1.0,
            high: 1.0,
            low: 1.0,
            close: 1.0,
            volume: 0,
            trend,
            position,
        }
    }

    #[test]
    fn classifier_returns_recorded_label() {
        let classifier = RecordedTrendClassifier;
        assert_eq!(
            classifier.trend_for(&bar(Trend::Bearish, PositionSide::Flat)),
            Trend::Bearish
        );
    }

    #[test]
    fn gateway_starts_flat_and_tracks_observed_position() {
        let mut gateway = RecordingGateway::new();
        assert_eq!(gateway.current_position(), PositionSide::Flat);
        gateway.observe(&bar(Trend::Bullish, PositionSide::Long));
        assert_eq!(gateway.current_position(), PositionSide::Long);
    }

    #[test]
    fn gateway_records_commands_in_order_without_filling() {
        let mut gateway = RecordingGateway::new();
        gateway.set_stop_loss(10);
        gateway.enter_short();
        gateway.set_profit_target(25);
        assert_eq!(
            gateway.commands(),
            &[
                OrderCommand::StopLoss(10),
                OrderCommand::EnterShort,
                OrderCommand::ProfitTarget(25),
            ]
        );
        assert_eq!(gateway.current_position(), PositionSide::Flat);
    }
}
