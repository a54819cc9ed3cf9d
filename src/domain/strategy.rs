//! Strategy parameters and the host that wires collaborators to the engine.

use tracing::{debug, info};

use crate::domain::bar::Bar;
use crate::domain::engine::{DecisionEngine, EngineState};
use crate::domain::intent::Intent;
use crate::domain::position::PositionSide;
use crate::domain::trend::Trend;
use crate::ports::display_port::LabelDisplay;
use crate::ports::gateway_port::PositionGateway;
use crate::ports::trend_port::TrendClassifier;

pub const DEFAULT_TAKE_PROFIT_TICKS: u32 = 20;
pub const DEFAULT_STOP_LOSS_TICKS: u32 = 20;

/// Prefix of the fixed-position chart label.
pub const TREND_LABEL_PREFIX: &str = "Current trend: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyParams {
    pub name: String,
    pub take_profit_ticks: u32,
    pub stop_loss_ticks: u32,
    /// Carried from configuration; the decision logic does not read it.
    pub use_mfi_rsi: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        StrategyParams {
            name: "MFTM".to_string(),
            take_profit_ticks: DEFAULT_TAKE_PROFIT_TICKS,
            stop_loss_ticks: DEFAULT_STOP_LOSS_TICKS,
            use_mfi_rsi: true,
        }
    }
}

/// Single-instrument trend strategy: a [`DecisionEngine`] plus the ports it
/// reads from and dispatches to.
pub struct TrendStrategy<C, G, D> {
    params: StrategyParams,
    classifier: C,
    gateway: G,
    display: D,
    engine: DecisionEngine,
}

impl<C, G, D> TrendStrategy<C, G, D>
where
    C: TrendClassifier,
    G: PositionGateway,
    D: LabelDisplay,
{
    /// Wire the collaborators and reset the engine, ready for the first
    /// event.
    pub fn configure(params: StrategyParams, classifier: C, gateway: G, display: D) -> Self {
        let engine = DecisionEngine::new(params.take_profit_ticks, params.stop_loss_ticks);
        let mut strategy = TrendStrategy {
            params,
            classifier,
            gateway,
            display,
            engine,
        };
        strategy.reset();
        strategy
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        info!(
            name = %self.params.name,
            take_profit_ticks = self.params.take_profit_ticks,
            stop_loss_ticks = self.params.stop_loss_ticks,
            use_mfi_rsi = self.params.use_mfi_rsi,
            "strategy reset"
        );
    }

    pub fn params(&self) -> &StrategyParams {
        &self.params
    }

    pub fn state(&self) -> &EngineState {
        self.engine.state()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn trend_for(&self, bar: &Bar) -> Trend {
        self.classifier.trend_for(bar)
    }

    pub fn current_position(&self) -> PositionSide {
        self.gateway.current_position()
    }

    /// Handle the first market data update of the run.
    pub fn first_tick(&mut self, bar: &Bar) -> Vec<Intent> {
        let trend = self.classifier.trend_for(bar);
        let intents = self.engine.on_first_tick(trend);
        self.dispatch(&intents);
        intents
    }

    /// Handle a completed bar. `index` is the bar's position in the series;
    /// the first bar has nothing to compare against and is skipped.
    pub fn bar_update(&mut self, index: usize, bar: &Bar) -> Vec<Intent> {
        if index < 1 {
            return Vec::new();
        }
        let trend = self.classifier.trend_for(bar);
        let position = self.gateway.current_position();
        let intents = self.engine.on_bar_update(trend, position);
        self.dispatch(&intents);
        intents
    }

    fn dispatch(&mut self, intents: &[Intent]) {
        for intent in intents {
            match *intent {
                Intent::EnterLong => {
                    info!("enter long");
                    self.gateway.enter_long();
                }
                Intent::EnterShort => {
                    info!("enter short");
                    self.gateway.enter_short();
                }
                Intent::SetStopLoss(ticks) => {
                    debug!(ticks, "set stop loss");
                    self.gateway.set_stop_loss(ticks);
                }
                Intent::SetProfitTarget(ticks) => {
                    debug!(ticks, "set profit target");
                    self.gateway.set_profit_target(ticks);
                }
                Intent::ShowTrend(trend) => {
                    let label = format!("{}{}", TREND_LABEL_PREFIX, trend.display_label());
                    self.display.show_label(&label);
                }
            }
        }
    }
}
