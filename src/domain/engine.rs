//! Trend-following decision state machine.
//!
//! A [`DecisionEngine`] is built once per run. Each event hands it the
//! current trend label (plus the position side for bar updates) and gets back
//! the intents to dispatch, in order. The engine never holds a reference to
//! the classifier or the gateway.

use tracing::debug;

use super::intent::Intent;
use super::position::PositionSide;
use super::trend::Trend;

/// Unchanged-trend bars required after a flip before adding back in the
/// same direction.
pub const REENTRY_DWELL_BARS: u32 = 2;

/// Mutable state carried from one event to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    /// Trend seen on the previous bar update.
    pub last_trend: Trend,
    /// Closed by the first-tick handler. Never reopened.
    pub initial_position_entered: bool,
    /// Set on every flat observation, cleared by a re-entry.
    pub position_closed: bool,
    /// Bars without a trend change since the last flip.
    pub trend_change_bar_count: u32,
}

impl Default for EngineState {
    fn default() -> Self {
        EngineState {
            last_trend: Trend::Neutral,
            initial_position_entered: false,
            position_closed: false,
            trend_change_bar_count: 0,
        }
    }
}

/// Coarse view of the two lifecycle flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The first tick has not been handled yet.
    NotStarted,
    /// Started, and no flat bar has been seen since the last (re-)entry.
    Holding,
    /// Started, flat at some point since the last re-entry; same-direction
    /// add-back is armed.
    FlatAwaitingReentry,
}

impl EngineState {
    pub fn phase(&self) -> Phase {
        match (self.initial_position_entered, self.position_closed) {
            (false, _) => Phase::NotStarted,
            (true, false) => Phase::Holding,
            (true, true) => Phase::FlatAwaitingReentry,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DecisionEngine {
    take_profit_ticks: u32,
    stop_loss_ticks: u32,
    state: EngineState,
}

impl DecisionEngine {
    pub fn new(take_profit_ticks: u32, stop_loss_ticks: u32) -> Self {
        Self::with_state(take_profit_ticks, stop_loss_ticks, EngineState::default())
    }

    /// Resume from a known state, e.g. a snapshot taken mid-session.
    pub fn with_state(take_profit_ticks: u32, stop_loss_ticks: u32, state: EngineState) -> Self {
        DecisionEngine {
            take_profit_ticks,
            stop_loss_ticks,
            state,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn take_profit_ticks(&self) -> u32 {
        self.take_profit_ticks
    }

    pub fn stop_loss_ticks(&self) -> u32 {
        self.stop_loss_ticks
    }

    pub fn reset(&mut self) {
        self.state = EngineState::default();
    }

    /// Open the initial position in the direction of `trend`.
    ///
    /// One-shot: the gate closes whatever the trend, and any later call
    /// returns nothing.
    pub fn on_first_tick(&mut self, trend: Trend) -> Vec<Intent> {
        if self.state.initial_position_entered {
            debug!(%trend, "first tick after gate closed, ignoring");
            return Vec::new();
        }
        self.state.initial_position_entered = true;
        entry_for(trend).into_iter().collect()
    }

    /// Evaluate one completed bar.
    pub fn on_bar_update(&mut self, trend: Trend, position: PositionSide) -> Vec<Intent> {
        let state = &mut self.state;
        let mut intents = Vec::new();

        debug!(
            current_trend = %trend,
            last_trend = %state.last_trend,
            position_closed = state.position_closed,
            %position,
            initial_position_entered = state.initial_position_entered,
            "bar update"
        );

        if trend != state.last_trend {
            state.trend_change_bar_count = 0;
            if state.initial_position_entered {
                intents.push(Intent::SetStopLoss(self.stop_loss_ticks));
            }
        } else {
            state.trend_change_bar_count = state.trend_change_bar_count.saturating_add(1);
        }

        if position.is_flat() && !state.position_closed {
            if let Some(entry) = entry_for(trend) {
                intents.push(entry);
                intents.push(Intent::SetProfitTarget(self.take_profit_ticks));
            }
        } else if state.initial_position_entered {
            let add_back = match (position, trend) {
                (PositionSide::Long, Trend::Bullish) => Some(Intent::EnterLong),
                (PositionSide::Short, Trend::Bearish) => Some(Intent::EnterShort),
                _ => None,
            };
            if let Some(entry) = add_back {
                if state.trend_change_bar_count >= REENTRY_DWELL_BARS && state.position_closed {
                    intents.push(entry);
                    intents.push(Intent::SetProfitTarget(self.take_profit_ticks));
                    state.position_closed = false;
                }
            }
        }

        if position.is_flat() {
            state.position_closed = true;
        }

        intents.push(Intent::ShowTrend(trend));
        state.last_trend = trend;
        intents
    }
}

fn entry_for(trend: Trend) -> Option<Intent> {
    match trend {
        Trend::Bullish => Some(Intent::EnterLong),
        Trend::Bearish => Some(Intent::EnterShort),
        Trend::Neutral => None,
    }
}
