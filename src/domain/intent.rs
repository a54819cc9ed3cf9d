//! Intents emitted by the decision engine.

use std::fmt;

use super::trend::Trend;

/// A single instruction for the gateway or the display, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    EnterLong,
    EnterShort,
    SetStopLoss(u32),
    SetProfitTarget(u32),
    ShowTrend(Trend),
}

impl Intent {
    pub fn is_entry(&self) -> bool {
        matches!(self, Intent::EnterLong | Intent::EnterShort)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::EnterLong => write!(f, "ENTER_LONG"),
            Intent::EnterShort => write!(f, "ENTER_SHORT"),
            Intent::SetStopLoss(ticks) => write!(f, "STOP_LOSS({})", ticks),
            Intent::SetProfitTarget(ticks) => write!(f, "PROFIT_TARGET({})", ticks),
            Intent::ShowTrend(trend) => write!(f, "SHOW({})", trend.display_label()),
        }
    }
}
