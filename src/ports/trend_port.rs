//! Trend classifier port.

use crate::domain::bar::Bar;
use crate::domain::trend::Trend;

/// Per-bar trend label. Must return the same label for the same bar.
pub trait TrendClassifier {
    fn trend_for(&self, bar: &Bar) -> Trend;
}
