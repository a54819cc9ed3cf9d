//! Recorded bar: prices plus the labels the replay collaborators read.

use chrono::NaiveDate;

use super::position::PositionSide;
use super::trend::Trend;

#[derive(Debug, Clone)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
    /// Label produced upstream by the trend indicator.
    pub trend: Trend,
    /// Position side reported by the broker when the bar closed.
    pub position: PositionSide,
}
