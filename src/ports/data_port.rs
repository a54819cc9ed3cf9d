//! Recorded bar source port trait.

use crate::domain::bar::Bar;
use crate::domain::error::TraderError;
use chrono::NaiveDate;

pub trait DataPort {
    /// Bars for `symbol` in date order, limited to the inclusive range when
    /// bounds are given.
    fn fetch_bars(
        &self,
        symbol: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Bar>, TraderError>;

    fn list_symbols(&self) -> Result<Vec<String>, TraderError>;
}
