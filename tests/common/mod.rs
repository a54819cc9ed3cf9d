#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::HashMap;
use trendtrader::domain::bar::Bar;
use trendtrader::domain::error::TraderError;
pub use trendtrader::domain::position::PositionSide;
pub use trendtrader::domain::trend::Trend;
use trendtrader::ports::data_port::DataPort;
use trendtrader::ports::display_port::LabelDisplay;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<Bar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, symbol: &str, bars: Vec<Bar>) -> Self {
        self.data.insert(symbol.to_string(), bars);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_bars(
        &self,
        symbol: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Bar>, TraderError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(TraderError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self
            .data
            .get(symbol)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|b| start_date.is_none_or(|s| b.date >= s))
            .filter(|b| end_date.is_none_or(|e| b.date <= e))
            .collect())
    }

    fn list_symbols(&self) -> Result<Vec<String>, TraderError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }
}

#[derive(Default)]
pub struct CollectingDisplay {
    pub labels: Vec<String>,
}

impl LabelDisplay for CollectingDisplay {
    fn show_label(&mut self, text: &str) {
        self.labels.push(text.to_string());
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_bar(index: usize, trend: Trend, position: PositionSide) -> Bar {
    Bar {
        date: date(2024, 1, 1) + chrono::Duration::days(index as i64),
        open: 100.0,
        high: 101.0,
        low: 99.0,
        close: 100.5,
        volume: 1000,
        trend,
        position,
    }
}

/// Bars on consecutive days from (trend, position) pairs.
pub fn make_bars(steps: &[(Trend, PositionSide)]) -> Vec<Bar> {
    steps
        .iter()
        .enumerate()
        .map(|(i, &(trend, position))| make_bar(i, trend, position))
        .collect()
}

pub const BAR_CSV_HEADER: &str = "date,open,high,low,close,volume,trend,position\n";
