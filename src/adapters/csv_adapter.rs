//! CSV bar file adapter.
//!
//! One file per symbol, `<symbol>.csv`, with header
//! `date,open,high,low,close,volume,trend,position`.

use crate::domain::bar::Bar;
use crate::domain::error::TraderError;
use crate::domain::position::PositionSide;
use crate::domain::trend::Trend;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }
}

fn column<'a>(record: &'a csv::StringRecord, idx: usize, name: &str) -> Result<&'a str, TraderError> {
    record.get(idx).ok_or_else(|| TraderError::Data {
        reason: format!("missing {} column", name),
    })
}

fn number<T: std::str::FromStr>(
    record: &csv::StringRecord,
    idx: usize,
    name: &str,
) -> Result<T, TraderError>
where
    T::Err: std::fmt::Display,
{
    column(record, idx, name)?
        .trim()
        .parse()
        .map_err(|e: T::Err| TraderError::Data {
            reason: format!("invalid {} value: {}", name, e),
        })
}

impl DataPort for CsvAdapter {
    fn fetch_bars(
        &self,
        symbol: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Bar>, TraderError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| TraderError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for (row, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| TraderError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = column(&record, 0, "date")?;
            let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|e| {
                TraderError::Data {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            if start_date.is_some_and(|start| date < start)
                || end_date.is_some_and(|end| date > end)
            {
                continue;
            }

            let trend_str = column(&record, 6, "trend")?;
            let trend = Trend::parse_label(trend_str).unwrap_or_else(|| {
                warn!(row, %date, label = trend_str, "unknown trend label, treating as neutral");
                Trend::Neutral
            });

            let position_str = column(&record, 7, "position")?;
            let position =
                PositionSide::parse(position_str).ok_or_else(|| TraderError::Data {
                    reason: format!("invalid position value: {}", position_str),
                })?;

            bars.push(Bar {
                date,
                open: number(&record, 1, "open")?,
                high: number(&record, 2, "high")?,
                low: number(&record, 3, "low")?,
                close: number(&record, 4, "close")?,
                volume: number(&record, 5, "volume")?,
                trend,
                position,
            });
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }

    fn list_symbols(&self) -> Result<Vec<String>, TraderError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| TraderError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| TraderError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(symbol) = name_str.strip_suffix(".csv") {
                symbols.push(symbol.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }
}
