//! CSV intent-log adapter implementing ReportPort.
//!
//! One row per replayed bar; the bar's intents are joined with `;` in
//! emission order.

use crate::domain::error::TraderError;
use crate::domain::replay::ReplayResult;
use crate::domain::strategy::StrategyParams;
use crate::ports::report_port::ReportPort;

pub const REPORT_HEADER: [&str; 6] = ["strategy", "bar", "date", "trend", "position", "intents"];

#[derive(Debug, Default)]
pub struct CsvReportAdapter;

impl CsvReportAdapter {
    pub fn new() -> Self {
        CsvReportAdapter
    }
}

fn csv_error(e: csv::Error) -> TraderError {
    match e.into_kind() {
        csv::ErrorKind::Io(io) => TraderError::Io(io),
        other => TraderError::Data {
            reason: format!("CSV write error: {:?}", other),
        },
    }
}

impl ReportPort for CsvReportAdapter {
    fn write(
        &self,
        result: &ReplayResult,
        params: &StrategyParams,
        output_path: &str,
    ) -> Result<(), TraderError> {
        let mut wtr = csv::Writer::from_path(output_path).map_err(csv_error)?;
        wtr.write_record(REPORT_HEADER).map_err(csv_error)?;

        for record in &result.records {
            let intents = record
                .intents
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(";");
            wtr.write_record([
                params.name.clone(),
                record.index.to_string(),
                record.date.format("%Y-%m-%d").to_string(),
                record.trend.to_string(),
                record.position.to_string(),
                intents,
            ])
            .map_err(csv_error)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
