//! Replay report port trait.

use crate::domain::error::TraderError;
use crate::domain::replay::ReplayResult;
use crate::domain::strategy::StrategyParams;

/// Port for writing a replay's intent log.
pub trait ReportPort {
    fn write(
        &self,
        result: &ReplayResult,
        params: &StrategyParams,
        output_path: &str,
    ) -> Result<(), TraderError>;
}
