//! Configuration validation.
//!
//! Validates every config field before a replay starts, so the engine only
//! ever sees well-formed parameters.

use crate::domain::error::TraderError;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

pub fn validate_strategy_config(config: &dyn ConfigPort) -> Result<(), TraderError> {
    tick_distance(config, "take_profit_ticks", 1)?;
    tick_distance(config, "stop_loss_ticks", 1)?;
    validate_use_mfi_rsi(config)?;
    Ok(())
}

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), TraderError> {
    validate_data_sources(config, false, false)
}

/// Validate `[data]` when the path and symbol may come from the command
/// line. A key given there need not be present in the file; dates are
/// always checked.
pub fn validate_data_sources(
    config: &dyn ConfigPort,
    path_given: bool,
    symbol_given: bool,
) -> Result<(), TraderError> {
    if !path_given {
        required(config, "data", "path")?;
    }
    if !symbol_given {
        required(config, "data", "symbol")?;
    }
    validate_dates(config)?;
    Ok(())
}

/// Read a tick distance from `[strategy]`, falling back to `default` when the
/// key is absent. A present value must be a positive whole number.
pub fn tick_distance(config: &dyn ConfigPort, key: &str, default: u32) -> Result<u32, TraderError> {
    let Some(raw) = config.get_string("strategy", key) else {
        return Ok(default);
    };
    match raw.trim().parse::<u32>() {
        Ok(ticks) if ticks > 0 => Ok(ticks),
        _ => Err(TraderError::ConfigInvalid {
            section: "strategy".to_string(),
            key: key.to_string(),
            reason: format!("{} must be a positive whole number of ticks", key),
        }),
    }
}

/// Parse an optional `YYYY-MM-DD` date.
pub fn optional_date(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<NaiveDate>, TraderError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| TraderError::ConfigInvalid {
                section: section.to_string(),
                key: key.to_string(),
                reason: format!("invalid {} format, expected YYYY-MM-DD", key),
            }),
    }
}

fn required(config: &dyn ConfigPort, section: &str, key: &str) -> Result<String, TraderError> {
    match config.get_string(section, key) {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(TraderError::ConfigMissing {
            section: section.to_string(),
            key: key.to_string(),
        }),
    }
}

fn validate_use_mfi_rsi(config: &dyn ConfigPort) -> Result<(), TraderError> {
    if !config.has_key("strategy", "use_mfi_rsi") {
        return Ok(());
    }
    // Any non-boolean value falls back to the default on read; catch it here.
    let as_true = config.get_bool("strategy", "use_mfi_rsi", true);
    let as_false = config.get_bool("strategy", "use_mfi_rsi", false);
    if as_true != as_false {
        return Err(TraderError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "use_mfi_rsi".to_string(),
            reason: "use_mfi_rsi must be true or false".to_string(),
        });
    }
    Ok(())
}

fn validate_dates(config: &dyn ConfigPort) -> Result<(), TraderError> {
    let start = optional_date(config, "data", "start_date")?;
    let end = optional_date(config, "data", "end_date")?;
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(TraderError::ConfigInvalid {
                section: "data".to_string(),
                key: "start_date".to_string(),
                reason: "start_date must not be after end_date".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn make_config(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn valid_strategy_config_passes() {
        let config = make_config(
            r#"
[strategy]
name = MFTM
take_profit_ticks = 20
stop_loss_ticks = 16
use_mfi_rsi = false
"#,
        );
        assert!(validate_strategy_config(&config).is_ok());
    }

    #[test]
    fn empty_strategy_section_uses_defaults() {
        let config = make_config("[strategy]\n");
        assert!(validate_strategy_config(&config).is_ok());
        assert_eq!(tick_distance(&config, "take_profit_ticks", 20).unwrap(), 20);
    }

    #[test]
    fn zero_ticks_fail() {
        let config = make_config("[strategy]\nstop_loss_ticks = 0\n");
        let err = validate_strategy_config(&config).unwrap_err();
        assert!(matches!(err, TraderError::ConfigInvalid { key, .. } if key == "stop_loss_ticks"));
    }

    #[test]
    fn negative_ticks_fail() {
        let config = make_config("[strategy]\ntake_profit_ticks = -4\n");
        let err = validate_strategy_config(&config).unwrap_err();
        assert!(
            matches!(err, TraderError::ConfigInvalid { key, .. } if key == "take_profit_ticks")
        );
    }

    #[test]
    fn fractional_ticks_fail() {
        let config = make_config("[strategy]\ntake_profit_ticks = 12.5\n");
        assert!(tick_distance(&config, "take_profit_ticks", 20).is_err());
    }

    #[test]
    fn tick_distance_reads_value() {
        let config = make_config("[strategy]\nstop_loss_ticks = 8\n");
        assert_eq!(tick_distance(&config, "stop_loss_ticks", 20).unwrap(), 8);
    }

    #[test]
    fn non_boolean_use_mfi_rsi_fails() {
        let config = make_config("[strategy]\nuse_mfi_rsi = maybe\n");
        let err = validate_strategy_config(&config).unwrap_err();
        assert!(matches!(err, TraderError::ConfigInvalid { key, .. } if key == "use_mfi_rsi"));
    }

    #[test]
    fn valid_data_config_passes() {
        let config = make_config(
            "[data]\npath = /tmp/bars\nsymbol = ES\nstart_date = 2024-01-01\nend_date = 2024-06-30\n",
        );
        assert!(validate_data_config(&config).is_ok());
    }

    #[test]
    fn data_dates_are_optional() {
        let config = make_config("[data]\npath = /tmp/bars\nsymbol = ES\n");
        assert!(validate_data_config(&config).is_ok());
    }

    #[test]
    fn missing_path_fails() {
        let config = make_config("[data]\nsymbol = ES\n");
        let err = validate_data_config(&config).unwrap_err();
        assert!(matches!(err, TraderError::ConfigMissing { key, .. } if key == "path"));
    }

    #[test]
    fn missing_symbol_fails() {
        let config = make_config("[data]\npath = /tmp/bars\n");
        let err = validate_data_config(&config).unwrap_err();
        assert!(matches!(err, TraderError::ConfigMissing { key, .. } if key == "symbol"));
    }

    #[test]
    fn invalid_start_date_format_fails() {
        let config = make_config("[data]\npath = /tmp\nsymbol = ES\nstart_date = 2024/01/01\n");
        let err = validate_data_config(&config).unwrap_err();
        assert!(matches!(err, TraderError::ConfigInvalid { key, .. } if key == "start_date"));
    }

    #[test]
    fn start_after_end_fails() {
        let config = make_config(
            "[data]\npath = /tmp\nsymbol = ES\nstart_date = 2024-06-30\nend_date = 2024-01-01\n",
        );
        let err = validate_data_config(&config).unwrap_err();
        assert!(matches!(err, TraderError::ConfigInvalid { key, .. } if key == "start_date"));
    }

    #[test]
    fn given_path_need_not_be_in_file() {
        let config = make_config("[data]\nsymbol = ES\n");
        assert!(validate_data_sources(&config, true, false).is_ok());
        let err = validate_data_sources(&config, false, false).unwrap_err();
        assert!(matches!(err, TraderError::ConfigMissing { key, .. } if key == "path"));
    }

    #[test]
    fn given_symbol_need_not_be_in_file() {
        let config = make_config("[data]\npath = /tmp/bars\n");
        assert!(validate_data_sources(&config, false, true).is_ok());
        assert!(validate_data_sources(&config, true, true).is_ok());
    }

    #[test]
    fn dates_checked_even_when_both_given() {
        let config =
            make_config("[data]\nstart_date = 2024-06-30\nend_date = 2024-01-01\n");
        let err = validate_data_sources(&config, true, true).unwrap_err();
        assert!(matches!(err, TraderError::ConfigInvalid { key, .. } if key == "start_date"));
    }

    #[test]
    fn same_start_and_end_is_allowed() {
        let config = make_config(
            "[data]\npath = /tmp\nsymbol = ES\nstart_date = 2024-06-30\nend_date = 2024-06-30\n",
        );
        assert!(validate_data_config(&config).is_ok());
    }
}
