//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::recorded::{RecordedTrendClassifier, RecordingGateway};
use crate::adapters::tracing_display::TracingDisplay;
use crate::domain::config_validation::{
    optional_date, tick_distance, validate_data_config, validate_data_sources,
    validate_strategy_config,
};
use crate::domain::error::TraderError;
use crate::domain::replay::{ReplayConfig, ReplayResult, run_replay};
use crate::domain::strategy::{
    DEFAULT_STOP_LOSS_TICKS, DEFAULT_TAKE_PROFIT_TICKS, StrategyParams, TrendStrategy,
};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "trendtrader", about = "Trend-following strategy replay")]
pub struct Cli {
    /// Log per-bar engine diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay recorded bars through the strategy
    Replay {
        #[arg(short, long)]
        config: PathBuf,
        /// Directory of <symbol>.csv files, overrides [data] path
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(long)]
        symbol: Option<String>,
        /// Intent log destination, overrides [report] output
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        take_profit_ticks: Option<u32>,
        #[arg(long)]
        stop_loss_ticks: Option<u32>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// List symbols available in a data directory
    ListSymbols {
        #[arg(short, long)]
        data: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Replay {
            config,
            data,
            symbol,
            output,
            take_profit_ticks,
            stop_loss_ticks,
        } => run_replay_command(
            &config,
            ReplayOverrides {
                data,
                symbol,
                output,
                take_profit_ticks,
                stop_loss_ticks,
            },
        ),
        Command::Validate { config } => run_validate(&config),
        Command::ListSymbols { data } => run_list_symbols(data),
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct ReplayOverrides {
    pub data: Option<PathBuf>,
    pub symbol: Option<String>,
    pub output: Option<PathBuf>,
    pub take_profit_ticks: Option<u32>,
    pub stop_loss_ticks: Option<u32>,
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, TraderError> {
    FileConfigAdapter::from_file(path).map_err(|e| TraderError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

pub fn build_params(adapter: &dyn ConfigPort) -> Result<StrategyParams, TraderError> {
    let defaults = StrategyParams::default();
    Ok(StrategyParams {
        name: adapter
            .get_string("strategy", "name")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.name),
        take_profit_ticks: tick_distance(adapter, "take_profit_ticks", DEFAULT_TAKE_PROFIT_TICKS)?,
        stop_loss_ticks: tick_distance(adapter, "stop_loss_ticks", DEFAULT_STOP_LOSS_TICKS)?,
        use_mfi_rsi: adapter.get_bool("strategy", "use_mfi_rsi", defaults.use_mfi_rsi),
    })
}

pub fn build_replay_config(
    adapter: &dyn ConfigPort,
    overrides: &ReplayOverrides,
) -> Result<ReplayConfig, TraderError> {
    let data_path = match &overrides.data {
        Some(p) => p.display().to_string(),
        None => adapter
            .get_string("data", "path")
            .ok_or_else(|| TraderError::ConfigMissing {
                section: "data".into(),
                key: "path".into(),
            })?,
    };
    let symbol = match &overrides.symbol {
        Some(s) => s.trim().to_uppercase(),
        None => adapter
            .get_string("data", "symbol")
            .map(|s| s.trim().to_uppercase())
            .ok_or_else(|| TraderError::ConfigMissing {
                section: "data".into(),
                key: "symbol".into(),
            })?,
    };
    Ok(ReplayConfig {
        data_path,
        symbol,
        start_date: optional_date(adapter, "data", "start_date")?,
        end_date: optional_date(adapter, "data", "end_date")?,
    })
}

fn apply_overrides(params: &mut StrategyParams, overrides: &ReplayOverrides) -> Result<(), TraderError> {
    for (key, value, slot) in [
        ("take_profit_ticks", overrides.take_profit_ticks, &mut params.take_profit_ticks),
        ("stop_loss_ticks", overrides.stop_loss_ticks, &mut params.stop_loss_ticks),
    ] {
        match value {
            Some(0) => {
                return Err(TraderError::ConfigInvalid {
                    section: "strategy".into(),
                    key: key.into(),
                    reason: format!("{} must be a positive whole number of ticks", key),
                });
            }
            Some(ticks) => *slot = ticks,
            None => {}
        }
    }
    Ok(())
}

/// Fetch bars and replay them through a freshly configured strategy.
pub fn run_replay_pipeline(
    data_port: &dyn DataPort,
    params: &StrategyParams,
    replay_config: &ReplayConfig,
) -> Result<ReplayResult, TraderError> {
    let bars = data_port.fetch_bars(
        &replay_config.symbol,
        replay_config.start_date,
        replay_config.end_date,
    )?;
    if bars.is_empty() {
        return Err(TraderError::NoData {
            symbol: replay_config.symbol.clone(),
        });
    }
    info!(symbol = %replay_config.symbol, bars = bars.len(), "replaying");

    let mut strategy = TrendStrategy::configure(
        params.clone(),
        RecordedTrendClassifier,
        RecordingGateway::new(),
        TracingDisplay::new(),
    );
    Ok(run_replay(&mut strategy, &bars))
}

fn replay(config_path: &PathBuf, overrides: &ReplayOverrides) -> Result<(), TraderError> {
    info!(path = %config_path.display(), "loading config");
    let adapter = load_config(config_path)?;

    validate_strategy_config(&adapter)?;
    validate_data_sources(
        &adapter,
        overrides.data.is_some(),
        overrides.symbol.is_some(),
    )?;

    let mut params = build_params(&adapter)?;
    apply_overrides(&mut params, overrides)?;
    let replay_config = build_replay_config(&adapter, overrides)?;

    let data_port = CsvAdapter::new(PathBuf::from(&replay_config.data_path));
    let result = run_replay_pipeline(&data_port, &params, &replay_config)?;
    print_summary(&params, &replay_config, &result);

    let output = overrides
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .or_else(|| adapter.get_string("report", "output"));
    if let Some(output) = output {
        CsvReportAdapter::new().write(&result, &params, &output)?;
        info!(path = %output, "intent log written");
    }
    Ok(())
}

fn print_summary(params: &StrategyParams, replay_config: &ReplayConfig, result: &ReplayResult) {
    let s = &result.summary;
    println!("=== {} on {} ===", params.name, replay_config.symbol);
    println!("Bars:             {}", s.bars);
    println!("Long entries:     {}", s.long_entries);
    println!("Short entries:    {}", s.short_entries);
    println!("Stop re-arms:     {}", s.stop_rearms);
    println!("Profit targets:   {}", s.profit_targets);
    println!("Final trend:      {}", result.final_state.last_trend);
    println!("Final phase:      {:?}", result.final_state.phase());
}

fn run_replay_command(config_path: &PathBuf, overrides: ReplayOverrides) -> ExitCode {
    match replay(config_path, &overrides) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let validated = load_config(config_path).and_then(|adapter| {
        validate_strategy_config(&adapter)?;
        validate_data_config(&adapter)?;
        build_params(&adapter)
    });
    match validated {
        Ok(params) => {
            println!("Strategy:          {}", params.name);
            println!("Take profit ticks: {}", params.take_profit_ticks);
            println!("Stop loss ticks:   {}", params.stop_loss_ticks);
            println!("Use MFI/RSI:       {}", params.use_mfi_rsi);
            println!("Configuration is valid.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            (&e).into()
        }
    }
}

fn run_list_symbols(data: PathBuf) -> ExitCode {
    match CsvAdapter::new(data).list_symbols() {
        Ok(symbols) => {
            for symbol in &symbols {
                println!("{}", symbol);
            }
            info!(count = symbols.len(), "symbols found");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            (&e).into()
        }
    }
}
