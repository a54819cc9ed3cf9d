//! Replay driver: runs a recorded bar series through a [`TrendStrategy`].
//!
//! The first bar carries the run's first tick; bar updates start from the
//! second bar.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::bar::Bar;
use crate::domain::engine::EngineState;
use crate::domain::intent::Intent;
use crate::domain::position::PositionSide;
use crate::domain::strategy::TrendStrategy;
use crate::domain::trend::Trend;
use crate::ports::display_port::LabelDisplay;
use crate::ports::gateway_port::ReplayGateway;
use crate::ports::trend_port::TrendClassifier;

/// Replay inputs resolved from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayConfig {
    pub data_path: String,
    pub symbol: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// What the strategy saw and emitted on one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRecord {
    pub index: usize,
    pub date: NaiveDate,
    pub trend: Trend,
    pub position: PositionSide,
    pub intents: Vec<Intent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub bars: usize,
    pub long_entries: usize,
    pub short_entries: usize,
    pub stop_rearms: usize,
    pub profit_targets: usize,
}

impl ReplaySummary {
    pub fn from_records(records: &[BarRecord]) -> Self {
        let mut summary = ReplaySummary {
            bars: records.len(),
            ..ReplaySummary::default()
        };
        for intent in records.iter().flat_map(|r| r.intents.iter()) {
            match intent {
                Intent::EnterLong => summary.long_entries += 1,
                Intent::EnterShort => summary.short_entries += 1,
                Intent::SetStopLoss(_) => summary.stop_rearms += 1,
                Intent::SetProfitTarget(_) => summary.profit_targets += 1,
                Intent::ShowTrend(_) => {}
            }
        }
        summary
    }
}

#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub records: Vec<BarRecord>,
    pub final_state: EngineState,
    pub summary: ReplaySummary,
}

pub fn run_replay<C, G, D>(strategy: &mut TrendStrategy<C, G, D>, bars: &[Bar]) -> ReplayResult
where
    C: TrendClassifier,
    G: ReplayGateway,
    D: LabelDisplay,
{
    let mut records = Vec::with_capacity(bars.len());

    for (index, bar) in bars.iter().enumerate() {
        strategy.gateway_mut().observe(bar);
        let trend = strategy.trend_for(bar);
        let position = strategy.current_position();

        let mut intents = Vec::new();
        if index == 0 && !strategy.state().initial_position_entered {
            intents.extend(strategy.first_tick(bar));
        }
        intents.extend(strategy.bar_update(index, bar));

        debug!(index, date = %bar.date, %trend, %position, emitted = intents.len(), "bar replayed");
        records.push(BarRecord {
            index,
            date: bar.date,
            trend,
            position,
            intents,
        });
    }

    let summary = ReplaySummary::from_records(&records);
    info!(
        bars = summary.bars,
        long_entries = summary.long_entries,
        short_entries = summary.short_entries,
        stop_rearms = summary.stop_rearms,
        "replay finished"
    );

    ReplayResult {
        records,
        final_state: strategy.state().clone(),
        summary,
    }
}
