//! Port traits: the narrow interfaces the strategy consumes.

pub mod config_port;
pub mod data_port;
pub mod display_port;
pub mod gateway_port;
pub mod report_port;
pub mod trend_port;
