//! trendtrader: single-instrument trend-following strategy.
//!
//! Hexagonal architecture: the decision engine and its host live in
//! [`domain`], collaborator traits in [`ports`], concrete implementations in
//! [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
