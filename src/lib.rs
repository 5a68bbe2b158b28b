//! trendclimb — stochastic hill-climbing optimizer for a trailing-trend
//! trading rule, scored by backtest over historical quote series.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
