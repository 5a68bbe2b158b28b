//! Core domain types and logic.

pub mod quote;
pub mod candidate;
pub mod policy;
pub mod simulator;
pub mod evaluator;
pub mod mutation;
pub mod search;
pub mod watchlist;
pub mod config_validation;
pub mod error;
