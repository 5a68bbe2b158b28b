//! Run-configuration validation.
//!
//! Every field is checked before any data is fetched, so an invalid
//! parameter can never reach the mutation or simulation code.

use crate::domain::candidate::{
    INITIAL_BUY_THRESHOLD, INITIAL_SELL_THRESHOLD, INITIAL_TREND_LENGTH,
};
use crate::domain::error::TrendclimbError;
use crate::domain::watchlist::parse_symbols;
use crate::ports::config_port::ConfigPort;

pub fn validate_run_config(config: &dyn ConfigPort) -> Result<(), TrendclimbError> {
    validate_quotes_path(config)?;
    validate_trials(config)?;
    validate_lookback(config)?;
    validate_symbols(config)?;
    validate_seed(config)?;
    validate_candidate(config)?;
    Ok(())
}

fn invalid(section: &str, key: &str, reason: &str) -> TrendclimbError {
    TrendclimbError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_quotes_path(config: &dyn ConfigPort) -> Result<(), TrendclimbError> {
    match config.get_string("data", "quotes_path") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(TrendclimbError::ConfigMissing {
            section: "data".to_string(),
            key: "quotes_path".to_string(),
        }),
    }
}

fn validate_trials(config: &dyn ConfigPort) -> Result<(), TrendclimbError> {
    let value = config.get_int("search", "trials", 5000);
    if value < 1 {
        return Err(invalid("search", "trials", "trials must be at least 1"));
    }
    Ok(())
}

fn validate_lookback(config: &dyn ConfigPort) -> Result<(), TrendclimbError> {
    let value = config.get_int("search", "lookback_days", 1095);
    if value < 1 {
        return Err(invalid(
            "search",
            "lookback_days",
            "lookback_days must be at least 1",
        ));
    }
    Ok(())
}

fn validate_symbols(config: &dyn ConfigPort) -> Result<(), TrendclimbError> {
    let symbols = match config.get_string("search", "symbols") {
        Some(s) if !s.trim().is_empty() => s,
        _ => {
            return Err(TrendclimbError::ConfigMissing {
                section: "search".to_string(),
                key: "symbols".to_string(),
            })
        }
    };
    parse_symbols(&symbols).map_err(|e| invalid("search", "symbols", &e.to_string()))?;
    Ok(())
}

fn validate_seed(config: &dyn ConfigPort) -> Result<(), TrendclimbError> {
    match config.get_string("search", "seed") {
        None => Ok(()),
        Some(s) => match s.trim().parse::<u64>() {
            Ok(_) => Ok(()),
            Err(_) => Err(invalid(
                "search",
                "seed",
                "seed must be a non-negative integer",
            )),
        },
    }
}

fn validate_candidate(config: &dyn ConfigPort) -> Result<(), TrendclimbError> {
    let trend_length = config.get_int("candidate", "trend_length", INITIAL_TREND_LENGTH as i64);
    if trend_length < 1 {
        return Err(invalid(
            "candidate",
            "trend_length",
            "trend_length must be at least 1",
        ));
    }

    let buy = config.get_float("candidate", "buy_threshold", INITIAL_BUY_THRESHOLD);
    let sell = config.get_float("candidate", "sell_threshold", INITIAL_SELL_THRESHOLD);
    if sell >= buy {
        return Err(invalid(
            "candidate",
            "sell_threshold",
            "sell_threshold must be below buy_threshold",
        ));
    }
    Ok(())
}
