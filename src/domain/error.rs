//! Domain error types.

/// Top-level error type for trendclimb.
///
/// Per-period problems (missing prices, weekend dates) are not errors;
/// they surface as skip outcomes in the simulator. Everything here is
/// fatal to the run and occurs before the search loop starts.
#[derive(Debug, thiserror::Error)]
pub enum TrendclimbError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no quotes for {symbol}")]
    NoData { symbol: String },

    #[error("insufficient quotes for {symbol}: have {periods}, need {minimum}")]
    InsufficientData {
        symbol: String,
        periods: usize,
        minimum: usize,
    },

    #[error("no usable symbols in watchlist")]
    EmptyWatchlist,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TrendclimbError> for std::process::ExitCode {
    fn from(err: &TrendclimbError) -> Self {
        let code: u8 = match err {
            TrendclimbError::Io(_) => 1,
            TrendclimbError::ConfigParse { .. }
            | TrendclimbError::ConfigMissing { .. }
            | TrendclimbError::ConfigInvalid { .. } => 2,
            TrendclimbError::Data { .. } => 3,
            TrendclimbError::NoData { .. }
            | TrendclimbError::InsufficientData { .. }
            | TrendclimbError::EmptyWatchlist => 4,
        };
        std::process::ExitCode::from(code)
    }
}
