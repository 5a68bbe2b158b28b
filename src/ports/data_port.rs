//! Market-data access port trait.

use chrono::NaiveDate;

use crate::domain::error::TrendclimbError;
use crate::domain::quote::{Interval, Quote};

/// Boundary to the historical market-data provider. Implementations return
/// quotes chronological ascending; a failed fetch is recoverable at the
/// watchlist level.
pub trait QuotePort {
    fn fetch_quotes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
        interval: Interval,
    ) -> Result<Vec<Quote>, TrendclimbError>;

    fn list_symbols(&self) -> Result<Vec<String>, TrendclimbError>;
}
