//! Quote records, series, and sampling intervals.

use chrono::{Datelike, NaiveDate, Weekday};

/// One period's price record. Either price may be absent; a quote missing
/// `open` or `close` is unusable for decision math and is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl Quote {
    /// close/open, or None when either price is absent or open is zero.
    pub fn ratio(&self) -> Option<f64> {
        match (self.open, self.close) {
            (Some(open), Some(close)) if open != 0.0 => Some(close / open),
            _ => None,
        }
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Ordered quote history for one symbol, chronological ascending.
/// Read-only to all core components once fetched.
#[derive(Debug, Clone)]
pub struct QuoteSeries {
    pub symbol: String,
    pub quotes: Vec<Quote>,
}

impl QuoteSeries {
    pub fn new(symbol: String, quotes: Vec<Quote>) -> Self {
        Self { symbol, quotes }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Sampling granularity of a quote request. The first four are the
/// intraday choices the search may reassign; `OneDay` is the daily fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneDay,
}

impl Interval {
    pub const INTRADAY: [Interval; 4] = [
        Interval::OneMinute,
        Interval::FiveMinutes,
        Interval::FifteenMinutes,
        Interval::ThirtyMinutes,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::ThirtyMinutes => "30m",
            Interval::OneDay => "1d",
        }
    }

    pub fn parse(s: &str) -> Option<Interval> {
        match s {
            "1m" => Some(Interval::OneMinute),
            "5m" => Some(Interval::FiveMinutes),
            "15m" => Some(Interval::FifteenMinutes),
            "30m" => Some(Interval::ThirtyMinutes),
            "1d" => Some(Interval::OneDay),
            _ => None,
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote() -> Quote {
        Quote {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            open: Some(100.0),
            close: Some(105.0),
            volume: Some(50_000.0),
        }
    }

    #[test]
    fn ratio_both_prices_present() {
        let quote = sample_quote();
        assert!((quote.ratio().unwrap() - 1.05).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_missing_open() {
        let quote = Quote {
            open: None,
            ..sample_quote()
        };
        assert!(quote.ratio().is_none());
    }

    #[test]
    fn ratio_missing_close() {
        let quote = Quote {
            close: None,
            ..sample_quote()
        };
        assert!(quote.ratio().is_none());
    }

    #[test]
    fn ratio_zero_open() {
        let quote = Quote {
            open: Some(0.0),
            ..sample_quote()
        };
        assert!(quote.ratio().is_none());
    }

    #[test]
    fn weekend_detection() {
        // 2024-01-13 is a Saturday, 2024-01-14 a Sunday, 2024-01-15 a Monday.
        let saturday = Quote {
            date: NaiveDate::from_ymd_opt(2024, 1, 13).unwrap(),
            ..sample_quote()
        };
        let sunday = Quote {
            date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            ..sample_quote()
        };
        let monday = sample_quote();
        assert!(saturday.is_weekend());
        assert!(sunday.is_weekend());
        assert!(!monday.is_weekend());
    }

    #[test]
    fn interval_codes_round_trip() {
        for interval in [
            Interval::OneMinute,
            Interval::FiveMinutes,
            Interval::FifteenMinutes,
            Interval::ThirtyMinutes,
            Interval::OneDay,
        ] {
            assert_eq!(Interval::parse(interval.code()), Some(interval));
        }
        assert_eq!(Interval::parse("2h"), None);
    }

    #[test]
    fn intraday_set_excludes_daily() {
        assert!(!Interval::INTRADAY.contains(&Interval::OneDay));
        assert_eq!(Interval::INTRADAY.len(), 4);
    }

    #[test]
    fn series_len() {
        let series = QuoteSeries::new("AAPL".into(), vec![sample_quote()]);
        assert_eq!(series.len(), 1);
        assert!(!series.is_empty());
    }
}
