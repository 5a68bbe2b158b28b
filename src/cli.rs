//! CLI definition and dispatch.

use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::console_progress::ConsoleProgress;
use crate::adapters::csv_adapter::CsvQuoteAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::candidate::{
    Candidate, INITIAL_BUY_THRESHOLD, INITIAL_SELL_THRESHOLD, INITIAL_TREND_LENGTH,
};
use crate::domain::config_validation::validate_run_config;
use crate::domain::error::TrendclimbError;
use crate::domain::evaluator;
use crate::domain::mutation::MutationPlan;
use crate::domain::quote::{Interval, QuoteSeries};
use crate::domain::search::{run_search, SearchOutcome};
use crate::domain::watchlist::{gather_series, parse_symbols};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::QuotePort;
use crate::ports::progress_port::ProgressPort;

#[derive(Parser, Debug)]
#[command(
    name = "trendclimb",
    about = "Hill-climbing parameter search for a trailing-trend trading rule"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the parameter search
    Search {
        #[arg(short, long)]
        config: PathBuf,
        /// Override [search] trials
        #[arg(long)]
        trials: Option<usize>,
        /// Override [search] symbols (comma-separated)
        #[arg(long)]
        symbols: Option<String>,
        /// Override [search] seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List symbols with quote files available
    ListSymbols {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate a run configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Search {
            config,
            trials,
            symbols,
            seed,
        } => run_search_command(&config, trials, symbols.as_deref(), seed),
        Command::ListSymbols { config } => run_list_symbols(&config),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TrendclimbError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Resolved startup parameters for one search run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub quotes_path: PathBuf,
    pub trials: usize,
    pub lookback_days: i64,
    pub symbols: Vec<String>,
    pub intraday: bool,
    pub seed: Option<u64>,
    pub benchmark: Option<String>,
    pub initial: Candidate,
}

/// Build a `RunConfig` from validated configuration. Callers run
/// `validate_run_config` first; this only resolves values and defaults.
pub fn build_run_config(adapter: &dyn ConfigPort) -> Result<RunConfig, TrendclimbError> {
    let quotes_path = adapter.get_string("data", "quotes_path").ok_or_else(|| {
        TrendclimbError::ConfigMissing {
            section: "data".to_string(),
            key: "quotes_path".to_string(),
        }
    })?;

    let symbols_str = adapter.get_string("search", "symbols").ok_or_else(|| {
        TrendclimbError::ConfigMissing {
            section: "search".to_string(),
            key: "symbols".to_string(),
        }
    })?;
    let symbols = parse_symbols(&symbols_str).map_err(|e| TrendclimbError::ConfigInvalid {
        section: "search".to_string(),
        key: "symbols".to_string(),
        reason: e.to_string(),
    })?;

    let seed = match adapter.get_string("search", "seed") {
        None => None,
        Some(s) => Some(s.trim().parse::<u64>().map_err(|_| {
            TrendclimbError::ConfigInvalid {
                section: "search".to_string(),
                key: "seed".to_string(),
                reason: "seed must be a non-negative integer".to_string(),
            }
        })?),
    };

    let intraday = adapter.get_bool("search", "intraday", false);

    Ok(RunConfig {
        quotes_path: PathBuf::from(quotes_path),
        trials: adapter.get_int("search", "trials", 5000).max(0) as usize,
        lookback_days: adapter.get_int("search", "lookback_days", 365 * 3),
        symbols,
        intraday,
        seed,
        benchmark: adapter.get_string("search", "benchmark"),
        initial: build_initial_candidate(adapter, intraday),
    })
}

/// Initial candidate: reference defaults, overridable via `[candidate]`.
pub fn build_initial_candidate(adapter: &dyn ConfigPort, intraday: bool) -> Candidate {
    let base = if intraday {
        Candidate::intraday()
    } else {
        Candidate::daily()
    };
    Candidate {
        trend_length: adapter
            .get_int("candidate", "trend_length", INITIAL_TREND_LENGTH as i64)
            .max(1) as usize,
        buy_threshold: adapter.get_float("candidate", "buy_threshold", INITIAL_BUY_THRESHOLD),
        sell_threshold: adapter.get_float("candidate", "sell_threshold", INITIAL_SELL_THRESHOLD),
        ..base
    }
}

fn run_search_command(
    config_path: &PathBuf,
    trials_override: Option<usize>,
    symbols_override: Option<&str>,
    seed_override: Option<u64>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_run_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let mut run_config = match build_run_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if let Some(trials) = trials_override {
        run_config.trials = trials;
    }
    if let Some(seed) = seed_override {
        run_config.seed = Some(seed);
    }
    if let Some(symbols) = symbols_override {
        run_config.symbols = match parse_symbols(symbols) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: invalid --symbols: {e}");
                return ExitCode::from(2);
            }
        };
    }

    let quote_port = CsvQuoteAdapter::new(run_config.quotes_path.clone());
    let progress = ConsoleProgress;

    match execute_search(&run_config, &quote_port, &progress) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// The full search pipeline: one-time data fetch, then the trial loop.
/// Everything the loop consumes is in memory before it starts.
pub fn execute_search(
    run_config: &RunConfig,
    quote_port: &dyn QuotePort,
    progress: &dyn ProgressPort,
) -> Result<SearchOutcome, TrendclimbError> {
    let end = Local::now().date_naive();
    let start = end - Duration::days(run_config.lookback_days);
    eprintln!(
        "Fetching quotes for {} symbols, {} to {}",
        run_config.symbols.len(),
        start,
        end
    );

    let series_by_interval = fetch_all_series(run_config, quote_port, start, end)?;
    let skip_weekends = !run_config.intraday;

    let plan = if run_config.intraday {
        MutationPlan::intraday()
    } else {
        MutationPlan::daily()
    };

    let mut rng = match run_config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let evaluate = |candidate: &Candidate| match series_by_interval.get(&candidate.fetch_interval())
    {
        Some(set) => evaluator::evaluate(set, candidate, skip_weekends),
        None => 0.0,
    };

    let outcome = run_search(
        run_config.initial.clone(),
        run_config.trials,
        &plan,
        evaluate,
        &mut rng,
        progress,
    );

    if let Some(symbol) = &run_config.benchmark {
        report_benchmark(quote_port, symbol, start, end, progress);
    }

    Ok(outcome)
}

/// Fetch every series the search can reach. Daily runs need one interval;
/// intraday runs pre-fetch all four so interval reassignment during the
/// search never touches the data source.
fn fetch_all_series(
    run_config: &RunConfig,
    quote_port: &dyn QuotePort,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<HashMap<Interval, Vec<QuoteSeries>>, TrendclimbError> {
    let intervals: &[Interval] = if run_config.intraday {
        &Interval::INTRADAY
    } else {
        &[Interval::OneDay]
    };

    let mut series_by_interval = HashMap::new();
    for &interval in intervals {
        match gather_series(quote_port, &run_config.symbols, start, end, interval) {
            Ok(set) => {
                series_by_interval.insert(interval, set);
            }
            Err(e) => {
                eprintln!("Warning: no usable data at interval {interval} ({e})");
            }
        }
    }

    if series_by_interval.is_empty() {
        return Err(TrendclimbError::EmptyWatchlist);
    }
    Ok(series_by_interval)
}

fn report_benchmark(
    quote_port: &dyn QuotePort,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
    progress: &dyn ProgressPort,
) {
    match quote_port.fetch_quotes(symbol, start, end, Interval::OneDay) {
        Ok(quotes) => {
            let series = QuoteSeries::new(symbol.to_string(), quotes);
            match evaluator::benchmark_change(&series) {
                Some(change) => progress.benchmark(symbol, change),
                None => eprintln!("Warning: benchmark {symbol} has no usable prices"),
            }
        }
        Err(e) => eprintln!("Warning: benchmark {symbol} unavailable ({e})"),
    }
}

fn run_list_symbols(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let quotes_path = match adapter.get_string("data", "quotes_path") {
        Some(p) => PathBuf::from(p),
        None => {
            let err = TrendclimbError::ConfigMissing {
                section: "data".to_string(),
                key: "quotes_path".to_string(),
            };
            eprintln!("error: {err}");
            return ExitCode::from(&err);
        }
    };

    let quote_port = CsvQuoteAdapter::new(quotes_path);
    match quote_port.list_symbols() {
        Ok(symbols) => {
            for symbol in symbols {
                println!("{symbol}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    match validate_run_config(&adapter) {
        Ok(()) => {
            println!("OK");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
