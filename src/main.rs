use clap::Parser;
use trendclimb::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
