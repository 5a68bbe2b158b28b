//! Console progress adapter: trial chatter to stderr, results to stdout.

use crate::domain::candidate::Candidate;
use crate::ports::progress_port::ProgressPort;

pub struct ConsoleProgress;

impl ProgressPort for ConsoleProgress {
    fn trial(&self, number: usize, candidate: &Candidate, fitness: f64, best_fitness: Option<f64>) {
        eprintln!("Trial {number}: {candidate}");
        match best_fitness {
            Some(best) => eprintln!("  fitness {fitness:.6} vs. best {best:.6}"),
            None => eprintln!("  fitness {fitness:.6}"),
        }
    }

    fn complete(&self, best: &Candidate, best_fitness: f64) {
        println!("-------------------------");
        println!("Best candidate: {best}");
        println!("Best fitness: {best_fitness:.6}");
    }

    fn benchmark(&self, symbol: &str, change: f64) {
        println!("{symbol} buy-and-hold change: {change:.6}");
    }
}
