//! Stochastic hill-climbing search driver.
//!
//! A single random trajectory: each trial evaluates the current candidate,
//! updates the best-seen bookkeeping, and mutates the candidate that was
//! just evaluated — not the incumbent best. The evaluator is injected so
//! the loop is testable without any quote data.

use rand::Rng;

use crate::domain::candidate::Candidate;
use crate::domain::mutation::MutationPlan;
use crate::ports::progress_port::ProgressPort;

/// Search bookkeeping, threaded through the loop as an explicit value.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub best: Option<(Candidate, f64)>,
    pub current: Candidate,
}

impl SearchState {
    pub fn new(initial: Candidate) -> Self {
        SearchState {
            best: None,
            current: initial,
        }
    }

    /// Record a fitness for the current candidate. Strict greater-than: a
    /// tie never replaces the incumbent. Returns whether best changed.
    pub fn record(&mut self, fitness: f64) -> bool {
        let improved = match &self.best {
            None => true,
            Some((_, best_fitness)) => fitness > *best_fitness,
        };
        if improved {
            self.best = Some((self.current.clone(), fitness));
        }
        improved
    }

    pub fn best_fitness(&self) -> Option<f64> {
        self.best.as_ref().map(|(_, fitness)| *fitness)
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best_candidate: Candidate,
    pub best_fitness: f64,
    pub trials_run: usize,
}

/// Run the full trial budget. No early termination, no convergence check.
/// With a zero budget the outcome falls back to the initial candidate and
/// fitness 0.
pub fn run_search<E, R>(
    initial: Candidate,
    trials: usize,
    plan: &MutationPlan,
    mut evaluate: E,
    rng: &mut R,
    progress: &dyn ProgressPort,
) -> SearchOutcome
where
    E: FnMut(&Candidate) -> f64,
    R: Rng,
{
    let mut state = SearchState::new(initial.clone());

    for trial in 0..trials {
        let fitness = evaluate(&state.current);
        state.record(fitness);
        progress.trial(trial, &state.current, fitness, state.best_fitness());

        // The walk continues from the candidate just evaluated, whether or
        // not it became the best.
        state.current = plan.mutate(&state.current, rng);
    }

    let (best_candidate, best_fitness) = match state.best {
        Some(best) => best,
        None => (initial, 0.0),
    };
    progress.complete(&best_candidate, best_fitness);

    SearchOutcome {
        best_candidate,
        best_fitness,
        trials_run: trials,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mutation::MutationOp;
    use crate::ports::progress_port::NullProgress;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Plan with one certain operator, for deterministic trajectories.
    fn bump_only_plan() -> MutationPlan {
        MutationPlan::new(vec![(1.0, MutationOp::BumpTrendLength)])
    }

    #[test]
    fn record_first_fitness_always_wins() {
        let mut state = SearchState::new(Candidate::daily());
        assert!(state.record(-5.0));
        assert_eq!(state.best_fitness(), Some(-5.0));
    }

    #[test]
    fn record_tie_keeps_incumbent() {
        let mut state = SearchState::new(Candidate::daily());
        state.record(0.1);
        let incumbent = state.best.clone().unwrap().0;

        state.current.trend_length = 99;
        assert!(!state.record(0.1));
        assert_eq!(state.best.unwrap().0, incumbent);
    }

    #[test]
    fn best_is_monotone_nondecreasing() {
        let scores = [0.1, -0.3, 0.05, 0.4, 0.4, 0.2, 0.7];
        let mut state = SearchState::new(Candidate::daily());
        let mut last_best = f64::NEG_INFINITY;
        for score in scores {
            state.record(score);
            let best = state.best_fitness().unwrap();
            assert!(best >= last_best);
            last_best = best;
        }
        assert_eq!(last_best, 0.7);
    }

    #[test]
    fn search_keeps_best_candidate_not_last() {
        // Scores peak in the middle of the trajectory.
        let scores = RefCell::new(vec![0.1, 0.9, 0.2, 0.3].into_iter());
        let outcome = run_search(
            Candidate::daily(),
            4,
            &bump_only_plan(),
            |_| scores.borrow_mut().next().unwrap_or(0.0),
            &mut rng(),
            &NullProgress,
        );

        assert_eq!(outcome.trials_run, 4);
        assert!((outcome.best_fitness - 0.9).abs() < f64::EPSILON);
        // The best candidate was the second evaluated: one bump applied.
        assert_eq!(outcome.best_candidate.trend_length, 6);
    }

    #[test]
    fn mutates_previous_candidate_not_best() {
        // The first candidate scores highest, yet the trajectory keeps
        // bumping trend_length away from it.
        let seen = RefCell::new(Vec::new());
        let outcome = run_search(
            Candidate::daily(),
            4,
            &bump_only_plan(),
            |c: &Candidate| {
                seen.borrow_mut().push(c.trend_length);
                -(c.trend_length as f64)
            },
            &mut rng(),
            &NullProgress,
        );

        assert_eq!(*seen.borrow(), vec![5, 6, 7, 8]);
        assert_eq!(outcome.best_candidate.trend_length, 5);
    }

    #[test]
    fn zero_trials_falls_back_to_initial() {
        let calls = RefCell::new(0usize);
        let outcome = run_search(
            Candidate::daily(),
            0,
            &bump_only_plan(),
            |_| {
                *calls.borrow_mut() += 1;
                1.0
            },
            &mut rng(),
            &NullProgress,
        );

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(outcome.best_candidate, Candidate::daily());
        assert_eq!(outcome.best_fitness, 0.0);
    }

    #[test]
    fn negative_scores_still_tracked() {
        let scores = RefCell::new(vec![-0.5, -0.2, -0.9].into_iter());
        let outcome = run_search(
            Candidate::daily(),
            3,
            &bump_only_plan(),
            |_| scores.borrow_mut().next().unwrap_or(0.0),
            &mut rng(),
            &NullProgress,
        );
        assert!((outcome.best_fitness - (-0.2)).abs() < f64::EPSILON);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let plan = MutationPlan::daily();
        let evaluate = |c: &Candidate| c.buy_threshold * 1000.0 - c.trend_length as f64;

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = run_search(Candidate::daily(), 50, &plan, evaluate, &mut rng_a, &NullProgress);
        let b = run_search(Candidate::daily(), 50, &plan, evaluate, &mut rng_b, &NullProgress);

        assert_eq!(a.best_candidate, b.best_candidate);
        assert_eq!(a.best_fitness, b.best_fitness);
    }
}
