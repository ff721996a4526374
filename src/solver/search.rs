//! Search driver
//!
//! Repeats propose → judge → filter until the judge reports an all-exact
//! pattern, backtracking over earlier guesses when a branch dead-ends.
//!
//! Every guess the driver has tried stays tried for the rest of the session,
//! so the number of steps is bounded by the dictionary size.

use super::{AdaptiveProposer, GuessProposer, SearchBudget, SearchConfig, SolverState};
use crate::core::{Dictionary, Pattern, WordId};
use crate::error::SolveError;
use log::{debug, info, trace, warn};
use rustc_hash::FxHashSet;
use std::time::Instant;

/// Where the search stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Searching,
    Solved,
    Exhausted,
}

/// One accepted guess and the pattern the judge reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: WordId,
    pub pattern: Pattern,
    /// Candidates left after this step
    pub remaining: usize,
}

/// A guess in a finished solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionStep {
    pub guess: String,
    pub pattern: Pattern,
    pub remaining: usize,
}

/// Guess sequence that forces the judge onto the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub target: String,
    pub steps: Vec<SolutionStep>,
}

impl Solution {
    /// Number of guesses, including the final one
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Counters describing how a search went
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Driver iterations
    pub steps: usize,
    /// History entries popped
    pub backtracks: usize,
    /// Proposals dropped without advancing (no response, contradiction, stall)
    pub discarded: usize,
}

/// Result of [`SearchDriver::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    /// Every branch was tried; no guess sequence reaches the target
    Exhausted,
    /// The caller's budget ran out first
    BudgetExceeded,
}

/// Incremental backtracking search for one target
pub struct SearchDriver<'d, P: GuessProposer> {
    proposer: P,
    state: SolverState<'d>,
    history: Vec<HistoryEntry>,
    tried: FxHashSet<WordId>,
    status: SearchStatus,
    stats: SearchStats,
}

impl<'d> SearchDriver<'d, AdaptiveProposer> {
    /// Driver using the adaptive proposer configured by `config`
    ///
    /// # Errors
    /// Returns a `SolveError` if the target or dictionary is unusable.
    pub fn with_config(
        dictionary: &'d Dictionary,
        target: &str,
        config: &SearchConfig,
    ) -> Result<Self, SolveError> {
        Self::new(dictionary, target, AdaptiveProposer::new(config))
    }
}

impl<'d, P: GuessProposer> SearchDriver<'d, P> {
    /// # Errors
    /// Returns a `SolveError` if the target or dictionary is unusable.
    pub fn new(dictionary: &'d Dictionary, target: &str, proposer: P) -> Result<Self, SolveError> {
        Ok(Self {
            proposer,
            state: SolverState::new(dictionary, target)?,
            history: Vec::new(),
            tried: FxHashSet::default(),
            status: SearchStatus::Searching,
            stats: SearchStats::default(),
        })
    }

    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub const fn state(&self) -> &SolverState<'d> {
        &self.state
    }

    /// Guesses tried so far across all branches
    #[must_use]
    pub const fn tried(&self) -> &FxHashSet<WordId> {
        &self.tried
    }

    /// Perform one propose/judge/filter cycle
    ///
    /// Does nothing once the search has finished.
    pub fn step(&mut self) -> SearchStatus {
        if self.status != SearchStatus::Searching {
            return self.status;
        }
        self.stats.steps += 1;

        let guess = match self.proposer.propose(&mut self.state) {
            Some(guess) if !self.tried.contains(&guess) => guess,
            proposal => {
                trace!(
                    "dead end at depth {} ({})",
                    self.history.len(),
                    if proposal.is_some() { "repeat" } else { "no guess" }
                );
                self.backtrack();
                return self.status;
            }
        };
        self.tried.insert(guess);

        let dictionary = self.state.dictionary();
        let Some(response) = self.state.respond(guess) else {
            trace!("no admissible response to {}", dictionary.word(guess));
            self.stats.discarded += 1;
            return self.status;
        };

        let before = self.state.possible_count();
        if !response.pattern.is_perfect() && response.remaining >= before {
            trace!("{} does not narrow {before} candidates", dictionary.word(guess));
            self.stats.discarded += 1;
            return self.status;
        }

        let remaining = match self.state.apply(guess, response.pattern) {
            Ok(remaining) => remaining,
            Err(contradiction) => {
                debug!("{contradiction}");
                self.stats.discarded += 1;
                return self.status;
            }
        };

        debug!(
            "{} -> {} ({before} -> {remaining} candidates)",
            dictionary.word(guess),
            response.pattern
        );
        self.history.push(HistoryEntry {
            guess,
            pattern: response.pattern,
            remaining,
        });

        if response.pattern.is_perfect() {
            self.status = SearchStatus::Solved;
        }
        self.status
    }

    /// Step until the search finishes or `budget` is spent
    pub fn run(&mut self, budget: &SearchBudget) -> SearchOutcome {
        let started = Instant::now();
        let mut steps = 0;

        while self.status == SearchStatus::Searching {
            if budget.is_spent(steps, started.elapsed()) {
                info!(
                    "search for '{}' stopped after {steps} steps",
                    self.state.target_word()
                );
                return SearchOutcome::BudgetExceeded;
            }
            self.step();
            steps += 1;
        }

        match self.solution() {
            Some(solution) => {
                info!(
                    "solved '{}' in {} guesses ({} steps, {} backtracks)",
                    solution.target,
                    solution.len(),
                    self.stats.steps,
                    self.stats.backtracks
                );
                SearchOutcome::Solved(solution)
            }
            None => {
                info!(
                    "no solution for '{}' after {} steps",
                    self.state.target_word(),
                    self.stats.steps
                );
                SearchOutcome::Exhausted
            }
        }
    }

    /// The history as a solution, once solved
    #[must_use]
    pub fn solution(&self) -> Option<Solution> {
        if self.status != SearchStatus::Solved {
            return None;
        }
        let dictionary = self.state.dictionary();
        Some(Solution {
            target: self.state.target_word().text().to_string(),
            steps: self
                .history
                .iter()
                .map(|entry| SolutionStep {
                    guess: dictionary.word(entry.guess).text().to_string(),
                    pattern: entry.pattern,
                    remaining: entry.remaining,
                })
                .collect(),
        })
    }

    /// Undo the last accepted guess and rebuild the state from the remaining history
    fn backtrack(&mut self) {
        let Some(popped) = self.history.pop() else {
            self.status = SearchStatus::Exhausted;
            return;
        };
        self.stats.backtracks += 1;
        debug!(
            "backtracking over {} at depth {}",
            self.state.dictionary().word(popped.guess),
            self.history.len() + 1
        );

        let mut state = self.state.restart().with_guessed(self.tried.clone());
        for entry in &self.history {
            if let Err(contradiction) = state.apply(entry.guess, entry.pattern) {
                // History entries were all accepted once, so replay cannot contradict
                warn!("history replay failed: {contradiction}");
                self.status = SearchStatus::Exhausted;
                return;
            }
        }
        self.state = state;
    }
}

/// Search for a guess sequence that forces the judge onto `target`
///
/// # Errors
/// Returns a `SolveError` if the target or dictionary is unusable. An
/// unsolvable target is `Ok(SearchOutcome::Exhausted)`.
///
/// # Examples
/// ```
/// use absurdle_solver::core::Dictionary;
/// use absurdle_solver::solver::{SearchBudget, SearchConfig, SearchOutcome, find_solution};
///
/// let dict = Dictionary::new(["abcd", "abce", "wxyz", "abcf"], 4);
/// let outcome = find_solution(&dict, "abcd", &SearchConfig::default(), &SearchBudget::unlimited())
///     .unwrap();
///
/// let SearchOutcome::Solved(solution) = outcome else { panic!("expected a solution") };
/// assert_eq!(solution.steps.last().unwrap().guess, "abcd");
/// assert!(solution.steps.last().unwrap().pattern.is_perfect());
/// ```
pub fn find_solution(
    dictionary: &Dictionary,
    target: &str,
    config: &SearchConfig,
    budget: &SearchBudget,
) -> Result<SearchOutcome, SolveError> {
    let mut driver = SearchDriver::with_config(dictionary, target, config)?;
    Ok(driver.run(budget))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Plays a fixed list of guesses, then gives up
    struct Scripted {
        moves: VecDeque<WordId>,
    }

    impl Scripted {
        fn new(dict: &Dictionary, words: &[&str]) -> Self {
            Self {
                moves: words.iter().map(|w| dict.id_of(w).unwrap()).collect(),
            }
        }
    }

    impl GuessProposer for Scripted {
        fn propose(&mut self, state: &mut SolverState<'_>) -> Option<WordId> {
            let guess = self.moves.pop_front()?;
            state.mark_guessed(guess);
            Some(guess)
        }
    }

    fn dictionary() -> Dictionary {
        Dictionary::new(["abcd", "abce", "wxyz", "abcf"], 4)
    }

    fn texts(dict: &Dictionary, history: &[HistoryEntry]) -> Vec<(String, String)> {
        history
            .iter()
            .map(|e| (dict.word(e.guess).text().to_string(), e.pattern.to_string()))
            .collect()
    }

    #[test]
    fn solves_small_dictionary() {
        let dict = dictionary();
        let mut driver = SearchDriver::with_config(&dict, "abcd", &SearchConfig::default()).unwrap();

        let outcome = driver.run(&SearchBudget::unlimited());
        assert_eq!(driver.status(), SearchStatus::Solved);
        assert_eq!(
            texts(&dict, driver.history()),
            vec![
                ("abce".to_string(), "2220".to_string()),
                ("abcf".to_string(), "2220".to_string()),
                ("abcd".to_string(), "2222".to_string()),
            ]
        );
        assert_eq!(driver.stats().steps, 3);
        assert_eq!(driver.stats().backtracks, 0);

        let SearchOutcome::Solved(solution) = outcome else {
            panic!("expected a solution, got {outcome:?}");
        };
        assert_eq!(solution.target, "abcd");
        assert_eq!(
            solution.steps.iter().map(|s| s.remaining).collect::<Vec<_>>(),
            vec![2, 1, 1]
        );
    }

    #[test]
    fn step_is_a_no_op_once_finished() {
        let dict = dictionary();
        let mut driver = SearchDriver::with_config(&dict, "abcd", &SearchConfig::default()).unwrap();
        driver.run(&SearchBudget::unlimited());

        let stats = driver.stats();
        assert_eq!(driver.step(), SearchStatus::Solved);
        assert_eq!(driver.stats(), stats);
    }

    #[test]
    fn no_guess_on_empty_history_exhausts() {
        let dict = dictionary();
        let mut driver = SearchDriver::new(&dict, "abcd", Scripted::new(&dict, &[])).unwrap();

        assert_eq!(driver.run(&SearchBudget::unlimited()), SearchOutcome::Exhausted);
        assert_eq!(driver.stats().steps, 1);
        assert_eq!(driver.stats().backtracks, 0);
        assert!(driver.solution().is_none());
    }

    #[test]
    fn backtrack_restores_candidates_and_keeps_tried() {
        let dict = dictionary();
        let abce = dict.id_of("abce").unwrap();
        let mut driver = SearchDriver::new(&dict, "abcd", Scripted::new(&dict, &["abce"])).unwrap();

        assert_eq!(driver.step(), SearchStatus::Searching);
        assert_eq!(driver.state().possible_count(), 2);

        // Script is spent: pop abce and start over
        assert_eq!(driver.step(), SearchStatus::Searching);
        assert!(driver.history().is_empty());
        assert_eq!(driver.stats().backtracks, 1);
        assert_eq!(driver.state().possible_count(), 4);
        assert!(driver.state().is_guessed(abce));
        assert!(driver.tried().contains(&abce));

        assert_eq!(driver.step(), SearchStatus::Exhausted);
    }

    #[test]
    fn backtrack_replays_remaining_history() {
        let dict = dictionary();
        let mut driver =
            SearchDriver::new(&dict, "abcd", Scripted::new(&dict, &["wxyz", "abce"])).unwrap();

        driver.step();
        assert_eq!(driver.state().possible_count(), 3);
        driver.step();
        assert_eq!(driver.state().possible_count(), 2);

        driver.step();
        assert_eq!(
            texts(&dict, driver.history()),
            vec![("wxyz".to_string(), "0000".to_string())]
        );
        assert_eq!(driver.state().possible_count(), 3);
        assert_eq!(driver.state().guessed().len(), 2);
    }

    #[test]
    fn repeated_guess_backtracks() {
        let dict = dictionary();
        let mut driver =
            SearchDriver::new(&dict, "abcd", Scripted::new(&dict, &["wxyz", "wxyz"])).unwrap();

        driver.step();
        assert_eq!(driver.history().len(), 1);
        driver.step();
        assert!(driver.history().is_empty());
        assert_eq!(driver.stats().backtracks, 1);
    }

    #[test]
    fn unanswerable_guess_is_discarded() {
        let dict = dictionary();
        // Guessing the target early leaves abce/abcf as the largest bucket
        let mut driver = SearchDriver::new(&dict, "abcd", Scripted::new(&dict, &["abcd"])).unwrap();

        assert_eq!(driver.step(), SearchStatus::Searching);
        assert!(driver.history().is_empty());
        assert_eq!(driver.stats().discarded, 1);
        assert_eq!(driver.state().possible_count(), 4);
        assert!(driver.tried().contains(&dict.id_of("abcd").unwrap()));
    }

    #[test]
    fn step_budget_stops_search() {
        let dict = dictionary();
        let mut driver = SearchDriver::with_config(&dict, "abcd", &SearchConfig::default()).unwrap();

        let outcome = driver.run(&SearchBudget::unlimited().with_max_steps(1));
        assert_eq!(outcome, SearchOutcome::BudgetExceeded);
        assert_eq!(driver.status(), SearchStatus::Searching);
        assert_eq!(driver.history().len(), 1);

        // The driver can be resumed
        assert!(matches!(
            driver.run(&SearchBudget::unlimited()),
            SearchOutcome::Solved(_)
        ));
    }

    #[test]
    fn zero_time_budget_stops_immediately() {
        let dict = dictionary();
        let budget = SearchBudget::unlimited().with_time_limit(Duration::ZERO);
        let outcome = find_solution(&dict, "abcd", &SearchConfig::default(), &budget).unwrap();
        assert_eq!(outcome, SearchOutcome::BudgetExceeded);
    }

    #[test]
    fn find_solution_reports_bad_targets() {
        let dict = dictionary();
        let err = find_solution(&dict, "zzzz", &SearchConfig::default(), &SearchBudget::unlimited())
            .unwrap_err();
        assert_eq!(err, SolveError::UnknownTarget("zzzz".to_string()));
    }

    #[test]
    fn candidates_shrink_every_step() {
        let dict = Dictionary::new(
            [
                "bake", "cake", "lake", "make", "rake", "take", "wake", "bike", "like", "mike",
                "hike", "pike", "bore", "core", "more", "sore", "tore", "wore", "lore", "pore",
            ],
            4,
        );
        for target in ["make", "pike", "wore", "bake"] {
            let mut driver =
                SearchDriver::with_config(&dict, target, &SearchConfig::default()).unwrap();
            driver.run(&SearchBudget::unlimited().with_max_steps(500));

            let mut before = dict.len();
            for entry in driver.history() {
                assert!(entry.remaining < before || entry.pattern.is_perfect());
                assert!(entry.remaining >= 1);
                before = entry.remaining;
            }
            if let Some(solution) = driver.solution() {
                assert_eq!(solution.steps.last().unwrap().guess, target);
            }
        }
    }
}
