//! Batch solving
//!
//! Runs the search against every dictionary word and collects statistics.

use super::solve::{SolveConfig, SolveStatus, solve_word};
use crate::core::{Dictionary, Word};
use crate::error::SolveError;
use crate::solver::{SearchBudget, SearchConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings shared by every word in a batch
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchConfig {
    pub search: SearchConfig,
    pub budget: SearchBudget,
    pub retries: usize,
    pub limit: Option<usize>,
    pub show_progress: bool,
}

/// Result from solving a single word
#[derive(Debug, Clone)]
pub struct WordResult {
    pub word: String,
    pub status: SolveStatus,
    pub num_guesses: usize,
    pub backtracks: usize,
    pub duration: Duration,
}

/// Statistics from a batch run
#[derive(Debug, Default)]
pub struct BatchStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub no_solution: usize,
    pub out_of_budget: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub total_backtracks: usize,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub best_word: Option<(String, usize)>,
    pub worst_words: Vec<(String, usize)>,
    pub unsolved_words: Vec<String>,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

/// Solve every word in `dictionary` (or the first `limit` of them)
///
/// # Errors
///
/// Only fails on a configuration problem shared by every word, e.g. an
/// empty dictionary. Unsolvable words are counted, not reported as errors.
pub fn run_batch(dictionary: &Dictionary, config: &BatchConfig) -> Result<BatchStatistics, SolveError> {
    if dictionary.is_empty() {
        return Err(SolveError::NoWordsOfLength(dictionary.word_len()));
    }

    let words: Vec<&str> = dictionary
        .words()
        .iter()
        .take(config.limit.unwrap_or(dictionary.len()))
        .map(Word::text)
        .collect();

    let pb = progress_bar(words.len(), config.show_progress);
    let total_start = Instant::now();
    let mut results = Vec::with_capacity(words.len());

    for (idx, &word) in words.iter().enumerate() {
        let solve = SolveConfig::new(word.to_string())
            .with_search(config.search)
            .with_budget(config.budget)
            .with_retries(config.retries);
        let result = solve_word(&solve, dictionary)?;

        results.push(WordResult {
            word: result.target,
            status: result.status,
            num_guesses: result.guesses.len(),
            backtracks: result.stats.backtracks,
            duration: result.duration,
        });

        if idx % 10 == 0 {
            let solved = results.iter().filter(|r| r.status == SolveStatus::Solved).count();
            pb.set_message(format!("solved {solved}/{}", results.len()));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, total_start.elapsed()))
}

/// Aggregate per-word results
#[must_use]
pub fn summarize(results: &[WordResult], total_time: Duration) -> BatchStatistics {
    let solved: Vec<&WordResult> = results
        .iter()
        .filter(|r| r.status == SolveStatus::Solved)
        .collect();

    let mut guess_distribution = BTreeMap::new();
    for r in &solved {
        *guess_distribution.entry(r.num_guesses).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let best_word = solved
        .iter()
        .min_by_key(|r| r.num_guesses)
        .map(|r| (r.word.clone(), r.num_guesses));

    let mut worst_words: Vec<(String, usize)> = solved
        .iter()
        .map(|r| (r.word.clone(), r.num_guesses))
        .collect();
    worst_words.sort_by_key(|(_, n)| Reverse(*n));
    worst_words.truncate(10);

    BatchStatistics {
        total_words: results.len(),
        solved: solved.len(),
        no_solution: results
            .iter()
            .filter(|r| r.status == SolveStatus::NoSolution)
            .count(),
        out_of_budget: results
            .iter()
            .filter(|r| r.status == SolveStatus::OutOfBudget)
            .count(),
        guess_distribution,
        total_time,
        total_backtracks: results.iter().map(|r| r.backtracks).sum(),
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        best_word,
        worst_words,
        unsolved_words: results
            .iter()
            .filter(|r| r.status != SolveStatus::Solved)
            .map(|r| r.word.clone())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> BatchConfig {
        BatchConfig::default()
    }

    #[test]
    fn batch_counts_every_word() {
        let dict = Dictionary::new(["abcd", "abce", "wxyz", "abcf"], 4);
        let stats = run_batch(&dict, &quiet()).unwrap();

        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.solved + stats.no_solution + stats.out_of_budget, 4);
        assert!(stats.unsolved_words.contains(&"wxyz".to_string()));
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), stats.solved);
    }

    #[test]
    fn batch_respects_limit() {
        let dict = Dictionary::new(["abcd", "abce", "wxyz", "abcf"], 4);
        let config = BatchConfig {
            limit: Some(2),
            ..quiet()
        };
        let stats = run_batch(&dict, &config).unwrap();
        assert_eq!(stats.total_words, 2);
    }

    #[test]
    fn batch_rejects_empty_dictionary() {
        let dict = Dictionary::new(["abc"], 4);
        assert_eq!(
            run_batch(&dict, &quiet()).unwrap_err(),
            SolveError::NoWordsOfLength(4)
        );
    }

    #[test]
    fn summarize_statistics() {
        let result = |word: &str, status, num_guesses| WordResult {
            word: word.to_string(),
            status,
            num_guesses,
            backtracks: 1,
            duration: Duration::ZERO,
        };
        let results = vec![
            result("abcd", SolveStatus::Solved, 3),
            result("abce", SolveStatus::Solved, 5),
            result("wxyz", SolveStatus::NoSolution, 0),
            result("abcf", SolveStatus::OutOfBudget, 0),
        ];

        let stats = summarize(&results, Duration::from_secs(1));
        assert_eq!(stats.solved, 2);
        assert_eq!(stats.no_solution, 1);
        assert_eq!(stats.out_of_budget, 1);
        assert!((stats.average_guesses - 4.0).abs() < f64::EPSILON);
        assert_eq!(stats.min_guesses, 3);
        assert_eq!(stats.max_guesses, 5);
        assert_eq!(stats.best_word, Some(("abcd".to_string(), 3)));
        assert_eq!(stats.worst_words[0], ("abce".to_string(), 5));
        assert_eq!(stats.total_backtracks, 4);
        assert_eq!(stats.unsolved_words, vec!["wxyz", "abcf"]);
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(&[], Duration::ZERO);
        assert_eq!(stats.total_words, 0);
        assert!(stats.best_word.is_none());
        assert!(stats.average_guesses.abs() < f64::EPSILON);
    }
}
