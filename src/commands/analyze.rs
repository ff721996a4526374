//! Guess analysis command
//!
//! Shows how a guess splits the full dictionary and what the judge would say.

use crate::core::{Dictionary, Pattern};
use crate::error::SolveError;
use crate::solver::{AdversarialResponse, SolverState};

/// One bucket of the partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    pub pattern: Pattern,
    pub size: usize,
    pub score: i128,
    pub contains_target: bool,
    /// First few words in the bucket
    pub sample: Vec<String>,
}

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub guess: String,
    pub target: String,
    pub total_candidates: usize,
    /// Largest buckets first, ties by descending score
    pub buckets: Vec<BucketSummary>,
    pub response: Option<AdversarialResponse>,
}

const SAMPLE_WORDS: usize = 5;

/// Partition every dictionary word by `guess` and pick the judge's response
///
/// # Errors
///
/// Returns an error if:
/// - The target is invalid or not in the dictionary
/// - The guess is not in the dictionary
pub fn analyze_guess(
    guess: &str,
    target: &str,
    dictionary: &Dictionary,
) -> Result<AnalysisResult, SolveError> {
    let mut state = SolverState::new(dictionary, target)?;
    let guess_id = dictionary
        .id_of(guess)
        .ok_or_else(|| SolveError::UnknownGuess(guess.trim().to_lowercase()))?;

    let partition = state.partition(guess_id);
    let response = state.respond(guess_id);
    let target_id = state.target();

    let mut buckets: Vec<BucketSummary> = partition
        .iter()
        .map(|(pattern, words)| BucketSummary {
            pattern,
            size: words.len(),
            score: pattern.tie_break_score(),
            contains_target: words.contains(&target_id),
            sample: words
                .iter()
                .take(SAMPLE_WORDS)
                .map(|&id| dictionary.word(id).text().to_string())
                .collect(),
        })
        .collect();
    buckets.sort_by(|a, b| b.size.cmp(&a.size).then(b.score.cmp(&a.score)));

    Ok(AnalysisResult {
        guess: dictionary.word(guess_id).text().to_string(),
        target: state.target_word().text().to_string(),
        total_candidates: partition.total(),
        buckets,
        response,
    })
}
