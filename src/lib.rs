//! Absurdle Solver
//!
//! Finds guess sequences that force an adversarial Wordle judge, one that
//! always reports the least helpful pattern it can, into revealing a chosen word.
//!
//! # Quick Start
//!
//! ```rust
//! use absurdle_solver::core::Dictionary;
//! use absurdle_solver::solver::{SearchBudget, SearchConfig, SearchOutcome, find_solution};
//!
//! let dict = Dictionary::new(["abcd", "abce", "wxyz", "abcf"], 4);
//! let outcome =
//!     find_solution(&dict, "abcd", &SearchConfig::default(), &SearchBudget::unlimited()).unwrap();
//!
//! if let SearchOutcome::Solved(solution) = outcome {
//!     for step in &solution.steps {
//!         println!("{} {}", step.guess, step.pattern.to_emoji());
//!     }
//! }
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Search algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
