//! Absurdle Solver - CLI
//!
//! Searches for guess sequences that force an adversarial Wordle onto a target word.

use absurdle_solver::{
    commands::{BatchConfig, SolveConfig, analyze_guess, run_batch, solve_word},
    core::Dictionary,
    output::{print_analysis_result, print_batch_statistics, print_solve_result},
    solver::{SearchBudget, SearchConfig, ShortlistPolicy, parse_target},
    wordlists::loader::load_dictionary,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "absurdle_solver",
    about = "Finds guess sequences that force an adversarial Wordle (Absurdle) onto a chosen word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Shortlist policy for the heuristic proposer
    #[arg(long, global = true, value_enum, default_value_t = Policy::TopK)]
    policy: Policy,

    /// Shortlist length
    #[arg(long, global = true, default_value_t = ShortlistPolicy::DEFAULT_SIZE)]
    shortlist: usize,

    /// Seed for the sample policy
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    /// Candidate count above which the heuristic proposer is used
    #[arg(long, global = true, default_value_t = 100)]
    threshold: usize,

    /// Stop each search after this many steps
    #[arg(long, global = true)]
    max_steps: Option<usize>,

    /// Stop each search after this many milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Best words by letter coverage
    TopK,
    /// Seeded random sample, ranked by letter coverage
    Sample,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a guess sequence that forces a target word
    Solve {
        /// The target word
        word: String,

        /// Show candidate counts and search counters
        #[arg(long)]
        details: bool,

        /// Reseeded retries when a sampled search finds no solution
        #[arg(long, default_value_t = 0)]
        retries: usize,
    },

    /// Solve every dictionary word of one length
    Batch {
        /// Word length
        #[arg(short, long, default_value_t = 5)]
        length: usize,

        /// Limit number of words to solve
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show how a guess partitions the dictionary for a target
    Analyze {
        /// Word to guess
        guess: String,

        /// Target word the judge must keep alive
        #[arg(short, long)]
        target: String,
    },
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        let shortlist = match self.policy {
            Policy::TopK => ShortlistPolicy::TopK(self.shortlist),
            Policy::Sample => ShortlistPolicy::Sample {
                size: self.shortlist,
                seed: self.seed,
            },
        };
        SearchConfig::new(self.threshold, shortlist)
    }

    fn budget(&self) -> SearchBudget {
        let mut budget = SearchBudget::unlimited();
        if let Some(steps) = self.max_steps {
            budget = budget.with_max_steps(steps);
        }
        if let Some(ms) = self.timeout_ms {
            budget = budget.with_time_limit(Duration::from_millis(ms));
        }
        budget
    }

    fn load_dictionary(&self, word_len: usize) -> Result<Dictionary> {
        let dictionary = load_dictionary(self.dictionary.as_ref(), word_len).with_context(|| {
            let path = self.dictionary.as_ref().map(|p| p.display().to_string());
            format!("failed to read word list {}", path.unwrap_or_default())
        })?;
        log::debug!("loaded {} {word_len}-letter words", dictionary.len());
        Ok(dictionary)
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Solve {
            word,
            details,
            retries,
        } => run_solve_command(&cli, word, *details, *retries),
        Commands::Batch { length, limit } => run_batch_command(&cli, *length, *limit),
        Commands::Analyze { guess, target } => run_analyze_command(&cli, guess, target),
    }
}

fn run_solve_command(cli: &Cli, word: &str, details: bool, retries: usize) -> Result<()> {
    let target = parse_target(word)?;
    let dictionary = cli.load_dictionary(target.len())?;

    let config = SolveConfig::new(target.text().to_string())
        .with_search(cli.search_config())
        .with_budget(cli.budget())
        .with_retries(retries);
    let result = solve_word(&config, &dictionary)?;

    print_solve_result(&result, details);
    Ok(())
}

fn run_batch_command(cli: &Cli, length: usize, limit: Option<usize>) -> Result<()> {
    let dictionary = cli.load_dictionary(length)?;

    println!(
        "🎯 Solving {} {length}-letter words...",
        limit.map_or(dictionary.len(), |n| n.min(dictionary.len()))
    );

    let config = BatchConfig {
        search: cli.search_config(),
        budget: cli.budget(),
        retries: 0,
        limit,
        show_progress: true,
    };
    let stats = run_batch(&dictionary, &config)?;

    print_batch_statistics(&stats);
    Ok(())
}

fn run_analyze_command(cli: &Cli, guess: &str, target: &str) -> Result<()> {
    let target_word = parse_target(target)?;
    let dictionary = cli.load_dictionary(target_word.len())?;

    let result = analyze_guess(guess, target_word.text(), &dictionary)?;
    print_analysis_result(&result);
    Ok(())
}
