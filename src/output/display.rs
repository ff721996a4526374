//! Display functions for command results

use super::formatters::{bucket_bar, format_duration, pattern_to_emoji};
use crate::commands::{AnalysisResult, BatchStatistics, SolveResult, SolveStatus};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Forcing: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            step.word.to_uppercase(),
            pattern_to_emoji(step.pattern),
            step.pattern.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    if verbose {
        println!(
            "\n  Steps: {}  Backtracks: {}  Discarded: {}  Attempts: {}",
            result.stats.steps, result.stats.backtracks, result.stats.discarded, result.attempts
        );
    }

    println!();
    match result.status {
        SolveStatus::Solved => println!(
            "{}",
            format!(
                "✅ Solved in {} guesses ({})",
                result.guesses.len(),
                format_duration(result.duration)
            )
            .green()
            .bold()
        ),
        SolveStatus::NoSolution => println!(
            "{}",
            format!(
                "❌ No guess sequence reaches {} ({} attempt{})",
                result.target.to_uppercase(),
                result.attempts,
                if result.attempts == 1 { "" } else { "s" }
            )
            .red()
            .bold()
        ),
        SolveStatus::OutOfBudget => println!(
            "{}",
            format!(
                "⏱  Search budget spent after {} steps ({})",
                result.stats.steps,
                format_duration(result.duration)
            )
            .yellow()
            .bold()
        ),
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {} ",
        "PARTITION:".bright_cyan().bold(),
        result.guess.to_uppercase().bright_yellow().bold(),
        result.target.to_uppercase().bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} buckets over {} candidates:",
        result.buckets.len(),
        result.total_candidates
    );
    for bucket in &result.buckets {
        let marker = if bucket.contains_target { "◀ target" } else { "" };
        let bar = bucket_bar(bucket.size, result.total_candidates, 20);
        println!(
            "   {} {} [{}] {:5}  score {:>12}  {} {}",
            pattern_to_emoji(bucket.pattern),
            bucket.pattern,
            bar.green(),
            bucket.size,
            bucket.score,
            bucket.sample.join(" ").bright_black(),
            marker.bright_yellow()
        );
    }

    println!();
    match result.response {
        Some(response) => println!(
            "{} {} {} ({} remain)",
            "Judge answers:".green().bold(),
            pattern_to_emoji(response.pattern),
            response.pattern,
            response.remaining
        ),
        None => println!(
            "{}",
            "Judge answers with a bucket that excludes the target".red().bold()
        ),
    }
}

/// Print batch statistics
pub fn print_batch_statistics(stats: &BatchStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Batch Results ");
    println!("{}", "═".repeat(70));

    let pct = |n: usize| {
        if stats.total_words == 0 {
            0.0
        } else {
            n as f64 / stats.total_words as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Total words:     {}", stats.total_words);
    println!(
        "  Solved:          {} {}",
        stats.solved,
        format!("({:.1}%)", pct(stats.solved)).green()
    );
    if stats.no_solution > 0 {
        println!(
            "  No solution:     {} {}",
            stats.no_solution,
            format!("({:.1}%)", pct(stats.no_solution)).red()
        );
    }
    if stats.out_of_budget > 0 {
        println!(
            "  Out of budget:   {} {}",
            stats.out_of_budget,
            format!("({:.1}%)", pct(stats.out_of_budget)).yellow()
        );
    }
    println!(
        "  Average guesses: {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Backtracks:      {}", stats.total_backtracks);
    println!("  Total time:      {}", format_duration(stats.total_time));

    if !stats.guess_distribution.is_empty() {
        println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
        let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
        for (&guesses, &count) in &stats.guess_distribution {
            let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {guesses:2} guesses: {bar} {count:4}");
        }
    }

    if let Some((word, guesses)) = &stats.best_word {
        println!("\n✨ {}", "Quickest".green().bold());
        println!("  {} in {guesses}", word.to_uppercase().bright_green());
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Longest".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }

    if !stats.unsolved_words.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        let shown: Vec<String> = stats
            .unsolved_words
            .iter()
            .take(20)
            .map(|w| w.to_uppercase())
            .collect();
        println!("  {}", shown.join(" "));
        if stats.unsolved_words.len() > shown.len() {
            println!("  … and {} more", stats.unsolved_words.len() - shown.len());
        }
    }
}
