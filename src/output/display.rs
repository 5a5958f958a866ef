//! Display functions for progress and command results

use super::formatters::{format_guess, format_letter_list, format_matched, format_tiles, format_word_list};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::{MAX_ATTEMPTS, Progress};
use colored::Colorize;

/// Print a one-line summary of the round that just completed
pub fn print_progress(progress: &Progress) {
    let Some(entry) = progress.history.last() else {
        return;
    };

    let meta = format!(
        "p={}, matched={}, letters={}, words={}",
        format!("{:.2}", progress.confidence).bold(),
        format_matched(&progress.matched).bold(),
        format_letter_list(&progress.remaining_letters),
        format_word_list(&progress.remaining_words)
    );

    println!(
        "  {}    {}    {}",
        format_tiles(&entry.feedback),
        format_guess(&entry.word, &entry.feedback),
        meta.bright_black()
    );
}

/// Print the result of solving a target word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            format_tiles(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Confidence: {:.2}", step.confidence);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.wins,
        result.win_rate * 100.0
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_ATTEMPTS {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
