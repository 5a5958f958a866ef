//! Wordle Assist - CLI
//!
//! Interactive assistant, target solver and benchmark harness around the
//! letter-frequency ranking core.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_assist::{
    commands::{run_assist, run_benchmark, sample_targets, solve_word},
    core::Word,
    output::{print_benchmark_result, print_solve_result},
    solver::{FrequencyHeuristic, Solver},
    wordlists::{SOLUTIONS, WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant ranking guesses by letter-frequency statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'solutions' (answers only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assist mode (default) - relay feedback from a real puzzle
    Assist,

    /// Solve a specific target word with the reference evaluator
    Solve {
        /// The target word to solve
        word: String,

        /// Show per-turn candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the assistant over random solution words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Load wordlists based on the -w flag
///
/// Returns (`guess_words`, `solution_words`)
/// - "all": full guess list, solutions subset for statistics
/// - "solutions": solutions list for both
/// - "<path>": custom list from file, doubling as its own solutions list
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    use wordle_assist::wordlists::loader::load_from_file;

    match wordlist_mode {
        "all" => {
            let words = words_from_slice(WORDS);
            let solutions = words_from_slice(SOLUTIONS);
            Ok((words, solutions))
        }
        "solutions" => {
            let solutions = words_from_slice(SOLUTIONS);
            Ok((solutions.clone(), solutions))
        }
        path => {
            let custom = load_from_file(path)?;
            Ok((custom.clone(), custom))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (words, solutions) = load_wordlists(&cli.wordlist)?;
    let solver = Solver::with_solutions(FrequencyHeuristic, &words, &solutions);

    // Default to assist mode if no command given
    let command = cli.command.unwrap_or(Commands::Assist);

    match command {
        Commands::Assist => run_assist(&solver).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, verbose } => {
            let result = solve_word(&word, &solver).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random words...");

            let targets = sample_targets(&solutions, count);
            let result = run_benchmark(&solver, &targets).map_err(|e| anyhow::anyhow!(e))?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
