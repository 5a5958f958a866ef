//! Interactive assist mode
//!
//! Suggests a word each round; the operator enters it into the real puzzle
//! and feeds the result back as a `[+?-]` encoded string.

use crate::core::{Feedback, Word};
use crate::output::display::print_progress;
use crate::solver::{Evaluator, Heuristic, Solver};
use colored::Colorize;
use std::io::{self, Write};

/// Marker error used to unwind when the operator quits mid-game
const ABORTED: &str = "aborted";

/// Evaluator backed by the human operator at the terminal
///
/// Malformed input never escapes this boundary; it re-prompts instead.
struct PromptEvaluator {
    attempt: usize,
}

impl Evaluator for PromptEvaluator {
    fn evaluate(&mut self, word: &Word) -> Result<Feedback, String> {
        self.attempt += 1;

        println!(
            "\nAttempt {} --- Choose {}",
            format!("#{}", self.attempt).red(),
            word.text().bold().blue()
        );

        loop {
            let input = read_line("Enter result [+-???]")?;

            match input.as_str() {
                "quit" | "q" | "exit" => return Err(ABORTED.to_string()),
                "win" => return Ok(Feedback::WIN),
                _ => {
                    if let Some(feedback) = Feedback::parse(&input) {
                        println!();
                        return Ok(feedback);
                    }
                    eprintln!("Invalid input, expected {}", "five of [+?-]".red());
                }
            }
        }
    }
}

/// Run the interactive assist loop
///
/// # Errors
///
/// Returns an error if stdin is closed or the word list is empty.
pub fn run_assist<H: Heuristic>(solver: &Solver<H>) -> Result<(), String> {
    println!(
        "\n{} solves a {} for you.\n",
        "wordle_assist".bold().blue(),
        "Wordle".bold().blue()
    );
    println!("We'll provide you with a word to input to the puzzle.");
    println!(
        "You feed back the result as a {} encoded string:\n",
        "[+-???]".bold().blue()
    );
    println!("  {} = match", "+".green().bold());
    println!("  {} = contained", "?".yellow().bold());
    println!("  {} = no match", "-".bright_black().bold());
    println!("\nType 'win' when the puzzle is solved, 'quit' to leave.");
    println!("\n-----");

    let mut evaluator = PromptEvaluator { attempt: 0 };
    let mut renderer = |progress: &crate::solver::Progress| print_progress(progress);

    match solver.solve(&mut evaluator, Some(&mut renderer)) {
        Ok(outcome) => {
            if outcome.won {
                println!("\n{}", "Well done!".green().bold());
            } else {
                println!("\n{}", "That did not work :-(".yellow());
            }
            Ok(())
        }
        Err(e) if e == ABORTED => {
            println!("\nThanks for playing!");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Read a trimmed line from stdin with a prompt
fn read_line(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // EOF counts as quitting
    if bytes == 0 {
        return Err(ABORTED.to_string());
    }

    Ok(input.trim().to_string())
}
