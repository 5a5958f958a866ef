//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackSymbol, WORD_LENGTH, Word};
use colored::Colorize;

/// Format feedback as a row of colored tiles
#[must_use]
pub fn format_tiles(feedback: &Feedback) -> String {
    feedback
        .symbols()
        .iter()
        .map(|symbol| match symbol {
            FeedbackSymbol::Match => "■".green().to_string(),
            FeedbackSymbol::Contained => "■".yellow().to_string(),
            FeedbackSymbol::NoMatch => "■".bright_black().to_string(),
        })
        .collect()
}

/// Format a guessed word with each letter colored by its feedback
#[must_use]
pub fn format_guess(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.symbols())
        .map(|(letter, symbol)| match symbol {
            FeedbackSymbol::Match => letter.to_string().green().bold().to_string(),
            FeedbackSymbol::Contained => letter.to_string().yellow().to_string(),
            FeedbackSymbol::NoMatch => letter.to_string().bright_black().to_string(),
        })
        .collect()
}

/// Format the confirmed-letter array as a mask like `_a__s`
#[must_use]
pub fn format_matched(matched: &[Option<u8>; WORD_LENGTH]) -> String {
    matched
        .iter()
        .map(|slot| slot.map_or('_', |letter| letter as char))
        .collect()
}

/// Format a letter list, abbreviating beyond 6 entries
#[must_use]
pub fn format_letter_list(letters: &[u8]) -> String {
    if letters.len() > 6 {
        return format!("[...] ({})", letters.len());
    }

    let entries: Vec<String> = letters.iter().map(|&l| (l as char).to_string()).collect();
    format!("[ {} ]", entries.join(", "))
}

/// Format a word list, abbreviating beyond 6 entries
#[must_use]
pub fn format_word_list(words: &[Word]) -> String {
    if words.len() > 6 {
        return format!("[...] ({})", words.len());
    }

    let entries: Vec<&str> = words.iter().map(Word::text).collect();
    format!("[ {} ]", entries.join(", "))
}
