//! Guess feedback representation
//!
//! Feedback pairs each letter of a guess with one of three symbols:
//! - `Match` - the letter is correct at this position
//! - `Contained` - the letter appears in the word, but elsewhere
//! - `NoMatch` - the letter does not appear in the word
//!
//! The text encoding uses `+` for match, `?` for contained and `-` for
//! no match, so a full feedback line looks like `+?--+`.

use crate::core::WORD_LENGTH;
use std::fmt;

/// Per-letter feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    /// Letter is correct at this exact position
    Match,
    /// Letter appears in the word at a different position
    Contained,
    /// Letter does not appear in the word
    NoMatch,
}

impl FeedbackSymbol {
    /// The character used in the text encoding
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Match => '+',
            Self::Contained => '?',
            Self::NoMatch => '-',
        }
    }
}

/// Feedback for a full 5-letter guess
///
/// Positionally aligned with the guessed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; WORD_LENGTH]);

impl Feedback {
    /// All matches (winning feedback)
    pub const WIN: Self = Self([FeedbackSymbol::Match; WORD_LENGTH]);

    /// Create feedback from its five symbols
    #[inline]
    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    /// Get the symbols, positionally aligned with the guessed word
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; WORD_LENGTH] {
        &self.0
    }

    /// Whether this feedback represents a win (all `Match`)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == FeedbackSymbol::Match)
    }

    /// Parse feedback from a 5-character `[+?-]` string
    ///
    /// Returns `None` for any other input.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Feedback;
    ///
    /// assert!(Feedback::parse("+?--+").is_some());
    /// assert!(Feedback::parse("+?-").is_none());
    /// assert!(Feedback::parse("+?--x").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut symbols = [FeedbackSymbol::NoMatch; WORD_LENGTH];
        for (i, ch) in chars.into_iter().enumerate() {
            symbols[i] = match ch {
                '+' => FeedbackSymbol::Match,
                '?' => FeedbackSymbol::Contained,
                '-' => FeedbackSymbol::NoMatch,
                _ => return None,
            };
        }

        Some(Self(symbols))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackSymbol::{Contained, Match, NoMatch};

    #[test]
    fn win_constant_is_all_matches() {
        assert!(Feedback::WIN.is_win());
        assert_eq!(Feedback::WIN.symbols(), &[Match; 5]);
    }

    #[test]
    fn mixed_feedback_is_not_win() {
        let feedback = Feedback::new([Match, Match, Match, Match, Contained]);
        assert!(!feedback.is_win());

        let feedback = Feedback::new([NoMatch; 5]);
        assert!(!feedback.is_win());
    }

    #[test]
    fn parse_valid() {
        let feedback = Feedback::parse("+?--+").unwrap();
        assert_eq!(
            feedback.symbols(),
            &[Match, Contained, NoMatch, NoMatch, Match]
        );

        assert_eq!(Feedback::parse("+++++").unwrap(), Feedback::WIN);
    }

    #[test]
    fn parse_invalid() {
        assert!(Feedback::parse("+?--").is_none()); // Too short
        assert!(Feedback::parse("+?--++").is_none()); // Too long
        assert!(Feedback::parse("+?--x").is_none()); // Invalid char
        assert!(Feedback::parse("").is_none()); // Empty
        assert!(Feedback::parse("GYGGY").is_none()); // Wrong alphabet
    }

    #[test]
    fn display_roundtrips_parse() {
        for s in ["+?--+", "-----", "+++++", "?????"] {
            let feedback = Feedback::parse(s).unwrap();
            assert_eq!(feedback.to_string(), s);
        }
    }

    #[test]
    fn from_str_trait() {
        let feedback: Feedback = "?-+?-".parse().unwrap();
        assert_eq!(
            feedback.symbols(),
            &[Contained, NoMatch, Match, Contained, NoMatch]
        );

        let err = "bogus".parse::<Feedback>();
        assert!(err.is_err());
    }
}
