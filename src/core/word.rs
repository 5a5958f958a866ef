//! Word representation
//!
//! A Word stores a validated 5-letter lowercase word as a fixed byte array.

use std::fmt;

/// Number of letters in a word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter lowercase word
///
/// Dictionary entries and guesses are always exactly this shape; everything
/// downstream relies on the validation done here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("hands").unwrap();
    /// assert_eq!(word.text(), "hands");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("h4nds").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter at any position
    #[inline]
    #[must_use]
    pub fn contains_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("hands").unwrap();
        assert_eq!(word.text(), "hands");
        assert_eq!(word.letters(), b"hands");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("HANDS").unwrap();
        assert_eq!(word.text(), "hands");

        let word2 = Word::new("HaNdS").unwrap();
        assert_eq!(word2.text(), "hands");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("hand"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("hand5").is_err()); // Number
        assert!(Word::new("hand ").is_err()); // Space
        assert!(Word::new("hand!").is_err()); // Punctuation
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("hands").unwrap();
        assert_eq!(word.letter_at(0), b'h');
        assert_eq!(word.letter_at(1), b'a');
        assert_eq!(word.letter_at(2), b'n');
        assert_eq!(word.letter_at(3), b'd');
        assert_eq!(word.letter_at(4), b's');
    }

    #[test]
    fn word_contains_letter() {
        let word = Word::new("hands").unwrap();
        assert!(word.contains_letter(b'h'));
        assert!(word.contains_letter(b's'));
        assert!(!word.contains_letter(b'z'));
        assert!(!word.contains_letter(b'e'));
    }

    #[test]
    fn word_contains_letter_duplicates() {
        let word = Word::new("speed").unwrap();
        assert!(word.contains_letter(b'e'));
        assert!(word.contains_letter(b'd'));
        assert!(!word.contains_letter(b'a'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("hands").unwrap();
        assert_eq!(format!("{word}"), "hands");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("hands").unwrap();
        let word2 = Word::new("hands").unwrap();
        let word3 = Word::new("HANDS").unwrap();
        let word4 = Word::new("handy").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
