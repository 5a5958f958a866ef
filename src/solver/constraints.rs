//! Constraint accumulation and candidate filtering
//!
//! Folds a guess history into positional and global letter constraints, then
//! filters the dictionary down to the words still consistent with every
//! piece of feedback received so far.

use crate::core::{FeedbackSymbol, HistoryEntry, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// How the distribution scorer should treat the candidate set this round
///
/// Computed once per round; `Exploit` favors guessing a remaining candidate
/// directly, `Explore` redirects ranking weight toward undetermined positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreMode {
    Explore,
    Exploit,
}

/// Letter constraints derived from a guess history
///
/// Recomputed from the full history each round; never mutated across rounds.
#[derive(Debug, Clone, Default)]
pub struct ConstraintState {
    /// Confirmed letter per position, from `Match` feedback
    confirmed: [Option<u8>; WORD_LENGTH],
    /// Letters present in the word but excluded at this position, from `Contained`
    contained: [FxHashSet<u8>; WORD_LENGTH],
    /// Letters absent from the word entirely, from `NoMatch`
    excluded: FxHashSet<u8>,
}

impl ConstraintState {
    /// Accumulate constraints from every history entry
    ///
    /// Accumulation is idempotent: folding the same entry twice yields the
    /// same state as folding it once, and entry order does not matter.
    #[must_use]
    pub fn from_history(history: &[HistoryEntry]) -> Self {
        let mut state = Self::default();

        for entry in history {
            for (idx, &symbol) in entry.feedback.symbols().iter().enumerate() {
                let letter = entry.word.letter_at(idx);

                match symbol {
                    FeedbackSymbol::Match => state.confirmed[idx] = Some(letter),
                    FeedbackSymbol::Contained => {
                        state.contained[idx].insert(letter);
                    }
                    FeedbackSymbol::NoMatch => {
                        state.excluded.insert(letter);
                    }
                }
            }
        }

        state
    }

    /// Confirmed letter per position
    #[inline]
    #[must_use]
    pub const fn confirmed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.confirmed
    }

    /// Number of positions with a confirmed letter
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.confirmed.iter().flatten().count()
    }

    /// Search confidence heuristic in [0, 1]
    ///
    /// Display-only signal; ranking decisions never read it.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        let contained_count: usize = self.contained.iter().map(FxHashSet::len).sum();

        let score = self.matched_count() as f64 * 0.2 + contained_count as f64 * 0.01;
        score.min(1.0)
    }

    /// Whether a word is consistent with all accumulated constraints
    ///
    /// A candidate must carry every confirmed letter at its position, avoid
    /// every position-excluded letter there while containing it somewhere,
    /// and contain no globally excluded letter.
    #[must_use]
    pub fn is_candidate(&self, word: &Word) -> bool {
        for idx in 0..WORD_LENGTH {
            let letter = word.letter_at(idx);

            if let Some(confirmed) = self.confirmed[idx]
                && letter != confirmed
            {
                return false;
            }

            if self.contained[idx].contains(&letter) {
                return false;
            }

            // Contained feedback implies presence elsewhere
            for &required in &self.contained[idx] {
                if !word.contains_letter(required) {
                    return false;
                }
            }
        }

        !self
            .excluded
            .iter()
            .any(|&letter| word.contains_letter(letter))
    }

    /// Filter a word list to the remaining consistent candidates
    ///
    /// Preserves input order; the result only ever shrinks as history grows.
    #[must_use]
    pub fn filter<'a>(&self, words: &'a [Word]) -> Vec<&'a Word> {
        words.iter().filter(|word| self.is_candidate(word)).collect()
    }

    /// Distinct letters appearing in candidates at not-yet-confirmed positions
    ///
    /// Sorted for deterministic display and tests.
    #[must_use]
    pub fn undetermined_letters(&self, candidates: &[&Word]) -> Vec<u8> {
        let mut letters: Vec<u8> = candidates
            .iter()
            .flat_map(|word| {
                word.letters()
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| self.confirmed[*idx].is_none())
                    .map(|(_, &letter)| letter)
            })
            .collect::<FxHashSet<u8>>()
            .into_iter()
            .collect();

        letters.sort_unstable();
        letters
    }

    /// Decide the scoring mode for this round
    ///
    /// Exploit when few candidates or undetermined letters remain, or when
    /// the next attempt is the last one.
    #[must_use]
    pub fn score_mode(
        &self,
        candidate_count: usize,
        undetermined_count: usize,
        attempts_made: usize,
    ) -> ScoreMode {
        if candidate_count < 3 || undetermined_count < 3 || attempts_made >= 5 {
            ScoreMode::Exploit
        } else {
            ScoreMode::Explore
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn entry(word: &str, feedback: &str) -> HistoryEntry {
        HistoryEntry::new(
            Word::new(word).unwrap(),
            Feedback::parse(feedback).unwrap(),
        )
    }

    #[test]
    fn empty_history_keeps_every_word() {
        let dictionary = words(&["hands", "handy", "chaos"]);
        let state = ConstraintState::from_history(&[]);

        assert_eq!(state.filter(&dictionary).len(), 3);
        assert_eq!(state.matched_count(), 0);
        assert!((state.confidence() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn match_confirms_letter_at_position() {
        let state = ConstraintState::from_history(&[entry("hands", "+----")]);

        assert_eq!(state.confirmed()[0], Some(b'h'));
        assert_eq!(state.matched_count(), 1);
    }

    #[test]
    fn filter_requires_confirmed_letters() {
        let dictionary = words(&["hands", "handy", "bands"]);
        let state = ConstraintState::from_history(&[entry("hands", "+----")]);

        let candidates = state.filter(&dictionary);
        // 'a', 'n', 'd', 's' are globally excluded, so only h-words without
        // those letters would survive; "hands"/"handy" contain them
        assert!(candidates.is_empty() || candidates.iter().all(|w| w.letter_at(0) == b'h'));
    }

    #[test]
    fn contained_excludes_position_but_requires_presence() {
        let dictionary = words(&["chaos", "hands", "shard"]);
        // 'h' contained at position 0: present elsewhere, not first
        let state = ConstraintState::from_history(&[entry("hzzzz", "?----")]);

        // globally excluded 'z' plus positional rules
        let candidates = state.filter(&dictionary);
        for word in &candidates {
            assert_ne!(word.letter_at(0), b'h');
            assert!(word.contains_letter(b'h'));
        }
        assert!(candidates.iter().any(|w| w.text() == "chaos"));
        assert!(!candidates.iter().any(|w| w.text() == "hands"));
    }

    #[test]
    fn no_match_excludes_letter_everywhere() {
        let dictionary = words(&["hands", "chaos", "troop"]);
        let state = ConstraintState::from_history(&[entry("aaaaa", "-----")]);

        let candidates = state.filter(&dictionary);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text(), "troop");
    }

    #[test]
    fn candidate_set_shrinks_monotonically() {
        let dictionary = words(&["hands", "handy", "bands", "chaos", "troop"]);
        let history = vec![entry("zzzzz", "-----"), entry("hzzzz", "+----")];

        let mut previous = dictionary.len();
        for prefix_len in 0..=history.len() {
            let state = ConstraintState::from_history(&history[..prefix_len]);
            let remaining = state.filter(&dictionary).len();
            assert!(remaining <= previous);
            previous = remaining;
        }
    }

    #[test]
    fn accumulation_is_idempotent() {
        let dictionary = words(&["hands", "handy", "bands", "chaos"]);
        let single = vec![entry("hands", "+?--+")];
        let doubled = vec![entry("hands", "+?--+"), entry("hands", "+?--+")];

        let once = ConstraintState::from_history(&single);
        let twice = ConstraintState::from_history(&doubled);

        assert_eq!(once.confirmed(), twice.confirmed());
        assert_eq!(
            once.filter(&dictionary)
                .iter()
                .map(|w| w.text())
                .collect::<Vec<_>>(),
            twice
                .filter(&dictionary)
                .iter()
                .map(|w| w.text())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn confidence_caps_at_one() {
        // 5 matches alone already reach the cap
        let state = ConstraintState::from_history(&[entry("hands", "+++++")]);
        assert!((state.confidence() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn confidence_counts_matches_and_contained() {
        let state = ConstraintState::from_history(&[entry("hands", "+?---")]);
        assert!((state.confidence() - 0.21).abs() < 1e-9);
    }

    #[test]
    fn undetermined_letters_skip_confirmed_positions() {
        let dictionary = words(&["hands", "handy"]);
        let state = ConstraintState::from_history(&[entry("hzzzz", "+----")]);

        let candidates: Vec<&Word> = dictionary.iter().collect();
        let letters = state.undetermined_letters(&candidates);

        // Position 0 is confirmed, so 'h' only counts if it appears elsewhere
        assert!(!letters.contains(&b'h'));
        assert!(letters.contains(&b'a'));
        assert!(letters.contains(&b'y'));

        // Sorted output
        let mut sorted = letters.clone();
        sorted.sort_unstable();
        assert_eq!(letters, sorted);
    }

    #[test]
    fn score_mode_explores_with_many_options() {
        let state = ConstraintState::default();
        assert_eq!(state.score_mode(100, 20, 0), ScoreMode::Explore);
    }

    #[test]
    fn score_mode_exploits_with_few_candidates() {
        let state = ConstraintState::default();
        assert_eq!(state.score_mode(2, 20, 0), ScoreMode::Exploit);
    }

    #[test]
    fn score_mode_exploits_with_few_letters() {
        let state = ConstraintState::default();
        assert_eq!(state.score_mode(100, 2, 0), ScoreMode::Exploit);
    }

    #[test]
    fn score_mode_exploits_on_last_attempt() {
        let state = ConstraintState::default();
        assert_eq!(state.score_mode(100, 20, 5), ScoreMode::Exploit);
    }

    #[test]
    fn duplicate_letter_guesses_combine_across_entries() {
        // One guess marks 'o' contained, a later guess confirms 'o' elsewhere;
        // both constraints apply at once
        let dictionary = words(&["troop", "chaos"]);
        let history = vec![entry("ozzzz", "?----"), entry("zzozz", "--+--")];

        let state = ConstraintState::from_history(&history);
        let candidates = state.filter(&dictionary);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text(), "troop");
    }
}
