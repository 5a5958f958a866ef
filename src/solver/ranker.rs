//! Word ranking
//!
//! Scores every legal guess against the current distribution statistics and
//! orders them best-first. Ranking runs over the full guess list, not just
//! the remaining candidates, so information-gathering probes stay available.

use super::distribution::DistributionStats;
use crate::core::Word;

/// A scoring heuristic for candidate guesses
///
/// Isolated behind a trait so alternative formulas can be swapped in for
/// experimentation.
pub trait Heuristic {
    /// Score a single word against the distribution statistics
    fn score(&self, word: &Word, stats: &DistributionStats) -> f64;
}

/// Entropy-weighted letter-frequency heuristic
///
/// Each position contributes `0.5 + p·ln(1/p)` where `p` is the letter's
/// frequency at that position; each distinct letter additionally contributes
/// `0.25 + q·ln(1/q)` from its global frequency. The `x·ln(1/x)` term peaks
/// at intermediate frequencies, rewarding letters that split the remaining
/// candidates rather than letters that are near-certain.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyHeuristic;

impl Heuristic for FrequencyHeuristic {
    fn score(&self, word: &Word, stats: &DistributionStats) -> f64 {
        let mut seen = [false; 26];
        let mut score = 0.0;

        for (idx, &letter) in word.letters().iter().enumerate() {
            seen[usize::from(letter - b'a')] = true;

            if let Some(p) = stats.position_frequency(idx, letter) {
                score += 0.5 + p * (1.0 / p).ln();
            }
        }

        // Whole-word term once per distinct letter, not per occurrence
        for (offset, &present) in seen.iter().enumerate() {
            if present {
                let letter = b'a' + offset as u8;
                if let Some(q) = stats.letter_frequency(letter) {
                    score += 0.25 + q * (1.0 / q).ln();
                }
            }
        }

        score
    }
}

/// Rank all words by descending score
///
/// The sort is stable: equal scores keep their word-list order, so output is
/// fully deterministic for a given list and statistics.
#[must_use]
pub fn rank_words<'a, H: Heuristic>(
    words: &'a [Word],
    stats: &DistributionStats,
    heuristic: &H,
) -> Vec<(&'a Word, f64)> {
    let mut ranked: Vec<(&Word, f64)> = words
        .iter()
        .map(|word| (word, heuristic.score(word, stats)))
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;
    use crate::solver::constraints::ScoreMode;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn stats_over(texts: &[&str]) -> DistributionStats {
        let dictionary = words(texts);
        let candidates: Vec<&Word> = dictionary.iter().collect();
        DistributionStats::compute(&candidates, &[None; WORD_LENGTH], ScoreMode::Exploit)
    }

    #[test]
    fn sole_candidate_outranks_everything() {
        let stats = stats_over(&["hands"]);
        let pool = words(&["handy", "chaos", "hands", "troop"]);

        let ranked = rank_words(&pool, &stats, &FrequencyHeuristic);

        assert_eq!(ranked[0].0.text(), "hands");
    }

    #[test]
    fn word_with_no_signal_scores_zero() {
        let stats = stats_over(&["hands"]);
        let word = Word::new("troop").unwrap();

        // No letter of "troop" appears in "hands", so no term fires
        let score = FrequencyHeuristic.score(&word, &stats);
        assert!((score - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn positional_term_matches_formula() {
        let stats = stats_over(&["hands", "handy"]);
        let word = Word::new("zzzzs").unwrap();

        // Only the final 's' scores: p = 0.5 positional, q = 0.1 global
        let expected = (0.5 + 0.5 * 2.0_f64.ln()) + (0.25 + 0.1 * 10.0_f64.ln());
        let score = FrequencyHeuristic.score(&word, &stats);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn duplicate_letters_get_single_word_bonus() {
        let stats = stats_over(&["hands", "handy"]);

        // Both words end with a letter pool where 'a' is frequent; a word
        // repeating 'a' must only collect the global 'a' term once
        let single = FrequencyHeuristic.score(&Word::new("azzzz").unwrap(), &stats);
        let double = FrequencyHeuristic.score(&Word::new("azzza").unwrap(), &stats);

        // Second 'a' sits at position 4 where 'a' never occurs: no positional
        // gain, no extra global bonus
        assert!((single - double).abs() < 1e-9);
    }

    #[test]
    fn ranking_is_deterministic() {
        let stats = stats_over(&["hands", "handy", "bands", "chaos"]);
        let pool = words(&["hands", "handy", "bands", "chaos", "troop"]);

        let first = rank_words(&pool, &stats, &FrequencyHeuristic);
        let second = rank_words(&pool, &stats, &FrequencyHeuristic);

        let first_words: Vec<&str> = first.iter().map(|(w, _)| w.text()).collect();
        let second_words: Vec<&str> = second.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(first_words, second_words);
    }

    #[test]
    fn ties_keep_word_list_order() {
        // Empty statistics score every word zero; order must match input
        let stats = DistributionStats::default();
        let pool = words(&["chaos", "hands", "troop"]);

        let ranked = rank_words(&pool, &stats, &FrequencyHeuristic);

        let ranked_words: Vec<&str> = ranked.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(ranked_words, vec!["chaos", "hands", "troop"]);
    }

    #[test]
    fn scores_descend() {
        let stats = stats_over(&["hands", "handy", "bands"]);
        let pool = words(&["hands", "troop", "chaos", "handy"]);

        let ranked = rank_words(&pool, &stats, &FrequencyHeuristic);

        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }
}
