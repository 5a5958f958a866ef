//! Letter-frequency statistics over a candidate set
//!
//! Two views are computed from the same words: a global letter frequency
//! (occurrences over all letter slots) and an independent per-position
//! frequency. In explore mode, confirmed positions are masked out first so
//! ranking weight flows toward the positions that still carry information.

use super::constraints::ScoreMode;
use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Placeholder standing in for a confirmed position while counting
const MASKED: u8 = b'_';

/// Frequency statistics derived from a word set
///
/// Recomputed fresh every round; never mutated across rounds.
#[derive(Debug, Clone, Default)]
pub struct DistributionStats {
    by_letter: FxHashMap<u8, f64>,
    by_position: [FxHashMap<u8, f64>; WORD_LENGTH],
}

impl DistributionStats {
    /// Compute statistics over the candidate set for the given mode
    ///
    /// `Exploit` counts the candidates as-is, favoring a direct guess.
    /// `Explore` masks confirmed positions and drops confirmed letters from
    /// the global view, so re-stating known letters earns nothing.
    #[must_use]
    pub fn compute(
        candidates: &[&Word],
        confirmed: &[Option<u8>; WORD_LENGTH],
        mode: ScoreMode,
    ) -> Self {
        let rows: Vec<[u8; WORD_LENGTH]> = candidates
            .iter()
            .map(|word| {
                let mut row = *word.letters();
                if mode == ScoreMode::Explore {
                    for (idx, slot) in confirmed.iter().enumerate() {
                        if slot.is_some() {
                            row[idx] = MASKED;
                        }
                    }
                }
                row
            })
            .collect();

        let mut stats = Self::from_rows(&rows);

        if mode == ScoreMode::Explore {
            // A confirmed letter carries no remaining signal, even where it
            // also occurs at unconfirmed positions
            for &letter in confirmed.iter().flatten() {
                stats.by_letter.remove(&letter);
            }
        }

        stats
    }

    /// Count letter occurrences and divide by the applicable totals
    ///
    /// Masked slots still count toward the denominators so frequencies stay
    /// comparable between rounds.
    fn from_rows(rows: &[[u8; WORD_LENGTH]]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let mut letter_counts: FxHashMap<u8, usize> = FxHashMap::default();
        let mut position_counts: [FxHashMap<u8, usize>; WORD_LENGTH] = Default::default();

        for row in rows {
            for (idx, &letter) in row.iter().enumerate() {
                if letter == MASKED {
                    continue;
                }
                *letter_counts.entry(letter).or_insert(0) += 1;
                *position_counts[idx].entry(letter).or_insert(0) += 1;
            }
        }

        let slot_total = (rows.len() * WORD_LENGTH) as f64;
        let word_total = rows.len() as f64;

        let by_letter = letter_counts
            .into_iter()
            .map(|(letter, count)| (letter, count as f64 / slot_total))
            .collect();

        let by_position = position_counts.map(|counts| {
            counts
                .into_iter()
                .map(|(letter, count)| (letter, count as f64 / word_total))
                .collect()
        });

        Self {
            by_letter,
            by_position,
        }
    }

    /// Global frequency of a letter, if it carries any signal
    #[inline]
    #[must_use]
    pub fn letter_frequency(&self, letter: u8) -> Option<f64> {
        self.by_letter.get(&letter).copied().filter(|&f| f > 0.0)
    }

    /// Frequency of a letter at a specific position, if it carries any signal
    #[inline]
    #[must_use]
    pub fn position_frequency(&self, position: usize, letter: u8) -> Option<f64> {
        self.by_position[position]
            .get(&letter)
            .copied()
            .filter(|&f| f > 0.0)
    }
}
