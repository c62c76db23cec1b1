//! Stage 3 (Candidate filter): remove known words and words with disqualified characters.

use hz_core::{CharStats, ReviewHistory, WordFreq};
use std::collections::HashSet;

/// The first `ignore_top_n` characters of the knowledge order.
pub fn ignored_characters(stats: &CharStats, ignore_top_n: usize) -> HashSet<char> {
    stats.keys().take(ignore_top_n).copied().collect()
}

/// A character qualifies if it has stats, `freq > 0`, and is not ignored.
pub fn is_selectable(c: char, stats: &CharStats, ignored: &HashSet<char>) -> bool {
    match stats.get(&c) {
        Some(stat) => stat.freq > 0 && !ignored.contains(&c),
        None => false,
    }
}

/// Keep corpus words not already reviewed whose every character qualifies.
pub fn filter_candidates(
    corpus: &WordFreq,
    reviews: &ReviewHistory,
    stats: &CharStats,
    ignore_top_n: usize,
) -> WordFreq {
    let ignored = ignored_characters(stats, ignore_top_n);
    let mut known = 0usize;

    let kept: WordFreq = corpus
        .iter()
        .filter(|&(word, _)| {
            if reviews.contains_key(word.as_str()) {
                known += 1;
                return false;
            }
            word.chars().all(|c| is_selectable(c, stats, &ignored))
        })
        .map(|(word, &count)| (word.clone(), count))
        .collect();

    tracing::debug!(
        kept = kept.len(),
        known,
        disqualified = corpus.len() - kept.len() - known,
        "filtered candidates"
    );
    kept
}
