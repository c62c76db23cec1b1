//! Stage 2 (Character knowledge): per-character evidence from the review history.
//!
//! A review of a single-character word is direct evidence and pins the
//! character's reps/lapses. Reviews of compound words only contribute as a
//! proxy until direct evidence shows up. Every reviewed word bumps `freq`.

use hz_core::{char_len, is_cjk, is_punctuation, CharStat, CharStats, ReviewHistory};
use std::cmp::Ordering;

/// Build knowledge stats, ordered least known first.
pub fn estimate(reviews: &ReviewHistory) -> CharStats {
    let mut stats = CharStats::new();

    for (word, review) in reviews {
        // No reviews, no evidence.
        if review.reps == 0 {
            continue;
        }
        let direct = char_len(word) == 1;

        for c in word.chars() {
            if !is_cjk(c) || is_punctuation(c) {
                continue;
            }
            let stat = stats.entry(c).or_default();
            stat.freq += 1;

            if direct {
                stat.has_direct_evidence = true;
                stat.reps = review.reps;
                stat.lapses = review.lapses;
            } else if !stat.has_direct_evidence {
                stat.reps += review.reps;
                stat.lapses += review.lapses;
            }
        }
    }

    sort_by_knowledge(&mut stats);
    tracing::debug!(characters = stats.len(), "estimated character knowledge");
    stats
}

/// Ascending `freq`, then descending lapse rate.
pub fn knowledge_order(a: &CharStat, b: &CharStat) -> Ordering {
    a.freq
        .cmp(&b.freq)
        .then_with(|| b.lapse_rate().total_cmp(&a.lapse_rate()))
}

/// Stable sort, so equal stats keep first-seen order.
pub fn sort_by_knowledge(stats: &mut CharStats) {
    stats.sort_by(|_, a, _, b| knowledge_order(a, b));
}
