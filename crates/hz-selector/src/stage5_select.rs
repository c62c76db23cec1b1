//! Stage 5 (Word selection): quota-bounded pick of new words per character.
//!
//! Characters are visited in knowledge order. Each accepted word increments
//! its anchor character's `freq`, and later quota checks see that update.

use hz_core::{is_archaic, CharIndex, CharStats, Dictionary, WordFreq};

/// Select new words, sorted by descending corpus count.
pub fn select_new_words(
    index: &CharIndex,
    stats: &mut CharStats,
    quota: u32,
    dictionary: &Dictionary,
) -> WordFreq {
    select_new_words_with(index, stats, quota, dictionary, |_, _, _| {})
}

/// Like [`select_new_words`], calling `on_accept(anchor, word, stats)` right
/// before each acceptance is applied.
pub fn select_new_words_with<F>(
    index: &CharIndex,
    stats: &mut CharStats,
    quota: u32,
    dictionary: &Dictionary,
    mut on_accept: F,
) -> WordFreq
where
    F: FnMut(char, &str, &CharStats),
{
    let mut new_words = WordFreq::new();

    for i in 0..stats.len() {
        let Some((&anchor, stat)) = stats.get_index(i) else {
            break;
        };
        if stat.freq >= quota {
            continue;
        }
        let Some(candidates) = index.get(&anchor) else {
            continue;
        };

        for (word, &count) in candidates {
            match dictionary.get(word) {
                Some(gloss) if !is_archaic(gloss) => {}
                _ => continue,
            }
            if !under_quota(word, stats, quota) {
                continue;
            }
            on_accept(anchor, word, stats);
            stats[i].freq += 1;
            new_words.insert(word.clone(), count);
        }
        tracing::debug!(%anchor, freq = stats[i].freq, "anchor done");
    }

    new_words.sort_by(|_, a, _, b| b.cmp(a));
    new_words
}

/// Every character of `word` is still below the quota.
pub fn under_quota(word: &str, stats: &CharStats, quota: u32) -> bool {
    word.chars()
        .all(|c| stats.get(&c).is_some_and(|s| s.freq < quota))
}
