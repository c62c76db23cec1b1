//! Stage 1 (Corpus reduction): keep short, high-ranked, frequent-enough words.

use hz_core::{char_len, WordFreq};

/// Reduce `corpus` to words with `1 < len <= max_len`, within the first
/// `max_rank` entries, and with `count / total > min_freq_ratio`.
///
/// `total` is taken over the whole corpus before rank truncation.
pub fn reduce(corpus: &WordFreq, max_len: usize, max_rank: usize, min_freq_ratio: f64) -> WordFreq {
    let total: u64 = corpus.values().sum();
    if total == 0 {
        return WordFreq::new();
    }
    let total = total as f64;

    corpus
        .iter()
        .take(max_rank)
        .filter(|&(word, &count)| {
            let len = char_len(word);
            len > 1 && len <= max_len && count as f64 / total > min_freq_ratio
        })
        .map(|(word, &count)| (word.clone(), count))
        .collect()
}
