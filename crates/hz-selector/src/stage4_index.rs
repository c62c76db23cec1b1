//! Stage 4 (Character index): character -> words containing it.

use hz_core::{CharIndex, WordFreq};

/// Invert `corpus`; each character's words are sorted by descending count.
pub fn build_index(corpus: &WordFreq) -> CharIndex {
    let mut index = CharIndex::new();
    for (word, &count) in corpus {
        for c in word.chars() {
            index.entry(c).or_default().insert(word.clone(), count);
        }
    }
    for words in index.values_mut() {
        words.sort_by(|_, a, _, b| b.cmp(a));
    }
    index
}
