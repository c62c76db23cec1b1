//! Data model shared by the selection core and its collaborators.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Word -> corpus count, in descending global rank order.
pub type WordFreq = IndexMap<String, u64>;

/// Word -> review performance, as read from the review ledger.
pub type ReviewHistory = IndexMap<String, ReviewRecord>;

/// Character -> knowledge estimate.
pub type CharStats = IndexMap<char, CharStat>;

/// Character -> candidate words containing it, each sorted by descending count.
pub type CharIndex = IndexMap<char, WordFreq>;

/// Word -> bilingual gloss.
pub type Dictionary = HashMap<String, String>;

const ARCHAIC_MARKERS: &[&str] = &["(old)", "archaic ", "(archaic)"];

/// Review performance of a single word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub reps: u32,
    pub lapses: u32,
}

impl ReviewRecord {
    pub fn new(reps: u32, lapses: u32) -> Self {
        Self { reps, lapses }
    }

    pub fn lapse_rate(&self) -> f64 {
        lapse_rate(self.reps, self.lapses)
    }
}

/// Knowledge estimate of a single character.
///
/// `freq` counts the distinct reviewed words touching the character. Once
/// `has_direct_evidence` is set, `reps`/`lapses` hold the single-character
/// record's values and are no longer accumulated from compound words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CharStat {
    pub freq: u32,
    pub has_direct_evidence: bool,
    pub reps: u32,
    pub lapses: u32,
}

impl CharStat {
    pub fn lapse_rate(&self) -> f64 {
        lapse_rate(self.reps, self.lapses)
    }
}

fn lapse_rate(reps: u32, lapses: u32) -> f64 {
    lapses as f64 / reps.max(1) as f64
}

/// CJK Unified Ideographs block.
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

pub fn is_all_cjk(s: &str) -> bool {
    s.chars().all(is_cjk)
}

/// Punctuation that may leak into review notes.
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '。' | '？' | '.' | '<' | '>' | '?' | ',')
}

/// Word length in characters.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// True if the gloss marks an old or archaic sense.
pub fn is_archaic(gloss: &str) -> bool {
    ARCHAIC_MARKERS.iter().any(|m| gloss.contains(m))
}

/// Glosses starting with an uppercase letter are proper nouns.
pub fn is_proper_noun(gloss: &str) -> bool {
    gloss.chars().next().is_some_and(char::is_uppercase)
}
