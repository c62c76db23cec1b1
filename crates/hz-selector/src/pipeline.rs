//! Selection pipeline: orchestrates all 5 stages.

use crate::{stage1_reduce, stage2_knowledge, stage3_filter, stage4_index, stage5_select};
use hz_core::{CharStats, Dictionary, ReviewHistory, SelectionParams, WordFreq};
use tracing::info;

/// Selection result with statistics.
#[derive(Debug, Clone)]
pub struct SelectionReport {
    /// Selected words, by descending corpus count.
    pub new_words: WordFreq,
    /// Character knowledge after selection (`freq` includes accepted words).
    pub knowledge: CharStats,
    pub global_words: usize,
    pub reduced_words: usize,
    pub dictionary_entries: usize,
    pub vocabulary_words: usize,
    pub known_characters: usize,
    pub candidate_words: usize,
}

impl SelectionReport {
    /// End-of-run statistics table.
    pub fn summary_lines(&self) -> Vec<String> {
        let rows = [
            ("Number of words in global list:", self.global_words),
            ("Number of reduced words in global list", self.reduced_words),
            ("Number of non-proper words in CC-CEDICT:", self.dictionary_entries),
            ("Number of words/phrases in vocab list:", self.vocabulary_words),
            ("Number of Hanzi in known vocab list:", self.known_characters),
        ];
        let mut lines: Vec<String> = rows
            .iter()
            .map(|(label, n)| format!("{label:<42}{:>7}", thousands(*n)))
            .collect();
        lines.push("Number of words in reduced global list".into());
        lines.push(format!(
            "{:<42}{:>7}",
            "  excluding unknown hanzi and top hanzi:",
            thousands(self.candidate_words)
        ));
        lines.push(format!(
            "{:<42}{:>7}",
            "Number of selected new words:",
            thousands(self.new_words.len())
        ));
        lines.push("-".repeat(56));
        lines
    }
}

/// Format with `,` thousands separators.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The main selection pipeline.
pub struct SelectionPipeline {
    pub params: SelectionParams,
}

impl SelectionPipeline {
    pub fn new(params: SelectionParams) -> Self {
        Self { params }
    }

    /// Run every stage over in-memory inputs.
    pub fn run(&self, corpus: &WordFreq, reviews: &ReviewHistory, dictionary: &Dictionary) -> SelectionReport {
        let p = &self.params;

        info!(
            max_word_length = p.max_word_length,
            max_global_rank = p.max_global_rank,
            min_freq_ratio = p.min_freq_ratio,
            "Reducing global word freq"
        );
        let reduced = stage1_reduce::reduce(corpus, p.max_word_length, p.max_global_rank, p.min_freq_ratio);

        info!("Calculating known Hanzi statistics");
        let mut knowledge = stage2_knowledge::estimate(reviews);
        let known_characters = knowledge.len();

        info!(ignore_top_n = p.ignore_top_n, "Removing vocabulary words and top known Hanzi");
        let candidates = stage3_filter::filter_candidates(&reduced, reviews, &knowledge, p.ignore_top_n);

        info!("Creating Hanzi to word frequency mapping");
        let index = stage4_index::build_index(&candidates);

        info!(
            max_words_per_character = p.max_words_per_character,
            "Selecting unknown words"
        );
        let new_words = stage5_select::select_new_words(
            &index,
            &mut knowledge,
            p.max_words_per_character,
            dictionary,
        );

        SelectionReport {
            new_words,
            knowledge,
            global_words: corpus.len(),
            reduced_words: reduced.len(),
            dictionary_entries: dictionary.len(),
            vocabulary_words: reviews.len(),
            known_characters,
            candidate_words: candidates.len(),
        }
    }
}

impl Default for SelectionPipeline {
    fn default() -> Self {
        Self::new(SelectionParams::default())
    }
}
