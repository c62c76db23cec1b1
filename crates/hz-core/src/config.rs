//! Run configuration.
//!
//! Everything the tool needs is passed explicitly: the selection core takes a
//! [`SelectionParams`], the collaborators take paths out of [`HzWordsConfig`].

use crate::error::{HzError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "hzwords.toml";

pub const MAX_WORD_LENGTH: usize = 3;
pub const MAX_GLOBAL_RANK: usize = 5000;
pub const MIN_FREQ_RATIO: f64 = 0.0;
pub const IGNORE_TOP_N: usize = 25;
pub const MAX_WORDS_PER_CHARACTER: u32 = 5;
pub const CARD_ORDINAL: u32 = 2;

/// Tuning knobs of the candidate-selection pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionParams {
    /// Longest candidate word, in characters.
    pub max_word_length: usize,
    /// Only the first `max_global_rank` corpus entries are considered.
    pub max_global_rank: usize,
    /// Candidates must satisfy `count / total > min_freq_ratio`.
    pub min_freq_ratio: f64,
    /// Number of characters, from the head of the knowledge order, to exclude.
    pub ignore_top_n: usize,
    /// Maximum number of words one character may anchor.
    pub max_words_per_character: u32,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            max_word_length: MAX_WORD_LENGTH,
            max_global_rank: MAX_GLOBAL_RANK,
            min_freq_ratio: MIN_FREQ_RATIO,
            ignore_top_n: IGNORE_TOP_N,
            max_words_per_character: MAX_WORDS_PER_CHARACTER,
        }
    }
}

/// Audio file naming used when resolving existing sound files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub service: String,
    pub lang: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            service: "google".into(),
            lang: "zh-cn".into(),
        }
    }
}

/// Full configuration, loaded from `hzwords.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HzWordsConfig {
    /// Tab-delimited `word\tcount` frequency corpus.
    pub global_word_freq: Option<PathBuf>,
    /// SQLite CC-CEDICT database with a `cidian` table.
    pub cc_cedict: Option<PathBuf>,
    /// Anki profile directory holding `collection.anki2`.
    pub anki_profile_dir: Option<PathBuf>,
    /// Note type id of the vocabulary notes.
    pub vocab_deck_id: Option<i64>,
    pub card_ordinal: u32,
    pub verbose: bool,
    pub no_sounds: bool,
    pub include_proper_nouns: bool,
    pub cache_corpus: bool,
    pub selection: SelectionParams,
    pub audio: AudioConfig,
}

impl Default for HzWordsConfig {
    fn default() -> Self {
        Self {
            global_word_freq: None,
            cc_cedict: None,
            anki_profile_dir: None,
            vocab_deck_id: None,
            card_ordinal: CARD_ORDINAL,
            verbose: false,
            no_sounds: false,
            include_proper_nouns: false,
            cache_corpus: true,
            selection: SelectionParams::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl HzWordsConfig {
    /// Load the config file at `explicit`, or search `$HOME`, the user's home
    /// directory and the current directory for `hzwords.toml`.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => Self::search_paths()
                .into_iter()
                .find(|p| p.exists())
                .unwrap_or_else(|| PathBuf::from(CONFIG_FILE)),
        };
        Self::load(&path)
    }

    /// Candidate locations, in lookup order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home) = std::env::var_os("HOME") {
            paths.push(PathBuf::from(home).join(CONFIG_FILE));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(CONFIG_FILE));
        }
        paths.push(PathBuf::from(CONFIG_FILE));
        paths
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HzError::ConfigNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn global_word_freq_path(&self) -> Result<&Path> {
        check_path("global_word_freq", self.global_word_freq.as_deref())
    }

    pub fn cc_cedict_path(&self) -> Result<&Path> {
        check_path("cc_cedict", self.cc_cedict.as_deref())
    }

    pub fn anki_profile_path(&self) -> Result<&Path> {
        check_path("anki_profile_dir", self.anki_profile_dir.as_deref())
    }

    pub fn anki_collection_path(&self) -> Result<PathBuf> {
        let collection = self.anki_profile_path()?.join("collection.anki2");
        check_path("anki collection", Some(collection.as_path()))?;
        Ok(collection)
    }

    pub fn anki_media_dir(&self) -> Result<PathBuf> {
        Ok(self.anki_profile_path()?.join("collection.media"))
    }

    pub fn require_vocab_deck_id(&self) -> Result<i64> {
        self.vocab_deck_id
            .ok_or_else(|| HzError::MissingOption("vocab_deck_id".into()))
    }
}

/// A configured path must be set, non-empty, and exist.
pub fn check_path<'a>(name: &str, value: Option<&'a Path>) -> Result<&'a Path> {
    let path = match value {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(HzError::MissingOption(name.to_string())),
    };
    if !path.exists() {
        return Err(HzError::PathNotFound {
            name: name.to_string(),
            path: path.to_path_buf(),
        });
    }
    Ok(path)
}
