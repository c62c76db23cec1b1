use crate::*;
use crate::config::check_path;
use tempfile::TempDir;

// ========== Types ==========

#[test]
fn test_lapse_rate_zero_reps() {
    let r = ReviewRecord::new(0, 3);
    assert_eq!(r.lapse_rate(), 3.0);
}

#[test]
fn test_lapse_rate_ratio() {
    let r = ReviewRecord::new(15, 5);
    assert!((r.lapse_rate() - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_char_stat_default() {
    let s = CharStat::default();
    assert_eq!(s.freq, 0);
    assert!(!s.has_direct_evidence);
    assert_eq!(s.lapse_rate(), 0.0);
}

#[test]
fn test_is_cjk_bounds() {
    assert!(is_cjk('\u{4e00}'));
    assert!(is_cjk('\u{9fff}'));
    assert!(is_cjk('学'));
    assert!(!is_cjk('a'));
    assert!(!is_cjk('。'));
    assert!(!is_cjk('\u{3400}'));
}

#[test]
fn test_is_all_cjk() {
    assert!(is_all_cjk("学习"));
    assert!(!is_all_cjk("学x"));
    assert!(!is_all_cjk("A股"));
}

#[test]
fn test_char_len_counts_chars_not_bytes() {
    assert_eq!(char_len("学习"), 2);
    assert_eq!("学习".len(), 6);
}

#[test]
fn test_archaic_markers() {
    assert!(is_archaic("(old) to dwell"));
    assert!(is_archaic("archaic variant of 哦"));
    assert!(is_archaic("to go (archaic)"));
    assert!(!is_archaic("to study; to learn"));
    // The bare word must be followed by a space to count.
    assert!(!is_archaic("archaically"));
}

#[test]
fn test_proper_noun() {
    assert!(is_proper_noun("Beijing, capital of China"));
    assert!(!is_proper_noun("capital"));
    assert!(!is_proper_noun(""));
}

#[test]
fn test_punctuation() {
    assert!(is_punctuation('。'));
    assert!(is_punctuation('?'));
    assert!(!is_punctuation('学'));
}

// ========== Config ==========

#[test]
fn test_selection_defaults() {
    let p = SelectionParams::default();
    assert_eq!(p.max_word_length, 3);
    assert_eq!(p.max_global_rank, 5000);
    assert_eq!(p.min_freq_ratio, 0.0);
    assert_eq!(p.ignore_top_n, 25);
    assert_eq!(p.max_words_per_character, 5);
}

#[test]
fn test_config_from_empty_toml() {
    let c = HzWordsConfig::from_toml_str("").unwrap();
    assert_eq!(c, HzWordsConfig::default());
    assert!(c.cache_corpus);
    assert_eq!(c.card_ordinal, 2);
}

#[test]
fn test_config_partial_selection_table() {
    let c = HzWordsConfig::from_toml_str(
        "vocab_deck_id = 1342697561419\nverbose = true\n\n[selection]\nmax_word_length = 2\nignore_top_n = 0\n",
    )
    .unwrap();
    assert_eq!(c.vocab_deck_id, Some(1342697561419));
    assert!(c.verbose);
    assert_eq!(c.selection.max_word_length, 2);
    assert_eq!(c.selection.ignore_top_n, 0);
    assert_eq!(c.selection.max_global_rank, 5000);
}

#[test]
fn test_config_invalid_toml() {
    let err = HzWordsConfig::from_toml_str("verbose = ").unwrap_err();
    assert!(matches!(err, HzError::InvalidConfig(_)));
}

#[test]
fn test_config_load_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = HzWordsConfig::load(&tmp.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, HzError::ConfigNotFound(_)));
}

#[test]
fn test_config_discover_explicit() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("custom.toml");
    std::fs::write(&path, "no_sounds = true\n").unwrap();
    let c = HzWordsConfig::discover(Some(&path)).unwrap();
    assert!(c.no_sounds);
}

#[test]
fn test_search_paths_end_with_cwd() {
    let paths = HzWordsConfig::search_paths();
    assert_eq!(paths.last().unwrap(), &std::path::PathBuf::from(config::CONFIG_FILE));
}

#[test]
fn test_check_path_missing_option() {
    let err = check_path("cc_cedict", None).unwrap_err();
    assert_eq!(err.to_string(), "cc_cedict missing or empty.");
}

#[test]
fn test_check_path_empty_is_missing() {
    let err = check_path("cc_cedict", Some(std::path::Path::new(""))).unwrap_err();
    assert!(matches!(err, HzError::MissingOption(_)));
}

#[test]
fn test_check_path_not_found() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("gone.db");
    let err = check_path("cc_cedict", Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, HzError::PathNotFound { .. }));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_anki_collection_path() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("collection.anki2"), b"").unwrap();
    let c = HzWordsConfig {
        anki_profile_dir: Some(tmp.path().to_path_buf()),
        ..Default::default()
    };
    assert_eq!(c.anki_collection_path().unwrap(), tmp.path().join("collection.anki2"));
    assert_eq!(c.anki_media_dir().unwrap(), tmp.path().join("collection.media"));
}

#[test]
fn test_require_vocab_deck_id() {
    let c = HzWordsConfig::default();
    assert!(matches!(c.require_vocab_deck_id(), Err(HzError::MissingOption(_))));
}
