//! Note authoring capabilities.
//!
//! Selected words become note records with a fixed field set. Filling the
//! fields and resolving audio are capabilities supplied by the caller.

use hz_core::Dictionary;
use indexmap::IndexMap;
use std::path::PathBuf;

pub const KEY_FIELD: &str = "Hanzi";

pub const NOTE_FIELDS: &[&str] = &[
    "Hanzi",
    "Meaning",
    "Reading",
    "Color",
    "Sound",
    "Decomposition",
    "Classifier",
];

/// Field name -> value, in [`NOTE_FIELDS`] order.
pub type Note = IndexMap<String, String>;

/// A note with every field blank except the headword.
pub fn blank_note(word: &str) -> Note {
    let mut note: Note = NOTE_FIELDS.iter().map(|f| (f.to_string(), String::new())).collect();
    note.insert(KEY_FIELD.to_string(), word.to_string());
    note
}

/// Fills the fields of a new note.
pub trait NoteAuthor {
    fn populate_fields(&self, word: &str) -> Note;
}

/// Produces an audio reference for a word, if one is available.
pub trait AudioSynthesizer {
    fn synthesize_audio(&self, word: &str) -> Option<String>;
}

/// Audio disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSound;

impl AudioSynthesizer for NoSound {
    fn synthesize_audio(&self, _word: &str) -> Option<String> {
        None
    }
}

/// Resolves `<word>_<service>_<lang>.mp3` in a collection media directory.
#[derive(Debug, Clone)]
pub struct MediaDirAudio {
    pub media_dir: PathBuf,
    pub service: String,
    pub lang: String,
}

impl MediaDirAudio {
    pub fn new(media_dir: impl Into<PathBuf>, service: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            media_dir: media_dir.into(),
            service: service.into(),
            lang: lang.into(),
        }
    }

    pub fn file_name(&self, word: &str) -> String {
        format!("{}_{}_{}.mp3", sanitize(word), self.service, self.lang)
    }
}

impl AudioSynthesizer for MediaDirAudio {
    fn synthesize_audio(&self, word: &str) -> Option<String> {
        let name = self.file_name(word);
        if self.media_dir.join(&name).is_file() {
            Some(format!("[sound:{name}]"))
        } else {
            tracing::debug!(%word, file = %name, "no audio file");
            None
        }
    }
}

/// Replace characters that are unsafe in file names.
pub fn sanitize(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}

/// Fills `Meaning` from the dictionary and `Sound` from an audio capability.
pub struct DictionaryNoteAuthor<'a, A> {
    dictionary: &'a Dictionary,
    audio: A,
}

impl<'a, A: AudioSynthesizer> DictionaryNoteAuthor<'a, A> {
    pub fn new(dictionary: &'a Dictionary, audio: A) -> Self {
        Self { dictionary, audio }
    }
}

impl<A: AudioSynthesizer> NoteAuthor for DictionaryNoteAuthor<'_, A> {
    fn populate_fields(&self, word: &str) -> Note {
        let mut note = blank_note(word);
        if let Some(gloss) = self.dictionary.get(word) {
            note.insert("Meaning".into(), gloss.clone());
        }
        if let Some(sound) = self.audio.synthesize_audio(word) {
            note.insert("Sound".into(), sound);
        }
        note
    }
}

impl<T: AudioSynthesizer + ?Sized> AudioSynthesizer for Box<T> {
    fn synthesize_audio(&self, word: &str) -> Option<String> {
        (**self).synthesize_audio(word)
    }
}
