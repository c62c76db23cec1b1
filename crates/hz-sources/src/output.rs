//! Output projections of the selected word list.

use crate::error::Result;
use crate::notes::{NoteAuthor, NOTE_FIELDS};
use hz_core::WordFreq;
use std::io::Write;
use tracing::info;

/// One word per line.
pub fn write_word_list(mut out: impl Write, words: &WordFreq) -> Result<()> {
    for word in words.keys() {
        writeln!(out, "{word}")?;
    }
    out.flush()?;
    Ok(())
}

/// Tab-separated note records, no header, fields in [`NOTE_FIELDS`] order.
pub fn write_notes(mut out: impl Write, words: &WordFreq, author: &impl NoteAuthor) -> Result<()> {
    let total = words.len();
    for (i, word) in words.keys().enumerate() {
        info!("{word} ({}/{total})", i + 1);
        let note = author.populate_fields(word);
        let row: Vec<String> = NOTE_FIELDS
            .iter()
            .map(|f| note.get(*f).map(|v| clean_value(v)).unwrap_or_default())
            .collect();
        writeln!(out, "{}", row.join("\t"))?;
    }
    out.flush()?;
    Ok(())
}

/// Tabs and newlines would break the record layout.
pub fn clean_value(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '\t' | '\n' | '\r')).collect()
}
