//! Review ledger: per-word reps/lapses from an Anki collection.

use crate::error::Result;
use hz_core::{ReviewHistory, ReviewRecord};
use rusqlite::{params, Connection, OpenFlags};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::info;

/// Anki separates note fields with the unit separator.
const FIELD_SEPARATOR: char = '\x1f';

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break pattern"));

const REVIEW_QUERY: &str = "\
    SELECT n.flds, c.reps, c.lapses \
    FROM notes AS n JOIN cards AS c ON c.nid = n.id \
    WHERE n.mid = ?1 AND c.ord = ?2 \
    ORDER BY n.id, c.id";

pub struct ReviewSource {
    collection: PathBuf,
    note_type_id: i64,
    card_ordinal: u32,
}

impl ReviewSource {
    pub fn new(collection: impl Into<PathBuf>, note_type_id: i64, card_ordinal: u32) -> Self {
        Self {
            collection: collection.into(),
            note_type_id,
            card_ordinal,
        }
    }

    pub fn collection(&self) -> &Path {
        &self.collection
    }

    /// Load reps/lapses of every matching card, keyed by the note's first field.
    ///
    /// A later row for the same word replaces the earlier one.
    pub fn load(&self) -> Result<ReviewHistory> {
        info!(
            path = %self.collection.display(),
            note_type_id = self.note_type_id,
            "Reading Anki vocabulary"
        );
        let conn = Connection::open_with_flags(&self.collection, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        self.load_from(&conn)
    }

    pub fn load_from(&self, conn: &Connection) -> Result<ReviewHistory> {
        let mut stmt = conn.prepare(REVIEW_QUERY)?;
        let rows = stmt.query_map(params![self.note_type_id, self.card_ordinal], |row| {
            let flds: String = row.get(0)?;
            let reps: u32 = row.get(1)?;
            let lapses: u32 = row.get(2)?;
            Ok((flds, ReviewRecord::new(reps, lapses)))
        })?;

        let mut history = ReviewHistory::new();
        for row in rows {
            let (flds, record) = row?;
            history.insert(note_word(&flds), record);
        }
        Ok(history)
    }
}

/// The word is the note's first field with HTML line breaks removed.
pub fn note_word(flds: &str) -> String {
    let first = flds.split(FIELD_SEPARATOR).next().unwrap_or("");
    LINE_BREAK.replace_all(first, "").into_owned()
}
