//! CC-CEDICT dictionary stored in SQLite (`cidian` table).

use crate::error::Result;
use hz_core::{is_proper_noun, Dictionary};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DICTIONARY_QUERY: &str = "SELECT simplified, english FROM cidian";

pub struct DictionarySource {
    path: PathBuf,
    include_proper_nouns: bool,
}

impl DictionarySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            include_proper_nouns: false,
        }
    }

    pub fn include_proper_nouns(mut self, include: bool) -> Self {
        self.include_proper_nouns = include;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Dictionary> {
        info!(path = %self.path.display(), "Reading CC-CEDICT");
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        self.load_from(&conn)
    }

    /// Rows with a missing or empty gloss are skipped; proper nouns are
    /// skipped unless requested.
    pub fn load_from(&self, conn: &Connection) -> Result<Dictionary> {
        let mut stmt = conn.prepare(DICTIONARY_QUERY)?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
        })?;

        let mut dictionary = Dictionary::new();
        for row in rows {
            let (word, gloss) = row?;
            let Some(gloss) = gloss.filter(|g| !g.is_empty()) else {
                continue;
            };
            if self.include_proper_nouns || !is_proper_noun(&gloss) {
                dictionary.insert(word, gloss);
            }
        }
        debug!(entries = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }
}
