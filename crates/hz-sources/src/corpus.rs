//! Global word frequency corpus: tab-delimited `word\tcount` records.
//!
//! File order is rank order. A JSON snapshot is kept beside the source so
//! later runs skip re-parsing.

use crate::error::{Result, SourceError};
use hz_core::{is_all_cjk, WordFreq};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

pub struct CorpusSource {
    path: PathBuf,
    use_snapshot: bool,
}

impl CorpusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), use_snapshot: true }
    }

    pub fn with_snapshot(mut self, enabled: bool) -> Self {
        self.use_snapshot = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<file>.snapshot.json` next to the corpus file.
    pub fn snapshot_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".snapshot.json");
        self.path.with_file_name(name)
    }

    pub fn load(&self) -> Result<WordFreq> {
        if self.use_snapshot {
            if let Some(corpus) = self.read_snapshot() {
                return Ok(corpus);
            }
        }

        info!(path = %self.path.display(), "Reading global word freq");
        let corpus = parse_corpus(File::open(&self.path)?)?;

        if self.use_snapshot {
            if let Err(e) = self.write_snapshot(&corpus) {
                warn!(error = %e, "could not write corpus snapshot");
            }
        }
        Ok(corpus)
    }

    /// A snapshot is used only if it is at least as new as the source.
    fn read_snapshot(&self) -> Option<WordFreq> {
        let snapshot = self.snapshot_path();
        let snap_time = fs::metadata(&snapshot).and_then(|m| m.modified()).ok()?;
        let src_time = fs::metadata(&self.path).and_then(|m| m.modified()).ok()?;
        if snap_time < src_time {
            debug!(path = %snapshot.display(), "snapshot is stale");
            return None;
        }
        let reader = BufReader::new(File::open(&snapshot).ok()?);
        match serde_json::from_reader(reader) {
            Ok(corpus) => {
                info!(path = %snapshot.display(), "Reading global word freq snapshot");
                Some(corpus)
            }
            Err(e) => {
                warn!(error = %e, "ignoring unreadable corpus snapshot");
                None
            }
        }
    }

    fn write_snapshot(&self, corpus: &WordFreq) -> Result<()> {
        let snapshot = self.snapshot_path();
        let dir = snapshot.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let tmp = NamedTempFile::new_in(dir)?;
        let mut writer = BufWriter::new(&tmp);
        serde_json::to_writer(&mut writer, corpus)?;
        writer.flush()?;
        drop(writer);
        tmp.persist(&snapshot).map_err(|e| e.error)?;
        debug!(path = %snapshot.display(), "wrote corpus snapshot");
        Ok(())
    }
}

/// Parse `word\tcount` lines, keeping words made only of CJK ideographs.
///
/// Rows whose word is not all-CJK are skipped before their count is read.
pub fn parse_corpus(reader: impl Read) -> Result<WordFreq> {
    let mut corpus = WordFreq::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let word = fields.next().unwrap_or("").trim_start_matches('\u{feff}');
        if word.is_empty() || !is_all_cjk(word) {
            continue;
        }
        let raw = fields.next().ok_or_else(|| SourceError::MalformedCorpus {
            line: i + 1,
            message: "missing count".into(),
        })?;
        let count = raw.trim().parse::<u64>().map_err(|e| SourceError::MalformedCorpus {
            line: i + 1,
            message: format!("bad count {raw:?}: {e}"),
        })?;
        corpus.insert(word.to_string(), count);
    }
    debug!(words = corpus.len(), "parsed corpus");
    Ok(corpus)
}
