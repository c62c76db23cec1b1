//! Collaborators around the selection core: input loaders and output writers.

pub mod corpus;
pub mod dictionary;
pub mod error;
pub mod notes;
pub mod output;
pub mod reviews;

pub use corpus::CorpusSource;
pub use dictionary::DictionarySource;
pub use error::{Result, SourceError};
pub use notes::{AudioSynthesizer, DictionaryNoteAuthor, MediaDirAudio, NoSound, Note, NoteAuthor};
pub use reviews::ReviewSource;
