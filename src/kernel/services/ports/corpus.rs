use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

use crate::kernel::corpus::CorpusScope;

pub type Result<T> = std::result::Result<T, CorpusLoadError>;

#[derive(Debug, thiserror::Error)]
pub enum CorpusLoadError {
    #[error("no chapter data available for {scope}")]
    NoChapterData { scope: CorpusScope },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid chapter file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed chapter file {}: {reason}", path.display())]
    MalformedChapter { path: PathBuf, reason: String },
}

/// A bound was requested from a corpus holding no verses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("corpus is empty")]
pub struct EmptyCorpusError;

/// One verse as it comes out of storage, before provenance is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVerse {
    pub number: u32,
    pub text: String,
}

impl RawVerse {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRecord {
    pub id: u32,
    pub name: CompactString,
    pub verses: Vec<RawVerse>,
}

impl ChapterRecord {
    pub fn new(id: u32, name: impl Into<CompactString>, verses: Vec<RawVerse>) -> Self {
        Self {
            id,
            name: name.into(),
            verses,
        }
    }
}

/// Where chapter records come from. Storage format is the implementor's business.
pub trait ChapterSource {
    /// `Ok(None)` when the source has no such chapter.
    fn load_chapter(&self, id: u32) -> Result<Option<ChapterRecord>>;

    /// Every chapter the source knows about, in whatever order storage yields them.
    fn load_all(&self) -> Result<Vec<ChapterRecord>>;
}
