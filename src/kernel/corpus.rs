//! In-memory corpus model.
//!
//! A `Corpus` is built once per scope and never mutated afterwards. Verses are
//! always held in canonical `(chapter_id, verse_number)` order.

use compact_str::CompactString;
use serde::Serialize;
use std::fmt;

use crate::kernel::services::ports::corpus::{
    ChapterRecord, ChapterSource, CorpusLoadError, EmptyCorpusError, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CorpusScope {
    Chapter(u32),
    Whole,
}

impl fmt::Display for CorpusScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusScope::Chapter(id) => write!(f, "chapter {}", id),
            CorpusScope::Whole => write!(f, "whole corpus"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub chapter_id: u32,
    pub chapter_name: CompactString,
    pub verse_number: u32,
    pub text: String,
}

impl Verse {
    #[inline]
    pub fn key(&self) -> (u32, u32) {
        (self.chapter_id, self.verse_number)
    }
}

/// Non-fatal data problems found while building a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityWarning {
    DuplicateVerse {
        chapter_id: u32,
        verse_number: u32,
    },
    OutOfOrder {
        chapter_id: u32,
        verse_number: u32,
        previous: u32,
    },
    Gap {
        chapter_id: u32,
        after: u32,
        next: u32,
    },
    MissingFirstVerse {
        chapter_id: u32,
        first: u32,
    },
}

impl fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityWarning::DuplicateVerse {
                chapter_id,
                verse_number,
            } => write!(f, "chapter {}: duplicate verse {}", chapter_id, verse_number),
            IntegrityWarning::OutOfOrder {
                chapter_id,
                verse_number,
                previous,
            } => write!(
                f,
                "chapter {}: verse {} stored after verse {}",
                chapter_id, verse_number, previous
            ),
            IntegrityWarning::Gap {
                chapter_id,
                after,
                next,
            } => write!(
                f,
                "chapter {}: verses missing between {} and {}",
                chapter_id, after, next
            ),
            IntegrityWarning::MissingFirstVerse { chapter_id, first } => write!(
                f,
                "chapter {}: numbering starts at {} instead of 1",
                chapter_id, first
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Corpus {
    scope: CorpusScope,
    verses: Vec<Verse>,
    warnings: Vec<IntegrityWarning>,
}

impl Corpus {
    /// Materialize `scope` from `source`.
    pub fn load<S>(source: &S, scope: CorpusScope) -> Result<Self>
    where
        S: ChapterSource + ?Sized,
    {
        let chapters = match scope {
            CorpusScope::Chapter(id) => source.load_chapter(id)?.into_iter().collect(),
            CorpusScope::Whole => source.load_all()?,
        };

        let corpus = Self::from_chapters(scope, chapters);
        if corpus.is_empty() {
            return Err(CorpusLoadError::NoChapterData { scope });
        }

        tracing::debug!(
            scope = %scope,
            verses = corpus.len(),
            warnings = corpus.warnings.len(),
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Merge chapter records into canonical order. Never fails; integrity
    /// problems are collected in [`Corpus::warnings`].
    pub fn from_chapters(scope: CorpusScope, chapters: Vec<ChapterRecord>) -> Self {
        let mut warnings = Vec::new();
        let mut verses = Vec::with_capacity(chapters.iter().map(|c| c.verses.len()).sum());

        for chapter in chapters {
            let mut previous: Option<u32> = None;
            for raw in chapter.verses {
                if let Some(prev) = previous {
                    if raw.number < prev {
                        warnings.push(IntegrityWarning::OutOfOrder {
                            chapter_id: chapter.id,
                            verse_number: raw.number,
                            previous: prev,
                        });
                    }
                }
                previous = Some(raw.number);
                verses.push(Verse {
                    chapter_id: chapter.id,
                    chapter_name: chapter.name.clone(),
                    verse_number: raw.number,
                    text: raw.text,
                });
            }
        }

        // Stable: equal keys keep encounter order.
        verses.sort_by_key(Verse::key);
        check_numbering(&verses, &mut warnings);

        for warning in &warnings {
            tracing::warn!(scope = %scope, "{}", warning);
        }

        Self {
            scope,
            verses,
            warnings,
        }
    }

    pub fn scope(&self) -> CorpusScope {
        self.scope
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn warnings(&self) -> &[IntegrityWarning] {
        &self.warnings
    }

    /// Upper bound for a verse-number prompt.
    pub fn max_verse_number(&self) -> std::result::Result<u32, EmptyCorpusError> {
        self.verses
            .iter()
            .map(|v| v.verse_number)
            .max()
            .ok_or(EmptyCorpusError)
    }

    /// All verses of one chapter, in order. Empty if the chapter is not loaded.
    pub fn chapter_verses(&self, chapter_id: u32) -> &[Verse] {
        let start = self.verses.partition_point(|v| v.chapter_id < chapter_id);
        let end = self.verses.partition_point(|v| v.chapter_id <= chapter_id);
        &self.verses[start..end]
    }

    /// First verse stored under `(chapter_id, verse_number)`.
    pub fn verse(&self, chapter_id: u32, verse_number: u32) -> Option<&Verse> {
        let key = (chapter_id, verse_number);
        let idx = self.verses.partition_point(|v| v.key() < key);
        self.verses.get(idx).filter(|v| v.key() == key)
    }

    pub fn chapter_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.verses.iter().map(|v| v.chapter_id).collect();
        ids.dedup();
        ids
    }

    pub fn chapter_name(&self, chapter_id: u32) -> Option<&str> {
        self.chapter_verses(chapter_id)
            .first()
            .map(|v| v.chapter_name.as_str())
    }
}

/// Expects `verses` sorted by key.
fn check_numbering(verses: &[Verse], warnings: &mut Vec<IntegrityWarning>) {
    for chapter in verses.chunk_by(|a, b| a.chapter_id == b.chapter_id) {
        let chapter_id = chapter[0].chapter_id;
        let first = chapter[0].verse_number;
        if first != 1 {
            warnings.push(IntegrityWarning::MissingFirstVerse { chapter_id, first });
        }
        for pair in chapter.windows(2) {
            let (a, b) = (pair[0].verse_number, pair[1].verse_number);
            if a == b {
                warnings.push(IntegrityWarning::DuplicateVerse {
                    chapter_id,
                    verse_number: b,
                });
            } else if b > a + 1 {
                warnings.push(IntegrityWarning::Gap {
                    chapter_id,
                    after: a,
                    next: b,
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/corpus.rs"]
mod tests;
