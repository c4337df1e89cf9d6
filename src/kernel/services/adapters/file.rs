//! Chapter files on disk.
//!
//! A corpus directory holds one file per chapter, in either form:
//! - `*.json`: a serialized `ChapterRecord`
//! - `NNN_name.txt`: running chapter text, each verse followed by its `(N)` marker

use ignore::WalkBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io;
use std::path::{Path, PathBuf};

use crate::kernel::services::ports::corpus::{
    ChapterRecord, ChapterSource, CorpusLoadError, RawVerse, Result,
};

/// `002_البقرة.txt`, `٢.txt`
static TEXT_FILE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9\x{0660}-\x{0669}\x{06F0}-\x{06F9}]+)(?:[_\- ](.+))?\.txt$")
        .expect("valid file name pattern")
});

/// `(12)`, `( 12 )`, `﴿١٢﴾`
static VERSE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[(﴿]\s*([0-9\x{0660}-\x{0669}\x{06F0}-\x{06F9}]+)\s*[)﴾]")
        .expect("valid verse marker pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum ChapterFile {
    Json(PathBuf),
    Text { path: PathBuf, id: u32, name: String },
}

#[derive(Debug, Clone)]
pub struct DirChapterSource {
    root: PathBuf,
}

impl DirChapterSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self) -> Result<Vec<ChapterFile>> {
        if !self.root.is_dir() {
            return Err(CorpusLoadError::Io {
                path: self.root.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "corpus directory not found"),
            });
        }

        let walker = WalkBuilder::new(&self.root)
            .max_depth(Some(1))
            .hidden(true)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| {
                let message = err.to_string();
                CorpusLoadError::Io {
                    path: self.root.clone(),
                    source: err.into_io_error().unwrap_or_else(|| io::Error::other(message)),
                }
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if file_name.ends_with(".json") {
                files.push(ChapterFile::Json(path.to_path_buf()));
            } else if let Some(caps) = TEXT_FILE_NAME.captures(file_name) {
                let id = parse_number(&caps[1]).map_err(|reason| {
                    CorpusLoadError::MalformedChapter {
                        path: path.to_path_buf(),
                        reason,
                    }
                })?;
                let name = caps
                    .get(2)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| id.to_string());
                files.push(ChapterFile::Text {
                    path: path.to_path_buf(),
                    id,
                    name,
                });
            } else {
                tracing::debug!(path = %path.display(), "skipping non-chapter file");
            }
        }
        Ok(files)
    }

    fn read(&self, file: &ChapterFile) -> Result<ChapterRecord> {
        match file {
            ChapterFile::Json(path) => {
                let data = read_to_string(path)?;
                serde_json::from_str(&data).map_err(|source| CorpusLoadError::Json {
                    path: path.clone(),
                    source,
                })
            }
            ChapterFile::Text { path, id, name } => {
                let data = read_to_string(path)?;
                let verses =
                    parse_marked_text(&data).map_err(|reason| CorpusLoadError::MalformedChapter {
                        path: path.clone(),
                        reason,
                    })?;
                Ok(ChapterRecord::new(*id, name.as_str(), verses))
            }
        }
    }
}

impl ChapterSource for DirChapterSource {
    fn load_chapter(&self, id: u32) -> Result<Option<ChapterRecord>> {
        let mut found: Option<ChapterRecord> = None;
        for file in self.scan()? {
            if matches!(&file, ChapterFile::Text { id: file_id, .. } if *file_id != id) {
                continue;
            }
            let record = self.read(&file)?;
            if record.id != id {
                continue;
            }
            match found.as_mut() {
                // Same chapter split over several files: keep every row, the
                // corpus reports any resulting duplicates.
                Some(existing) => existing.verses.extend(record.verses),
                None => found = Some(record),
            }
        }
        Ok(found)
    }

    fn load_all(&self) -> Result<Vec<ChapterRecord>> {
        let files = self.scan()?;
        let mut chapters = Vec::with_capacity(files.len());
        for file in &files {
            chapters.push(self.read(file)?);
        }
        tracing::debug!(
            root = %self.root.display(),
            chapters = chapters.len(),
            "chapter files read"
        );
        Ok(chapters)
    }
}

fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CorpusLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// ASCII or Arabic-Indic digits; zero is rejected.
fn parse_number(digits: &str) -> std::result::Result<u32, String> {
    let ascii: String = digits
        .chars()
        .map(|ch| match ch {
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (ch as u32 - 0x0660) as u8),
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (ch as u32 - 0x06F0) as u8),
            _ => ch,
        })
        .collect();
    let number = ascii
        .parse::<u32>()
        .map_err(|e| format!("bad number {:?}: {}", digits, e))?;
    if number == 0 {
        return Err(format!("number {:?} is zero", digits));
    }
    Ok(number)
}

/// Split running chapter text on verse markers. The text before `(N)` is verse
/// N; empty segments are skipped; unmarked trailing text becomes the verse after
/// the last marker.
pub fn parse_marked_text(text: &str) -> std::result::Result<Vec<RawVerse>, String> {
    let mut verses = Vec::new();
    let mut cursor = 0usize;
    let mut last_number = 0u32;

    for caps in VERSE_MARKER.captures_iter(text) {
        let (Some(marker), Some(digits)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let number = parse_number(digits.as_str())?;
        let segment = text[cursor..marker.start()].trim();
        if !segment.is_empty() {
            verses.push(RawVerse::new(number, segment));
        }
        last_number = number;
        cursor = marker.end();
    }

    let tail = text[cursor..].trim();
    if !tail.is_empty() {
        let number = last_number
            .checked_add(1)
            .ok_or_else(|| "verse number overflow".to_string())?;
        verses.push(RawVerse::new(number, tail));
    }

    Ok(verses)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/file.rs"]
mod tests;
