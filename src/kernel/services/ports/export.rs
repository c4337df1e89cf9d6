use serde::Serialize;
use std::io::{self, Write};

use crate::kernel::matcher::SearchHit;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Tsv,
}

impl ExportFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "tsv" | "table" => Some(Self::Tsv),
            _ => None,
        }
    }
}

/// One exported line: a verse with its provenance, annotations dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow<'a> {
    pub chapter_id: u32,
    pub chapter_name: &'a str,
    pub verse_number: u32,
    pub text: &'a str,
}

impl<'a> From<&SearchHit<'a>> for ExportRow<'a> {
    fn from(hit: &SearchHit<'a>) -> Self {
        Self {
            chapter_id: hit.verse.chapter_id,
            chapter_name: hit.verse.chapter_name.as_str(),
            verse_number: hit.verse.verse_number,
            text: hit.verse.text.as_str(),
        }
    }
}

pub trait ResultExporter {
    fn format(&self) -> ExportFormat;

    fn export(&self, hits: &[SearchHit<'_>], out: &mut dyn Write) -> Result<(), ExportError>;
}
