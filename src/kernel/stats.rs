//! Verse counts per chapter and for the whole corpus.
//!
//! A chapter's count is its highest attested verse number, not its row count,
//! so duplicated rows do not inflate it.

use compact_str::CompactString;
use serde::Serialize;

use crate::kernel::corpus::Corpus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterStat {
    pub chapter_id: u32,
    pub chapter_name: CompactString,
    pub verse_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub chapters: Vec<ChapterStat>,
    pub total: u64,
}

/// 0 when the chapter is not part of the corpus.
pub fn verse_count(corpus: &Corpus, chapter_id: u32) -> u32 {
    corpus
        .chapter_verses(chapter_id)
        .iter()
        .map(|v| v.verse_number)
        .max()
        .unwrap_or(0)
}

pub fn per_chapter_table(corpus: &Corpus) -> Vec<ChapterStat> {
    corpus
        .verses()
        .chunk_by(|a, b| a.chapter_id == b.chapter_id)
        .map(|chapter| ChapterStat {
            chapter_id: chapter[0].chapter_id,
            chapter_name: chapter[0].chapter_name.clone(),
            verse_count: chapter.iter().map(|v| v.verse_number).max().unwrap_or(0),
        })
        .collect()
}

pub fn total_verse_count(corpus: &Corpus) -> u64 {
    corpus
        .chapter_ids()
        .into_iter()
        .map(|id| u64::from(verse_count(corpus, id)))
        .sum()
}

pub fn stats(corpus: &Corpus) -> CorpusStats {
    let chapters = per_chapter_table(corpus);
    let total = chapters.iter().map(|c| u64::from(c.verse_count)).sum();
    CorpusStats { chapters, total }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/stats.rs"]
mod tests;
