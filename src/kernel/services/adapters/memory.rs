//! In-memory chapter source, for embedding and tests.

use crate::kernel::services::ports::corpus::{ChapterRecord, ChapterSource, Result};

#[derive(Debug, Clone, Default)]
pub struct MemoryChapterSource {
    chapters: Vec<ChapterRecord>,
}

impl MemoryChapterSource {
    pub fn new(chapters: Vec<ChapterRecord>) -> Self {
        Self { chapters }
    }

    pub fn push(&mut self, chapter: ChapterRecord) {
        self.chapters.push(chapter);
    }
}

impl ChapterSource for MemoryChapterSource {
    fn load_chapter(&self, id: u32) -> Result<Option<ChapterRecord>> {
        Ok(self.chapters.iter().find(|c| c.id == id).cloned())
    }

    fn load_all(&self) -> Result<Vec<ChapterRecord>> {
        Ok(self.chapters.clone())
    }
}
