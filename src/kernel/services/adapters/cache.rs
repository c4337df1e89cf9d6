//! Caller-owned corpus cache: scope → loaded corpus.
//!
//! Nothing is evicted behind the caller's back; `invalidate`/`clear` are the
//! only ways entries go away.

use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::kernel::corpus::{Corpus, CorpusScope};
use crate::kernel::services::ports::corpus::{ChapterSource, Result};

pub struct CorpusCache<S> {
    source: S,
    entries: FxHashMap<CorpusScope, Arc<Corpus>>,
}

impl<S: ChapterSource> CorpusCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: FxHashMap::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn get(&self, scope: CorpusScope) -> Option<Arc<Corpus>> {
        self.entries.get(&scope).cloned()
    }

    /// Load errors are not cached; the next call tries the source again.
    pub fn get_or_load(&mut self, scope: CorpusScope) -> Result<Arc<Corpus>> {
        if let Some(corpus) = self.entries.get(&scope) {
            tracing::trace!(scope = %scope, "corpus cache hit");
            return Ok(corpus.clone());
        }
        let corpus = Arc::new(Corpus::load(&self.source, scope)?);
        self.entries.insert(scope, corpus.clone());
        Ok(corpus)
    }

    pub fn invalidate(&mut self, scope: CorpusScope) -> bool {
        self.entries.remove(&scope).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/cache.rs"]
mod tests;
