//! ayat - letter-based verse search
//!
//! Module layout:
//! - kernel::normalize: diacritic classification, hamza folding, letter extraction
//! - kernel::corpus: immutable, canonically ordered verse model
//! - kernel::matcher: repertoire / multiset / letter-set matching, consumption ledger
//! - kernel::highlight: per-glyph annotation
//! - kernel::stats: verse counts per chapter and in total
//! - kernel::services: ports (chapter sources, exporters, settings) and adapters

pub mod kernel;

pub use kernel::{
    search, stats, ChapterStat, Corpus, CorpusScope, CorpusStats, Glyph, GlyphClass,
    IntegrityWarning, MatchMode, SearchHit, Verse,
};
