//! Search core: normalization, corpus model, matching, highlighting, statistics.
//!
//! Everything here is synchronous and pure over an already loaded `Corpus`;
//! the only I/O sits behind `services::ports::ChapterSource`.

pub mod corpus;
pub mod highlight;
pub mod matcher;
pub mod normalize;
pub mod services;
pub mod stats;

pub use corpus::{Corpus, CorpusScope, IntegrityWarning, Verse};
pub use highlight::{Glyph, GlyphClass};
pub use matcher::{search, ConsumptionLedger, MatchMode, PreparedQuery, SearchHit};
pub use stats::{stats, ChapterStat, CorpusStats};
