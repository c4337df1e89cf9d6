//! Service ports: traits + data contracts.

pub mod corpus;
pub mod export;
pub mod settings;

pub use corpus::{ChapterRecord, ChapterSource, CorpusLoadError, EmptyCorpusError, RawVerse};
pub use export::{ExportError, ExportFormat, ExportRow, ResultExporter};
pub use settings::Settings;
