//! Service adapters: filesystem, in-memory and caching implementations.

pub mod cache;
pub mod export;
pub mod file;
pub mod memory;
pub mod paths;
pub mod settings;

pub use cache::CorpusCache;
pub use export::{exporter_for, JsonExporter, TsvExporter};
pub use file::{parse_marked_text, DirChapterSource};
pub use memory::MemoryChapterSource;
pub use paths::{ensure_log_dir, get_config_dir, get_log_dir};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, SettingsError};
