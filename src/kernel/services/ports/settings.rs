use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::kernel::matcher::MatchMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus_dir: Option<PathBuf>,
    #[serde(default)]
    pub default_mode: MatchMode,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            corpus_dir: None,
            default_mode: MatchMode::default(),
            color: default_color(),
        }
    }
}
