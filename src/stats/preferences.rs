use crate::game::{Difficulty, WordMode};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Remembered choices between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default)]
    pub word_mode: WordMode,

    #[serde(default)]
    pub difficulty: Difficulty,

    /// Word game help was shown once already
    #[serde(default)]
    pub word_help_seen: bool,

    #[serde(default)]
    pub code_help_seen: bool,
}

const fn default_version() -> u32 {
    1
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            version: default_version(),
            word_mode: WordMode::default(),
            difficulty: Difficulty::default(),
            word_help_seen: false,
            code_help_seen: false,
        }
    }
}

impl Preferences {
    /// Read preferences from `path`, defaults when missing or malformed
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str::<Self>(&contents) {
            Ok(mut preferences) => {
                preferences.migrate();
                preferences
            }
            Err(e) => {
                warn!("Ignoring malformed preferences in {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
    }

    fn migrate(&mut self) {
        if self.version == 0 {
            self.version = 1;
        }
    }
}
