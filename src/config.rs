//! Runtime configuration: where state lives and whether it is written

use crate::stats::{GameKey, JsonFileStore, MemoryStore, Preferences, StatsTracker};
use log::warn;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "termo";
const PREFERENCES_FILE: &str = "preferences.json";

/// Settings resolved from the command line
#[derive(Debug, Clone)]
pub struct Config {
    data_dir: PathBuf,
    persist: bool,
}

impl Config {
    #[must_use]
    pub const fn new(data_dir: PathBuf, persist: bool) -> Self {
        Self { data_dir, persist }
    }

    /// Data directory from the environment
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        data_dir_from(env::var_os("XDG_DATA_HOME"), env::var_os("HOME"))
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Whether statistics and preferences are written to disk
    #[must_use]
    pub const fn persists(&self) -> bool {
        self.persist
    }

    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }

    #[must_use]
    pub fn load_preferences(&self) -> Preferences {
        if self.persist {
            Preferences::load(&self.preferences_path())
        } else {
            Preferences::default()
        }
    }

    /// Save preferences; failures are logged, never fatal
    pub fn save_preferences(&self, preferences: &Preferences) {
        if !self.persist {
            return;
        }
        let path = self.preferences_path();
        if let Err(e) = preferences.save(&path) {
            warn!("Could not save preferences to {}: {e}", path.display());
        }
    }

    /// Statistics for one game, backed by the data directory or by memory
    #[must_use]
    pub fn stats_tracker<K: GameKey>(&self) -> StatsTracker<K> {
        if self.persist {
            StatsTracker::new(Box::new(JsonFileStore::in_dir::<K>(&self.data_dir)))
        } else {
            StatsTracker::new(Box::new(MemoryStore::new()))
        }
    }
}

/// `$XDG_DATA_HOME/termo`, else `$HOME/.local/share/termo`, else `./.termo`
fn data_dir_from(xdg_data_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    if let Some(home) = home.filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local").join("share").join(APP_DIR);
    }
    PathBuf::from(format!(".{APP_DIR}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WordMode;
    use crate::stats::Outcome;

    #[test]
    fn data_dir_prefers_xdg() {
        assert_eq!(
            data_dir_from(Some("/xdg".into()), Some("/home/ana".into())),
            PathBuf::from("/xdg/termo")
        );
        assert_eq!(
            data_dir_from(Some(OsString::new()), Some("/home/ana".into())),
            PathBuf::from("/home/ana/.local/share/termo")
        );
        assert_eq!(data_dir_from(None, None), PathBuf::from(".termo"));
    }

    #[test]
    fn ephemeral_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().to_path_buf(), false);

        let mut tracker = config.stats_tracker::<WordMode>();
        tracker.record(WordMode::Mono, Outcome::Lost).unwrap();
        config.save_preferences(&Preferences::default());

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn persistent_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().to_path_buf(), true);

        let mut tracker = config.stats_tracker::<WordMode>();
        tracker
            .record(WordMode::Duo, Outcome::Won { attempts: 4 })
            .unwrap();
        assert_eq!(config.stats_tracker::<WordMode>().get(WordMode::Duo).wins, 1);

        let mut preferences = Preferences::default();
        preferences.word_mode = WordMode::Duo;
        config.save_preferences(&preferences);
        assert_eq!(config.load_preferences(), preferences);
    }
}
