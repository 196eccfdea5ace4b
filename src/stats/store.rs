//! Loading and saving statistics books

use super::record::{GameKey, Outcome, StatsBook, StatsRecord};
use log::{debug, warn};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where a statistics book lives between runs
pub trait StatsStore<K: GameKey> {
    /// Read the book, falling back to defaults when missing or unreadable
    fn load(&self) -> StatsBook<K>;

    /// Replace the stored book
    ///
    /// # Errors
    /// Returns an error if the book cannot be written.
    fn save(&self, book: &StatsBook<K>) -> io::Result<()>;
}

/// Name a key is stored under: `"1"` for Mono, `"easy"` for Easy
fn storage_name<K: GameKey>(key: K) -> Option<String> {
    match serde_json::to_value(key).ok()? {
        Value::String(name) => Some(name),
        other => Some(other.to_string()),
    }
}

/// Keep every record whose key and contents parse, warn about the rest
fn parse_book<K: GameKey>(contents: &str, origin: &str) -> StatsBook<K> {
    let entries: BTreeMap<String, Value> = match serde_json::from_str(contents) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Ignoring malformed {} in {origin}: {e}", K::STORAGE_KEY);
            return StatsBook::default();
        }
    };

    let mut records = BTreeMap::new();
    for (name, value) in entries {
        let Some(&key) = K::ALL
            .iter()
            .find(|&&key| storage_name(key).as_deref() == Some(name.as_str()))
        else {
            warn!("Dropping unknown {} key {name:?} in {origin}", K::STORAGE_KEY);
            continue;
        };
        match serde_json::from_value::<StatsRecord>(value) {
            Ok(record) => {
                records.insert(key, record);
            }
            Err(e) => warn!("Dropping malformed {key} record in {origin}: {e}"),
        }
    }
    StatsBook::from_records(records)
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/<storage key>.json`
    pub fn in_dir<K: GameKey>(dir: &Path) -> Self {
        Self::new(dir.join(format!("{}.json", K::STORAGE_KEY)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<K: GameKey> StatsStore<K> for JsonFileStore {
    fn load(&self) -> StatsBook<K> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => parse_book(&contents, &self.path.display().to_string()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No statistics at {}, starting fresh", self.path.display());
                StatsBook::default()
            }
            Err(e) => {
                warn!("Could not read {}: {e}", self.path.display());
                StatsBook::default()
            }
        }
    }

    fn save(&self, book: &StatsBook<K>) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(book)?;
        fs::write(&self.path, contents)
    }
}

/// In-memory store for runs that must not touch the disk
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RefCell<Option<String>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously serialized contents
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
            saves: Cell::new(0),
        }
    }

    /// Last saved JSON, if any
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl<K: GameKey> StatsStore<K> for MemoryStore {
    fn load(&self) -> StatsBook<K> {
        self.contents
            .borrow()
            .as_deref()
            .map_or_else(StatsBook::default, |contents| parse_book(contents, "memory"))
    }

    fn save(&self, book: &StatsBook<K>) -> io::Result<()> {
        let contents = serde_json::to_string(book)?;
        *self.contents.borrow_mut() = Some(contents);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// Statistics for one game, loaded once and saved after each result
pub struct StatsTracker<K: GameKey> {
    store: Box<dyn StatsStore<K>>,
    book: StatsBook<K>,
}

impl<K: GameKey> StatsTracker<K> {
    pub fn new(store: Box<dyn StatsStore<K>>) -> Self {
        let book = store.load();
        Self { store, book }
    }

    #[must_use]
    pub const fn book(&self) -> &StatsBook<K> {
        &self.book
    }

    /// Record for `key`, default if the book has none
    #[must_use]
    pub fn get(&self, key: K) -> StatsRecord {
        self.book.get(key).cloned().unwrap_or_default()
    }

    /// Count a finished session and persist the whole book
    ///
    /// The in-memory counters are updated even if saving fails.
    ///
    /// # Errors
    /// Returns the store's error if the book could not be saved.
    pub fn record(&mut self, key: K, outcome: Outcome) -> io::Result<()> {
        let record = self.book.record(key, outcome);
        debug!("{key} statistics now {record:?}");
        self.store.save(&self.book)
    }
}
