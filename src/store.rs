//! Persistence of the presentation collection under the `"presentations"` key.
//!
//! A store always reads and writes the whole collection. Subscribers receive the new
//! collection after every successful save.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::watch;

use crate::models::presentation::Presentation;

/// Key under which the collection is stored.
pub const PRESENTATIONS_KEY: &str = "presentations";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Backing storage for the presentation collection.
pub trait PresentationStore {
    fn load(&self) -> Result<Vec<Presentation>>;

    /// Replaces the stored collection and notifies subscribers.
    fn save(&self, presentations: &[Presentation]) -> Result<()>;

    fn subscribe(&self) -> watch::Receiver<Vec<Presentation>>;
}

/// In-process store, used by the wasm build and in tests.
#[derive(Debug)]
pub struct MemoryStore {
    sender: watch::Sender<Vec<Presentation>>,
}

impl MemoryStore {
    pub fn new(initial: Vec<Presentation>) -> Self {
        let (sender, _) = watch::channel(initial);
        MemoryStore { sender }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new(Vec::new())
    }
}

impl PresentationStore for MemoryStore {
    fn load(&self) -> Result<Vec<Presentation>> {
        Ok(self.sender.borrow().clone())
    }

    fn save(&self, presentations: &[Presentation]) -> Result<()> {
        self.sender.send_replace(presentations.to_vec());
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Presentation>> {
        self.sender.subscribe()
    }
}

/// Key-value JSON file. Keys other than `"presentations"` are kept as they are.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    sender: watch::Sender<Vec<Presentation>>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty collection; unreadable
    /// contents are a `StoreError::Json`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let initial = decode_presentations(&read_entries(&path)?)?;
        let (sender, _) = watch::channel(initial);
        log::debug!("Opened store at {}", path.display());
        Ok(FileStore { path, sender })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reads the key-value object. A missing file is empty; an unparsable one is an error so
/// that a later save cannot overwrite it.
fn read_entries(path: &Path) -> Result<IndexMap<String, Value>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(IndexMap::new()),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&text).map_err(|e| {
        log::warn!("Store {} is not a JSON object: {}", path.display(), e);
        StoreError::from(e)
    })
}

fn decode_presentations(entries: &IndexMap<String, Value>) -> Result<Vec<Presentation>> {
    let Some(value) = entries.get(PRESENTATIONS_KEY) else {
        return Ok(Vec::new());
    };
    Vec::<Presentation>::deserialize(value).map_err(|e| {
        log::warn!("Stored presentations are unreadable: {}", e);
        StoreError::from(e)
    })
}

impl PresentationStore for FileStore {
    fn load(&self) -> Result<Vec<Presentation>> {
        decode_presentations(&read_entries(&self.path)?)
    }

    fn save(&self, presentations: &[Presentation]) -> Result<()> {
        // Fails on unreadable contents, leaving the file untouched.
        let mut entries = read_entries(&self.path)?;
        decode_presentations(&entries)?;
        entries.insert(
            PRESENTATIONS_KEY.to_string(),
            serde_json::to_value(presentations)?,
        );
        let text = serde_json::to_string_pretty(&entries)?;

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);
        let written = fs::write(&temp, text).and_then(|()| fs::rename(&temp, &self.path));
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&temp) {
                log::debug!("Temporary file {} not removed: {}", temp.display(), cleanup);
            }
            return Err(e.into());
        }

        log::debug!(
            "Saved {} presentations to {}",
            presentations.len(),
            self.path.display()
        );
        self.sender.send_replace(presentations.to_vec());
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Presentation>> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slide::Slide;
    use crate::models::theme::ThemeId;

    fn deck(title: &str) -> Presentation {
        Presentation::new_with_slides(title, vec![Slide::new("Intro", "")], ThemeId::default())
    }

    #[test]
    fn memory_store_notifies_subscribers() {
        let store = MemoryStore::default();
        let mut rx = store.subscribe();
        assert!(store.load().unwrap().is_empty());

        store.save(&[deck("A")]).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update()[0].title, "A");
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn file_store_round_trips_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.json");
        fs::write(&path, r#"{"settings":{"zoom":2},"presentations":[]}"#).unwrap();

        let store = FileStore::open(&path).unwrap();
        let decks = vec![deck("A"), deck("B")];
        store.save(&decks).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.load().unwrap(), decks);
        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["settings"]["zoom"], 2);
        assert!(!dir.path().join("kv.json.tmp").exists());
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("absent.json")).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn unreadable_contents_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.json");
        fs::write(&path, r#"{"presentations":"oops"}"#).unwrap();
        assert!(matches!(FileStore::open(&path), Err(StoreError::Json(_))));

        fs::write(&path, "[]").unwrap();
        assert!(matches!(FileStore::open(&path), Err(StoreError::Json(_))));
    }

    #[test]
    fn save_never_overwrites_unreadable_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.json");
        let store = FileStore::open(&path).unwrap();

        fs::write(&path, "not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
        assert!(matches!(store.save(&[deck("A")]), Err(StoreError::Json(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");

        let seeded = r#"{"presentations":[{"id":"p1","title":"Odd","createdAt":1,"updatedAt":1,"theme":"ocean-teal"}]}"#;
        fs::write(&path, seeded).unwrap();
        assert!(store.save(&[deck("A")]).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), seeded);
    }
}
