//! Key-value environment context.
//!
//! The assessment keeps its in-progress answers and the admin session marker in
//! a small string store, the way a browser keeps them in local storage. The core
//! only sees the [`KeyValueStore`] trait.

use crate::error::{DonorscoreError, Result};
use crate::scoring::AnswerSet;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ANSWERS_KEY: &str = "assessmentResults";
pub const ADMIN_SESSION_KEY: &str = "admin_authenticated";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A JSON object of string values on disk, rewritten on every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: &Path) -> Result<Self> {
        let entries = if path.exists() {
            let content = fs::read_to_string(path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    DonorscoreError::Storage(format!("{}: {}", path.display(), e))
                })?
            }
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), keys = entries.len(), "opened storage");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

pub fn load_answers(store: &dyn KeyValueStore) -> Result<Option<AnswerSet>> {
    match store.get(ANSWERS_KEY)? {
        Some(raw) => Ok(Some(parse_answers(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_answers(store: &mut dyn KeyValueStore, answers: &AnswerSet) -> Result<()> {
    let json = serde_json::to_string(answers)?;
    store.set(ANSWERS_KEY, &json)
}

pub fn clear_answers(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove(ANSWERS_KEY)
}

/// Parses `{"0": "ask_interests", "1": "ask_more"}`.
pub fn parse_answers(raw: &str) -> Result<AnswerSet> {
    serde_json::from_str(raw)
        .map_err(|e| DonorscoreError::InvalidAnswer(format!("malformed answer set: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn answers_round_trip_through_memory_store() {
        let mut store = MemoryStore::new();
        assert!(load_answers(&store).expect("load should work").is_none());

        let answers = AnswerSet::from([(0, "ask_interests".to_string())]);
        save_answers(&mut store, &answers).expect("save should work");
        assert_eq!(
            load_answers(&store).expect("load should work"),
            Some(answers)
        );

        clear_answers(&mut store).expect("clear should work");
        assert!(load_answers(&store).expect("load should work").is_none());
    }

    #[test]
    fn stored_answers_use_string_indices() {
        let mut store = MemoryStore::new();
        let answers = AnswerSet::from([(3, "step_back".to_string())]);
        save_answers(&mut store, &answers).expect("save should work");
        assert_eq!(
            store.get(ANSWERS_KEY).expect("get should work").as_deref(),
            Some(r#"{"3":"step_back"}"#)
        );
    }

    #[test]
    fn file_store_persists_between_opens() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("nested/storage.json");

        let mut store = JsonFileStore::open(&path).expect("open should work");
        store.set("k", "v").expect("set should work");
        drop(store);

        let mut reopened = JsonFileStore::open(&path).expect("reopen should work");
        assert_eq!(reopened.get("k").expect("get").as_deref(), Some("v"));
        reopened.remove("k").expect("remove should work");

        let again = JsonFileStore::open(&path).expect("reopen should work");
        assert!(again.get("k").expect("get").is_none());
    }

    #[test]
    fn file_store_rejects_corrupt_content() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").expect("fixture should write");

        let err = JsonFileStore::open(&path).expect_err("open should fail");
        assert!(matches!(err, DonorscoreError::Storage(_)));
    }

    #[test]
    fn malformed_answers_are_reported() {
        let err = parse_answers("[1, 2]").expect_err("array is not an answer set");
        assert!(err.to_string().contains("malformed answer set"));
    }
}
