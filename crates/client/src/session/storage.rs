//! Key-value storage backing the session.
//!
//! Implementations are infallible from the caller's point of view: when the
//! underlying medium misbehaves, reads return `None` and writes are dropped
//! (and logged). That matches a context where persistent storage may simply
//! not exist.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tokio::sync::broadcast;

/// Buffer capacity of the change-notification channel.
const EVENT_CAPACITY: usize = 64;

/// A single key change. `new_value` is `None` when the key was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: String,
    pub new_value: Option<String>,
}

/// Persisted string key-value storage.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Write several keys as one logical unit.
    fn set_many(&self, entries: &[(&str, &str)]) {
        for (key, value) in entries {
            self.set(key, value);
        }
    }

    /// Remove several keys as one logical unit.
    fn remove_many(&self, keys: &[&str]) {
        for key in keys {
            self.remove(key);
        }
    }

    /// Subscribe to writes made through any handle sharing this storage.
    ///
    /// Returns `None` for storage that cannot notify.
    fn subscribe(&self) -> Option<broadcast::Receiver<StorageEvent>> {
        None
    }
}

// ---------------------------------------------------------------------------
// Unavailable
// ---------------------------------------------------------------------------

/// Storage for contexts with no persistence: reads miss, writes vanish.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl SessionStorage for UnavailableStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Process-local storage. Share one instance (behind an `Arc`) between
/// several [`SessionStore`](super::SessionStore)s to model tabs of the same
/// origin; last writer wins.
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    events: broadcast::Sender<StorageEvent>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            entries: Mutex::new(HashMap::new()),
            events,
        }
    }

    fn publish(&self, key: &str, new_value: Option<&str>) {
        // Zero receivers is fine.
        let _ = self.events.send(StorageEvent {
            key: key.to_string(),
            new_value: new_value.map(str::to_string),
        });
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.set_many(&[(key, value)]);
    }

    fn remove(&self, key: &str) {
        self.remove_many(&[key]);
    }

    fn set_many(&self, entries: &[(&str, &str)]) {
        {
            let mut map = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            for (key, value) in entries {
                map.insert((*key).to_string(), (*value).to_string());
            }
        }
        for (key, value) in entries {
            self.publish(key, Some(*value));
        }
    }

    fn remove_many(&self, keys: &[&str]) {
        {
            let mut map = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            for key in keys {
                map.remove(*key);
            }
        }
        for key in keys {
            self.publish(key, None);
        }
    }

    fn subscribe(&self) -> Option<broadcast::Receiver<StorageEvent>> {
        Some(self.events.subscribe())
    }
}

// ---------------------------------------------------------------------------
// File-backed
// ---------------------------------------------------------------------------

/// Storage persisted as a JSON object in a single file, so a session
/// survives process restarts.
///
/// The whole map is rewritten on every change (via a sibling temp file and a
/// rename). Writers are serialized from the in-memory update through the
/// rename, so the file always ends on the latest state. I/O failures are
/// logged and otherwise ignored.
pub struct FileStorage {
    path: PathBuf,
    memory: MemoryStorage,
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file starts empty; an unreadable or corrupt one is logged
    /// and also starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let memory = MemoryStorage::new();

        match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<HashMap<String, String>>(&bytes) {
                Ok(map) => {
                    *memory.entries.lock().unwrap_or_else(PoisonError::into_inner) = map;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt session file");
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read session file");
            }
        }

        Self {
            path,
            memory,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the file from the current map. Callers hold `write_lock`.
    fn persist(&self) {
        let snapshot = self
            .memory
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let bytes = match serde_json::to_vec_pretty(&snapshot) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize session");
                return;
            }
        };

        let tmp = self.path.with_extension("tmp");
        let result = std::fs::write(&tmp, bytes).and_then(|()| std::fs::rename(&tmp, &self.path));
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist session");
        }
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.memory.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.set_many(&[(key, value)]);
    }

    fn remove(&self, key: &str) {
        self.remove_many(&[key]);
    }

    fn set_many(&self, entries: &[(&str, &str)]) {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.memory.set_many(entries);
        self.persist();
    }

    fn remove_many(&self, keys: &[&str]) {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.memory.remove_many(keys);
        self.persist();
    }

    fn subscribe(&self) -> Option<broadcast::Receiver<StorageEvent>> {
        self.memory.subscribe()
    }
}
