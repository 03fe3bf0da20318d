//! Favorites persistence
//!
//! A process-wide set of starred posting links backed by durable local
//! key/value storage. Hydrated once at startup; every toggle synchronously
//! re-serializes the whole set. Storage failures degrade: a corrupt or
//! missing record hydrates to an empty set and a failed write is logged and
//! swallowed, never surfaced to the caller.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Storage key for the favorites set (JSON array of link strings).
pub const FAVORITES_KEY: &str = "job-favorites";

// =============================================================================
// Key/Value Storage Trait (Infrastructure)
// =============================================================================

/// Durable key/value storage collaborator. Deliberately synchronous: every
/// mutation persists before the call returns.
pub trait BaseKeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage: one file per key under a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BaseKeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create storage dir {}", self.dir.display()))?;
        std::fs::write(self.path_for(key), value)
            .with_context(|| format!("Failed to write storage key {}", key))
    }
}

/// In-memory storage for tests.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BaseKeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().expect("storage lock poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .expect("storage lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Favorites Store
// =============================================================================

/// Set of favorited posting links, keyed by each posting's `link`.
pub struct FavoritesStore {
    favorites: HashSet<String>,
    storage: Arc<dyn BaseKeyValueStore>,
}

impl FavoritesStore {
    /// Hydrate the set from storage. Missing or malformed data initializes
    /// to an empty set; this never fails.
    pub fn load(storage: Arc<dyn BaseKeyValueStore>) -> Self {
        let favorites: HashSet<String> = storage
            .get(FAVORITES_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .map(|links| links.into_iter().collect())
            .unwrap_or_default();

        debug!(count = favorites.len(), "Hydrated favorites");
        Self { favorites, storage }
    }

    /// O(1) membership test.
    pub fn is_favorite(&self, link: &str) -> bool {
        self.favorites.contains(link)
    }

    /// Flip membership for `link` and persist the whole set.
    pub fn toggle(&mut self, link: &str) {
        if !self.favorites.remove(link) {
            self.favorites.insert(link.to_string());
        }
        self.persist();
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    fn persist(&self) {
        // Sorted for a stable on-disk encoding.
        let mut links: Vec<&str> = self.favorites.iter().map(String::as_str).collect();
        links.sort_unstable();

        let raw = match serde_json::to_string(&links) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to encode favorites");
                return;
            }
        };

        if let Err(e) = self.storage.set(FAVORITES_KEY, &raw) {
            warn!(error = %e, "Failed to persist favorites");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let storage = Arc::new(MemoryStore::new());
        let mut favorites = FavoritesStore::load(storage);

        assert!(!favorites.is_favorite("https://x/1"));
        favorites.toggle("https://x/1");
        assert!(favorites.is_favorite("https://x/1"));
        favorites.toggle("https://x/1");
        assert!(!favorites.is_favorite("https://x/1"));
    }

    #[test]
    fn test_every_toggle_persists_the_full_set() {
        let storage = Arc::new(MemoryStore::new());
        let mut favorites = FavoritesStore::load(Arc::clone(&storage) as Arc<dyn BaseKeyValueStore>);

        favorites.toggle("https://x/2");
        favorites.toggle("https://x/1");
        favorites.toggle("https://x/3");
        favorites.toggle("https://x/2");

        let raw = storage.get(FAVORITES_KEY).unwrap();
        let persisted: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, vec!["https://x/1", "https://x/3"]);
    }

    #[test]
    fn test_malformed_storage_hydrates_empty() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(FAVORITES_KEY, "{not json[").unwrap();

        let favorites = FavoritesStore::load(storage);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_missing_storage_hydrates_empty() {
        let favorites = FavoritesStore::load(Arc::new(MemoryStore::new()));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_hydration_round_trip() {
        let storage: Arc<dyn BaseKeyValueStore> = Arc::new(MemoryStore::new());

        let mut favorites = FavoritesStore::load(Arc::clone(&storage));
        favorites.toggle("https://x/1");
        favorites.toggle("https://x/2");

        let rehydrated = FavoritesStore::load(storage);
        assert_eq!(rehydrated.len(), 2);
        assert!(rehydrated.is_favorite("https://x/1"));
        assert!(rehydrated.is_favorite("https://x/2"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!(
            "scout-favorites-test-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let store = FileStore::new(&dir);

        assert_eq!(store.get(FAVORITES_KEY), None);
        store.set(FAVORITES_KEY, r#"["https://x/1"]"#).unwrap();
        assert_eq!(store.get(FAVORITES_KEY).as_deref(), Some(r#"["https://x/1"]"#));

        let favorites = FavoritesStore::load(Arc::new(store));
        assert!(favorites.is_favorite("https://x/1"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
