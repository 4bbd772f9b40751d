//! File system cache paths and a small in-memory LRU memo.
//!
//! - Disk: the provider roster, so name resolution does not refetch it
//! - Memory: name-index lookups within one process

use lru::LruCache;
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::Mutex,
};


/// Directory name under the platform cache dir.
pub const CACHE_DIR_NAME: &str = "nba-compare";

/// Base cache dir: `~/.cache/nba-compare` (or the platform equivalent).
pub fn cache_base_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(CACHE_DIR_NAME)
}

/// Path: ~/.cache/nba-compare/roster_{season}.json
pub fn roster_cache_path(season: &str) -> PathBuf {
    cache_base_dir().join(format!("roster_{}.json", season))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Thread-safe LRU memo. The lock is never held across an `.await`.
pub struct MemoryCache<K: Hash + Eq, V> {
    inner: Mutex<LruCache<K, V>>,
}

impl<K, V> MemoryCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Create a memo holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let size = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(size)),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().ok()?.get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        if let Ok(mut cache) = self.inner.lock() {
            cache.put(key, value);
        }
    }
}
