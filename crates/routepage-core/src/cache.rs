// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Explicit render cache for interpolated phrase templates.
//!
//! The cache is an ordinary value handed to the resolver, never module
//! state. It holds at most `capacity` phrases and evicts the least recently
//! used one beyond that. Files written by a different crate version are
//! discarded on load, so a deploy starts from an empty cache.

use crate::EngineError;
use routepage_phrases::{InterpolationError, Locale, Vars};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

const CURRENT_CACHE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// `(locale, phrase key, sorted vars)`. HTML and plain renders of the same
/// phrase are keyed apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub locale: Locale,
    pub key: String,
    pub html: bool,
    pub vars: Vec<(String, String)>,
}

impl CacheKey {
    pub fn new(locale: Locale, key: &str, html: bool, vars: &Vars) -> Self {
        // `Vars` is a BTreeMap, so this is already sorted by name.
        Self {
            locale,
            key: key.to_string(),
            html,
            vars: vars.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    #[serde(flatten)]
    key: CacheKey,
    text: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    #[serde(default)]
    version: String,
    entries: Vec<CacheEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Thread-safe map of rendered phrases. Share it behind an `Arc`.
///
/// Entries depend on the phrase text they were rendered from, so one cache
/// must only ever serve one [`PhraseBook`](routepage_phrases::PhraseBook).
#[derive(Debug)]
pub struct RenderCache {
    entries: Mutex<LruCache<CacheKey, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<CacheKey, String>> {
        // Entries are whole strings, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, key: &CacheKey) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn insert(&self, key: CacheKey, text: String) {
        self.lock().put(key, text);
    }

    /// Returns the cached text or renders it. Failed renders are not stored.
    pub fn get_or_render(
        &self,
        key: CacheKey,
        render: impl FnOnce() -> Result<String, InterpolationError>,
    ) -> Result<String, InterpolationError> {
        if let Some(text) = self.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(text);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let text = render()?;
        self.insert(key, text.clone());
        Ok(text)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    pub fn clear(&self) {
        self.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            capacity: self.capacity(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "routepage", "routepage")
            .map(|dirs| dirs.cache_dir().join("render_cache.json"))
            .unwrap_or_else(|| PathBuf::from("render_cache.json"))
    }

    /// Loads a persisted cache with the default capacity.
    pub fn load(path: &Path) -> Self {
        Self::load_with_capacity(path, DEFAULT_CAPACITY)
    }

    /// Loads a persisted cache. Missing, unreadable or stale files give an
    /// empty cache. Entries beyond `capacity` are dropped.
    pub fn load_with_capacity(path: &Path, capacity: usize) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                match serde_json::from_str::<CacheFile>(&content) {
                    Ok(file) if file.version == CURRENT_CACHE_VERSION => {
                        log::info!(
                            "[Cache] Loaded {} entries from {:?}",
                            file.entries.len(),
                            path
                        );
                        let cache = Self::with_capacity(capacity);
                        {
                            let mut entries = cache.lock();
                            for entry in file.entries {
                                entries.put(entry.key, entry.text);
                            }
                        }
                        return cache;
                    }
                    Ok(file) => {
                        log::info!(
                            "[Cache] Discarding cache from version {:?} (current {})",
                            file.version,
                            CURRENT_CACHE_VERSION
                        );
                    }
                    Err(e) => log::warn!("[Cache] Ignoring unreadable cache {:?}: {}", path, e),
                }
            }
        }
        Self::with_capacity(capacity)
    }

    pub fn save(&self, path: &Path) -> Result<(), EngineError> {
        let mut entries: Vec<CacheEntry> = self
            .lock()
            .iter()
            .map(|(key, text)| CacheEntry {
                key: key.clone(),
                text: text.clone(),
            })
            .collect();
        // Stable file contents for identical caches.
        entries.sort_by(|a, b| {
            (a.key.locale, &a.key.key, a.key.html, &a.key.vars)
                .cmp(&(b.key.locale, &b.key.key, b.key.html, &b.key.vars))
        });

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = CacheFile {
            version: CURRENT_CACHE_VERSION.to_string(),
            entries,
        };
        std::fs::write(path, serde_json::to_string_pretty(&file)?)?;
        log::info!("[Cache] Saved {} entries to {:?}", file.entries.len(), path);
        Ok(())
    }
}
