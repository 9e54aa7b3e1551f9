//! Local snapshot cache.
//!
//! Keeps the last two observed deck datasets on disk under fixed `current`
//! and `past` slots, plus the last fetched archetype list for offline runs.
//! [`sync_snapshots`] applies the rotation policy that turns the previously
//! observed meta into the comparison baseline.

use crate::config;
use crate::error::{MetaError, Result};
use crate::models::{Archetype, DeckDataset};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// ---------------------------------------------------------------------------
// SnapshotSlot / SnapshotStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotSlot {
    Current,
    Past,
}

impl SnapshotSlot {
    pub fn name(&self) -> &'static str {
        match self {
            SnapshotSlot::Current => "current",
            SnapshotSlot::Past => "past",
        }
    }
}

impl fmt::Display for SnapshotSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Persistence for the two snapshot slots.
pub trait SnapshotStore {
    fn load_snapshot(&self, slot: SnapshotSlot) -> Result<Option<DeckDataset>>;
    fn save_snapshot(&mut self, slot: SnapshotSlot, dataset: &DeckDataset) -> Result<()>;
}

/// The datasets to compare after [`sync_snapshots`].
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotPair {
    pub current: DeckDataset,
    pub past: DeckDataset,
    /// True if this sync moved the old current snapshot into the past slot.
    pub rotated: bool,
}

/// Seed missing slots with `fresh`, then rotate if the meta moved on.
///
/// When the cached current snapshot's `as_of` differs from `fresh.as_of`, the
/// cached current snapshot becomes `past` and `fresh` becomes `current`. On a
/// first run both slots receive `fresh`, so nothing is reported as shifted.
pub fn sync_snapshots<S: SnapshotStore + ?Sized>(
    store: &mut S,
    fresh: &DeckDataset,
) -> Result<SnapshotPair> {
    for slot in [SnapshotSlot::Past, SnapshotSlot::Current] {
        if store.load_snapshot(slot)?.is_none() {
            info!(%slot, "seeding empty snapshot slot");
            store.save_snapshot(slot, fresh)?;
        }
    }

    let cached_current = store
        .load_snapshot(SnapshotSlot::Current)?
        .unwrap_or_else(|| fresh.clone());

    if cached_current.as_of != fresh.as_of {
        info!(
            previous = %cached_current.as_of,
            latest = %fresh.as_of,
            "meta has shifted; rotating snapshots"
        );
        store.save_snapshot(SnapshotSlot::Past, &cached_current)?;
        store.save_snapshot(SnapshotSlot::Current, fresh)?;
        return Ok(SnapshotPair {
            current: fresh.clone(),
            past: cached_current,
            rotated: true,
        });
    }

    let past = store
        .load_snapshot(SnapshotSlot::Past)?
        .unwrap_or_else(|| fresh.clone());
    Ok(SnapshotPair {
        current: fresh.clone(),
        past,
        rotated: false,
    })
}

// ---------------------------------------------------------------------------
// SnapshotCache
// ---------------------------------------------------------------------------

/// File-system [`SnapshotStore`] rooted at a cache directory.
#[derive(Debug)]
pub struct SnapshotCache {
    /// Directory where snapshot files are stored.
    pub cache_dir: PathBuf,
}

impl SnapshotCache {
    /// Create a snapshot cache.
    ///
    /// If `cache_dir` is `None`, uses the platform-appropriate default cache directory.
    /// Creates the cache directory if it does not exist.
    pub fn new(cache_dir: Option<PathBuf>) -> Result<Self> {
        let dir = cache_dir.unwrap_or_else(config::default_cache_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { cache_dir: dir })
    }

    pub fn snapshot_path(&self, slot: SnapshotSlot) -> PathBuf {
        let files = config::snapshot_files();
        let filename = files.get(slot.name()).copied().unwrap_or("snapshot.json");
        self.cache_dir.join(filename)
    }

    pub fn archetypes_path(&self) -> PathBuf {
        self.cache_dir.join(config::ARCHETYPES_FILE)
    }

    pub fn load_archetypes(&self) -> Result<Option<Vec<Archetype>>> {
        self.read_json(&self.archetypes_path())
    }

    pub fn save_archetypes(&self, archetypes: &[Archetype]) -> Result<()> {
        self.write_json(&self.archetypes_path(), archetypes)
    }

    /// Remove all cached files and recreate the cache directory.
    pub fn clear(&self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }

    /// Read and parse a cached JSON file.
    ///
    /// A missing file is `None`. A corrupt file is deleted and also reported
    /// as `None`, so the next sync reseeds it.
    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        match serde_json::from_str(&contents) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt cache file; removing");
                let _ = fs::remove_file(path);
                Ok(None)
            }
        }
    }

    /// Write to a temp file and rename, so an interrupted write never leaves a
    /// partial file behind.
    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");

        let result = (|| -> Result<()> {
            let body = serde_json::to_string(value)?;
            fs::write(&tmp, body)?;
            fs::rename(&tmp, path)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        debug!(path = %path.display(), ok = result.is_ok(), "wrote cache file");
        result
    }
}

impl SnapshotStore for SnapshotCache {
    fn load_snapshot(&self, slot: SnapshotSlot) -> Result<Option<DeckDataset>> {
        self.read_json(&self.snapshot_path(slot))
    }

    fn save_snapshot(&mut self, slot: SnapshotSlot, dataset: &DeckDataset) -> Result<()> {
        self.write_json(&self.snapshot_path(slot), dataset)
    }
}

pub(crate) fn offline_miss(what: &str) -> MetaError {
    MetaError::NotFound(format!(
        "{} not cached and offline mode is enabled",
        what
    ))
}
