//! Hearthstone meta tracker.
//!
//! Fetches archetype popularity statistics from HSReplay, merges them with the
//! archetype list, ranks decks into tiers by win rate and reports how each
//! deck moved since the previously observed meta. The last two observed
//! datasets are cached locally as the comparison baseline.
//!
//! # Quick start
//!
//! ```no_run
//! use hs_meta::MetaClient;
//!
//! let mut client = MetaClient::builder().build().unwrap();
//! let report = client.report().unwrap();
//!
//! if let Some(line) = report.announcement() {
//!     println!("{line}");
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod meta;
pub mod models;
pub mod report;

#[cfg(feature = "async")]
pub use async_client::AsyncMetaClient;
pub use cache::{sync_snapshots, SnapshotCache, SnapshotPair, SnapshotSlot, SnapshotStore};
pub use config::{TierFloors, TimeRange};
pub use error::{MetaError, Result};
pub use meta::{
    detect_shift, merge_decks, rank_and_tier, tier_for, Direction, FlattenedRanking, MergedDeck,
    ShiftResult, Tier, TieredDecks,
};
pub use report::{MetaReport, WidgetSize, WinRateBand};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use crate::fetch::HsReplayClient;
use crate::models::{Archetype, DeckDataset};

// ---------------------------------------------------------------------------
// MetaClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`MetaClient`].
pub struct MetaClientBuilder {
    cache_dir: Option<PathBuf>,
    api_base: String,
    offline: bool,
    timeout: Duration,
    tier_floors: TierFloors,
    time_ranges: Vec<TimeRange>,
}

impl Default for MetaClientBuilder {
    fn default() -> Self {
        Self {
            cache_dir: None,
            api_base: config::API_BASE.to_string(),
            offline: false,
            timeout: Duration::from_secs(30),
            tier_floors: TierFloors::default(),
            time_ranges: TimeRange::FALLBACK_ORDER.to_vec(),
        }
    }
}

impl MetaClientBuilder {
    /// Set a custom cache directory.
    ///
    /// If not set, the platform cache directory joined with `hs-meta` is used
    /// (e.g. `~/.cache/hs-meta` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Host the HSReplay API paths are requested from. Defaults to
    /// [`config::API_BASE`].
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, nothing is fetched; the run is served from the cached
    /// current snapshot and archetype list.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn tier_floors(mut self, floors: TierFloors) -> Self {
        self.tier_floors = floors;
        self
    }

    /// Time ranges to try, in order, when fetching deck statistics.
    pub fn time_ranges(mut self, ranges: Vec<TimeRange>) -> Self {
        self.time_ranges = ranges;
        self
    }

    /// Build the client, creating the cache directory if needed.
    pub fn build(self) -> Result<MetaClient> {
        if self.time_ranges.is_empty() {
            return Err(MetaError::InvalidArgument(
                "at least one time range is required".into(),
            ));
        }
        let cache = SnapshotCache::new(self.cache_dir)?;
        Ok(MetaClient {
            cache,
            http: HsReplayClient::with_base_url(self.api_base, self.timeout, self.time_ranges),
            offline: self.offline,
            tier_floors: self.tier_floors,
        })
    }
}

// ---------------------------------------------------------------------------
// MetaClient
// ---------------------------------------------------------------------------

/// Runs the fetch, snapshot sync and ranking pipeline.
pub struct MetaClient {
    cache: SnapshotCache,
    http: HsReplayClient,
    offline: bool,
    tier_floors: TierFloors,
}

impl MetaClient {
    pub fn builder() -> MetaClientBuilder {
        MetaClientBuilder::default()
    }

    /// Archetype list, fetched (and cached) online or read from cache offline.
    pub fn archetypes(&mut self) -> Result<Vec<Archetype>> {
        if self.offline {
            return self
                .cache
                .load_archetypes()?
                .ok_or_else(|| cache::offline_miss("archetype list"));
        }
        let archetypes = self.http.fetch_archetypes()?;
        self.cache.save_archetypes(&archetypes)?;
        Ok(archetypes)
    }

    /// Latest deck statistics, fetched online or the cached current snapshot offline.
    pub fn latest_dataset(&mut self) -> Result<DeckDataset> {
        if self.offline {
            return self
                .cache
                .load_snapshot(SnapshotSlot::Current)?
                .ok_or_else(|| cache::offline_miss("current meta snapshot"));
        }
        let (_, dataset) = self.http.fetch_deck_data()?;
        Ok(dataset)
    }

    /// Fetch both datasets, sync the snapshots and build the report.
    ///
    /// Any fetch failure fails the whole run.
    pub fn report(&mut self) -> Result<MetaReport> {
        let archetypes = self.archetypes()?;
        let fresh = self.latest_dataset()?;
        let pair = sync_snapshots(&mut self.cache, &fresh)?;
        let report = MetaReport::from_snapshots(&pair, &archetypes, self.tier_floors);
        info!(
            as_of = %report.as_of,
            decks = report.current.len(),
            rotated = report.rotated,
            "meta report ready"
        );
        Ok(report)
    }

    /// Remove all cached snapshots and archetypes.
    pub fn clear_cache(&self) -> Result<()> {
        self.cache.clear()
    }

    pub fn tier_floors(&self) -> TierFloors {
        self.tier_floors
    }
}

impl fmt::Display for MetaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MetaClient(cache_dir={}, offline={}, floors=[{}, {}, {}, {}])",
            self.cache.cache_dir.display(),
            self.offline,
            self.tier_floors.t1,
            self.tier_floors.t2,
            self.tier_floors.t3,
            self.tier_floors.t4
        )
    }
}
