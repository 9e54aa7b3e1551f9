use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{MetaError, Result};

pub const SITE_BASE: &str = "https://hsreplay.net";
/// Host the API paths below are resolved against.
pub const API_BASE: &str = "https://hsreplay.net";
pub const ARCHETYPES_PATH: &str = "/api/v1/archetypes/?format=json";
pub const DECK_DATA_PATH: &str = "/analytics/query/archetype_popularity_distribution_stats_v2/";

pub const GAME_TYPE: &str = "RANKED_STANDARD";
pub const LEAGUE_RANK_RANGE: &str = "BRONZE_THROUGH_GOLD";
pub const REGION: &str = "ALL";

/// File holding the last successfully fetched archetype list, used offline.
pub const ARCHETYPES_FILE: &str = "archetypes.json";

pub fn archetypes_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), ARCHETYPES_PATH)
}

pub fn snapshot_files() -> HashMap<&'static str, &'static str> {
    HashMap::from([("current", "currentmeta.json"), ("past", "pastmeta.json")])
}

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("hs-meta")
    } else {
        PathBuf::from(".hs-meta-cache")
    }
}

// ---------------------------------------------------------------------------
// TimeRange
// ---------------------------------------------------------------------------

/// Window of games the popularity statistics are aggregated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    CurrentPatch,
    CurrentExpansion,
    Last7Days,
}

impl TimeRange {
    /// Default fallback order: narrowest window first.
    pub const FALLBACK_ORDER: [TimeRange; 3] = [
        TimeRange::CurrentPatch,
        TimeRange::CurrentExpansion,
        TimeRange::Last7Days,
    ];

    pub fn as_query_value(&self) -> &'static str {
        match self {
            TimeRange::CurrentPatch => "CURRENT_PATCH",
            TimeRange::CurrentExpansion => "CURRENT_EXPANSION",
            TimeRange::Last7Days => "LAST_7_DAYS",
        }
    }

    /// Full popularity-distribution URL for this time range under `base`.
    pub fn deck_data_url(&self, base: &str) -> String {
        format!(
            "{}{}?GameType={}&LeagueRankRange={}&Region={}&TimeRange={}",
            base.trim_end_matches('/'),
            DECK_DATA_PATH,
            GAME_TYPE,
            LEAGUE_RANK_RANGE,
            REGION,
            self.as_query_value()
        )
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

// ---------------------------------------------------------------------------
// TierFloors
// ---------------------------------------------------------------------------

/// Minimum whole-percent win rate for each tier.
///
/// `t4` is the catch-all floor and is normally `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierFloors {
    pub t1: f64,
    pub t2: f64,
    pub t3: f64,
    pub t4: f64,
}

impl TierFloors {
    /// Parse a floor override such as `"52.5"`. `name` labels the error.
    ///
    /// Non-finite values are rejected: a `NaN` floor would admit no deck.
    pub fn parse_floor(name: &str, raw: &str) -> Result<f64> {
        let floor = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| MetaError::InvalidArgument(format!("{name} must be a number")))?;
        if !floor.is_finite() {
            return Err(MetaError::InvalidArgument(format!(
                "{name} must be a finite number, got {raw}"
            )));
        }
        Ok(floor)
    }
}

impl Default for TierFloors {
    fn default() -> Self {
        Self {
            t1: 55.0,
            t2: 50.0,
            t3: 45.0,
            t4: 0.0,
        }
    }
}
