use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::win_rate::WinRate;

// ---------------------------------------------------------------------------
// DeckStat — one class's performance sample for one archetype
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckStat {
    pub archetype_id: i64,
    #[serde(default)]
    pub total_games: u64,
    #[serde(default)]
    pub pct_of_class: f64,
    #[serde(default)]
    pub pct_of_total: f64,
    #[serde(default)]
    pub win_rate: WinRate,
}

// ---------------------------------------------------------------------------
// DeckDataset — one full popularity-distribution response
// ---------------------------------------------------------------------------

/// Per-class metadata and deck statistics, keyed by class name in the order
/// the classes appear in the response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub metadata: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub data: IndexMap<String, Vec<DeckStat>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeckDataset {
    #[serde(default)]
    pub render_as: String,
    pub series: Series,
    /// Freshness marker; a change means the meta has been recomputed upstream.
    pub as_of: String,
}

impl DeckDataset {
    /// Per-class deck groups in class order.
    ///
    /// Classes follow the order of `series.metadata`; classes present only in
    /// `series.data` come after, in their own order. A class listed in the
    /// metadata with no data yields an empty group.
    pub fn class_groups(&self) -> Vec<(&str, &[DeckStat])> {
        let mut groups: Vec<(&str, &[DeckStat])> = self
            .series
            .metadata
            .keys()
            .map(|class| {
                let decks = self.series.data.get(class).map(Vec::as_slice).unwrap_or(&[]);
                (class.as_str(), decks)
            })
            .collect();

        for (class, decks) in &self.series.data {
            if !self.series.metadata.contains_key(class) {
                groups.push((class.as_str(), decks.as_slice()));
            }
        }
        groups
    }

    pub fn player_classes(&self) -> Vec<&str> {
        self.class_groups().into_iter().map(|(c, _)| c).collect()
    }

    pub fn deck_count(&self) -> usize {
        self.class_groups().iter().map(|(_, d)| d.len()).sum()
    }
}
