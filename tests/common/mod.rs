//! Shared fixtures for the hs-meta integration tests.
//!
//! Builds small archetype lists and deck datasets in the shape the HSReplay
//! API returns them.

#![allow(dead_code)]

use hs_meta::meta::MergedDeck;
use hs_meta::models::{Archetype, DeckDataset, DeckStat, Series, WinRate};
use indexmap::IndexMap;

pub fn archetype(id: i64, name: &str, class: &str) -> Archetype {
    Archetype {
        id,
        name: name.to_string(),
        player_class: 0,
        player_class_name: class.to_string(),
        url: format!("/archetypes/{id}/{}", name.to_lowercase().replace(' ', "-")),
        standard_ccp_signature_core: None,
    }
}

pub fn stat(archetype_id: i64, win_rate: f64) -> DeckStat {
    DeckStat {
        archetype_id,
        total_games: 1000,
        pct_of_class: 10.0,
        pct_of_total: 1.0,
        win_rate: WinRate::new(win_rate),
    }
}

/// A merged deck with a generated archetype, for pipeline tests that skip the merge.
pub fn merged(id: i64, win_rate: f64) -> MergedDeck {
    MergedDeck {
        stat: stat(id, win_rate),
        archetype: archetype(id, &format!("Deck {id}"), "MAGE"),
    }
}

pub fn dataset(as_of: &str, groups: Vec<(&str, Vec<DeckStat>)>) -> DeckDataset {
    let metadata: IndexMap<String, serde_json::Value> = groups
        .iter()
        .map(|(class, _)| (class.to_string(), serde_json::json!({})))
        .collect();
    let data: IndexMap<String, Vec<DeckStat>> = groups
        .into_iter()
        .map(|(class, decks)| (class.to_string(), decks))
        .collect();
    DeckDataset {
        render_as: "table".to_string(),
        series: Series { metadata, data },
        as_of: as_of.to_string(),
    }
}

/// Archetypes 1..=6 across three classes.
pub fn sample_archetypes() -> Vec<Archetype> {
    vec![
        archetype(1, "Face Hunter", "HUNTER"),
        archetype(2, "Big Druid", "DRUID"),
        archetype(3, "Control Warrior", "WARRIOR"),
        archetype(4, "Secret Mage", "MAGE"),
        archetype(5, "Aggro Demon Hunter", "DEMONHUNTER"),
        archetype(6, "Highlander Priest", "PRIEST"),
    ]
}

/// A dataset where 5 leads T1, 1 and 2 fill T2/T3 and 3 trails in T4.
pub fn sample_dataset(as_of: &str) -> DeckDataset {
    dataset(
        as_of,
        vec![
            ("DEMONHUNTER", vec![stat(5, 58.2)]),
            ("HUNTER", vec![stat(1, 52.4)]),
            ("DRUID", vec![stat(2, 47.0)]),
            ("WARRIOR", vec![stat(3, 41.9)]),
        ],
    )
}
