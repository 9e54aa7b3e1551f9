//! Model deserialization tests: win-rate normalization and class ordering.

mod common;

use hs_meta::models::{Archetype, DeckDataset, PlayerClass, WinRate};

// ---------------------------------------------------------------------------
// WinRate
// ---------------------------------------------------------------------------

#[test]
fn win_rate_accepts_numbers_and_numeric_strings() {
    let from_number: WinRate = serde_json::from_str("52.5").unwrap();
    let from_string: WinRate = serde_json::from_str("\"52.5\"").unwrap();
    assert_eq!(from_number.value(), Some(52.5));
    assert_eq!(from_string.value(), Some(52.5));
}

#[test]
fn win_rate_parse_reads_leading_numeric_prefix() {
    assert_eq!(WinRate::parse("48.7%").value(), Some(48.7));
    assert_eq!(WinRate::parse(" 51 ").value(), Some(51.0));
    assert_eq!(WinRate::parse("-3").value(), Some(-3.0));
}

#[test]
fn win_rate_non_numeric_is_unparsable() {
    assert!(!WinRate::parse("n/a").is_parsable());
    assert!(!WinRate::parse("").is_parsable());
    assert!(!WinRate::parse("NaN").is_parsable());

    let from_null: WinRate = serde_json::from_str("null").unwrap();
    let from_bool: WinRate = serde_json::from_str("true").unwrap();
    assert!(!from_null.is_parsable());
    assert!(!from_bool.is_parsable());
}

#[test]
fn win_rate_whole_percent_truncates() {
    assert_eq!(WinRate::new(54.99).whole_percent(), Some(54));
    assert_eq!(WinRate::new(55.0).whole_percent(), Some(55));
    assert_eq!(WinRate::unparsable().whole_percent(), None);
}

#[test]
fn win_rate_display() {
    assert_eq!(WinRate::new(52.0).to_string(), "52");
    assert_eq!(WinRate::new(52.3).to_string(), "52.3");
    assert_eq!(WinRate::unparsable().to_string(), "?");
}

#[test]
fn unparsable_win_rate_serializes_as_null() {
    let json = serde_json::to_string(&WinRate::unparsable()).unwrap();
    assert_eq!(json, "null");
}

// ---------------------------------------------------------------------------
// DeckDataset
// ---------------------------------------------------------------------------

const RAW_DATASET: &str = r#"{
    "render_as": "table",
    "series": {
        "metadata": { "WARRIOR": {}, "DRUID": {}, "MAGE": {} },
        "data": {
            "DRUID": [
                { "archetype_id": 2, "total_games": 900, "pct_of_class": 40.0, "pct_of_total": 3.1, "win_rate": "49.5" }
            ],
            "WARRIOR": [
                { "archetype_id": 3, "total_games": 1200, "pct_of_class": 55.0, "pct_of_total": 4.2, "win_rate": 51.25 },
                { "archetype_id": 7, "total_games": 10, "pct_of_class": 1.0, "pct_of_total": 0.1, "win_rate": 40 }
            ],
            "ROGUE": [
                { "archetype_id": 9, "total_games": 50, "pct_of_class": 5.0, "pct_of_total": 0.2, "win_rate": 45 }
            ]
        }
    },
    "as_of": "2026-10-16T08:00:00Z"
}"#;

#[test]
fn dataset_parses_mixed_win_rate_types() {
    let dataset: DeckDataset = serde_json::from_str(RAW_DATASET).unwrap();
    assert_eq!(dataset.as_of, "2026-10-16T08:00:00Z");
    let druid = dataset.series.data.get("DRUID").unwrap();
    assert_eq!(druid[0].win_rate.value(), Some(49.5));
    assert_eq!(druid[0].total_games, 900);
}

#[test]
fn class_groups_follow_metadata_order_then_unlisted_classes() {
    let dataset: DeckDataset = serde_json::from_str(RAW_DATASET).unwrap();
    let classes = dataset.player_classes();
    assert_eq!(classes, vec!["WARRIOR", "DRUID", "MAGE", "ROGUE"]);

    let groups = dataset.class_groups();
    assert_eq!(groups[0].1.len(), 2);
    assert!(groups[2].1.is_empty());
    assert_eq!(dataset.deck_count(), 4);
}

#[test]
fn series_maps_keep_response_key_order() {
    let dataset: DeckDataset = serde_json::from_str(RAW_DATASET).unwrap();
    let metadata: Vec<&str> = dataset.series.metadata.keys().map(String::as_str).collect();
    let data: Vec<&str> = dataset.series.data.keys().map(String::as_str).collect();
    assert_eq!(metadata, vec!["WARRIOR", "DRUID", "MAGE"]);
    assert_eq!(data, vec!["DRUID", "WARRIOR", "ROGUE"]);
}

#[test]
fn dataset_serialization_keeps_class_order() {
    let dataset: DeckDataset = serde_json::from_str(RAW_DATASET).unwrap();
    let json = serde_json::to_string(&dataset).unwrap();
    let reparsed: DeckDataset = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed.player_classes(), dataset.player_classes());
    assert_eq!(reparsed, dataset);
}

// ---------------------------------------------------------------------------
// Archetype
// ---------------------------------------------------------------------------

#[test]
fn archetype_parses_api_shape() {
    let raw = r#"{
        "id": 12,
        "name": "Pirate Rogue",
        "player_class": 7,
        "player_class_name": "ROGUE",
        "url": "/archetypes/12/pirate-rogue",
        "standard_ccp_signature_core": { "as_of": "2026-10-01", "format": 2, "components": [1, 2, 3] },
        "wild_ccp_signature_core": null
    }"#;
    let archetype: Archetype = serde_json::from_str(raw).unwrap();
    assert_eq!(archetype.id, 12);
    assert_eq!(archetype.class(), Some(PlayerClass::Rogue));
    assert_eq!(
        archetype.standard_ccp_signature_core.unwrap().components,
        vec![1, 2, 3]
    );
}

#[test]
fn player_class_names() {
    assert_eq!(PlayerClass::from_name("demonhunter"), Some(PlayerClass::DemonHunter));
    assert_eq!(PlayerClass::DemonHunter.to_string(), "Demon Hunter");
    assert_eq!(PlayerClass::from_name("BARD"), None);
    assert_eq!(common::archetype(1, "x", "MAGE").class(), Some(PlayerClass::Mage));
}
