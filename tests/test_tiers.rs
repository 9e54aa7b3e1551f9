//! Rank and tier classifier tests.

mod common;

use common::merged;
use hs_meta::meta::{rank_and_tier, tier_for, MergedDeck, Tier};
use hs_meta::models::WinRate;
use hs_meta::{MetaError, TierFloors};

fn floors() -> TierFloors {
    TierFloors {
        t1: 55.0,
        t2: 50.0,
        t3: 45.0,
        t4: 0.0,
    }
}

fn ids(decks: &[MergedDeck]) -> Vec<i64> {
    decks.iter().map(|d| d.archetype_id()).collect()
}

// ---------------------------------------------------------------------------
// tier_for
// ---------------------------------------------------------------------------

#[test]
fn floor_boundary_belongs_to_the_higher_tier() {
    let f = floors();
    assert_eq!(tier_for(WinRate::new(55.0), &f), Tier::T1);
    assert_eq!(tier_for(WinRate::new(50.0), &f), Tier::T2);
    assert_eq!(tier_for(WinRate::new(45.0), &f), Tier::T3);
    assert_eq!(tier_for(WinRate::new(44.0), &f), Tier::T4);
}

#[test]
fn fractional_win_rates_compare_as_whole_percent() {
    let f = floors();
    assert_eq!(tier_for(WinRate::new(54.9), &f), Tier::T2);
    assert_eq!(tier_for(WinRate::new(55.4), &f), Tier::T1);
}

#[test]
fn unparsable_and_below_all_floors_fall_to_t4() {
    let f = TierFloors {
        t4: 10.0,
        ..floors()
    };
    assert_eq!(tier_for(WinRate::unparsable(), &f), Tier::T4);
    assert_eq!(tier_for(WinRate::new(3.0), &f), Tier::T4);
}

#[test]
fn tier_labels() {
    assert_eq!(Tier::T1.to_string(), "T1");
    assert_eq!(Tier::T3.heading(), "Tier 3");
}

// ---------------------------------------------------------------------------
// rank_and_tier
// ---------------------------------------------------------------------------

#[test]
fn buckets_decks_and_skips_empty_tiers() {
    let decks = vec![merged(1, 60.0), merged(2, 50.0), merged(3, 44.0)];
    let tiers = rank_and_tier(&decks, &floors());

    assert_eq!(ids(tiers.get(Tier::T1).unwrap()), vec![1]);
    assert_eq!(ids(tiers.get(Tier::T2).unwrap()), vec![2]);
    assert!(tiers.get(Tier::T3).is_none());
    assert_eq!(ids(tiers.get(Tier::T4).unwrap()), vec![3]);
    assert_eq!(tiers.tiers().collect::<Vec<_>>(), vec![Tier::T1, Tier::T2, Tier::T4]);
}

#[test]
fn sorts_descending_within_tier() {
    let decks = vec![merged(1, 56.0), merged(2, 61.0), merged(3, 58.5)];
    let tiers = rank_and_tier(&decks, &floors());
    assert_eq!(ids(tiers.get(Tier::T1).unwrap()), vec![2, 3, 1]);
}

#[test]
fn equal_win_rates_keep_merge_order() {
    let decks = vec![merged(4, 52.0), merged(9, 52.0), merged(1, 52.0)];
    let tiers = rank_and_tier(&decks, &floors());
    assert_eq!(tiers.flatten().archetype_ids(), vec![4, 9, 1]);
}

#[test]
fn partitions_every_deck_exactly_once() {
    let decks: Vec<MergedDeck> = (1..=20)
        .map(|i| merged(i, 30.0 + (i as f64 * 7.3) % 35.0))
        .collect();
    let tiers = rank_and_tier(&decks, &floors());

    assert_eq!(tiers.len(), decks.len());
    let flat = tiers.flatten();
    assert_eq!(flat.len(), decks.len());
    assert!(flat.get(decks.len()).is_none());

    let mut seen = flat.archetype_ids();
    seen.sort();
    assert_eq!(seen, (1..=20).collect::<Vec<i64>>());
}

#[test]
fn higher_win_rate_always_ranks_first() {
    let decks: Vec<MergedDeck> = (1..=15)
        .map(|i| merged(i, 40.0 + ((i * 13) % 23) as f64))
        .collect();
    let tiers = rank_and_tier(&decks, &floors());
    let flat: Vec<&MergedDeck> = tiers.flatten().iter().collect();

    for (i, a) in flat.iter().enumerate() {
        for b in &flat[i + 1..] {
            let (wa, wb) = (a.win_rate().value().unwrap(), b.win_rate().value().unwrap());
            assert!(wa >= wb, "{} ranked above {}", wa, wb);
        }
    }
}

#[test]
fn ranking_is_reproducible() {
    let decks = vec![merged(1, 47.0), merged(2, 55.0), merged(3, 47.0), merged(4, 12.0)];
    let first = rank_and_tier(&decks, &floors());
    let second = rank_and_tier(&decks, &floors());
    assert_eq!(first, second);
}

#[test]
fn unparsable_win_rates_rank_last_in_t4() {
    let mut broken = merged(7, 0.0);
    broken.stat.win_rate = WinRate::parse("pending");
    let decks = vec![broken, merged(1, 20.0), merged(2, 51.0)];

    let tiers = rank_and_tier(&decks, &floors());
    assert_eq!(ids(tiers.get(Tier::T4).unwrap()), vec![1, 7]);
    let flat = tiers.flatten();
    assert_eq!(flat.archetype_ids(), vec![2, 1, 7]);
    assert_eq!(flat.get(2).map(|d| d.archetype_id()), Some(7));
    assert_eq!(flat.position(7), Some(2));
}

#[test]
fn empty_input_yields_no_tiers() {
    let tiers = rank_and_tier(&[], &floors());
    assert!(tiers.is_empty());
    assert!(tiers.flatten().head().is_none());
}

// ---------------------------------------------------------------------------
// Floor overrides
// ---------------------------------------------------------------------------

#[test]
fn floor_override_parses_trimmed_numbers() {
    assert_eq!(TierFloors::parse_floor("HS_META_T1", " 52.5 ").unwrap(), 52.5);
    assert_eq!(TierFloors::parse_floor("HS_META_T3", "40").unwrap(), 40.0);
}

#[test]
fn floor_override_rejects_non_numbers() {
    let err = TierFloors::parse_floor("HS_META_T2", "fifty").unwrap_err();
    assert!(matches!(err, MetaError::InvalidArgument(_)));
    assert!(err.to_string().contains("HS_META_T2"));
}

#[test]
fn floor_override_rejects_non_finite_values() {
    for raw in ["NaN", "inf", "-inf", "infinity"] {
        let err = TierFloors::parse_floor("HS_META_T1", raw).unwrap_err();
        assert!(matches!(err, MetaError::InvalidArgument(_)), "{raw} accepted");
    }
}
