//! Win-rate ranking and tier bucketing.

use std::collections::BTreeMap;
use std::fmt;

use super::merge::MergedDeck;
use crate::config::TierFloors;
use crate::models::WinRate;

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Competitive tier, `T1` being the strongest. Ordering follows rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    T1,
    T2,
    T3,
    T4,
}

impl Tier {
    /// Classification priority, highest floor first.
    pub const ALL: [Tier; 4] = [Tier::T1, Tier::T2, Tier::T3, Tier::T4];

    pub fn floor(&self, floors: &TierFloors) -> f64 {
        match self {
            Tier::T1 => floors.t1,
            Tier::T2 => floors.t2,
            Tier::T3 => floors.t3,
            Tier::T4 => floors.t4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::T1 => "T1",
            Tier::T2 => "T2",
            Tier::T3 => "T3",
            Tier::T4 => "T4",
        }
    }

    /// Section heading, e.g. `"Tier 1"`.
    pub fn heading(&self) -> String {
        self.label().replace('T', "Tier ")
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First tier whose floor the whole-percent win rate meets or exceeds.
///
/// Unparsable win rates, and win rates below every floor, land in `T4`.
pub fn tier_for(win_rate: WinRate, floors: &TierFloors) -> Tier {
    let Some(percent) = win_rate.whole_percent() else {
        return Tier::T4;
    };
    Tier::ALL
        .into_iter()
        .find(|tier| percent as f64 >= tier.floor(floors))
        .unwrap_or(Tier::T4)
}

// ---------------------------------------------------------------------------
// TieredDecks
// ---------------------------------------------------------------------------

/// Decks bucketed by tier. Only tiers with at least one deck are present and
/// each tier keeps descending win-rate order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TieredDecks {
    tiers: BTreeMap<Tier, Vec<MergedDeck>>,
}

impl TieredDecks {
    pub fn get(&self, tier: Tier) -> Option<&[MergedDeck]> {
        self.tiers.get(&tier).map(Vec::as_slice)
    }

    /// Present tiers, `T1` to `T4`.
    pub fn tiers(&self) -> impl Iterator<Item = Tier> + '_ {
        self.tiers.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, &[MergedDeck])> {
        self.tiers.iter().map(|(t, d)| (*t, d.as_slice()))
    }

    /// Total number of decks across all tiers.
    pub fn len(&self) -> usize {
        self.tiers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Tier order then win-rate order, as one ranking.
    pub fn flatten(&self) -> FlattenedRanking<'_> {
        FlattenedRanking {
            decks: self.tiers.values().flatten().collect(),
        }
    }
}

/// Sort decks by descending win rate and bucket them into tiers.
///
/// The sort is stable, so decks with equal win rates keep their merge order.
pub fn rank_and_tier(decks: &[MergedDeck], floors: &TierFloors) -> TieredDecks {
    let mut sorted = decks.to_vec();
    sorted.sort_by(|a, b| a.win_rate().rank_cmp(&b.win_rate()));

    let mut tiers: BTreeMap<Tier, Vec<MergedDeck>> = BTreeMap::new();
    for deck in sorted {
        let tier = tier_for(deck.win_rate(), floors);
        tiers.entry(tier).or_default().push(deck);
    }
    TieredDecks { tiers }
}

// ---------------------------------------------------------------------------
// FlattenedRanking
// ---------------------------------------------------------------------------

/// Index 0 is the best-ranked deck.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedRanking<'a> {
    decks: Vec<&'a MergedDeck>,
}

impl<'a> FlattenedRanking<'a> {
    /// Index of the first deck with `archetype_id`, scanning from the top.
    pub fn position(&self, archetype_id: i64) -> Option<usize> {
        self.decks
            .iter()
            .position(|d| d.archetype_id() == archetype_id)
    }

    pub fn head(&self) -> Option<&'a MergedDeck> {
        self.decks.first().copied()
    }

    pub fn get(&self, index: usize) -> Option<&'a MergedDeck> {
        self.decks.get(index).copied()
    }

    pub fn archetype_ids(&self) -> Vec<i64> {
        self.decks.iter().map(|d| d.archetype_id()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a MergedDeck> + '_ {
        self.decks.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}
