//! Presentation-facing view of one run: current and past tiers plus the
//! per-deck helpers the widget, table and announcement outputs are built from.

use std::fmt;
use std::str::FromStr;

use crate::cache::SnapshotPair;
use crate::config::{self, TierFloors};
use crate::error::MetaError;
use crate::meta::{
    detect_shift, merge_dataset, rank_and_tier, tier_for, Direction, FlattenedRanking,
    MergedDeck, ShiftResult, Tier, TieredDecks,
};
use crate::models::{Archetype, DeckDataset, WinRate};

// ---------------------------------------------------------------------------
// WinRateBand
// ---------------------------------------------------------------------------

/// Coarse win-rate colouring: above 50% strong, above 40% average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinRateBand {
    Strong,
    Average,
    Weak,
}

impl WinRateBand {
    pub fn of(win_rate: WinRate) -> Self {
        match win_rate.whole_percent() {
            Some(p) if p > 50 => WinRateBand::Strong,
            Some(p) if p > 40 => WinRateBand::Average,
            _ => WinRateBand::Weak,
        }
    }
}

// ---------------------------------------------------------------------------
// WidgetSize
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl WidgetSize {
    /// How many decks a widget of this size lists; small widgets list none.
    pub fn deck_limit(&self, total: usize) -> usize {
        match self {
            WidgetSize::Small => 0,
            WidgetSize::Medium => total.min(3),
            WidgetSize::Large => total.min(6),
            WidgetSize::ExtraLarge => total,
        }
    }
}

impl FromStr for WidgetSize {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(WidgetSize::Small),
            "medium" => Ok(WidgetSize::Medium),
            "large" => Ok(WidgetSize::Large),
            "extralarge" | "extra-large" => Ok(WidgetSize::ExtraLarge),
            other => Err(MetaError::InvalidArgument(format!(
                "unknown widget size: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DeckRow<'a> {
    pub deck: &'a MergedDeck,
    pub tier: Tier,
    pub band: WinRateBand,
    pub shift: ShiftResult,
}

impl DeckRow<'_> {
    /// Movement marker: an arrow and delta for decks that moved, `new` for
    /// decks missing from the past snapshot, otherwise empty.
    pub fn marker(&self) -> String {
        if self.shift.is_new_deck {
            return "new".to_string();
        }
        match (self.shift.direction, self.shift.position_delta) {
            (Some(Direction::Up), Some(delta)) => format!("▲{delta}"),
            (Some(Direction::Down), Some(delta)) => format!("▼{delta}"),
            _ => String::new(),
        }
    }
}

impl fmt::Display for DeckRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = self
            .deck
            .archetype
            .class()
            .map(|c| c.to_string())
            .unwrap_or_else(|| self.deck.archetype.player_class_name.clone());
        write!(
            f,
            "{:<32} {:<13} {:>6}% {}",
            self.deck.name(),
            class,
            self.deck.win_rate().to_string(),
            self.tier
        )?;
        let marker = self.marker();
        if !marker.is_empty() {
            write!(f, " {marker}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow<'a> {
    Header(Tier),
    Deck(DeckRow<'a>),
}

/// Deep link to a deck's archetype page.
pub fn deck_url(deck: &MergedDeck) -> String {
    format!("{}{}", config::SITE_BASE, deck.archetype.url)
}

// ---------------------------------------------------------------------------
// MetaReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct MetaReport {
    pub current: TieredDecks,
    pub past: TieredDecks,
    pub floors: TierFloors,
    /// Freshness marker of the current dataset.
    pub as_of: String,
    /// True if this run rotated the snapshots.
    pub rotated: bool,
}

impl MetaReport {
    /// Merge, rank and tier both datasets against the same archetype list.
    pub fn build(
        current: &DeckDataset,
        past: &DeckDataset,
        archetypes: &[Archetype],
        floors: TierFloors,
    ) -> Self {
        let current_decks = merge_dataset(current, archetypes);
        let past_decks = merge_dataset(past, archetypes);
        Self {
            current: rank_and_tier(&current_decks, &floors),
            past: rank_and_tier(&past_decks, &floors),
            floors,
            as_of: current.as_of.clone(),
            rotated: false,
        }
    }

    pub fn from_snapshots(
        pair: &SnapshotPair,
        archetypes: &[Archetype],
        floors: TierFloors,
    ) -> Self {
        let mut report = Self::build(&pair.current, &pair.past, archetypes, floors);
        report.rotated = pair.rotated;
        report
    }

    pub fn ranking(&self) -> FlattenedRanking<'_> {
        self.current.flatten()
    }

    pub fn top_deck(&self) -> Option<&MergedDeck> {
        self.ranking().head()
    }

    /// One-line spoken summary of the best performing deck.
    pub fn announcement(&self) -> Option<String> {
        self.top_deck().map(|deck| {
            format!(
                "Currently the best performing deck is {} with a win rate of {}%",
                deck.name(),
                deck.win_rate()
            )
        })
    }

    pub fn shift(&self, archetype_id: i64) -> ShiftResult {
        detect_shift(&self.current, &self.past, archetype_id)
    }

    fn row<'a>(&self, deck: &'a MergedDeck) -> DeckRow<'a> {
        DeckRow {
            deck,
            tier: tier_for(deck.win_rate(), &self.floors),
            band: WinRateBand::of(deck.win_rate()),
            shift: self.shift(deck.archetype_id()),
        }
    }

    /// Top decks for a widget of the given size, best first.
    pub fn widget_rows(&self, size: WidgetSize) -> Vec<DeckRow<'_>> {
        let ranking = self.ranking();
        let limit = size.deck_limit(ranking.len());
        ranking.iter().take(limit).map(|d| self.row(d)).collect()
    }

    /// Tier headers interleaved with their decks, `T1` first.
    pub fn table_rows(&self) -> Vec<TableRow<'_>> {
        let mut rows = Vec::with_capacity(self.current.len() + 4);
        for (tier, decks) in self.current.iter() {
            rows.push(TableRow::Header(tier));
            rows.extend(decks.iter().map(|d| TableRow::Deck(self.row(d))));
        }
        rows
    }

    /// The deck at a [`table_rows`](Self::table_rows) index, `None` for headers.
    pub fn deck_at_row(&self, row: usize) -> Option<&MergedDeck> {
        let mut index = 0;
        for (_, decks) in self.current.iter() {
            if row == index {
                return None;
            }
            index += 1;
            if row < index + decks.len() {
                return decks.get(row - index);
            }
            index += decks.len();
        }
        None
    }
}
