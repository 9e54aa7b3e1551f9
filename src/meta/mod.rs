//! Ranking pipeline: merge per-class stats with archetypes, rank and bucket the
//! merged decks into tiers, and compare two tiered snapshots.
//!
//! Every stage is a pure function over its inputs.

pub mod merge;
pub mod shift;
pub mod tiers;

pub use merge::{merge_dataset, merge_decks, MergedDeck};
pub use shift::{detect_shift, Direction, ShiftResult};
pub use tiers::{rank_and_tier, tier_for, FlattenedRanking, Tier, TieredDecks};
