//! Meta-shift detection between two tiered snapshots.

use std::fmt;

use super::tiers::TieredDecks;

/// Rank movement; `Up` means the deck moved toward index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// How one deck's flattened position changed between the past and current
/// snapshots.
///
/// `direction` and `position_delta` are only set when the deck is ranked in
/// both snapshots at different positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftResult {
    pub is_new_deck: bool,
    pub same_position: bool,
    pub position_delta: Option<usize>,
    pub direction: Option<Direction>,
}

impl ShiftResult {
    pub fn has_moved(&self) -> bool {
        self.direction.is_some()
    }
}

/// Compare the flattened position of `archetype_id` in `current` and `past`.
///
/// A deck missing from `past` is new and never reported as unmoved. A deck
/// missing from `current` only has `same_position == false`.
pub fn detect_shift(current: &TieredDecks, past: &TieredDecks, archetype_id: i64) -> ShiftResult {
    let current_pos = current.flatten().position(archetype_id);
    let past_pos = past.flatten().position(archetype_id);

    match (current_pos, past_pos) {
        (Some(now), Some(before)) if now == before => ShiftResult {
            is_new_deck: false,
            same_position: true,
            position_delta: None,
            direction: None,
        },
        (Some(now), Some(before)) => ShiftResult {
            is_new_deck: false,
            same_position: false,
            position_delta: Some(now.abs_diff(before)),
            direction: Some(if before > now {
                Direction::Up
            } else {
                Direction::Down
            }),
        },
        (_, past_pos) => ShiftResult {
            is_new_deck: past_pos.is_none(),
            same_position: false,
            position_delta: None,
            direction: None,
        },
    }
}
