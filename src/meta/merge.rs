use tracing::debug;

use crate::models::{Archetype, DeckDataset, DeckStat, WinRate};

/// A deck statistic joined with the archetype it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedDeck {
    pub stat: DeckStat,
    pub archetype: Archetype,
}

impl MergedDeck {
    pub fn archetype_id(&self) -> i64 {
        self.stat.archetype_id
    }

    pub fn win_rate(&self) -> WinRate {
        self.stat.win_rate
    }

    pub fn name(&self) -> &str {
        &self.archetype.name
    }
}

/// Flatten per-class deck groups into one list and attach archetypes.
///
/// Groups are consumed in the order given and decks keep their order within
/// a group. A deck whose `archetype_id` matches no archetype is dropped; when
/// several archetypes share an id the first one wins.
pub fn merge_decks<'a, I>(groups: I, archetypes: &[Archetype]) -> Vec<MergedDeck>
where
    I: IntoIterator<Item = (&'a str, &'a [DeckStat])>,
{
    let mut merged = Vec::new();
    let mut dropped = 0usize;

    for (_class, decks) in groups {
        for stat in decks {
            match archetypes.iter().find(|a| a.id == stat.archetype_id) {
                Some(archetype) => merged.push(MergedDeck {
                    stat: stat.clone(),
                    archetype: archetype.clone(),
                }),
                None => dropped += 1,
            }
        }
    }

    if dropped > 0 {
        debug!(dropped, "dropped decks with no matching archetype");
    }
    merged
}

/// [`merge_decks`] over a dataset's class groups, in class order.
pub fn merge_dataset(dataset: &DeckDataset, archetypes: &[Archetype]) -> Vec<MergedDeck> {
    merge_decks(dataset.class_groups(), archetypes)
}
