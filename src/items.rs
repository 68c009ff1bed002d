use schema::{IntoEnumIterator, ItemKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static definition of one item kind: display name plus the strength of its
/// effect (HP healed, PP restored; unused for capture items).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemData {
    pub kind: ItemKind,
    pub name: &'static str,
    pub magnitude: u8,
}

/// The single dispatch point from item kind to its definition. Adding a kind
/// means adding one arm here and one variant in the schema enum.
pub fn item_data(kind: ItemKind) -> ItemData {
    match kind {
        ItemKind::Capture => ItemData {
            kind,
            name: "Monster Ball",
            magnitude: 0,
        },
        ItemKind::Heal => ItemData {
            kind,
            name: "Health Potion",
            magnitude: 30,
        },
        ItemKind::RestorePP => ItemData {
            kind,
            name: "PP Potion",
            magnitude: 5,
        },
    }
}

/// A trainer's item inventory: a typed quantity per item kind. Quantities
/// only move through `add` and `try_consume`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag {
    counts: HashMap<ItemKind, u8>,
}

impl Bag {
    pub fn new() -> Self {
        Bag::default()
    }

    /// The bag a fresh trainer starts with: two Monster Balls, two Health
    /// Potions, one PP Potion.
    pub fn starter() -> Self {
        let mut bag = Bag::new();
        bag.add(ItemKind::Capture, 2);
        bag.add(ItemKind::Heal, 2);
        bag.add(ItemKind::RestorePP, 1);
        bag
    }

    pub fn count(&self, kind: ItemKind) -> u8 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn add(&mut self, kind: ItemKind, quantity: u8) {
        let entry = self.counts.entry(kind).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Spend one unit of the kind. Returns false (and changes nothing) when
    /// the slot is empty.
    pub fn try_consume(&mut self, kind: ItemKind) -> bool {
        match self.counts.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&count| count == 0)
    }

    /// `(kind, quantity)` pairs for every non-empty slot, in declaration
    /// order of the kinds.
    pub fn contents(&self) -> Vec<(ItemKind, u8)> {
        ItemKind::iter()
            .filter_map(|kind| {
                let count = self.count(kind);
                (count > 0).then_some((kind, count))
            })
            .collect()
    }
}
