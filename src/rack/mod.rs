//! The tile rack and the swap selection.
//!
//! A rack always has exactly `RACK_SIZE` slots. Emptied slots stay in place
//! as `None` so slot indices keep meaning the same tile across a turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::tiles::{Tile, TileSupply};

/// Slots per rack.
pub const RACK_SIZE: usize = 7;

/// Seven ordered tile slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    slots: [Option<Tile>; RACK_SIZE],
}

impl Rack {
    /// A rack with every slot empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slots: [None; RACK_SIZE],
        }
    }

    /// A full rack of fresh tiles.
    pub fn seeded<S: TileSupply + ?Sized>(supply: &mut S) -> Self {
        Self {
            slots: std::array::from_fn(|_| Some(supply.draw())),
        }
    }

    /// All slots, in order.
    #[must_use]
    pub fn slots(&self) -> &[Option<Tile>; RACK_SIZE] {
        &self.slots
    }

    /// Tile in a slot. `None` if the slot is empty or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Occupied slots as `(index, tile)`.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, &Tile)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|t| (i, t)))
    }

    /// Swap two slots. Either may be empty.
    ///
    /// Returns `false` (and does nothing) when an index is out of range or
    /// both indices are the same.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= RACK_SIZE || to >= RACK_SIZE {
            return false;
        }
        self.slots.swap(from, to);
        true
    }

    /// Take the tile out of a slot, leaving it empty.
    pub fn remove_at(&mut self, index: usize) -> Option<Tile> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Give every empty slot a fresh tile. Returns how many were drawn.
    pub fn refill_empties<S: TileSupply + ?Sized>(&mut self, supply: &mut S) -> usize {
        let mut drawn = 0;
        for slot in self.slots.iter_mut().filter(|s| s.is_none()) {
            *slot = Some(supply.draw());
            drawn += 1;
        }
        drawn
    }

    /// Discard each selected slot's tile and draw a replacement, in
    /// selection order.
    pub fn replace_selected<S: TileSupply + ?Sized>(&mut self, selection: &Selection, supply: &mut S) {
        for index in selection.iter() {
            if let Some(slot) = self.slots.get_mut(index) {
                *slot = Some(supply.draw());
            }
        }
    }
}

/// Rack slots picked for a swap, in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    indices: SmallVec<[u8; RACK_SIZE]>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `index` if absent, remove it if present.
    ///
    /// Returns whether the index is selected afterwards. Out-of-range
    /// indices are ignored and report `false`.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= RACK_SIZE {
            return false;
        }
        match self.indices.iter().position(|&i| i as usize == index) {
            Some(pos) => {
                self.indices.remove(pos);
                false
            }
            None => {
                self.indices.push(index as u8);
                true
            }
        }
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.iter().any(|&i| i as usize == index)
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Selected indices in selection order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().map(|&i| i as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::ScriptedSupply;

    fn letters(rack: &Rack) -> String {
        rack.slots()
            .iter()
            .map(|s| s.map_or('.', |t| t.letter()))
            .collect()
    }

    #[test]
    fn test_seeded_is_full() {
        let mut supply = ScriptedSupply::new("ABCDEFG");
        let rack = Rack::seeded(&mut supply);

        assert_eq!(rack.tile_count(), RACK_SIZE);
        assert_eq!(letters(&rack), "ABCDEFG");
    }

    #[test]
    fn test_empty_rack() {
        let rack = Rack::empty();
        assert_eq!(rack.tile_count(), 0);
        assert_eq!(rack.slots().len(), RACK_SIZE);
    }

    #[test]
    fn test_reorder_swaps() {
        let mut supply = ScriptedSupply::new("ABCDEFG");
        let mut rack = Rack::seeded(&mut supply);

        assert!(rack.reorder(0, 6));
        assert_eq!(letters(&rack), "GBCDEFA");
    }

    #[test]
    fn test_reorder_rejects_bad_indices() {
        let mut supply = ScriptedSupply::new("ABCDEFG");
        let mut rack = Rack::seeded(&mut supply);

        assert!(!rack.reorder(2, 2));
        assert!(!rack.reorder(0, 7));
        assert!(!rack.reorder(9, 1));
        assert_eq!(letters(&rack), "ABCDEFG");
    }

    #[test]
    fn test_reorder_with_empty_slot() {
        let mut supply = ScriptedSupply::new("ABCDEFG");
        let mut rack = Rack::seeded(&mut supply);
        rack.remove_at(1);

        assert!(rack.reorder(1, 4));
        assert_eq!(letters(&rack), "AECD.FG");
    }

    #[test]
    fn test_remove_at() {
        let mut supply = ScriptedSupply::new("ABCDEFG");
        let mut rack = Rack::seeded(&mut supply);

        let taken = rack.remove_at(3).unwrap();
        assert_eq!(taken.letter(), 'D');
        assert_eq!(letters(&rack), "ABC.EFG");

        assert!(rack.remove_at(3).is_none());
        assert!(rack.remove_at(7).is_none());
        assert_eq!(rack.tile_count(), 6);
    }

    #[test]
    fn test_refill_empties_only() {
        let mut supply = ScriptedSupply::new("ABCDEFGXY");
        let mut rack = Rack::seeded(&mut supply);
        let kept = *rack.get(1).unwrap();
        rack.remove_at(0);
        rack.remove_at(5);

        assert_eq!(rack.refill_empties(&mut supply), 2);
        assert_eq!(letters(&rack), "XBCDEYG");
        assert_eq!(rack.get(1), Some(&kept));
        assert_eq!(rack.refill_empties(&mut supply), 0);
    }

    #[test]
    fn test_replace_selected_in_selection_order() {
        let mut supply = ScriptedSupply::new("ABCDEFGXY");
        let mut rack = Rack::seeded(&mut supply);
        let mut selection = Selection::new();
        selection.toggle(4);
        selection.toggle(1);

        rack.replace_selected(&selection, &mut supply);
        assert_eq!(letters(&rack), "AYCDXFG");
    }

    #[test]
    fn test_replaced_tiles_are_new_instances() {
        let mut supply = ScriptedSupply::new("A");
        let mut rack = Rack::seeded(&mut supply);
        let old = *rack.get(2).unwrap();
        let mut selection = Selection::new();
        selection.toggle(2);

        rack.replace_selected(&selection, &mut supply);
        let new = *rack.get(2).unwrap();
        assert_eq!(old.letter(), new.letter());
        assert_ne!(old.id(), new.id());
    }

    #[test]
    fn test_selection_toggle() {
        let mut selection = Selection::new();

        assert!(selection.toggle(2));
        assert!(selection.contains(2));
        assert_eq!(selection.len(), 1);

        assert!(!selection.toggle(2));
        assert!(!selection.contains(2));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_ignores_out_of_range() {
        let mut selection = Selection::new();
        assert!(!selection.toggle(7));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_order_and_clear() {
        let mut selection = Selection::new();
        selection.toggle(5);
        selection.toggle(0);
        selection.toggle(3);
        selection.toggle(0);

        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![5, 3]);

        selection.clear();
        assert!(selection.is_empty());
    }
}
