//! Insertion points at the edge of a tube network.

use crate::capability::{Grid, ItemHandler};
use crate::grid::{BlockPos, Direction};
use crate::item::ItemStack;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One insertion face of one non-tube block adjacent to a network.
///
/// `face` is the face of the block at `position` that items enter through,
/// so the network lies one step from `position` in direction `face`.
/// Equality and hashing use the `(position, face)` pair only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Endpoint {
    pub position: BlockPos,
    pub face: Direction,
}

impl Endpoint {
    pub fn new(position: BlockPos, face: Direction) -> Self {
        Self { position, face }
    }

    /// The tube cell this endpoint is fed from.
    pub fn feeding_position(&self) -> BlockPos {
        self.position.offset(self.face)
    }

    /// Whether the inventory at this endpoint could take any part of `stack`.
    ///
    /// Returns false if the tile is gone or no longer exposes an inventory on
    /// this face. Only simulated insertion is used.
    pub fn can_insert_item<G: Grid>(&self, grid: &G, stack: &ItemStack) -> bool {
        grid.item_handler(self.position, self.face)
            .is_some_and(|handler| Self::can_insert_into(handler, stack))
    }

    /// Whether some slot of `handler` is valid for `stack` and has room for
    /// at least one item of it.
    pub fn can_insert_into<H: ItemHandler + ?Sized>(handler: &H, stack: &ItemStack) -> bool {
        (0..handler.slot_count()).any(|slot| {
            handler.is_item_valid(slot, stack)
                && handler.simulate_insert(slot, stack).quantity < stack.quantity
        })
    }

    /// Insert as much of `stack` as possible, slot by slot in index order.
    ///
    /// `stack` must already be owned by the caller; it is consumed and the
    /// portion that did not fit is returned.
    pub fn disperse_item_to_handler<H: ItemHandler + ?Sized>(
        mut stack: ItemStack,
        handler: &mut H,
    ) -> ItemStack {
        for slot in 0..handler.slot_count() {
            if handler.is_item_valid(slot, &stack) {
                stack = handler.insert(slot, stack);
            }
            if stack.is_empty() {
                break;
            }
        }
        stack
    }

    /// First slot whose type filter accepts `stack`. Room is not checked.
    pub fn first_valid_slot<H: ItemHandler + ?Sized>(
        handler: &H,
        stack: &ItemStack,
    ) -> Option<usize> {
        (0..handler.slot_count()).find(|&slot| handler.is_item_valid(slot, stack))
    }

    /// Deliver `stack` into the live inventory at this endpoint.
    ///
    /// Returns the whole stack untouched if the inventory is gone.
    pub fn insert_item<G: Grid>(&self, grid: &mut G, stack: ItemStack) -> ItemStack {
        match grid.item_handler_mut(self.position, self.face) {
            Some(handler) => Self::disperse_item_to_handler(stack, handler),
            None => stack,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}", self.position, self.face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ItemTypeId;
    use crate::test_utils::*;

    fn origin() -> BlockPos {
        BlockPos::ORIGIN
    }

    #[test]
    fn equality_uses_position_and_face() {
        let p = BlockPos::new(4, 5, 6);
        assert_eq!(Endpoint::new(p, Direction::North), Endpoint::new(p, Direction::North));
        assert_ne!(Endpoint::new(p, Direction::North), Endpoint::new(p, Direction::South));
        assert_ne!(
            Endpoint::new(p, Direction::North),
            Endpoint::new(p.offset(Direction::Up), Direction::North)
        );
    }

    #[test]
    fn equal_endpoints_hash_equal() {
        use std::collections::HashSet;
        let p = BlockPos::new(1, 1, 1);
        let mut set = HashSet::new();
        set.insert(Endpoint::new(p, Direction::East));
        assert!(set.contains(&Endpoint::new(p, Direction::East)));
        assert!(!set.contains(&Endpoint::new(p, Direction::West)));
    }

    #[test]
    fn feeding_position_is_one_step_along_face() {
        let ep = Endpoint::new(origin(), Direction::West);
        assert_eq!(ep.feeding_position(), BlockPos::new(-1, 0, 0));
    }

    #[test]
    fn can_insert_into_empty_chest() {
        let chest = Chest::new(2, 64);
        assert!(Endpoint::can_insert_into(&chest, &stack(iron(), 10)));
    }

    #[test]
    fn cannot_insert_into_full_chest() {
        let mut chest = Chest::new(1, 4);
        let rest = Endpoint::disperse_item_to_handler(stack(iron(), 4), &mut chest);
        assert!(rest.is_empty());
        assert!(!Endpoint::can_insert_into(&chest, &stack(iron(), 1)));
    }

    #[test]
    fn can_insert_partially() {
        let mut chest = Chest::new(1, 4);
        let _ = Endpoint::disperse_item_to_handler(stack(iron(), 3), &mut chest);
        assert!(Endpoint::can_insert_into(&chest, &stack(iron(), 10)));
    }

    #[test]
    fn filtered_slot_rejects_wrong_type() {
        let chest = Chest::filtered(2, 64, copper());
        assert!(!Endpoint::can_insert_into(&chest, &stack(iron(), 1)));
        assert!(Endpoint::can_insert_into(&chest, &stack(copper(), 1)));
    }

    #[test]
    fn can_insert_does_not_mutate() {
        let chest = Chest::new(1, 64);
        let s = stack(iron(), 10);
        assert!(Endpoint::can_insert_into(&chest, &s));
        assert_eq!(chest.total(), 0);
        assert_eq!(s.quantity, 10);
    }

    #[test]
    fn disperse_spreads_across_slots() {
        let mut chest = Chest::new(3, 4);
        let rest = Endpoint::disperse_item_to_handler(stack(iron(), 10), &mut chest);
        assert_eq!(rest.quantity, 0);
        assert_eq!(chest.slot(0).quantity(), 4);
        assert_eq!(chest.slot(1).quantity(), 4);
        assert_eq!(chest.slot(2).quantity(), 2);
    }

    #[test]
    fn disperse_returns_remainder_when_full() {
        let mut chest = Chest::new(2, 4);
        let rest = Endpoint::disperse_item_to_handler(stack(iron(), 11), &mut chest);
        assert_eq!(rest.quantity, 3);
        assert_eq!(rest.item_type, iron());
        assert_eq!(chest.total(), 8);
    }

    #[test]
    fn disperse_stops_once_empty() {
        let mut chest = Chest::new(3, 64);
        let rest = Endpoint::disperse_item_to_handler(stack(iron(), 5), &mut chest);
        assert!(rest.is_empty());
        assert_eq!(chest.slot(0).quantity(), 5);
        assert_eq!(chest.slot(1).quantity(), 0);
    }

    #[test]
    fn first_valid_slot_checks_type_only() {
        let mut chest = Chest::new(2, 1);
        let _ = Endpoint::disperse_item_to_handler(stack(iron(), 2), &mut chest);
        // Both slots are full, but slot 0 still accepts the type.
        assert_eq!(Endpoint::first_valid_slot(&chest, &stack(iron(), 1)), Some(0));

        let filtered = Chest::filtered(2, 64, copper());
        assert_eq!(Endpoint::first_valid_slot(&filtered, &stack(iron(), 1)), None);
        assert_eq!(
            Endpoint::first_valid_slot(&filtered, &stack(ItemTypeId(1), 1)),
            Some(0)
        );
    }

    #[test]
    fn can_insert_item_through_grid() {
        let mut grid = MockGrid::new();
        grid.place_chest(origin(), Chest::new(1, 64), &[Direction::Up]);
        let s = stack(iron(), 1);

        assert!(Endpoint::new(origin(), Direction::Up).can_insert_item(&grid, &s));
        // No inventory on this face.
        assert!(!Endpoint::new(origin(), Direction::Down).can_insert_item(&grid, &s));
        // No tile at all.
        assert!(!Endpoint::new(BlockPos::new(9, 9, 9), Direction::Up).can_insert_item(&grid, &s));
    }

    #[test]
    fn insert_item_through_grid() {
        let mut grid = MockGrid::new();
        grid.place_chest(origin(), Chest::new(1, 8), &[Direction::Up]);
        let ep = Endpoint::new(origin(), Direction::Up);

        let rest = ep.insert_item(&mut grid, stack(iron(), 10));
        assert_eq!(rest.quantity, 2);
        assert_eq!(grid.chest(origin()).map(Chest::total), Some(8));

        let missing = Endpoint::new(BlockPos::new(0, 5, 0), Direction::Up);
        assert_eq!(missing.insert_item(&mut grid, stack(iron(), 3)).quantity, 3);
    }

    #[test]
    fn display_shows_position_and_face() {
        let ep = Endpoint::new(BlockPos::new(1, 2, 3), Direction::South);
        assert_eq!(ep.to_string(), "(1, 2, 3); south");
    }
}
