//! Seams to the host game: the voxel grid, tube entities and inventories.
//!
//! The routing core never owns world state. Everything it needs is reached
//! through these traits, resolved statically by the caller's grid type.

use crate::grid::{BlockPos, Direction};
use crate::id::NetworkId;
use crate::item::ItemStack;

// ---------------------------------------------------------------------------
// ItemHandler
// ---------------------------------------------------------------------------

/// An inventory exposed on one face of a block.
///
/// Simulated insertion borrows the handler immutably, so previewing an
/// insertion cannot change inventory state.
pub trait ItemHandler {
    /// Number of slots, indexed `0..slot_count()`.
    fn slot_count(&self) -> usize;

    /// Whether the slot accepts this item type at all. Does not check room.
    fn is_item_valid(&self, slot: usize, stack: &ItemStack) -> bool;

    /// Remainder that inserting `stack` into `slot` would leave.
    fn simulate_insert(&self, slot: usize, stack: &ItemStack) -> ItemStack;

    /// Insert into `slot`, returning the remainder that did not fit.
    fn insert(&mut self, slot: usize, stack: ItemStack) -> ItemStack;
}

// ---------------------------------------------------------------------------
// Tube cells
// ---------------------------------------------------------------------------

/// The routing-relevant part of a tube entity.
///
/// A tube only remembers the key of the network that owns it. The key is
/// written during [`RoutingNetwork::confirm_all_tubes`] and resolved through
/// a [`NetworkRegistry`].
///
/// [`RoutingNetwork::confirm_all_tubes`]: crate::network::RoutingNetwork::confirm_all_tubes
/// [`NetworkRegistry`]: crate::registry::NetworkRegistry
pub trait TubeCell {
    fn network(&self) -> Option<NetworkId>;

    fn set_network(&mut self, network: NetworkId);
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// What occupies a grid cell that has a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Part of the network interior.
    Tube,
    /// Any other tile; a candidate endpoint.
    Block,
}

/// Read/write access to the voxel grid.
pub trait Grid {
    type Tube: TubeCell;

    /// The tile at `pos`, or `None` if the cell has no tile.
    fn tile(&self, pos: BlockPos) -> Option<TileKind>;

    /// The inventory the tile at `pos` exposes on `face`, if any.
    fn item_handler(&self, pos: BlockPos, face: Direction) -> Option<&dyn ItemHandler>;

    fn item_handler_mut(&mut self, pos: BlockPos, face: Direction)
    -> Option<&mut dyn ItemHandler>;

    fn tube(&self, pos: BlockPos) -> Option<&Self::Tube>;

    fn tube_mut(&mut self, pos: BlockPos) -> Option<&mut Self::Tube>;

    fn is_tube(&self, pos: BlockPos) -> bool {
        self.tile(pos) == Some(TileKind::Tube)
    }

    fn has_item_handler(&self, pos: BlockPos, face: Direction) -> bool {
        self.item_handler(pos, face).is_some()
    }
}
