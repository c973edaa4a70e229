//! Shared test helpers for unit tests, integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`. Provides an
//! in-memory voxel grid with tubes, inert blocks and chests.

use crate::capability::{Grid, ItemHandler, TileKind, TubeCell};
use crate::grid::{BlockPos, Direction};
use crate::id::{ItemTypeId, NetworkId};
use crate::item::{InventorySlot, ItemStack};
use std::collections::{BTreeMap, BTreeSet};

// ===========================================================================
// Item constructors
// ===========================================================================

pub fn iron() -> ItemTypeId {
    ItemTypeId(0)
}
pub fn copper() -> ItemTypeId {
    ItemTypeId(1)
}
pub fn gold() -> ItemTypeId {
    ItemTypeId(2)
}

pub fn stack(item: ItemTypeId, quantity: u32) -> ItemStack {
    ItemStack::new(item, quantity)
}

// ===========================================================================
// Chest
// ===========================================================================

/// A chest with uniform slots and an optional single-type filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chest {
    slots: Vec<InventorySlot>,
    filter: Option<ItemTypeId>,
}

impl Chest {
    pub fn new(slot_count: usize, slot_capacity: u32) -> Self {
        Self {
            slots: vec![InventorySlot::new(slot_capacity); slot_count],
            filter: None,
        }
    }

    /// A chest whose slots only accept `item`.
    pub fn filtered(slot_count: usize, slot_capacity: u32, item: ItemTypeId) -> Self {
        Self {
            filter: Some(item),
            ..Self::new(slot_count, slot_capacity)
        }
    }

    pub fn slot(&self, index: usize) -> &InventorySlot {
        &self.slots[index]
    }

    pub fn total(&self) -> u32 {
        self.slots.iter().map(InventorySlot::quantity).sum()
    }
}

impl ItemHandler for Chest {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn is_item_valid(&self, slot: usize, stack: &ItemStack) -> bool {
        slot < self.slots.len() && self.filter.is_none_or(|item| item == stack.item_type)
    }

    fn simulate_insert(&self, slot: usize, stack: &ItemStack) -> ItemStack {
        match self.slots.get(slot) {
            Some(s) => s.preview_insert(stack),
            None => stack.clone(),
        }
    }

    fn insert(&mut self, slot: usize, stack: ItemStack) -> ItemStack {
        match self.slots.get_mut(slot) {
            Some(s) => s.insert(stack),
            None => stack,
        }
    }
}

// ===========================================================================
// MockGrid
// ===========================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockTube {
    pub network: Option<NetworkId>,
}

impl TubeCell for MockTube {
    fn network(&self) -> Option<NetworkId> {
        self.network
    }

    fn set_network(&mut self, network: NetworkId) {
        self.network = Some(network);
    }
}

#[derive(Debug, Clone)]
enum MockTile {
    Tube(MockTube),
    Block {
        chest: Option<Chest>,
        faces: BTreeSet<Direction>,
    },
}

/// Sparse in-memory voxel grid.
#[derive(Debug, Clone, Default)]
pub struct MockGrid {
    tiles: BTreeMap<BlockPos, MockTile>,
}

impl MockGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place_tube(&mut self, pos: BlockPos) {
        self.tiles.insert(pos, MockTile::Tube(MockTube::default()));
    }

    /// Place `len` tubes starting at `start` and stepping along `dir`.
    pub fn place_tube_line(&mut self, start: BlockPos, dir: Direction, len: i32) {
        for i in 0..len {
            self.place_tube(start.offset_by(dir, i));
        }
    }

    /// A block with no inventory.
    pub fn place_block(&mut self, pos: BlockPos) {
        self.tiles.insert(
            pos,
            MockTile::Block {
                chest: None,
                faces: BTreeSet::new(),
            },
        );
    }

    /// A chest exposing its inventory on `faces`.
    pub fn place_chest(&mut self, pos: BlockPos, chest: Chest, faces: &[Direction]) {
        self.tiles.insert(
            pos,
            MockTile::Block {
                chest: Some(chest),
                faces: faces.iter().copied().collect(),
            },
        );
    }

    pub fn clear(&mut self, pos: BlockPos) {
        self.tiles.remove(&pos);
    }

    pub fn chest(&self, pos: BlockPos) -> Option<&Chest> {
        match self.tiles.get(&pos) {
            Some(MockTile::Block { chest, .. }) => chest.as_ref(),
            _ => None,
        }
    }
}

impl Grid for MockGrid {
    type Tube = MockTube;

    fn tile(&self, pos: BlockPos) -> Option<TileKind> {
        self.tiles.get(&pos).map(|tile| match tile {
            MockTile::Tube(_) => TileKind::Tube,
            MockTile::Block { .. } => TileKind::Block,
        })
    }

    fn item_handler(&self, pos: BlockPos, face: Direction) -> Option<&dyn ItemHandler> {
        match self.tiles.get(&pos)? {
            MockTile::Block {
                chest: Some(chest),
                faces,
            } if faces.contains(&face) => {
                let handler: &dyn ItemHandler = chest;
                Some(handler)
            }
            _ => None,
        }
    }

    fn item_handler_mut(
        &mut self,
        pos: BlockPos,
        face: Direction,
    ) -> Option<&mut dyn ItemHandler> {
        match self.tiles.get_mut(&pos)? {
            MockTile::Block {
                chest: Some(chest),
                faces,
            } if faces.contains(&face) => {
                let handler: &mut dyn ItemHandler = chest;
                Some(handler)
            }
            _ => None,
        }
    }

    fn tube(&self, pos: BlockPos) -> Option<&MockTube> {
        match self.tiles.get(&pos)? {
            MockTile::Tube(tube) => Some(tube),
            MockTile::Block { .. } => None,
        }
    }

    fn tube_mut(&mut self, pos: BlockPos) -> Option<&mut MockTube> {
        match self.tiles.get_mut(&pos)? {
            MockTile::Tube(tube) => Some(tube),
            MockTile::Block { .. } => None,
        }
    }
}
