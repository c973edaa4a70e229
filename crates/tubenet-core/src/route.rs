//! Precomputed paths from a start tube to an endpoint.

use crate::capability::Grid;
use crate::endpoint::Endpoint;
use crate::grid::{BlockPos, Direction};
use crate::item::ItemStack;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A path from a start position to one endpoint.
///
/// `length` is the traversal cost and is the only thing routes are ranked
/// by. It is not required to equal `moves.len()`.
///
/// `Route` deliberately has no `Ord` impl: two different routes can rank
/// equal, so ranking must not be mistaken for identity. Sort with
/// [`Route::cmp_by_length`] and never key an ordered set on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub destination: Endpoint,
    pub length: u32,
    pub moves: Vec<Direction>,
}

impl Route {
    pub fn new(destination: Endpoint, length: u32, moves: Vec<Direction>) -> Self {
        Self {
            destination,
            length,
            moves,
        }
    }

    /// Ranking by traversal cost only.
    pub fn cmp_by_length(&self, other: &Route) -> Ordering {
        self.length.cmp(&other.length)
    }

    /// Whether this route may carry `stack` that entered the tube at
    /// `start` through `insertion_face`.
    ///
    /// A route never sends an item back into the block it came from, even
    /// when that block would accept it.
    pub fn is_destination_valid<G: Grid>(
        &self,
        grid: &G,
        start: BlockPos,
        insertion_face: Direction,
        stack: &ItemStack,
    ) -> bool {
        let origin = Endpoint::new(start.offset(insertion_face), insertion_face.opposite());
        if self.destination == origin {
            return false;
        }
        self.destination.can_insert_item(grid, stack)
    }

    /// Diagnostic rendering: the start position followed by every move.
    pub fn describe_from(&self, start: BlockPos) -> String {
        std::iter::once(start.to_string())
            .chain(self.moves.iter().map(|dir| dir.to_string()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
