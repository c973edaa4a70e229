//! Multi-destination shortest paths over a network's tubes.

use crate::endpoint::Endpoint;
use crate::grid::{BlockPos, Direction};
use crate::network::NetworkTopology;
use crate::route::Route;
use std::collections::{HashMap, HashSet, VecDeque};

/// Computes, for every endpoint reachable from `start`, its fastest route.
///
/// Implementations must return routes sorted ascending by length.
pub trait PathSolver {
    fn solve(&self, topology: &NetworkTopology, start: BlockPos) -> Vec<Route>;
}

/// Breadth-first solver where every move costs one cell.
///
/// With uniform costs the BFS discovery order is shortest-path order, so
/// the first time an endpoint is seen its route is optimal. Ties keep
/// discovery order (the canonical [`Direction::all`] order).
#[derive(Debug, Clone, Copy, Default)]
pub struct FastestRoutes;

impl PathSolver for FastestRoutes {
    fn solve(&self, topology: &NetworkTopology, start: BlockPos) -> Vec<Route> {
        if !topology.tubes.contains(&start) {
            return Vec::new();
        }

        // tube -> (previous tube, direction taken from it)
        let mut came_from: HashMap<BlockPos, (BlockPos, Direction)> = HashMap::new();
        let mut visited: HashSet<BlockPos> = HashSet::from([start]);
        let mut reached: HashSet<Endpoint> = HashSet::new();
        let mut queue: VecDeque<BlockPos> = VecDeque::from([start]);
        let mut routes = Vec::new();

        while let Some(pos) = queue.pop_front() {
            for (dir, next) in pos.neighbors() {
                let endpoint = Endpoint::new(next, dir.opposite());
                if topology.endpoints.contains(&endpoint) && reached.insert(endpoint) {
                    let mut moves = path_to(&came_from, start, pos);
                    moves.push(dir);
                    routes.push(Route::new(endpoint, moves.len() as u32, moves));
                }
                if topology.tubes.contains(&next) && visited.insert(next) {
                    came_from.insert(next, (pos, dir));
                    queue.push_back(next);
                }
            }
        }

        routes.sort_by(Route::cmp_by_length);
        routes
    }
}

/// Walk parent links back from `to` and return the moves from `start`.
fn path_to(
    came_from: &HashMap<BlockPos, (BlockPos, Direction)>,
    start: BlockPos,
    to: BlockPos,
) -> Vec<Direction> {
    let mut moves = Vec::new();
    let mut cursor = to;
    while cursor != start {
        let Some(&(previous, dir)) = came_from.get(&cursor) else {
            break;
        };
        moves.push(dir);
        cursor = previous;
    }
    moves.reverse();
    moves
}
