//! Routing networks: discovery, membership and the route cache.
//!
//! A [`RoutingNetwork`] is built once from a seed tube by a bounded
//! breadth-first flood fill, then answers membership and routing queries
//! until the caller discards it. Its topology never changes after
//! construction; only the route cache fills in lazily.

use crate::capability::{Grid, TileKind, TubeCell};
use crate::config::RoutingConfig;
use crate::dilation;
use crate::endpoint::Endpoint;
use crate::fixed::Ticks;
use crate::grid::{BlockPos, Direction};
use crate::id::NetworkId;
use crate::item::ItemStack;
use crate::route::Route;
use crate::solver::{FastestRoutes, PathSolver};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace, warn};

// ---------------------------------------------------------------------------
// Topology
// ---------------------------------------------------------------------------

/// The tubes and endpoints of a network.
///
/// No endpoint position is ever a member of `tubes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NetworkTopology {
    pub tubes: BTreeSet<BlockPos>,
    pub endpoints: BTreeSet<Endpoint>,
}

/// Output of the flood fill before endpoint resolution.
struct Discovery {
    tubes: BTreeSet<BlockPos>,
    potential_endpoints: BTreeSet<BlockPos>,
    truncated: bool,
}

// ---------------------------------------------------------------------------
// RoutingNetwork
// ---------------------------------------------------------------------------

/// A connected, size-bounded set of tubes with its endpoints and route cache.
///
/// Equality and hashing consider the topology only.
#[derive(Debug, Clone)]
pub struct RoutingNetwork {
    topology: NetworkTopology,
    /// start position -> every reachable route, ascending by length.
    route_cache: HashMap<BlockPos, Vec<Route>>,
    ticks_per_cell: Ticks,
    truncated: bool,
    invalid: bool,
}

impl RoutingNetwork {
    /// The "no network" value. Every query against it is false or empty.
    pub fn invalid() -> Self {
        Self {
            topology: NetworkTopology::default(),
            route_cache: HashMap::new(),
            ticks_per_cell: RoutingConfig::default().ticks_in_tube,
            truncated: false,
            invalid: true,
        }
    }

    /// Discover the network around `seed` and claim its tubes for `id`.
    ///
    /// This is [`discover`](Self::discover) followed by
    /// [`confirm_all_tubes`](Self::confirm_all_tubes).
    pub fn build_from<G: Grid>(
        seed: BlockPos,
        grid: &mut G,
        id: NetworkId,
        config: &RoutingConfig,
    ) -> Self {
        let network = Self::discover(seed, &*grid, config);
        network.confirm_all_tubes(id, grid);
        network
    }

    /// Flood-fill from `seed`, resolve endpoints and compute travel time,
    /// without touching any tube entity.
    pub fn discover<G: Grid>(seed: BlockPos, grid: &G, config: &RoutingConfig) -> Self {
        let cap = config.discovery_cap();
        let Discovery {
            tubes,
            potential_endpoints,
            truncated,
        } = flood_fill(seed, grid, cap);

        if truncated {
            warn!(seed = %seed, cap, "network discovery stopped at the tube cap");
        }

        let mut endpoints = BTreeSet::new();
        for &pos in &potential_endpoints {
            for face in Direction::all() {
                if tubes.contains(&pos.offset(face)) && grid.has_item_handler(pos, face) {
                    endpoints.insert(Endpoint::new(pos, face));
                }
            }
        }

        let ticks_per_cell = dilation::ticks_per_cell(config, tubes.len());
        debug!(
            seed = %seed,
            tubes = tubes.len(),
            endpoints = endpoints.len(),
            ticks_per_cell,
            "built routing network"
        );

        Self {
            topology: NetworkTopology { tubes, endpoints },
            route_cache: HashMap::new(),
            ticks_per_cell,
            truncated,
            invalid: false,
        }
    }

    /// Point every member tube's back-reference at `id`.
    ///
    /// Returns how many tube entities were updated. Positions whose tube
    /// has since disappeared are skipped.
    pub fn confirm_all_tubes<G: Grid>(&self, id: NetworkId, grid: &mut G) -> usize {
        let mut confirmed = 0;
        for &pos in &self.topology.tubes {
            if let Some(tube) = grid.tube_mut(pos) {
                tube.set_network(id);
                confirmed += 1;
            }
        }
        confirmed
    }

    // -- Membership --

    /// Whether the tile at `pos` could take part in a network through `face`:
    /// it is a tube, or it exposes an inventory on that face.
    pub fn is_valid_member<G: Grid>(&self, pos: BlockPos, face: Direction, grid: &G) -> bool {
        if self.invalid {
            return false;
        }
        match grid.tile(pos) {
            Some(TileKind::Tube) => true,
            Some(TileKind::Block) => grid.has_item_handler(pos, face),
            None => false,
        }
    }

    /// Whether `pos` is a member tube, or `(pos, face)` is an endpoint.
    pub fn contains(&self, pos: BlockPos, face: Direction) -> bool {
        self.topology.tubes.contains(&pos)
            || self.topology.endpoints.contains(&Endpoint::new(pos, face))
    }

    /// Tubes plus endpoints.
    pub fn size(&self) -> usize {
        self.topology.tubes.len() + self.topology.endpoints.len()
    }

    // -- Routing --

    /// The fastest route from `start` that may carry `stack`, having entered
    /// through `insertion_face`. Uses the [`FastestRoutes`] solver.
    pub fn get_best_route<G: Grid>(
        &mut self,
        start: BlockPos,
        insertion_face: Direction,
        grid: &G,
        stack: &ItemStack,
    ) -> Option<&Route> {
        self.get_best_route_with(&FastestRoutes, start, insertion_face, grid, stack)
    }

    /// Like [`get_best_route`](Self::get_best_route) with an explicit solver.
    ///
    /// The solver runs at most once per start position for the lifetime of
    /// this network; later queries scan the cached list.
    pub fn get_best_route_with<S: PathSolver + ?Sized, G: Grid>(
        &mut self,
        solver: &S,
        start: BlockPos,
        insertion_face: Direction,
        grid: &G,
        stack: &ItemStack,
    ) -> Option<&Route> {
        if self.invalid || stack.is_empty() {
            return None;
        }
        self.routes_from(solver, start)
            .iter()
            .find(|route| route.is_destination_valid(grid, start, insertion_face, stack))
    }

    /// Cached routes from `start`, computing them on first request.
    pub fn routes_from<S: PathSolver + ?Sized>(&mut self, solver: &S, start: BlockPos) -> &[Route] {
        let topology = &self.topology;
        self.route_cache.entry(start).or_insert_with(|| {
            let routes = solver.solve(topology, start);
            trace!(start = %start, routes = routes.len(), "generated routes");
            routes
        })
    }

    /// Number of start positions with cached routes.
    pub fn cached_start_count(&self) -> usize {
        self.route_cache.len()
    }

    // -- Accessors --

    pub fn ticks_per_cell(&self) -> Ticks {
        self.ticks_per_cell
    }

    pub fn topology(&self) -> &NetworkTopology {
        &self.topology
    }

    pub fn tubes(&self) -> &BTreeSet<BlockPos> {
        &self.topology.tubes
    }

    pub fn endpoints(&self) -> &BTreeSet<Endpoint> {
        &self.topology.endpoints
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Whether discovery refused a connected tube because the cap was full.
    /// Tubes beyond the cap are then not part of this network.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Breadth-first traversal from `seed`, bounded to `cap` tubes.
///
/// Tubes are expanded until `cap` of them are accepted; later tubes are
/// refused but the queue is still drained, so blocks next to accepted tubes
/// are recorded as potential endpoints. Empty cells are dropped.
fn flood_fill<G: Grid>(seed: BlockPos, grid: &G, cap: usize) -> Discovery {
    let mut tubes = BTreeSet::new();
    let mut potential_endpoints = BTreeSet::new();
    let mut truncated = false;
    let mut seen: HashSet<BlockPos> = HashSet::from([seed]);
    let mut queue: VecDeque<BlockPos> = VecDeque::from([seed]);

    while let Some(pos) = queue.pop_front() {
        match grid.tile(pos) {
            Some(TileKind::Tube) if tubes.len() >= cap => truncated = true,
            Some(TileKind::Tube) => {
                tubes.insert(pos);
                for (_, next) in pos.neighbors() {
                    if seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
            Some(TileKind::Block) => {
                potential_endpoints.insert(pos);
            }
            None => {}
        }
    }

    Discovery {
        tubes,
        potential_endpoints,
        truncated,
    }
}

impl PartialEq for RoutingNetwork {
    fn eq(&self, other: &Self) -> bool {
        self.topology == other.topology
    }
}

impl Eq for RoutingNetwork {}

impl Hash for RoutingNetwork {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.topology.hash(state);
    }
}

impl fmt::Display for RoutingNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Endpoints:")?;
        for endpoint in &self.topology.endpoints {
            writeln!(f, "{endpoint}")?;
        }
        writeln!(f)?;
        writeln!(f, "Tubes:")?;
        for tube in &self.topology.tubes {
            writeln!(f, "{tube}")?;
        }
        Ok(())
    }
}
