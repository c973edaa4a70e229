//! Ownership of live networks.
//!
//! Tubes refer to their network by [`NetworkId`] only. The registry owns
//! the networks themselves and resolves ids, falling back to an invalid
//! sentinel for ids that are missing or stale. Rebuilding a network
//! discards every network it overlaps, and with it their route caches.

use crate::capability::{Grid, TubeCell};
use crate::config::RoutingConfig;
use crate::grid::{BlockPos, Direction};
use crate::id::NetworkId;
use crate::item::ItemStack;
use crate::network::RoutingNetwork;
use crate::route::Route;
use slotmap::SlotMap;
use tracing::debug;

/// Owns every live [`RoutingNetwork`].
#[derive(Debug)]
pub struct NetworkRegistry {
    networks: SlotMap<NetworkId, RoutingNetwork>,
    invalid: RoutingNetwork,
    config: RoutingConfig,
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::new(RoutingConfig::default())
    }
}

impl NetworkRegistry {
    pub fn new(config: RoutingConfig) -> Self {
        Self {
            networks: SlotMap::with_key(),
            invalid: RoutingNetwork::invalid(),
            config,
        }
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Build the network around `seed`, register it and claim its tubes.
    ///
    /// Networks sharing a tube with the new one are discarded. Returns
    /// `None`, registering nothing, when `seed` is not a tube.
    pub fn build_network<G: Grid>(&mut self, seed: BlockPos, grid: &mut G) -> Option<NetworkId> {
        let network = RoutingNetwork::discover(seed, &*grid, &self.config);
        if network.tubes().is_empty() {
            debug!(seed = %seed, "no tube at seed, nothing registered");
            return None;
        }

        let superseded: Vec<NetworkId> = self
            .networks
            .iter()
            .filter(|(_, other)| !other.tubes().is_disjoint(network.tubes()))
            .map(|(other, _)| other)
            .collect();
        let id = self.networks.insert_with_key(|id| {
            network.confirm_all_tubes(id, grid);
            network
        });
        for other in superseded {
            self.networks.remove(other);
            debug!(?other, replacement = ?id, "discarded superseded network");
        }
        Some(id)
    }

    /// The network for `id`, or the invalid sentinel.
    pub fn resolve(&self, id: Option<NetworkId>) -> &RoutingNetwork {
        id.and_then(|id| self.networks.get(id)).unwrap_or(&self.invalid)
    }

    /// The network owning the tube at `pos`, or the invalid sentinel.
    pub fn network_of<G: Grid>(&self, grid: &G, pos: BlockPos) -> &RoutingNetwork {
        self.resolve(grid.tube(pos).and_then(|tube| tube.network()))
    }

    pub fn get(&self, id: NetworkId) -> Option<&RoutingNetwork> {
        self.networks.get(id)
    }

    pub fn get_mut(&mut self, id: NetworkId) -> Option<&mut RoutingNetwork> {
        self.networks.get_mut(id)
    }

    /// Discard a network. Its tubes keep the stale id, which now resolves to
    /// the invalid sentinel.
    pub fn remove(&mut self, id: NetworkId) -> Option<RoutingNetwork> {
        self.networks.remove(id)
    }

    /// Best route through network `id`; `None` if the id is stale.
    pub fn best_route<G: Grid>(
        &mut self,
        id: NetworkId,
        start: BlockPos,
        insertion_face: Direction,
        grid: &G,
        stack: &ItemStack,
    ) -> Option<&Route> {
        self.networks
            .get_mut(id)?
            .get_best_route(start, insertion_face, grid, stack)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}
