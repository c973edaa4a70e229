//! Property-based tests for network discovery and route generation.
//!
//! Uses proptest to scatter tubes, chests and inert blocks through a small
//! voxel box, then checks structural invariants of the resulting networks.

use proptest::prelude::*;
use tubenet_core::config::RoutingConfig;
use tubenet_core::grid::{BlockPos, Direction};
use tubenet_core::network::RoutingNetwork;
use tubenet_core::solver::{FastestRoutes, PathSolver};
use tubenet_core::test_utils::*;

// ===========================================================================
// Generators
// ===========================================================================

#[derive(Debug, Clone, Copy)]
enum Cell {
    Empty,
    Tube,
    Chest,
    Inert,
}

const SIDE: i32 = 6;

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        3 => Just(Cell::Empty),
        5 => Just(Cell::Tube),
        2 => Just(Cell::Chest),
        1 => Just(Cell::Inert),
    ]
}

/// A SIDE^3 box of random cells.
fn arb_grid() -> impl Strategy<Value = MockGrid> {
    proptest::collection::vec(arb_cell(), (SIDE * SIDE * SIDE) as usize).prop_map(|cells| {
        let mut grid = MockGrid::new();
        for (i, cell) in cells.into_iter().enumerate() {
            let i = i as i32;
            let pos = BlockPos::new(i % SIDE, (i / SIDE) % SIDE, i / (SIDE * SIDE));
            match cell {
                Cell::Empty => {}
                Cell::Tube => grid.place_tube(pos),
                Cell::Chest => grid.place_chest(pos, Chest::new(1, 64), &Direction::all()),
                Cell::Inert => grid.place_block(pos),
            }
        }
        grid
    })
}

fn arb_pos() -> impl Strategy<Value = BlockPos> {
    (0..SIDE, 0..SIDE, 0..SIDE).prop_map(|(x, y, z)| BlockPos::new(x, y, z))
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn size_is_tubes_plus_endpoints(grid in arb_grid(), seed in arb_pos()) {
        let network = RoutingNetwork::discover(seed, &grid, &RoutingConfig::default());
        prop_assert_eq!(network.size(), network.tubes().len() + network.endpoints().len());
    }

    #[test]
    fn endpoints_touch_tubes_but_are_not_tubes(grid in arb_grid(), seed in arb_pos()) {
        let network = RoutingNetwork::discover(seed, &grid, &RoutingConfig::default());
        for endpoint in network.endpoints() {
            prop_assert!(!network.tubes().contains(&endpoint.position));
            prop_assert!(network.tubes().contains(&endpoint.feeding_position()));
        }
    }

    #[test]
    fn seed_tube_is_member(grid in arb_grid(), seed in arb_pos()) {
        use tubenet_core::capability::Grid;
        let network = RoutingNetwork::discover(seed, &grid, &RoutingConfig::default());
        if grid.is_tube(seed) {
            for face in Direction::all() {
                prop_assert!(network.contains(seed, face));
            }
        } else {
            prop_assert!(network.tubes().is_empty());
        }
    }

    #[test]
    fn discovery_respects_cap(grid in arb_grid(), seed in arb_pos(), cap in 1u32..40) {
        let config = RoutingConfig { max_tubes: cap, ..RoutingConfig::default() };
        let network = RoutingNetwork::discover(seed, &grid, &config);
        prop_assert!(network.tubes().len() <= cap as usize);
    }

    #[test]
    fn routes_are_sorted_and_replay(grid in arb_grid(), seed in arb_pos()) {
        let network = RoutingNetwork::discover(seed, &grid, &RoutingConfig::default());
        for &start in network.tubes().iter().take(4) {
            let routes = FastestRoutes.solve(network.topology(), start);
            prop_assert!(routes.len() <= network.endpoints().len());
            for pair in routes.windows(2) {
                prop_assert!(pair[0].length <= pair[1].length);
            }
            for route in &routes {
                prop_assert!(network.endpoints().contains(&route.destination));
                let end = route.moves.iter().fold(start, |pos, &dir| pos.offset(dir));
                prop_assert_eq!(end, route.destination.position);
            }
        }
    }

    #[test]
    fn rediscovery_from_any_member_is_equal(grid in arb_grid(), seed in arb_pos()) {
        let network = RoutingNetwork::discover(seed, &grid, &RoutingConfig::default());
        if let Some(&other) = network.tubes().iter().last() {
            let again = RoutingNetwork::discover(other, &grid, &RoutingConfig::default());
            prop_assert_eq!(network, again);
        }
    }
}
