//! Configuration files feeding the routing core.

use std::fs;
use std::path::{Path, PathBuf};
use tubenet_core::config::RoutingConfig;
use tubenet_core::grid::{BlockPos, Direction};
use tubenet_core::registry::NetworkRegistry;
use tubenet_core::test_utils::*;
use tubenet_data::{DataLoadError, load_routing_config, load_routing_config_from_dir};

fn make_test_dir(suffix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "tubenet_integration_{suffix}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn cleanup(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn loaded_caps_drive_discovery_and_dilation() {
    let dir = make_test_dir("caps");
    fs::write(
        dir.join("routing.ron"),
        "(ticks_in_tube: 10, soft_tube_cap: 50, hard_tube_cap: 150)",
    )
    .unwrap();
    let config = load_routing_config_from_dir(&dir).unwrap();
    cleanup(&dir);

    let mut grid = MockGrid::new();
    grid.place_tube_line(BlockPos::ORIGIN, Direction::East, 30);
    let mut registry = NetworkRegistry::new(config);
    let small = registry.build_network(BlockPos::ORIGIN, &mut grid).unwrap();
    assert_eq!(registry.get(small).unwrap().ticks_per_cell(), 10);

    grid.place_tube_line(BlockPos::new(30, 0, 0), Direction::East, 300);
    let large = registry.build_network(BlockPos::ORIGIN, &mut grid).unwrap();
    let network = registry.get(large).unwrap();
    // Clamped to the hard cap rather than the 200 absolute cap.
    assert_eq!(network.tubes().len(), 150);
    assert!(network.ticks_per_cell() > 100_000);
}

#[test]
fn invalid_file_is_rejected_before_use() {
    let dir = make_test_dir("invalid");
    let path = dir.join("routing.toml");
    fs::write(&path, "ticks_in_tube = 0").unwrap();
    let result = load_routing_config(&path);
    cleanup(&dir);
    assert!(matches!(result, Err(DataLoadError::Invalid { .. })));
}

#[test]
fn absent_file_matches_default_registry() {
    let dir = make_test_dir("absent");
    let config = load_routing_config_from_dir(&dir).unwrap();
    cleanup(&dir);
    assert_eq!(config, RoutingConfig::default());
    assert_eq!(NetworkRegistry::new(config).config(), NetworkRegistry::default().config());
}
