//! File-based configuration for the tube routing core.
//!
//! Reads [`RoutingConfig`](tubenet_core::config::RoutingConfig) from RON,
//! TOML or JSON, detected by file extension.

pub mod loader;
pub mod routing;

pub use loader::{DataLoadError, Format};
pub use routing::{CONFIG_BASE_NAME, load_routing_config, load_routing_config_from_dir};
