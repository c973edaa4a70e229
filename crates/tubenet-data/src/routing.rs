//! Loading and validating [`RoutingConfig`].

use std::path::Path;
use tracing::{debug, info};
use tubenet_core::config::RoutingConfig;

use crate::loader::{DataLoadError, deserialize_file, find_data_file};

/// Base name looked up by [`load_routing_config_from_dir`].
pub const CONFIG_BASE_NAME: &str = "routing";

/// Read and validate a routing config file. Missing fields take defaults.
pub fn load_routing_config(path: &Path) -> Result<RoutingConfig, DataLoadError> {
    let config: RoutingConfig = deserialize_file(path)?;
    config.validate().map_err(|source| DataLoadError::Invalid {
        file: path.to_path_buf(),
        source,
    })?;
    debug!(file = %path.display(), ?config, "loaded routing config");
    Ok(config)
}

/// Load `routing.{ron,toml,json}` from `dir`, or the defaults if absent.
pub fn load_routing_config_from_dir(dir: &Path) -> Result<RoutingConfig, DataLoadError> {
    match find_data_file(dir, CONFIG_BASE_NAME)? {
        Some(path) => load_routing_config(&path),
        None => {
            info!(dir = %dir.display(), "no routing config found, using defaults");
            Ok(RoutingConfig::default())
        }
    }
}
