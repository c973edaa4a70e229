//! Numeric tuning for network discovery and travel time.

use crate::fixed::Ticks;
use serde::{Deserialize, Serialize};

/// Absolute ceiling on tubes discovered by one flood fill.
pub const MAX_TUBES: u32 = 200;

/// Tuning values supplied by the host's configuration layer.
///
/// The flood fill stops at [`discovery_cap`](RoutingConfig::discovery_cap),
/// which is `max_tubes` clamped to `hard_tube_cap`. A network therefore
/// never reaches `hard_tube_cap + 1` tubes, where travel time diverges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Ticks to cross one tube in a network below the soft cap.
    pub ticks_in_tube: Ticks,
    /// Tube count at which travel time starts to dilate.
    pub soft_tube_cap: u32,
    /// Tube count at which travel time would become unbounded (minus one).
    pub hard_tube_cap: u32,
    /// Upper bound on tubes visited by discovery.
    pub max_tubes: u32,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            ticks_in_tube: 10,
            soft_tube_cap: 400,
            hard_tube_cap: 500,
            max_tubes: MAX_TUBES,
        }
    }
}

/// A configuration the routing core cannot run with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("ticks_in_tube must be at least 1")]
    ZeroTicksInTube,
    #[error("max_tubes must be at least 1")]
    ZeroMaxTubes,
    #[error("soft_tube_cap ({soft}) exceeds hard_tube_cap ({hard})")]
    SoftCapAboveHardCap { soft: u32, hard: u32 },
}

impl RoutingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks_in_tube == 0 {
            return Err(ConfigError::ZeroTicksInTube);
        }
        if self.max_tubes == 0 {
            return Err(ConfigError::ZeroMaxTubes);
        }
        if self.soft_tube_cap > self.hard_tube_cap {
            return Err(ConfigError::SoftCapAboveHardCap {
                soft: self.soft_tube_cap,
                hard: self.hard_tube_cap,
            });
        }
        Ok(())
    }

    /// Number of tubes at which discovery stops.
    pub fn discovery_cap(&self) -> usize {
        self.max_tubes.min(self.hard_tube_cap) as usize
    }
}
