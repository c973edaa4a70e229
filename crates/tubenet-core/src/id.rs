use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Identifies a live routing network in a [`NetworkRegistry`].
    ///
    /// Tube cells store this key instead of a reference to the network, so
    /// a network can be discarded without chasing back-pointers.
    ///
    /// [`NetworkRegistry`]: crate::registry::NetworkRegistry
    pub struct NetworkId;
}

/// Identifies an item type. Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemTypeId(pub u32);
