//! Network-size dependent travel time.
//!
//! Below the soft cap every tube takes `ticks_in_tube` ticks to cross.
//! From the soft cap upwards the crossing time is multiplied by
//! `1 / dilation^2`, where `dilation` falls linearly from 1 at the soft cap
//! to 0 at `hard_tube_cap + 1`:
//!
//! ```text
//! slope    = 1 / (soft - (hard + 1))
//! offset   = -(hard + 1) * slope
//! dilation = size * slope + offset  ==  (hard + 1 - size) / (hard + 1 - soft)
//! ```
//!
//! The right-hand form is the one evaluated: it needs a single division and
//! yields exactly 1 at the soft cap. All arithmetic is Q32.32 fixed point so
//! results are identical on every platform.

use crate::config::RoutingConfig;
use crate::fixed::{Fixed64, Ticks};

/// Multiplier applied to the base crossing time for a network of `size`
/// tubes. `None` means the multiplier is unbounded or unrepresentable.
pub fn time_dilation(config: &RoutingConfig, size: usize) -> Option<Fixed64> {
    let soft = i64::from(config.soft_tube_cap);
    let hard = i64::from(config.hard_tube_cap) + 1;
    let size = i64::try_from(size).ok()?;

    if size < soft {
        return Some(Fixed64::ONE);
    }
    if size >= hard || soft >= hard {
        return None;
    }

    let remaining = Fixed64::checked_from_num(hard - size)?;
    let span = Fixed64::checked_from_num(hard - soft)?;
    let dilation = remaining.checked_div(span)?;
    let squared = dilation.checked_mul(dilation)?;
    Fixed64::ONE.checked_div(squared)
}

/// Ticks an item spends in each tube of a network of `size` tubes.
///
/// Saturates at `Ticks::MAX` where the model diverges.
pub fn ticks_per_cell(config: &RoutingConfig, size: usize) -> Ticks {
    let base = config.ticks_in_tube;
    let Some(time) = time_dilation(config, size) else {
        return Ticks::MAX;
    };
    if time == Fixed64::ONE {
        return base;
    }
    Fixed64::checked_from_num(base)
        .and_then(|b| time.checked_mul(b))
        .and_then(|t| t.floor().checked_to_num::<Ticks>())
        .unwrap_or(Ticks::MAX)
}
