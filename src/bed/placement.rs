//! Host hooks that move dependents to their beds

use super::assign;
use crate::random::{HostRandom, SeedInputs, SeedKind};
use crate::snapshot::{AgeStage, DependentSnapshot, TilePoint};
use tracing::trace;

/// Clearance around a tile the host's open-tile search requires
pub const OPEN_TILE_BUFFER: i32 = 1;
/// Attempts the host's open-tile search makes
pub const OPEN_TILE_TRIES: i32 = 60;
/// Time of day the host sends toddlers to bed
pub const BEDTIME: u32 = 1900;

/// The host's random open-tile search inside the farmhouse
///
/// Implementations must draw from `rng` the way the host does so the
/// morning layout matches an unmodified game.
pub trait OpenTileSearch {
    fn random_open_tile(&self, rng: &mut HostRandom, buffer: i32, tries: i32) -> Option<TilePoint>;
}

/// State of the ten-minute tick a bedtime move is checked on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BedtimeTick {
    /// Only the hosting instance moves dependents
    pub is_master: bool,
    pub time_of_day: u32,
}

/// Where a dependent at home starts the day
///
/// Returns `None` when the host should keep its own placement: crib-age
/// dependents and dependents away from the farmhouse.
pub fn day_start_position<S: OpenTileSearch + ?Sized>(
    dependent: &DependentSnapshot,
    dependents: Option<&[DependentSnapshot]>,
    at_home: bool,
    seed: &SeedInputs,
    search: &S,
) -> Option<TilePoint> {
    if !dependent.age_stage.occupies_bed() || !at_home {
        return None;
    }

    let mut rng = HostRandom::from_inputs(seed, SeedKind::Placement);
    match search.random_open_tile(&mut rng, OPEN_TILE_BUFFER, OPEN_TILE_TRIES) {
        Some(tile) if tile != TilePoint::ZERO => Some(tile),
        _ => {
            let slot = assign(dependent, dependents);
            trace!(id = dependent.id, slot = slot.as_str(), "no open tile, starting in bed");
            Some(slot.tile())
        }
    }
}

/// Walking target for a toddler at bedtime
pub fn bedtime_target(
    dependent: &DependentSnapshot,
    dependents: Option<&[DependentSnapshot]>,
    at_home: bool,
    tick: BedtimeTick,
) -> Option<TilePoint> {
    if !tick.is_master || dependent.age_stage != AgeStage::Toddler || tick.time_of_day != BEDTIME {
        return None;
    }
    if !at_home {
        trace!(name = %dependent.name, "bedtime found dependent away from home");
        return None;
    }
    Some(assign(dependent, dependents).tile())
}
