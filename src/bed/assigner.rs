//! Birth-order bed slots
//!
//! The farmhouse nursery has two beds with two sides each. The first two
//! bed-age dependents get the primary sides, later ones share with a
//! sibling of the same pairing attribute when possible. From the fifth
//! dependent on everyone lands on the fourth slot and overlaps.

use crate::snapshot::{DependentSnapshot, TilePoint};
use smallvec::SmallVec;
use tracing::trace;

/// One side of one nursery bed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotAssignment {
    /// Right side of the left bed
    Primary1,
    /// Left side of the left bed
    Shared1,
    /// Right side of the right bed
    Primary2,
    /// Left side of the right bed
    Shared2,
}

impl SlotAssignment {
    /// Farmhouse tile of this slot
    pub const fn tile(self) -> TilePoint {
        match self {
            SlotAssignment::Primary1 => TilePoint::new(23, 5),
            SlotAssignment::Shared1 => TilePoint::new(22, 5),
            SlotAssignment::Primary2 => TilePoint::new(27, 5),
            SlotAssignment::Shared2 => TilePoint::new(26, 5),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlotAssignment::Primary1 => "primary1",
            SlotAssignment::Shared1 => "shared1",
            SlotAssignment::Primary2 => "primary2",
            SlotAssignment::Shared2 => "shared2",
        }
    }
}

/// Slot for `dependent` given every dependent at home in birth order
///
/// Infants are filtered out before positions are counted. A `None` list
/// means the host could not provide it and yields `Primary1`, as does a
/// target that is not among the bed-age dependents.
pub fn assign(dependent: &DependentSnapshot, dependents: Option<&[DependentSnapshot]>) -> SlotAssignment {
    let Some(dependents) = dependents else {
        trace!(id = dependent.id, "dependent list unavailable, using first bed");
        return SlotAssignment::Primary1;
    };

    let in_beds: SmallVec<[&DependentSnapshot; 4]> = dependents
        .iter()
        .filter(|d| d.age_stage.occupies_bed())
        .collect();

    let position = in_beds
        .iter()
        .position(|d| d.same_as(dependent))
        .map_or(1, |index| index + 1);

    let slot = slot_for_position(position, &in_beds);
    trace!(id = dependent.id, position, slot = slot.as_str(), "bed slot assigned");
    slot
}

/// Slot of `dependents[target_index]`
///
/// Needs no loaded save. An unknown list or an index past its end yields
/// `Primary1`.
pub fn assign_at(target_index: usize, dependents: Option<&[DependentSnapshot]>) -> SlotAssignment {
    dependents
        .and_then(|list| list.get(target_index))
        .map_or(SlotAssignment::Primary1, |target| assign(target, dependents))
}

/// Slot of the 1-based `position` among `in_beds`
fn slot_for_position(position: usize, in_beds: &[&DependentSnapshot]) -> SlotAssignment {
    if position == 1 {
        return SlotAssignment::Primary1;
    }
    if in_beds.len() <= 2 {
        return SlotAssignment::Primary2;
    }

    let shares = |a: usize, b: usize| in_beds[a].pairing == in_beds[b].pairing;

    if shares(0, 1) {
        return match position {
            2 => SlotAssignment::Shared1,
            3 => SlotAssignment::Primary2,
            _ => SlotAssignment::Shared2,
        };
    }
    if position == 2 {
        return SlotAssignment::Primary2;
    }

    match (shares(1, 2), position) {
        (true, 3) => SlotAssignment::Shared2,
        (true, _) => SlotAssignment::Shared1,
        (false, 3) => SlotAssignment::Shared1,
        (false, _) => SlotAssignment::Shared2,
    }
}
