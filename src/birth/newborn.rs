//! Newborn details decided when the naming prompt closes

use super::{spouse_reaction, SpouseReaction};
use crate::content::OverrideResolver;
use crate::random::{draw, SeedInputs, SeedKind};
use crate::snapshot::{PairingAttribute, SpouseSnapshot};
use rand::Rng;
use tracing::{debug, trace};

/// Complexion chance contributed by each flagged parent
pub const COMPLEXION_SHARE: f64 = 0.5;

/// Everything the host knows when a new dependent is named
#[derive(Debug, Clone)]
pub struct NewbornRequest<'a> {
    pub baby_name: &'a str,
    pub pairing: PairingAttribute,
    pub player_name: &'a str,
    pub spouse: &'a SpouseSnapshot,
    /// Parent flags feeding the complexion roll
    pub spouse_flagged: bool,
    pub player_flagged: bool,
    /// Dependents including the newborn
    pub dependent_count: usize,
    /// Names of every character in the world
    pub existing_names: &'a [String],
    pub seed: SeedInputs,
}

/// The host's plan for the new dependent
#[derive(Debug, Clone, PartialEq)]
pub struct NewbornPlan {
    /// Final name, with a trailing space if it collided
    pub name: String,
    pub pairing: PairingAttribute,
    pub dark_skinned: bool,
    pub reaction: SpouseReaction,
    /// The second dependent unlocks the host's full-house achievement
    pub full_house_reached: bool,
}

/// Append a space once when another character already has `name`
pub fn dedupe_name(name: &str, existing_names: &[String]) -> String {
    if existing_names.iter().any(|existing| existing == name) {
        debug!(name, "name already taken, appending a space");
        format!("{} ", name)
    } else {
        name.to_string()
    }
}

/// Complexion roll from the newborn seed
pub fn complexion_roll(seed: &SeedInputs, spouse_flagged: bool, player_flagged: bool) -> bool {
    let threshold = if spouse_flagged { COMPLEXION_SHARE } else { 0.0 }
        + if player_flagged { COMPLEXION_SHARE } else { 0.0 };
    let roll = draw(seed, SeedKind::Newborn);
    trace!(roll, threshold, "newborn complexion roll");
    roll < threshold
}

/// Decide the newborn's final details
pub fn plan_newborn<O, R>(request: &NewbornRequest<'_>, resolver: &O, rng: &mut R) -> NewbornPlan
where
    O: OverrideResolver + ?Sized,
    R: Rng + ?Sized,
{
    let dark_skinned = complexion_roll(&request.seed, request.spouse_flagged, request.player_flagged);
    let name = dedupe_name(request.baby_name, request.existing_names);
    let reaction = spouse_reaction(
        request.spouse,
        &name,
        request.player_name,
        request.dependent_count,
        resolver,
        rng,
    );

    NewbornPlan {
        name,
        pairing: request.pairing,
        dark_skinned,
        reaction,
        full_house_reached: request.dependent_count == 2,
    }
}
