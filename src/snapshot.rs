//! Read-only views of host state handed to the decision engines
//!
//! Snapshots are built fresh by the host for every call and are never
//! retained by the core.

use crate::random::SeedInputs;
use serde::Deserialize;

/// Host age value at which a dependent leaves the crib
pub const TODDLER_HOST_AGE: u8 = 3;

/// Growth stage of a dependent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum AgeStage {
    /// Newborn through crawler, sleeps in the crib
    Infant,
    Toddler,
    Child,
}

impl AgeStage {
    /// Map the host's integer age (0 newborn .. 3 toddler) to a stage
    #[inline]
    pub fn from_host_age(age: u8) -> Self {
        match age {
            age if age < TODDLER_HOST_AGE => AgeStage::Infant,
            TODDLER_HOST_AGE => AgeStage::Toddler,
            _ => AgeStage::Child,
        }
    }

    /// Toddlers and older sleep in a bed rather than the crib
    #[inline]
    pub fn occupies_bed(self) -> bool {
        self >= AgeStage::Toddler
    }
}

/// Binary trait deciding who may share a bed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum PairingAttribute {
    A,
    B,
}

impl PairingAttribute {
    /// Host genders map male to `A` and female to `B`
    pub fn from_is_male(is_male: bool) -> Self {
        if is_male {
            PairingAttribute::A
        } else {
            PairingAttribute::B
        }
    }
}

/// A single dependent living in the household
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependentSnapshot {
    /// Stable host identity; equality checks use only this
    pub id: u64,
    pub name: String,
    pub age_stage: AgeStage,
    pub pairing: PairingAttribute,
    /// 1 for the first-born
    pub birth_index: u32,
}

impl DependentSnapshot {
    /// Identity comparison
    #[inline]
    pub fn same_as(&self, other: &DependentSnapshot) -> bool {
        self.id == other.id
    }
}

/// What kind of partner the player has
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum PartnerKind {
    /// A simulated villager living in the player's house
    Npc,
    /// Another player, with its own location and home
    Farmer {
        current_location: String,
        home_location: String,
    },
}

/// Read-only view of the player's partner
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpouseSnapshot {
    pub name: String,
    pub kind: PartnerKind,
    /// Roommate partners cannot conceive and may only adopt
    pub is_cohabitant_only: bool,
    pub is_same_gender_pairing: bool,
}

impl SpouseSnapshot {
    #[inline]
    pub fn is_npc(&self) -> bool {
        matches!(self.kind, PartnerKind::Npc)
    }

    /// Whether dialogue should talk about adopting instead of having a child
    #[inline]
    pub fn uses_adoption_phrasing(&self) -> bool {
        self.is_cohabitant_only || self.is_same_gender_pairing
    }
}

/// Read-only view of the player asking for the nightly decision
///
/// The house fields describe the farmhouse the couple is in tonight. With a
/// farmer partner that may be the partner's house, and the host reports that
/// house's upgrade level and occupants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub current_location: String,
    pub home_location: String,
    /// Upgrade level of the house the couple is in
    pub house_upgrade_level: u8,
    pub days_married: u32,
    /// Heart level with the spouse
    pub heart_level: u32,
    /// A birth or adoption is already scheduled
    pub pending_birth: bool,
    pub divorce_tonight: bool,
    /// Dependents of the house the couple is in, in birth order; `None`
    /// when the host could not list them
    pub dependents_home: Option<Vec<DependentSnapshot>>,
}

impl PlayerSnapshot {
    #[inline]
    pub fn is_at_home(&self) -> bool {
        self.current_location == self.home_location
    }

    /// Number of dependents, zero when unknown
    #[inline]
    pub fn dependent_count(&self) -> usize {
        self.dependents_home.as_ref().map_or(0, Vec::len)
    }
}

/// Everything the nightly selector needs for one night
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightSnapshot {
    pub seed: SeedInputs,
    pub wedding_today: bool,
    /// The host already picked a birth or adoption event for tonight
    pub birth_event_chosen: bool,
    pub player: PlayerSnapshot,
    /// `None` when the player is not partnered
    pub spouse: Option<SpouseSnapshot>,
}

/// Tile coordinate inside the farmhouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct TilePoint {
    pub x: i32,
    pub y: i32,
}

impl TilePoint {
    /// The host reports a failed tile search as the origin
    pub const ZERO: TilePoint = TilePoint { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
