//! Seed formulas shared with the host simulation

use super::HostRandom;

/// Constant mixed into the nightly personal-event seed
pub const PERSONAL_EVENT_SALT: i32 = 470_124_797;

/// Which host decision a generator is seeded for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedKind {
    /// Nightly spouse/ambient event selection
    PersonalEvent,
    /// Morning placement of dependents inside the house
    Placement,
    /// Complexion roll for a newborn
    Newborn,
}

/// World values the host folds into its seeds
///
/// Fields keep the host's native widths; the formulas truncate them to
/// 32 bits exactly like the host does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SeedInputs {
    /// Total days elapsed in the save
    pub days_elapsed: u32,
    /// Unique identifier of the world instance
    pub world_id: u64,
    /// Identifier of the participant the draw is for
    pub participant_id: i64,
}

impl SeedInputs {
    pub fn new(days_elapsed: u32, world_id: u64, participant_id: i64) -> Self {
        Self {
            days_elapsed,
            world_id,
            participant_id,
        }
    }

    #[inline]
    fn days(&self) -> i32 {
        self.days_elapsed as i32
    }

    /// World id truncated to 32 bits, then halved toward zero
    #[inline]
    fn half_world(&self) -> i32 {
        (self.world_id as i32) / 2
    }

    #[inline]
    fn participant(&self) -> i32 {
        self.participant_id as i32
    }

    /// `(days + world/2) ^ (470124797 + participant)`
    pub fn personal_event_seed(&self) -> i32 {
        self.days().wrapping_add(self.half_world())
            ^ PERSONAL_EVENT_SALT.wrapping_add(self.participant())
    }

    /// `days + world/2 + participant*2`
    pub fn placement_seed(&self) -> i32 {
        self.days()
            .wrapping_add(self.half_world())
            .wrapping_add(self.participant().wrapping_mul(2))
    }

    /// `world + days`
    pub fn newborn_seed(&self) -> i32 {
        (self.world_id as i32).wrapping_add(self.days())
    }

    pub fn seed_for(&self, kind: SeedKind) -> i32 {
        match kind {
            SeedKind::PersonalEvent => self.personal_event_seed(),
            SeedKind::Placement => self.placement_seed(),
            SeedKind::Newborn => self.newborn_seed(),
        }
    }
}

impl HostRandom {
    /// Generator seeded the way the host seeds `kind`
    pub fn from_inputs(inputs: &SeedInputs, kind: SeedKind) -> Self {
        HostRandom::new(inputs.seed_for(kind))
    }
}

/// First draw of the sequence the host would produce for `kind`
#[inline]
pub fn draw(inputs: &SeedInputs, kind: SeedKind) -> f64 {
    draw_at(inputs, kind, 0)
}

/// Draw number `index` (zero based) of the sequence for `kind`
pub fn draw_at(inputs: &SeedInputs, kind: SeedKind, index: usize) -> f64 {
    let mut rng = HostRandom::from_inputs(inputs, kind);
    for _ in 0..index {
        rng.next_sample();
    }
    rng.next_f64()
}
