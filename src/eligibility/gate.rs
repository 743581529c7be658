//! Gate table and block reasons

use crate::config::{FamilyConfig, GlobalSettings};
use crate::snapshot::{AgeStage, PartnerKind, PlayerSnapshot, SpouseSnapshot};
use std::fmt;

/// House upgrade that adds the nursery
pub const MIN_HOUSE_UPGRADE_LEVEL: u8 = 2;
/// Hearts needed with a villager spouse
pub const MIN_HEART_LEVEL: u32 = 10;
/// Days of marriage needed with a villager spouse
pub const MIN_DAYS_MARRIED: u32 = 7;

/// Why a reproduction request cannot happen tonight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    DivorcePending,
    CohabitantAdoptionDisabled,
    NotAtHome,
    NotTogether,
    NoNursery,
    BirthPending,
    FriendshipTooLow,
    MarriedTooRecently,
    AtCapacity,
    /// The host could not list the household's dependents
    DependentsUnavailable,
    DependentInCrib,
}

impl BlockReason {
    /// Stable identifier for logs and the host
    pub fn code(self) -> &'static str {
        match self {
            BlockReason::DivorcePending => "divorce_pending",
            BlockReason::CohabitantAdoptionDisabled => "cohabitant_adoption_disabled",
            BlockReason::NotAtHome => "not_at_home",
            BlockReason::NotTogether => "not_together",
            BlockReason::NoNursery => "no_nursery",
            BlockReason::BirthPending => "birth_pending",
            BlockReason::FriendshipTooLow => "friendship_too_low",
            BlockReason::MarriedTooRecently => "married_too_recently",
            BlockReason::AtCapacity => "at_capacity",
            BlockReason::DependentsUnavailable => "dependents_unavailable",
            BlockReason::DependentInCrib => "dependent_in_crib",
        }
    }

    /// Player-facing explanation shown when verbose messages are on
    pub fn advisory(self) -> &'static str {
        match self {
            BlockReason::DivorcePending => {
                "Your spouse will not ask for a child tonight because a divorce is scheduled."
            }
            BlockReason::CohabitantAdoptionDisabled => {
                "Your roommate cannot ask about adopting a child. If you want that to be possible, \
                 change the AdoptChildrenWithRoommate option in your config file to true."
            }
            BlockReason::NotAtHome => {
                "Your spouse cannot ask for a child tonight because you aren't at home."
            }
            BlockReason::NotTogether => {
                "Your spouse cannot ask for a child tonight because you aren't in the same place."
            }
            BlockReason::NoNursery => {
                "You must upgrade your house to have a nursery before you can have children."
            }
            BlockReason::BirthPending => {
                "You need to wait until your previous child is born before you can have children."
            }
            BlockReason::FriendshipTooLow => {
                "You need at least 10 hearts with your spouse before you can have children."
            }
            BlockReason::MarriedTooRecently => {
                "You must be married to your spouse for at least 7 days before you can have children."
            }
            BlockReason::AtCapacity => {
                "You currently have the maximum number of children allowed. \
                 If you'd like to have more, use the set_max_children command."
            }
            BlockReason::DependentsUnavailable => {
                "Your children could not be counted tonight, so your spouse will not ask."
            }
            BlockReason::DependentInCrib => {
                "Your previous child needs to leave the crib before you can have more children."
            }
        }
    }
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Inputs shared by all gates
#[derive(Debug, Clone, Copy)]
pub struct EligibilityContext<'a> {
    pub player: &'a PlayerSnapshot,
    pub spouse: &'a SpouseSnapshot,
    pub config: &'a FamilyConfig,
    pub settings: &'a GlobalSettings,
}

/// A gate passes with `Ok(())` or names the reason it blocks
pub type GateCheck = fn(&EligibilityContext<'_>) -> Result<(), BlockReason>;

/// One named precondition
#[derive(Clone, Copy)]
pub struct Gate {
    pub name: &'static str,
    pub check: GateCheck,
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gate").field("name", &self.name).finish()
    }
}

/// Gates in evaluation order
pub const GATES: [Gate; 9] = [
    Gate { name: "divorce_pending", check: divorce_pending },
    Gate { name: "cohabitant_policy", check: cohabitant_policy },
    Gate { name: "location", check: location },
    Gate { name: "house_upgrade", check: house_upgrade },
    Gate { name: "pending_birth", check: pending_birth },
    Gate { name: "friendship", check: friendship },
    Gate { name: "marriage_duration", check: marriage_duration },
    Gate { name: "capacity", check: capacity },
    Gate { name: "in_crib", check: in_crib },
];

fn divorce_pending(ctx: &EligibilityContext<'_>) -> Result<(), BlockReason> {
    if ctx.player.divorce_tonight {
        return Err(BlockReason::DivorcePending);
    }
    Ok(())
}

fn cohabitant_policy(ctx: &EligibilityContext<'_>) -> Result<(), BlockReason> {
    if ctx.spouse.is_cohabitant_only && !ctx.settings.allow_adoption_with_cohabitant {
        return Err(BlockReason::CohabitantAdoptionDisabled);
    }
    Ok(())
}

fn location(ctx: &EligibilityContext<'_>) -> Result<(), BlockReason> {
    let player = ctx.player;
    match &ctx.spouse.kind {
        PartnerKind::Npc => {
            if !player.is_at_home() {
                return Err(BlockReason::NotAtHome);
            }
        }
        PartnerKind::Farmer {
            current_location,
            home_location,
        } => {
            if *current_location != player.current_location {
                return Err(BlockReason::NotTogether);
            }
            // Either partner's house will do
            if !player.is_at_home() && player.current_location != *home_location {
                return Err(BlockReason::NotAtHome);
            }
        }
    }
    Ok(())
}

fn house_upgrade(ctx: &EligibilityContext<'_>) -> Result<(), BlockReason> {
    if ctx.player.house_upgrade_level < MIN_HOUSE_UPGRADE_LEVEL {
        return Err(BlockReason::NoNursery);
    }
    Ok(())
}

fn pending_birth(ctx: &EligibilityContext<'_>) -> Result<(), BlockReason> {
    if ctx.player.pending_birth {
        return Err(BlockReason::BirthPending);
    }
    Ok(())
}

fn friendship(ctx: &EligibilityContext<'_>) -> Result<(), BlockReason> {
    if ctx.spouse.is_npc() && ctx.player.heart_level < MIN_HEART_LEVEL {
        return Err(BlockReason::FriendshipTooLow);
    }
    Ok(())
}

fn marriage_duration(ctx: &EligibilityContext<'_>) -> Result<(), BlockReason> {
    if ctx.spouse.is_npc() && ctx.player.days_married < MIN_DAYS_MARRIED {
        return Err(BlockReason::MarriedTooRecently);
    }
    Ok(())
}

fn capacity(ctx: &EligibilityContext<'_>) -> Result<(), BlockReason> {
    let dependents = ctx
        .player
        .dependents_home
        .as_ref()
        .ok_or(BlockReason::DependentsUnavailable)?;

    if !ctx.config.has_capacity_for(dependents.len()) {
        return Err(BlockReason::AtCapacity);
    }
    Ok(())
}

fn in_crib(ctx: &EligibilityContext<'_>) -> Result<(), BlockReason> {
    let in_crib = ctx
        .player
        .dependents_home
        .iter()
        .flatten()
        .any(|dependent| dependent.age_stage == AgeStage::Infant);

    if in_crib {
        return Err(BlockReason::DependentInCrib);
    }
    Ok(())
}
