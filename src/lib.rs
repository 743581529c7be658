//! Family Planning Core - nightly family-growth decisions for a farming life-sim
//!
//! This crate decides, once per simulated night, whether the player's spouse
//! asks for a child, and where each dependent sleeps. Random draws replicate
//! the host's own seeded generator so unchanged settings leave the host's
//! outcomes untouched. Python bindings are available behind the `python`
//! feature.

pub mod bed;
pub mod birth;
pub mod commands;
pub mod config;
pub mod content;
pub mod eligibility;
pub mod error;
pub mod host_data;
pub mod nightly;
pub mod planner;
pub mod random;
pub mod snapshot;

#[cfg(feature = "python")]
mod bindings;

#[cfg(test)]
mod fixtures;

pub use crate::bed::{assign, assign_at, SlotAssignment};
pub use crate::config::{FamilyConfig, GlobalSettings};
pub use crate::eligibility::{evaluate, BlockReason, Eligibility, EligibilityContext};
pub use crate::error::{FamilyPlanningError, Result};
pub use crate::nightly::{NightlyDecision, NightlyEvent, NightlySelector};
pub use crate::planner::FamilySession;
pub use crate::random::{draw, HostRandom, SeedInputs, SeedKind};
