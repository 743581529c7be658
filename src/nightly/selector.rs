//! Nightly selection logic
//!
//! One decision per night: `Idle -> Evaluating -> {request, ambient, none}`.
//! Draws come from the same seeded sequence the host uses, so with the
//! baseline chance and quiet logging the host's own outcome is kept
//! untouched.

use super::AdvisoryLog;
use crate::config::{FamilyConfig, GlobalSettings};
use crate::eligibility::{evaluate, BlockReason, Eligibility, EligibilityContext};
use crate::random::{HostRandom, SeedKind};
use crate::snapshot::{NightSnapshot, PartnerKind};
use tracing::{info, trace};

/// Chance of the first ambient event when no request fires
pub const AMBIENT_SPLIT: f64 = 0.5;

/// Who is asking when a request fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// A villager spouse asks
    Spouse,
    /// Another player is asked
    Farmer,
}

/// The event the host should run tonight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NightlyEvent {
    ReproductionRequest(RequestKind),
    /// Barn animal birth question
    AmbientAnimalBirth,
    /// Strange sound in the night
    AmbientNightSound,
    /// Keep whatever the host chose
    DeferToBaseline,
}

impl NightlyEvent {
    /// Identifier handed back to the host
    pub fn as_str(&self) -> &'static str {
        match self {
            NightlyEvent::ReproductionRequest(RequestKind::Spouse) => "reproduction_request",
            NightlyEvent::ReproductionRequest(RequestKind::Farmer) => "reproduction_request_farmer",
            NightlyEvent::AmbientAnimalBirth => "ambient_animal_birth",
            NightlyEvent::AmbientNightSound => "ambient_night_sound",
            NightlyEvent::DeferToBaseline => "defer_to_baseline",
        }
    }

    #[inline]
    pub fn is_request(&self) -> bool {
        matches!(self, NightlyEvent::ReproductionRequest(_))
    }
}

/// Result of one night's selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightlyDecision {
    pub event: NightlyEvent,
    /// Set when eligibility was evaluated and failed
    pub blocked: Option<BlockReason>,
    /// Draws taken from the seeded sequence
    pub draws: u32,
}

impl NightlyDecision {
    fn defer() -> Self {
        Self {
            event: NightlyEvent::DeferToBaseline,
            blocked: None,
            draws: 0,
        }
    }
}

/// Chooses the nightly event for one save
#[derive(Debug, Clone, Copy)]
pub struct NightlySelector<'a> {
    config: &'a FamilyConfig,
    settings: &'a GlobalSettings,
}

impl<'a> NightlySelector<'a> {
    pub fn new(config: &'a FamilyConfig, settings: &'a GlobalSettings) -> Self {
        Self { config, settings }
    }

    /// Pick tonight's event
    ///
    /// Blocked reasons are reported through `advisories` when verbose
    /// messages are enabled.
    pub fn select(&self, night: &NightSnapshot, advisories: &mut AdvisoryLog) -> NightlyDecision {
        let verbose = self.settings.verbose_eligibility_messages;
        let threshold = self.config.question_probability();
        trace!(
            percent = self.config.question_probability_percent(),
            threshold,
            "nightly question chance"
        );

        // Nothing to change: leave the host's draw sequence alone
        if self.config.is_baseline_probability() && !verbose {
            return NightlyDecision::defer();
        }
        if night.wedding_today {
            trace!("wedding tonight, deferring");
            return NightlyDecision::defer();
        }
        if night.birth_event_chosen {
            trace!("birth already scheduled tonight, deferring");
            return NightlyDecision::defer();
        }
        let Some(spouse) = night.spouse.as_ref() else {
            trace!("player is not partnered, deferring");
            return NightlyDecision::defer();
        };

        let mut rng = HostRandom::from_inputs(&night.seed, SeedKind::PersonalEvent);
        let mut draws = 0;

        let ctx = EligibilityContext {
            player: &night.player,
            spouse,
            config: self.config,
            settings: self.settings,
        };
        let eligibility = evaluate(&ctx);

        match eligibility {
            Eligibility::Eligible => {
                if verbose {
                    info!("Your spouse may ask for a child tonight...");
                }

                let roll = rng.next_f64();
                draws += 1;
                trace!(roll, threshold, "reproduction request roll");

                if roll < threshold {
                    if verbose {
                        info!("Luck is on your side, your spouse will ask for a child tonight!");
                    }
                    let kind = match spouse.kind {
                        PartnerKind::Npc => RequestKind::Spouse,
                        PartnerKind::Farmer { .. } => RequestKind::Farmer,
                    };
                    return NightlyDecision {
                        event: NightlyEvent::ReproductionRequest(kind),
                        blocked: None,
                        draws,
                    };
                }

                if verbose {
                    info!("Luck wasn't on your side, your spouse will not ask for a child tonight.");
                }
            }
            Eligibility::Blocked(reason) => {
                if verbose {
                    advisories.report(reason);
                }
            }
        }

        let roll = rng.next_f64();
        draws += 1;
        let event = if roll < AMBIENT_SPLIT {
            NightlyEvent::AmbientAnimalBirth
        } else {
            NightlyEvent::AmbientNightSound
        };
        trace!(roll, event = event.as_str(), "ambient night event");

        NightlyDecision {
            event,
            blocked: eligibility.blocked_reason(),
            draws,
        }
    }
}
