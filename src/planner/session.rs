//! FamilySession - state for one loaded save
//!
//! The host creates a session when a save finishes loading and drops it on
//! return to the title screen. Every hook goes through the session so the
//! engines only ever see explicit context.

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::bed::{self, BedtimeTick, OpenTileSearch, SlotAssignment};
use crate::birth::{self, NewbornPlan, NewbornRequest};
use crate::commands::{self, CommandContext, CommandResponse, FamilyCommand};
use crate::config::{global_settings, FamilyConfig, FamilyConfigStore, GlobalSettings};
use crate::content::{ChildTokens, ContentPackSet, Override, OverrideKey, OverrideResolver};
use crate::error::{FamilyPlanningError, Result};
use crate::nightly::{AdvisoryLog, NightlyDecision, NightlySelector};
use crate::random::SeedInputs;
use crate::snapshot::{AgeStage, DependentSnapshot, NightSnapshot, TilePoint};

// ============================================================================
// FamilySession
// ============================================================================

/// Everything the core keeps for the currently loaded save
#[derive(Debug)]
pub struct FamilySession {
    store: FamilyConfigStore,
    settings: GlobalSettings,
    advisories: AdvisoryLog,
    tokens: ChildTokens,
    packs: Arc<ContentPackSet>,
}

impl FamilySession {
    /// Start a session for the save whose config lives at `config_path`
    pub fn load(
        config_path: impl Into<PathBuf>,
        current_dependents: usize,
        settings: GlobalSettings,
        packs: Arc<ContentPackSet>,
    ) -> Self {
        let store = FamilyConfigStore::load_or_create(config_path, current_dependents);
        info!(
            path = %store.path().display(),
            max_dependents = store.config().max_dependents(),
            percent = store.config().question_probability_percent(),
            "family config loaded"
        );

        Self {
            store,
            settings,
            advisories: AdvisoryLog::new(),
            tokens: ChildTokens::new(),
            packs,
        }
    }

    /// Like [`FamilySession::load`], using the process-wide settings
    pub fn open(
        config_path: impl Into<PathBuf>,
        current_dependents: usize,
        packs: Arc<ContentPackSet>,
    ) -> Result<Self> {
        let settings = global_settings()?;
        Ok(Self::load(config_path, current_dependents, settings, packs))
    }

    pub fn config(&self) -> &FamilyConfig {
        self.store.config()
    }

    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    pub fn advisories(&self) -> &AdvisoryLog {
        &self.advisories
    }

    /// Nightly hook
    pub fn evaluate_nightly_event(&mut self, night: &NightSnapshot) -> NightlyDecision {
        let selector = NightlySelector::new(self.store.config(), &self.settings);
        let decision = selector.select(night, &mut self.advisories);
        debug!(
            event = decision.event.as_str(),
            draws = decision.draws,
            blocked = decision.blocked.map(|r| r.code()),
            "nightly decision"
        );
        decision
    }

    /// Periodic tick hook
    pub fn assign_slot(
        &self,
        dependent: &DependentSnapshot,
        dependents: Option<&[DependentSnapshot]>,
    ) -> SlotAssignment {
        bed::assign(dependent, dependents)
    }

    /// Day-start hook; `None` keeps the host's placement
    pub fn day_start_position<S: OpenTileSearch + ?Sized>(
        &self,
        dependent: &DependentSnapshot,
        dependents: Option<&[DependentSnapshot]>,
        at_home: bool,
        seed: &SeedInputs,
        search: &S,
    ) -> Option<TilePoint> {
        bed::day_start_position(dependent, dependents, at_home, seed, search)
    }

    /// Ten-minute hook; `None` leaves the dependent alone
    pub fn bedtime_target(
        &self,
        dependent: &DependentSnapshot,
        dependents: Option<&[DependentSnapshot]>,
        at_home: bool,
        tick: BedtimeTick,
    ) -> Option<TilePoint> {
        bed::bedtime_target(dependent, dependents, at_home, tick)
    }

    /// Run a console command by name
    pub fn run_command(
        &mut self,
        name: &str,
        args: &[String],
        ctx: &CommandContext,
    ) -> Result<CommandResponse> {
        let command = FamilyCommand::from_name(name).ok_or_else(|| {
            FamilyPlanningError::InvalidCommandInput(format!("unknown command '{}'", name))
        })?;
        Ok(commands::run_command(command, args, ctx, &mut self.store, &self.settings))
    }

    /// Sprite asset for a dependent, if a pack provides one
    pub fn child_sprite(&self, name: &str, stage: AgeStage) -> Option<String> {
        let key = OverrideKey::ChildSprite {
            name: name.to_string(),
            stage,
        };
        match self.packs.resolve(&key) {
            Some(Override::Sprite(asset)) => Some(asset),
            _ => None,
        }
    }

    /// Birth-completed hook
    pub fn plan_newborn(&self, request: &NewbornRequest<'_>) -> NewbornPlan {
        birth::plan_newborn(request, self.packs.as_ref(), &mut rand::thread_rng())
    }

    /// Re-read per-dependent tokens; true when any changed
    pub fn refresh_tokens(&mut self, dependents: Option<&[DependentSnapshot]>) -> bool {
        self.tokens.refresh(dependents)
    }

    pub fn token_value(&self, token: &str) -> Option<String> {
        self.tokens.value(token)
    }
}

// ============================================================================
// Active Session
// ============================================================================

/// The session of the currently loaded save, if any
static ACTIVE_SESSION: OnceCell<Arc<RwLock<Option<FamilySession>>>> = OnceCell::new();

fn active() -> &'static Arc<RwLock<Option<FamilySession>>> {
    ACTIVE_SESSION.get_or_init(|| Arc::new(RwLock::new(None)))
}

/// Make `session` the active one, replacing any previous save
pub fn start_session(session: FamilySession) {
    *active().write() = Some(session);
}

pub fn is_session_loaded() -> bool {
    active().read().is_some()
}

/// Run `f` against the active session
pub fn with_session<T>(f: impl FnOnce(&mut FamilySession) -> T) -> Result<T> {
    let mut guard = active().write();
    let session = guard.as_mut().ok_or(FamilyPlanningError::SessionNotLoaded)?;
    Ok(f(session))
}

/// Drop everything tied to the loaded save
pub fn return_to_title() {
    if active().write().take().is_some() {
        info!("save closed, family session cleared");
    }
}
