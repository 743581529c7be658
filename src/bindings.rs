//! Python bindings for the host
//!
//! The host passes plain dicts describing the night or the household and
//! gets identifiers and tile coordinates back. Dicts go through `json.dumps`
//! and [`crate::host_data`]. All state lives in the active [`FamilySession`].

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::prelude::*;

use crate::bed;
use crate::commands::{CommandContext, HouseholdView};
use crate::config::{init_global_settings, FamilyConfigStore, GlobalSettings};
use crate::content::ContentPackSet;
use crate::host_data::dependents_from_host_json;
use crate::nightly::NightlyDecision;
use crate::planner::{self, FamilySession};
use crate::snapshot::NightSnapshot;

// ============================================================================
// Cached Content Packs
// ============================================================================

/// Packs loaded at startup, shared by every session
static CONTENT_PACKS: OnceCell<Arc<RwLock<Arc<ContentPackSet>>>> = OnceCell::new();

fn content_packs() -> Arc<ContentPackSet> {
    CONTENT_PACKS
        .get_or_init(|| Arc::new(RwLock::new(Arc::new(ContentPackSet::default()))))
        .read()
        .clone()
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Serialize a host dict or list with Python's `json` module
///
/// Parsing then happens in [`crate::host_data`], which rejects missing or
/// mistyped gate flags.
fn to_json(obj: &Bound<'_, PyAny>) -> PyResult<String> {
    obj.py()
        .import("json")?
        .call_method1("dumps", (obj,))?
        .extract()
}

// ============================================================================
// NightlyOutcome PyClass
// ============================================================================

/// Result of the nightly hook
#[pyclass]
#[derive(Debug, Clone)]
pub struct NightlyOutcome {
    decision: NightlyDecision,
}

#[pymethods]
impl NightlyOutcome {
    /// Event identifier for the host
    #[getter]
    fn event(&self) -> &'static str {
        self.decision.event.as_str()
    }

    /// Block reason code, when eligibility failed
    #[getter]
    fn blocked(&self) -> Option<&'static str> {
        self.decision.blocked.map(|reason| reason.code())
    }

    #[getter]
    fn draws(&self) -> u32 {
        self.decision.draws
    }

    fn __repr__(&self) -> String {
        format!(
            "NightlyOutcome(event={}, blocked={:?}, draws={})",
            self.event(),
            self.blocked(),
            self.draws()
        )
    }
}

// ============================================================================
// Python Functions
// ============================================================================

/// Read the settings file and content packs (call once at startup)
#[pyfunction]
#[pyo3(signature = (settings_path, content_pack_dir=None))]
fn init_settings(settings_path: PathBuf, content_pack_dir: Option<PathBuf>) {
    init_global_settings(GlobalSettings::load(&settings_path));

    let packs = content_pack_dir
        .map(|dir| ContentPackSet::load_dir(&dir))
        .unwrap_or_default();
    let packs = Arc::new(packs);
    if let Some(existing) = CONTENT_PACKS.get() {
        *existing.write() = packs;
    } else {
        let _ = CONTENT_PACKS.set(Arc::new(RwLock::new(packs)));
    }
}

/// Start the session for a freshly loaded save
#[pyfunction]
#[pyo3(signature = (data_dir, save_name, dependent_count=0))]
fn load_save(data_dir: PathBuf, save_name: &str, dependent_count: usize) -> PyResult<()> {
    let path = FamilyConfigStore::path_for_save(&data_dir, save_name);
    let session = FamilySession::open(path, dependent_count, content_packs())?;
    planner::start_session(session);
    Ok(())
}

/// Drop the loaded save's state
#[pyfunction]
fn return_to_title() {
    planner::return_to_title();
}

#[pyfunction]
fn is_save_loaded() -> bool {
    planner::is_session_loaded()
}

/// Pick tonight's event from a night snapshot dict
#[pyfunction]
fn evaluate_nightly_event(night: &Bound<'_, PyAny>) -> PyResult<NightlyOutcome> {
    let night = NightSnapshot::from_host_json(&to_json(night)?)?;
    let decision = planner::with_session(|session| session.evaluate_nightly_event(&night))?;
    Ok(NightlyOutcome { decision })
}

/// Bed slot of `dependents[target_index]` as `(slot, x, y)`
///
/// Works without a loaded save; an unknown list yields the first bed.
#[pyfunction]
#[pyo3(signature = (target_index, dependents=None))]
fn assign_slot(
    target_index: usize,
    dependents: Option<&Bound<'_, PyAny>>,
) -> PyResult<(&'static str, i32, i32)> {
    let dependents = match dependents.filter(|d| !d.is_none()) {
        Some(list) => dependents_from_host_json(&to_json(list)?)?,
        None => None,
    };
    let slot = bed::assign_at(target_index, dependents.as_deref());
    let tile = slot.tile();
    Ok((slot.as_str(), tile.x, tile.y))
}

/// Run a console command; returns `(level, text)` lines
///
/// `household` is an optional dict with `spouse_name`, `dependent_count`,
/// `is_cohabitant_only` and `uses_adoption_phrasing`, used for advice.
#[pyfunction]
#[pyo3(signature = (name, args, world_ready=true, event_in_progress=false, household=None))]
fn run_command(
    name: &str,
    args: Vec<String>,
    world_ready: bool,
    event_in_progress: bool,
    household: Option<&Bound<'_, PyAny>>,
) -> PyResult<Vec<(&'static str, String)>> {
    let household = household
        .filter(|h| !h.is_none())
        .map(|h| {
            let json = to_json(h)?;
            HouseholdView::from_host_json(&json).map_err(PyErr::from)
        })
        .transpose()?;
    let ctx = CommandContext {
        world_ready,
        event_in_progress,
        household,
    };
    let response = planner::with_session(|session| session.run_command(name, &args, &ctx))??;
    response.emit();
    Ok(response
        .lines
        .into_iter()
        .map(|line| (line.level.as_str(), line.text))
        .collect())
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn family_planning_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_settings, m)?)?;
    m.add_function(wrap_pyfunction!(load_save, m)?)?;
    m.add_function(wrap_pyfunction!(return_to_title, m)?)?;
    m.add_function(wrap_pyfunction!(is_save_loaded, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_nightly_event, m)?)?;
    m.add_function(wrap_pyfunction!(assign_slot, m)?)?;
    m.add_function(wrap_pyfunction!(run_command, m)?)?;
    m.add_class::<NightlyOutcome>()?;
    Ok(())
}
