//! Snapshot builders shared by unit and property tests

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::random::SeedInputs;
use crate::snapshot::{
    AgeStage, DependentSnapshot, NightSnapshot, PairingAttribute, PartnerKind, PlayerSnapshot,
    SpouseSnapshot,
};

pub const FARMHOUSE: &str = "FarmHouse";

pub fn dependent(id: u64, age_stage: AgeStage, pairing: PairingAttribute) -> DependentSnapshot {
    DependentSnapshot {
        id,
        name: format!("Child {}", id),
        age_stage,
        pairing,
        birth_index: id as u32,
    }
}

/// Bed-age dependents in birth order with the given pairings
pub fn toddlers(pairings: &[PairingAttribute]) -> Vec<DependentSnapshot> {
    pairings
        .iter()
        .enumerate()
        .map(|(i, pairing)| dependent(i as u64 + 1, AgeStage::Toddler, *pairing))
        .collect()
}

/// A player passing every gate with a villager spouse
pub fn eligible_player(dependents: Vec<DependentSnapshot>) -> PlayerSnapshot {
    PlayerSnapshot {
        name: "Farmer".to_string(),
        current_location: FARMHOUSE.to_string(),
        home_location: FARMHOUSE.to_string(),
        house_upgrade_level: 2,
        days_married: 30,
        heart_level: 12,
        pending_birth: false,
        divorce_tonight: false,
        dependents_home: Some(dependents),
    }
}

pub fn npc_spouse() -> SpouseSnapshot {
    SpouseSnapshot {
        name: "Abigail".to_string(),
        kind: PartnerKind::Npc,
        is_cohabitant_only: false,
        is_same_gender_pairing: false,
    }
}

pub fn roommate_spouse() -> SpouseSnapshot {
    SpouseSnapshot {
        name: "Krobus".to_string(),
        kind: PartnerKind::Npc,
        is_cohabitant_only: true,
        is_same_gender_pairing: false,
    }
}

pub fn farmer_spouse(current_location: &str, home_location: &str) -> SpouseSnapshot {
    SpouseSnapshot {
        name: "Second Farmer".to_string(),
        kind: PartnerKind::Farmer {
            current_location: current_location.to_string(),
            home_location: home_location.to_string(),
        },
        is_cohabitant_only: false,
        is_same_gender_pairing: false,
    }
}

pub fn night(player: PlayerSnapshot, spouse: Option<SpouseSnapshot>, seed: SeedInputs) -> NightSnapshot {
    NightSnapshot {
        seed,
        wedding_today: false,
        birth_event_chosen: false,
        player,
        spouse,
    }
}

/// Log lines written while a scoped subscriber is installed
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records every level, returning its output
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let text = String::from_utf8_lossy(&logs.0.lock()).into_owned();
    (result, text)
}
