//! Host data as it arrives over the binding
//!
//! The host serializes its night and household views to JSON. Every flag
//! that can open an eligibility gate is a required field: a missing or
//! mistyped flag rejects the whole payload instead of defaulting to a
//! permissive value.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::commands::HouseholdView;
use crate::error::{FamilyPlanningError, Result};
use crate::random::SeedInputs;
use crate::snapshot::{
    AgeStage, DependentSnapshot, NightSnapshot, PairingAttribute, PartnerKind, PlayerSnapshot,
    SpouseSnapshot,
};

#[derive(Debug, Deserialize)]
struct HostDependent {
    id: u64,
    name: String,
    /// Host age, 0 newborn through 3 toddler
    age: u8,
    is_male: bool,
    /// Defaults to the list position
    birth_index: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct HostFarmer {
    current_location: String,
    home_location: String,
}

#[derive(Debug, Deserialize)]
struct HostSpouse {
    name: String,
    /// Present only when the partner is another player
    farmer: Option<HostFarmer>,
    is_cohabitant_only: bool,
    is_same_gender_pairing: bool,
}

#[derive(Debug, Deserialize)]
struct HostPlayer {
    name: String,
    current_location: String,
    home_location: String,
    house_upgrade_level: u8,
    days_married: u32,
    heart_level: u32,
    pending_birth: bool,
    divorce_tonight: bool,
    /// `null` or absent when the host could not list them
    dependents: Option<Vec<HostDependent>>,
}

#[derive(Debug, Deserialize)]
struct HostNight {
    days_elapsed: u32,
    world_id: u64,
    participant_id: i64,
    wedding_today: bool,
    birth_event_chosen: bool,
    player: HostPlayer,
    spouse: Option<HostSpouse>,
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(FamilyPlanningError::HostData)
}

fn into_dependents(list: Vec<HostDependent>) -> Vec<DependentSnapshot> {
    list.into_iter()
        .enumerate()
        .map(|(position, d)| DependentSnapshot {
            id: d.id,
            name: d.name,
            age_stage: AgeStage::from_host_age(d.age),
            pairing: PairingAttribute::from_is_male(d.is_male),
            birth_index: d.birth_index.unwrap_or(position as u32 + 1),
        })
        .collect()
}

impl From<HostSpouse> for SpouseSnapshot {
    fn from(spouse: HostSpouse) -> Self {
        let kind = match spouse.farmer {
            Some(farmer) => PartnerKind::Farmer {
                current_location: farmer.current_location,
                home_location: farmer.home_location,
            },
            None => PartnerKind::Npc,
        };
        SpouseSnapshot {
            name: spouse.name,
            kind,
            is_cohabitant_only: spouse.is_cohabitant_only,
            is_same_gender_pairing: spouse.is_same_gender_pairing,
        }
    }
}

impl From<HostPlayer> for PlayerSnapshot {
    fn from(player: HostPlayer) -> Self {
        PlayerSnapshot {
            name: player.name,
            current_location: player.current_location,
            home_location: player.home_location,
            house_upgrade_level: player.house_upgrade_level,
            days_married: player.days_married,
            heart_level: player.heart_level,
            pending_birth: player.pending_birth,
            divorce_tonight: player.divorce_tonight,
            dependents_home: player.dependents.map(into_dependents),
        }
    }
}

impl NightSnapshot {
    /// Parse the host's night view
    pub fn from_host_json(json: &str) -> Result<Self> {
        let night: HostNight = parse(json)?;
        Ok(NightSnapshot {
            seed: SeedInputs::new(night.days_elapsed, night.world_id, night.participant_id),
            wedding_today: night.wedding_today,
            birth_event_chosen: night.birth_event_chosen,
            player: night.player.into(),
            spouse: night.spouse.map(SpouseSnapshot::from),
        })
    }
}

/// Parse a host dependent list; `null` means the host could not list them
pub fn dependents_from_host_json(json: &str) -> Result<Option<Vec<DependentSnapshot>>> {
    let list: Option<Vec<HostDependent>> = parse(json)?;
    Ok(list.map(into_dependents))
}

impl HouseholdView {
    /// Parse the household summary sent along with a command
    pub fn from_host_json(json: &str) -> Result<Self> {
        parse(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FamilyConfig, GlobalSettings};
    use crate::eligibility::{evaluate, BlockReason, EligibilityContext};
    use serde_json::{json, Value};

    fn night_json() -> Value {
        json!({
            "days_elapsed": 120,
            "world_id": 987654321u64,
            "participant_id": 42,
            "wedding_today": false,
            "birth_event_chosen": false,
            "player": {
                "name": "Farmer",
                "current_location": "FarmHouse",
                "home_location": "FarmHouse",
                "house_upgrade_level": 2,
                "days_married": 30,
                "heart_level": 12,
                "pending_birth": false,
                "divorce_tonight": false,
                "dependents": [
                    {"id": 11, "name": "Ivy", "age": 3, "is_male": false},
                    {"id": 12, "name": "Oak", "age": 4, "is_male": true, "birth_index": 5}
                ]
            },
            "spouse": {
                "name": "Abigail",
                "is_cohabitant_only": false,
                "is_same_gender_pairing": false
            }
        })
    }

    fn parse_value(value: &Value) -> Result<NightSnapshot> {
        NightSnapshot::from_host_json(&value.to_string())
    }

    fn is_host_data_error(result: Result<NightSnapshot>) -> bool {
        matches!(result, Err(FamilyPlanningError::HostData(_)))
    }

    #[test]
    fn test_parse_full_night() {
        let night = parse_value(&night_json()).unwrap();
        assert_eq!(night.seed, SeedInputs::new(120, 987654321, 42));
        assert!(night.spouse.as_ref().unwrap().is_npc());

        let dependents = night.player.dependents_home.unwrap();
        assert_eq!(dependents[0].age_stage, AgeStage::Toddler);
        assert_eq!(dependents[0].pairing, PairingAttribute::B);
        assert_eq!(dependents[0].birth_index, 1);
        assert_eq!(dependents[1].age_stage, AgeStage::Child);
        assert_eq!(dependents[1].birth_index, 5);
    }

    #[test]
    fn test_gate_flags_are_required() {
        for (section, key) in [
            ("player", "pending_birth"),
            ("player", "divorce_tonight"),
            ("spouse", "is_cohabitant_only"),
        ] {
            let mut value = night_json();
            value[section].as_object_mut().unwrap().remove(key);
            assert!(is_host_data_error(parse_value(&value)), "missing {}", key);
        }
    }

    #[test]
    fn test_mistyped_flags_are_rejected() {
        for bad in [json!(1), json!("true"), Value::Null] {
            let mut value = night_json();
            value["player"]["divorce_tonight"] = bad.clone();
            assert!(is_host_data_error(parse_value(&value)), "accepted {}", bad);

            let mut value = night_json();
            value["spouse"]["is_cohabitant_only"] = bad;
            assert!(is_host_data_error(parse_value(&value)));
        }
    }

    #[test]
    fn test_missing_dependents_block_at_capacity_gate() {
        let mut value = night_json();
        value["player"].as_object_mut().unwrap().remove("dependents");
        let night = parse_value(&value).unwrap();
        assert!(night.player.dependents_home.is_none());

        let config = FamilyConfig::default();
        let settings = GlobalSettings::default();
        let spouse = night.spouse.unwrap();
        let ctx = EligibilityContext {
            player: &night.player,
            spouse: &spouse,
            config: &config,
            settings: &settings,
        };
        assert_eq!(
            evaluate(&ctx).blocked_reason(),
            Some(BlockReason::DependentsUnavailable)
        );
    }

    #[test]
    fn test_farmer_partner_and_unpartnered() {
        let mut value = night_json();
        value["spouse"]["farmer"] = json!({
            "current_location": "Cabin",
            "home_location": "Cabin"
        });
        let night = parse_value(&value).unwrap();
        assert!(matches!(
            night.spouse.unwrap().kind,
            PartnerKind::Farmer { .. }
        ));

        value["spouse"] = Value::Null;
        assert!(parse_value(&value).unwrap().spouse.is_none());
    }

    #[test]
    fn test_dependent_list() {
        assert_eq!(dependents_from_host_json("null").unwrap(), None);
        let list = dependents_from_host_json(r#"[{"id": 1, "name": "A", "age": 0, "is_male": true}]"#)
            .unwrap()
            .unwrap();
        assert_eq!(list[0].age_stage, AgeStage::Infant);
        assert!(dependents_from_host_json(r#"[{"id": 1, "name": "A", "age": 0}]"#).is_err());
    }

    #[test]
    fn test_household_flags_are_required() {
        let household = HouseholdView::from_host_json(
            r#"{"spouse_name": "Krobus", "dependent_count": 1,
                "is_cohabitant_only": true, "uses_adoption_phrasing": true}"#,
        )
        .unwrap();
        assert!(household.is_cohabitant_only);

        let missing = HouseholdView::from_host_json(r#"{"spouse_name": "Krobus", "dependent_count": 1}"#);
        assert!(matches!(missing, Err(FamilyPlanningError::HostData(_))));
    }
}
