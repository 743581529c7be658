//! Property tests for eligibility evaluation
//!
//! Gate ordering, the capacity cap and the crib rule over arbitrary
//! household states. Gate order is checked against a hand-written list of
//! reasons, not the gate table itself.

use proptest::prelude::*;

use crate::config::{FamilyConfig, GlobalSettings};
use crate::eligibility::{evaluate, BlockReason, Eligibility, EligibilityContext, GATES};
use crate::fixtures::{dependent, farmer_spouse, npc_spouse, roommate_spouse, FARMHOUSE};
use crate::snapshot::{AgeStage, DependentSnapshot, PairingAttribute, PlayerSnapshot, SpouseSnapshot};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn age_stage_strategy() -> impl Strategy<Value = AgeStage> {
    prop_oneof![
        Just(AgeStage::Infant),
        Just(AgeStage::Toddler),
        Just(AgeStage::Child),
    ]
}

fn dependents_strategy(max: usize) -> impl Strategy<Value = Vec<DependentSnapshot>> {
    prop::collection::vec((age_stage_strategy(), any::<bool>()), 0..=max).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (stage, male))| {
                dependent(i as u64 + 1, stage, PairingAttribute::from_is_male(male))
            })
            .collect()
    })
}

fn player_strategy() -> impl Strategy<Value = PlayerSnapshot> {
    (
        prop_oneof![Just(FARMHOUSE), Just("Town")],
        0u8..=3,
        0u32..=20,
        0u32..=14,
        any::<bool>(),
        any::<bool>(),
        dependents_strategy(5),
    )
        .prop_map(
            |(location, upgrade, days_married, hearts, pending, divorce, dependents)| {
                PlayerSnapshot {
                    name: "Farmer".to_string(),
                    current_location: location.to_string(),
                    home_location: FARMHOUSE.to_string(),
                    house_upgrade_level: upgrade,
                    days_married,
                    heart_level: hearts,
                    pending_birth: pending,
                    divorce_tonight: divorce,
                    dependents_home: Some(dependents),
                }
            },
        )
}

fn spouse_strategy() -> impl Strategy<Value = SpouseSnapshot> {
    prop_oneof![
        Just(npc_spouse()),
        Just(roommate_spouse()),
        Just(farmer_spouse(FARMHOUSE, "Cabin")),
        Just(farmer_spouse("Town", "Cabin")),
    ]
}

fn settings_strategy() -> impl Strategy<Value = GlobalSettings> {
    (any::<bool>(), any::<bool>()).prop_map(|(adopt, verbose)| GlobalSettings {
        allow_adoption_with_cohabitant: adopt,
        verbose_eligibility_messages: verbose,
    })
}

/// Reasons in the order the gates must be checked
const GATE_REASONS: [BlockReason; 9] = [
    BlockReason::DivorcePending,
    BlockReason::CohabitantAdoptionDisabled,
    BlockReason::NotAtHome,
    BlockReason::NoNursery,
    BlockReason::BirthPending,
    BlockReason::FriendshipTooLow,
    BlockReason::MarriedTooRecently,
    BlockReason::AtCapacity,
    BlockReason::DependentInCrib,
];

/// Gate to break (9 breaks none), which later gates to break as well,
/// existing bed-age dependents, and the failing values for the numeric gates
fn broken_gate_strategy() -> impl Strategy<Value = (usize, [bool; 9], usize, u8, u32, u32)> {
    (
        0usize..=9,
        any::<[bool; 9]>(),
        0usize..=2,
        0u8..2,
        0u32..10,
        0u32..7,
    )
}

/// A household built to pass every gate, then broken one gate at a time
struct Household {
    player: PlayerSnapshot,
    spouse: SpouseSnapshot,
    settings: GlobalSettings,
    max: u32,
}

impl Household {
    fn eligible(existing: usize, adopt: bool, verbose: bool) -> Self {
        let dependents = (0..existing as u64)
            .map(|i| dependent(i + 1, AgeStage::Toddler, PairingAttribute::A))
            .collect();
        Self {
            player: PlayerSnapshot {
                name: "Farmer".to_string(),
                current_location: FARMHOUSE.to_string(),
                home_location: FARMHOUSE.to_string(),
                house_upgrade_level: 2,
                days_married: 30,
                heart_level: 12,
                pending_birth: false,
                divorce_tonight: false,
                dependents_home: Some(dependents),
            },
            spouse: npc_spouse(),
            settings: GlobalSettings {
                allow_adoption_with_cohabitant: adopt,
                verbose_eligibility_messages: verbose,
            },
            max: 4,
        }
    }

    /// Make gate `k` fail without touching anything an earlier gate reads
    fn break_gate(&mut self, k: usize, upgrade: u8, hearts: u32, days: u32) {
        match k {
            0 => self.player.divorce_tonight = true,
            1 => {
                self.spouse = roommate_spouse();
                self.settings.allow_adoption_with_cohabitant = false;
            }
            2 => self.player.current_location = "Town".to_string(),
            3 => self.player.house_upgrade_level = upgrade,
            4 => self.player.pending_birth = true,
            5 => self.player.heart_level = hearts,
            6 => self.player.days_married = days,
            7 => self.max = self.player.dependent_count() as u32,
            8 => {
                if let Some(list) = self.player.dependents_home.as_mut() {
                    let id = list.len() as u64 + 1;
                    list.push(dependent(id, AgeStage::Infant, PairingAttribute::B));
                }
            }
            _ => {}
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Breaking gate `k` while every earlier gate passes reports gate `k`'s
    /// reason, whatever later gates would say
    #[test]
    fn prop_first_broken_gate_is_reported(
        (k, later, existing, upgrade, hearts, days) in broken_gate_strategy(),
        adopt in any::<bool>(),
        verbose in any::<bool>()
    ) {
        let mut case = Household::eligible(existing, adopt, verbose);
        if k < GATE_REASONS.len() {
            case.break_gate(k, upgrade, hearts, days);
        }
        for j in (k + 1)..GATE_REASONS.len() {
            if later[j] {
                case.break_gate(j, upgrade, hearts, days);
            }
        }

        let config = FamilyConfig::new(case.max, 5).unwrap();
        let ctx = EligibilityContext {
            player: &case.player,
            spouse: &case.spouse,
            config: &config,
            settings: &case.settings,
        };
        let expected = GATE_REASONS
            .get(k)
            .map_or(Eligibility::Eligible, |reason| Eligibility::Blocked(*reason));

        prop_assert_eq!(evaluate(&ctx), expected);
    }

    /// Reaching the cap never yields Eligible
    #[test]
    fn prop_capacity_always_blocks(
        mut player in player_strategy(),
        spouse in spouse_strategy(),
        settings in settings_strategy(),
        max in 0u32..=4
    ) {
        let config = FamilyConfig::new(max, 100).unwrap();
        let dependents: Vec<DependentSnapshot> = (0..max as u64)
            .map(|i| dependent(i + 1, AgeStage::Toddler, PairingAttribute::A))
            .collect();
        player.dependents_home = Some(dependents);

        let ctx = EligibilityContext { player: &player, spouse: &spouse, config: &config, settings: &settings };
        let result = evaluate(&ctx);
        prop_assert!(!result.is_eligible());

        let earlier_pass = GATES
            .iter()
            .take_while(|gate| gate.name != "capacity")
            .all(|gate| (gate.check)(&ctx).is_ok());
        if earlier_pass {
            prop_assert_eq!(result.blocked_reason(), Some(BlockReason::AtCapacity));
        }
    }

    /// An empty household never trips the crib gate
    #[test]
    fn prop_zero_dependents_pass_crib(
        mut player in player_strategy(),
        spouse in spouse_strategy(),
        settings in settings_strategy()
    ) {
        player.dependents_home = Some(Vec::new());
        let config = FamilyConfig::new(3, 5).unwrap();
        let ctx = EligibilityContext { player: &player, spouse: &spouse, config: &config, settings: &settings };

        prop_assert_ne!(evaluate(&ctx).blocked_reason(), Some(BlockReason::DependentInCrib));
    }

    /// Evaluation is a pure function of its inputs
    #[test]
    fn prop_evaluate_is_repeatable(
        player in player_strategy(),
        spouse in spouse_strategy(),
        settings in settings_strategy()
    ) {
        let config = FamilyConfig::new(4, 5).unwrap();
        let ctx = EligibilityContext { player: &player, spouse: &spouse, config: &config, settings: &settings };
        prop_assert_eq!(evaluate(&ctx), evaluate(&ctx));
    }
}
