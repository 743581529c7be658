//! Command execution against a save's config store

use super::{CommandContext, CommandResponse, FamilyCommand, HouseholdView};
use crate::config::{FamilyConfigStore, GlobalSettings, MAX_QUESTION_PERCENT};
use crate::error::{FamilyPlanningError, Result};
use tracing::debug;

/// Caps above this overlap in bed and break per-dependent tokens
pub const RECOMMENDED_MAX_DEPENDENTS: u32 = 4;

const IGNORE_WARNING: &str = "If this is intentional, you can freely ignore this warning.";
const UNSAVED_CHANGE: &str = "The new value will work while the game remains open, \
     but if you close and re-open this save file, your new settings will be lost.";

/// Run `command` with its raw arguments
///
/// Invalid input produces the usage text and leaves the store untouched.
pub fn run_command(
    command: FamilyCommand,
    args: &[String],
    ctx: &CommandContext,
    store: &mut FamilyConfigStore,
    settings: &GlobalSettings,
) -> CommandResponse {
    let mut response = CommandResponse::new();
    if !is_command_safe(ctx, &mut response) {
        return response;
    }

    match command {
        FamilyCommand::GetMaxChildren => {
            let max = store.config().max_dependents();
            response.info(format!("The current maximum number of children you can have is: {}.", max));
            max_dependents_notes(max, ctx, settings, &mut response);
            response.info("If you'd like to change your MaxChildren value, use the set_max_children command.");
        }
        FamilyCommand::SetMaxChildren => {
            let value = match parse_value(command, args, u32::MAX) {
                Ok(value) => value,
                Err(e) => return usage_response(command, &e),
            };
            if let Err(e) = store.set_max_dependents(value) {
                return persist_failure(&e, response);
            }
            response.info(format!(
                "This save file's maximum number of children allowed is now set to {}.",
                value
            ));
            max_dependents_notes(value, ctx, settings, &mut response);
        }
        FamilyCommand::GetQuestionChance => {
            response.info(format!(
                "The current probability that your spouse will ask for a baby is: {}%.",
                store.config().question_probability_percent()
            ));
            response.info("If you'd like to change this value, use the set_question_chance command.");
        }
        FamilyCommand::SetQuestionChance => {
            let value = match parse_value(command, args, MAX_QUESTION_PERCENT) {
                Ok(value) => value,
                Err(e) => return usage_response(command, &e),
            };
            if let Err(e) = store.set_question_probability_percent(value) {
                return persist_failure(&e, response);
            }
            response.info(format!(
                "For this save file, the probability that your spouse will ask for a baby is now set to {}%.",
                value
            ));
            response.trace(format!("Question chance is now {}", store.config().question_probability()));
            question_chance_notes(store, ctx, settings, &mut response);
        }
    }

    response
}

fn is_command_safe(ctx: &CommandContext, response: &mut CommandResponse) -> bool {
    if !ctx.world_ready {
        response.info("A save must be fully loaded to use this command, please wait.");
        return false;
    }
    if ctx.event_in_progress {
        response.info("An event is in progress, please wait until it is finished to use this command.");
        return false;
    }
    true
}

/// Parse the first argument as a whole number in `0..=max`
fn parse_value(command: FamilyCommand, args: &[String], max: u32) -> Result<u32> {
    let raw = args.first().ok_or_else(|| {
        FamilyPlanningError::InvalidCommandInput(format!("{} needs a value", command.name()))
    })?;
    let value: i64 = raw.trim().parse().map_err(|_| {
        FamilyPlanningError::InvalidCommandInput(format!("'{}' is not a whole number", raw))
    })?;
    u32::try_from(value)
        .ok()
        .filter(|v| *v <= max)
        .ok_or_else(|| FamilyPlanningError::InvalidCommandInput(format!("{} is outside 0-{}", value, max)))
}

fn usage_response(command: FamilyCommand, err: &FamilyPlanningError) -> CommandResponse {
    debug!(command = command.name(), error = %err, "rejected command input");
    let mut response = CommandResponse::new();
    response.info(command.usage());
    response
}

fn persist_failure(err: &FamilyPlanningError, mut response: CommandResponse) -> CommandResponse {
    response.error("An error occurred when editing this save file's settings.");
    response.error(UNSAVED_CHANGE);
    response.trace(format!("Exception: {}", err));
    response
}

fn roommate_warning(household: &HouseholdView, settings: &GlobalSettings, response: &mut CommandResponse) -> bool {
    if !household.is_cohabitant_only || settings.allow_adoption_with_cohabitant {
        return false;
    }
    let spouse = &household.spouse_name;
    response.warn(format!(
        "{} is your roommate, but your AdoptChildrenWithRoommate config is false.",
        spouse
    ));
    response.info(IGNORE_WARNING);
    response.info(format!(
        "If this was a mistake and you'd like to adopt children with {}, \
         set AdoptChildrenWithRoommate to true in the settings file.",
        spouse
    ));
    true
}

fn never_asks(household: &HouseholdView) -> String {
    let verb = if household.uses_adoption_phrasing { "adopt" } else { "have" };
    format!("so {} will never ask to {} a child.", household.spouse_name, verb)
}

/// Advice after reading or changing the cap
fn max_dependents_notes(
    max: u32,
    ctx: &CommandContext,
    settings: &GlobalSettings,
    response: &mut CommandResponse,
) {
    if max == 0 {
        response.info("A MaxChildren value of 0 means that you will never be asked about children.");
        return;
    }
    let Some(household) = ctx.household.as_ref() else {
        return;
    };
    if roommate_warning(household, settings, response) {
        return;
    }

    let count = household.dependent_count;
    let spouse = &household.spouse_name;
    let verb = if household.uses_adoption_phrasing { "adopt" } else { "have" };

    if count == 0 {
        response.info(format!(
            "You don't currently have any children, so {} may ask to {} a child.",
            spouse, verb
        ));
    } else if count as u64 >= u64::from(max) {
        let status = if count == 1 {
            "You already have a child and your MaxChildren value is 1, ".to_string()
        } else {
            format!("You already have {} children and your MaxChildren value is {}, ", count, max)
        };
        response.warn(format!("{}{}", status, never_asks(household)));
        response.info(IGNORE_WARNING);
    } else {
        let status = if count == 1 {
            "You currently have 1 child, ".to_string()
        } else {
            format!("You currently have {} children, ", count)
        };
        response.info(format!("{}so {} may ask to {} more children.", status, spouse, verb));

        if max > RECOMMENDED_MAX_DEPENDENTS {
            response.warn(
                "Warning: Having more than 4 children will lead to issues, \
                 like children overlapping in bed and content packs not working.",
            );
            response.info("If you are fine with those problems occurring, you can ignore this warning.");
        }
    }
}

/// Advice after changing the nightly chance
fn question_chance_notes(
    store: &FamilyConfigStore,
    ctx: &CommandContext,
    settings: &GlobalSettings,
    response: &mut CommandResponse,
) {
    let config = store.config();
    if config.question_probability_percent() == 0 {
        response.info("By setting your BabyQuestionChance value to 0, your spouse will never ask to have children.");
        return;
    }
    let Some(household) = ctx.household.as_ref() else {
        return;
    };
    if roommate_warning(household, settings, response) {
        return;
    }

    let count = household.dependent_count;
    let max = config.max_dependents();
    if config.has_capacity_for(count) {
        return;
    }

    let status = if max == 0 {
        "Currently, your MaxChildren value is 0, ".to_string()
    } else if count == 1 {
        "You already have a child and your MaxChildren value is 1, ".to_string()
    } else {
        format!("You already have {} children and your MaxChildren value is {}, ", count, max)
    };
    response.warn(
        "Warning: Did you mean to change your question chance even though your spouse will never ask about a child?",
    );
    response.warn(format!("{}{}", status, never_asks(household)));
    response.info(IGNORE_WARNING);
    response.info("If this was a mistake, use the set_max_children command.");
}
