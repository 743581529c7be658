//! Spouse reaction lines after a new dependent arrives

use crate::content::{Override, OverrideKey, OverrideResolver};
use crate::snapshot::SpouseSnapshot;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};
use tracing::debug;

/// Host dialogue key for a first biological child
pub const FIRST_CHILD_KEY: &str = "NewChild_FirstChild";
/// Host dialogue key for a first adopted child
pub const ADOPTION_KEY: &str = "NewChild_Adoption";
/// Host dialogue keys for a second child, suffixed with 1 or 2
pub const SECOND_CHILD_KEY_PREFIX: &str = "NewChild_SecondChild";

pub const THIRD_CHILD_LINE: &str = "Three beautiful children... This is so wonderful.";
pub const LARGE_FAMILY_LINE: &str =
    "What a big, happy family... I couldn't have imagined I would be so happy before I met you.";

/// `{n}` placeholders in pack dialogue
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("valid placeholder regex"));

/// What the spouse says the morning after
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpouseReaction {
    /// A line from the host's own dialogue table
    HostDialogue { key: String, args: Vec<String> },
    /// Literal text
    Text(String),
}

/// Replace `{0}` with the baby's name and `{1}` with the player's
///
/// Other placeholders are left untouched.
pub fn render_template(template: &str, baby_name: &str, player_name: &str) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "0" => baby_name.to_string(),
            "1" => player_name.to_string(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Pick the spouse's line for the `dependent_count`-th dependent
///
/// A content-pack line for this spouse and count wins; otherwise the
/// built-in line for the count is used.
pub fn spouse_reaction<O, R>(
    spouse: &SpouseSnapshot,
    baby_name: &str,
    player_name: &str,
    dependent_count: usize,
    resolver: &O,
    rng: &mut R,
) -> SpouseReaction
where
    O: OverrideResolver + ?Sized,
    R: Rng + ?Sized,
{
    let key = OverrideKey::SpouseDialogue {
        spouse: spouse.name.clone(),
    };
    if let Some(Override::Dialogue(lines)) = resolver.resolve(&key) {
        if let Some(line) = lines
            .iter()
            .find(|line| line.baby_number as usize == dependent_count)
        {
            return SpouseReaction::Text(render_template(&line.dialogue, baby_name, player_name));
        }
        debug!(spouse = %spouse.name, dependent_count, "no pack line for this dependent count");
    }

    match dependent_count {
        1 => {
            let key = if spouse.uses_adoption_phrasing() {
                ADOPTION_KEY
            } else {
                FIRST_CHILD_KEY
            };
            SpouseReaction::HostDialogue {
                key: key.to_string(),
                args: vec![baby_name.to_string()],
            }
        }
        2 => SpouseReaction::HostDialogue {
            key: format!("{}{}", SECOND_CHILD_KEY_PREFIX, rng.gen_range(1..3)),
            args: Vec::new(),
        },
        3 => SpouseReaction::Text(THIRD_CHILD_LINE.to_string()),
        _ => SpouseReaction::Text(LARGE_FAMILY_LINE.to_string()),
    }
}
