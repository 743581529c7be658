//! Command names, help text and responses

use serde::Deserialize;
use tracing::{error, info, trace, warn};

/// The four console commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyCommand {
    GetMaxChildren,
    SetMaxChildren,
    GetQuestionChance,
    SetQuestionChance,
}

impl FamilyCommand {
    pub const ALL: [FamilyCommand; 4] = [
        FamilyCommand::GetMaxChildren,
        FamilyCommand::SetMaxChildren,
        FamilyCommand::GetQuestionChance,
        FamilyCommand::SetQuestionChance,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            FamilyCommand::GetMaxChildren => "get_max_children",
            FamilyCommand::SetMaxChildren => "set_max_children",
            FamilyCommand::GetQuestionChance => "get_question_chance",
            FamilyCommand::SetQuestionChance => "set_question_chance",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FamilyCommand::GetMaxChildren => "Returns the maximum number of children you can have.",
            FamilyCommand::SetMaxChildren => {
                "Sets the maximum number of children you can have.\n\
                 Warning: If you set the value to more than 4, children will overlap in bed and content packs may not work."
            }
            FamilyCommand::GetQuestionChance => {
                "Returns the percentage chance that your spouse will ask to have a child."
            }
            FamilyCommand::SetQuestionChance => {
                "Sets the probability that your spouse will ask to have a child. The default chance is 5%."
            }
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            FamilyCommand::GetMaxChildren => {
                "Usage: get_max_children\n\
                 - This command requires no input.\n\
                 Example: a value of 2 means your spouse may ask for a child while you have fewer than 2 children.\n\
                 Example: a value of 0 means your spouse will never ask for a child."
            }
            FamilyCommand::SetMaxChildren => {
                "Usage: set_max_children <value>\n\
                 - value: the maximum number of children you want to have, 0 or more.\n\
                 Example: \"set_max_children 4\" lets your spouse ask for a child until you have 4 children.\n\
                 Example: \"set_max_children 0\" stops your spouse from ever asking."
            }
            FamilyCommand::GetQuestionChance => {
                "Usage: get_question_chance\n\
                 - This command requires no input.\n\
                 Example: a value of 5 means a 5% chance each night that your spouse asks, when you meet the requirements."
            }
            FamilyCommand::SetQuestionChance => {
                "Usage: set_question_chance <value>\n\
                 - value: a whole number between 0 and 100, the percentage chance your spouse asks for a baby.\n\
                 Example: set_question_chance 100 => your spouse always asks when you meet the requirements.\n\
                 Example: set_question_chance 0 => your spouse never asks."
            }
        }
    }

    /// Description and usage together, as registered with the host console
    pub fn help(self) -> String {
        format!("{}\n{}", self.description(), self.usage())
    }
}

/// Console level of a response line, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandLevel {
    Trace,
    Info,
    Warn,
    Error,
}

impl CommandLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandLevel::Trace => "trace",
            CommandLevel::Info => "info",
            CommandLevel::Warn => "warn",
            CommandLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub level: CommandLevel,
    pub text: String,
}

/// Lines printed back to the console
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResponse {
    pub lines: Vec<CommandLine>,
}

impl CommandResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: CommandLevel, text: impl Into<String>) {
        self.lines.push(CommandLine {
            level,
            text: text.into(),
        });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(CommandLevel::Info, text);
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.push(CommandLevel::Warn, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(CommandLevel::Error, text);
    }

    pub fn trace(&mut self, text: impl Into<String>) {
        self.push(CommandLevel::Trace, text);
    }

    /// Highest level among the lines
    pub fn worst_level(&self) -> Option<CommandLevel> {
        self.lines.iter().map(|line| line.level).max()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.text.contains(needle))
    }

    /// Forward every line to `tracing` at its level
    pub fn emit(&self) {
        for line in &self.lines {
            match line.level {
                CommandLevel::Trace => trace!(target: "family_planning::console", "{}", line.text),
                CommandLevel::Info => info!(target: "family_planning::console", "{}", line.text),
                CommandLevel::Warn => warn!(target: "family_planning::console", "{}", line.text),
                CommandLevel::Error => error!(target: "family_planning::console", "{}", line.text),
            }
        }
    }
}

/// The parts of the household command advice depends on
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HouseholdView {
    pub spouse_name: String,
    pub dependent_count: usize,
    pub is_cohabitant_only: bool,
    pub uses_adoption_phrasing: bool,
}

/// World state at the time a command runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandContext {
    pub world_ready: bool,
    /// A farm event is currently playing
    pub event_in_progress: bool,
    /// `None` when the player is unmarried or the host could not tell
    pub household: Option<HouseholdView>,
}
