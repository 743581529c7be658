//! Per-dependent tokens exposed to content packs

use crate::snapshot::{AgeStage, DependentSnapshot};
use smallvec::SmallVec;

/// Ordinal prefixes, one per tracked dependent
pub const TOKEN_ORDINALS: [&str; 4] = ["First", "Second", "Third", "Fourth"];

/// Cached token values for one dependent
#[derive(Debug, Clone, PartialEq, Eq)]
struct TokenEntry {
    name: String,
    is_toddler: bool,
}

impl From<&DependentSnapshot> for TokenEntry {
    fn from(dependent: &DependentSnapshot) -> Self {
        Self {
            name: dependent.name.clone(),
            is_toddler: dependent.age_stage == AgeStage::Toddler,
        }
    }
}

/// `FirstChildName` .. `FourthChildIsToddler` token values
///
/// Values are cached until the next [`ChildTokens::refresh`], which reports
/// whether anything visible changed.
#[derive(Debug, Clone, Default)]
pub struct ChildTokens {
    entries: Option<SmallVec<[TokenEntry; 4]>>,
}

impl ChildTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every token name, in registration order
    pub fn names() -> impl Iterator<Item = String> {
        TOKEN_ORDINALS.iter().flat_map(|ordinal| {
            [format!("{}ChildName", ordinal), format!("{}ChildIsToddler", ordinal)]
        })
    }

    /// Re-read the household; returns true when any value changed
    ///
    /// `None` means the world is not ready and clears every token.
    pub fn refresh(&mut self, dependents: Option<&[DependentSnapshot]>) -> bool {
        let fresh: Option<SmallVec<[TokenEntry; 4]>> =
            dependents.map(|list| list.iter().map(TokenEntry::from).collect());
        let changed = fresh != self.entries;
        self.entries = fresh;
        changed
    }

    /// Current value of `token`, `None` when unknown or not ready
    pub fn value(&self, token: &str) -> Option<String> {
        let (index, field) = TOKEN_ORDINALS.iter().enumerate().find_map(|(i, ordinal)| {
            token
                .strip_prefix(ordinal)
                .and_then(|rest| rest.strip_prefix("Child"))
                .map(|field| (i, field))
        })?;

        let entry = self.entries.as_ref()?.get(index)?;
        match field {
            "Name" => Some(entry.name.clone()),
            "IsToddler" => Some(entry.is_toddler.to_string()),
            _ => None,
        }
    }

    pub fn is_ready(&self, index: usize) -> bool {
        self.entries.as_ref().is_some_and(|e| index < e.len())
    }

    pub fn clear(&mut self) {
        self.entries = None;
    }
}
