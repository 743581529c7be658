//! Ordered gate evaluation

use super::gate::{BlockReason, EligibilityContext, Gate, GATES};
use tracing::trace;

/// Outcome of running the gate table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Blocked(BlockReason),
}

impl Eligibility {
    #[inline]
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    #[inline]
    pub fn blocked_reason(&self) -> Option<BlockReason> {
        match self {
            Eligibility::Eligible => None,
            Eligibility::Blocked(reason) => Some(*reason),
        }
    }
}

/// Run the standard gate table; the first failing gate wins
///
/// Pure; the host may call it any number of times per night.
#[inline]
pub fn evaluate(ctx: &EligibilityContext<'_>) -> Eligibility {
    evaluate_with(&GATES, ctx)
}

/// Run a custom gate table in order
pub fn evaluate_with(gates: &[Gate], ctx: &EligibilityContext<'_>) -> Eligibility {
    for gate in gates {
        if let Err(reason) = (gate.check)(ctx) {
            trace!(gate = gate.name, reason = reason.code(), "eligibility gate blocked");
            return Eligibility::Blocked(reason);
        }
    }
    Eligibility::Eligible
}
