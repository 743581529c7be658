//! Eligibility checks for the nightly reproduction request
//!
//! An ordered table of named gates is run against the player, spouse and
//! configuration. The first failing gate decides the block reason.

mod evaluator;
mod gate;

#[cfg(test)]
mod property_tests;

pub use evaluator::*;
pub use gate::*;
