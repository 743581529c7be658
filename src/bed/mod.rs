//! Bed slot assignment for dependents old enough to leave the crib

mod assigner;
mod placement;


pub use assigner::*;
pub use placement::*;
