//! Deterministic replication of the host's random sequences
//!
//! The host seeds a fresh generator for each decision from world state.
//! Reproducing both the generator and the seed formulas keeps customized
//! decisions in lock-step with unmodified ones.

mod host_random;
mod seed;

#[cfg(test)]
mod property_tests;

pub use host_random::*;
pub use seed::*;
