//! What happens once a birth or adoption completes
//!
//! Name clean-up, the newborn's complexion roll and the spouse's reaction.

mod dialogue;
mod newborn;

pub use dialogue::*;
pub use newborn::*;
