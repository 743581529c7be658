//! Nightly event selection
//!
//! Decides, once per simulated night, whether the spouse asks for a child
//! or one of the host's ambient night events happens instead.

mod advisory;
pub mod selector;


pub use advisory::*;
pub use selector::*;
