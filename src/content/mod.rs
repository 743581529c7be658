//! Content-pack overrides and per-dependent tokens
//!
//! Packs only change cosmetics: sprite names and the spouse's line after a
//! birth. Every lookup may come back empty and callers fall back to the
//! built-in defaults.

mod pack;
mod tokens;

pub use pack::*;
pub use tokens::*;
