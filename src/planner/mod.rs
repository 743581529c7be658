//! Per-save session tying the config store, settings and engines together

mod session;

pub use session::*;
