//! Console commands for reading and changing a save's family limits

mod command;
mod handler;

pub use command::*;
pub use handler::*;
