//! Tool definitions module.
//!
//! Each tool is defined in its own file. This server advertises exactly one.

mod current_datetime;

pub use current_datetime::{CurrentDatetimeParams, CurrentDatetimeTool};
