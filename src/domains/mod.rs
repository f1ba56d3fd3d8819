//! Domain modules organized by bounded context.
//!
//! This server has a single domain: tools.

pub mod tools;
