//! Line protocol handling.
//!
//! Parses text commands for the `skirmish` binary's main loop.

pub mod parser;

pub use parser::{parse_command, Command};
