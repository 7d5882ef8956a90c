//! # LoadOut CLI
//!
//! Argument parsing, command handlers and logging setup for the `loadout`
//! binary. Handlers live here rather than in `main.rs` so integration tests
//! can call them and inspect the text they produce.

pub mod cli;
pub mod logging;

pub use loadout_core;
