//! Error types for LoadOut.

use thiserror::Error;

/// Errors raised at the text boundary of the crate.
///
/// Presence queries themselves never fail; only parsing user input can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadOutError {
    /// Input was neither a module type name nor a decimal raw code.
    #[error("unrecognized module type '{0}' (expected analog, digital, solenoid, unknown or a raw code 0-255)")]
    UnrecognizedModuleType(String),
}
