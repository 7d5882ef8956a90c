//! # Module Types
//!
//! Closed enumeration of backplane module categories and slot addressing.

use crate::error::LoadOutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Zero-based slot index within a module type's address space.
pub type ModuleNumber = u8;

// =============================================================================
// MODULE TYPE
// =============================================================================

/// Category of I/O module that can sit in a backplane slot.
///
/// Discriminants are the raw codes used by the FPGA image. `Unknown` is the
/// catch-all for any code the backplane does not back with hardware.
///
/// Serializes as the lowercase name. Deserializes from a name (any case) or a
/// raw code, as a number or a decimal string, with the same rules as `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "RawModuleType")]
#[repr(u8)]
pub enum ModuleType {
    Unknown = 0x00,
    Analog = 0x01,
    Digital = 0x02,
    Solenoid = 0x03,
}

impl ModuleType {
    /// Every variant, in raw-code order.
    pub const ALL: [ModuleType; 4] = [
        ModuleType::Unknown,
        ModuleType::Analog,
        ModuleType::Digital,
        ModuleType::Solenoid,
    ];

    /// Decode a raw code. Codes outside the enumeration become `Unknown`.
    #[must_use]
    pub const fn from_raw(code: u8) -> Self {
        match code {
            0x01 => ModuleType::Analog,
            0x02 => ModuleType::Digital,
            0x03 => ModuleType::Solenoid,
            _ => ModuleType::Unknown,
        }
    }

    /// Raw code for this module type.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Lowercase name, matching the serde representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ModuleType::Unknown => "unknown",
            ModuleType::Analog => "analog",
            ModuleType::Digital => "digital",
            ModuleType::Solenoid => "solenoid",
        }
    }
}

impl From<u8> for ModuleType {
    fn from(code: u8) -> Self {
        ModuleType::from_raw(code)
    }
}

impl From<ModuleType> for u8 {
    fn from(module_type: ModuleType) -> Self {
        module_type.as_raw()
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModuleType {
    type Err = LoadOutError;

    /// Accepts a case-insensitive name or a decimal raw code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(code) = trimmed.parse::<u8>() {
            return Ok(ModuleType::from_raw(code));
        }

        ModuleType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LoadOutError::UnrecognizedModuleType(s.to_string()))
    }
}

/// Wire form accepted when deserializing a `ModuleType`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawModuleType {
    Code(u8),
    Text(String),
}

impl TryFrom<RawModuleType> for ModuleType {
    type Error = LoadOutError;

    fn try_from(raw: RawModuleType) -> Result<Self, Self::Error> {
        match raw {
            RawModuleType::Code(code) => Ok(ModuleType::from_raw(code)),
            RawModuleType::Text(text) => text.parse(),
        }
    }
}

// =============================================================================
// MODULE SLOT
// =============================================================================

/// A `(module_type, module_number)` address on the backplane.
///
/// Ordering is by raw type code, then number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModuleSlot {
    pub module_type: ModuleType,
    pub module_number: ModuleNumber,
}

impl ModuleSlot {
    #[must_use]
    pub const fn new(module_type: ModuleType, module_number: ModuleNumber) -> Self {
        Self {
            module_type,
            module_number,
        }
    }

    /// Whether the backplane has this slot.
    #[must_use]
    pub const fn is_present(self) -> bool {
        crate::presence::get_module_presence(self.module_type, self.module_number)
    }
}

impl fmt::Display for ModuleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.module_type, self.module_number)
    }
}

// =============================================================================
// TESTS
// =============================================================================
