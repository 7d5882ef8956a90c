//! # Presence Module
//!
//! Which module slots the backplane provides.
//!
//! Capacity per module type is fixed by the FPGA image:
//!
//! | Type     | Slots |
//! |----------|-------|
//! | analog   | 0     |
//! | digital  | 0, 1  |
//! | solenoid | 0     |
//! | other    | none  |
//!
//! Presence is a static configuration fact. It says nothing about whether a
//! physical module is plugged in right now.

use crate::module::{ModuleNumber, ModuleSlot, ModuleType};

/// Whether slot `module_number` of `module_type` exists on the backplane.
///
/// Total: out-of-range numbers and unsupported types both return `false`.
#[must_use]
pub const fn get_module_presence(module_type: ModuleType, module_number: ModuleNumber) -> bool {
    match module_type {
        ModuleType::Analog => module_number == 0,
        ModuleType::Digital => matches!(module_number, 0..=1),
        ModuleType::Solenoid => module_number == 0,
        _ => false,
    }
}

/// Presence for a raw module type code, e.g. one read from a register.
///
/// Codes outside the enumeration fall through to "absent".
#[must_use]
pub const fn get_module_presence_raw(code: u8, module_number: ModuleNumber) -> bool {
    get_module_presence(ModuleType::from_raw(code), module_number)
}

/// Number of slots the backplane provides for `module_type`.
#[must_use]
pub const fn slot_count(module_type: ModuleType) -> u8 {
    match module_type {
        ModuleType::Analog => 1,
        ModuleType::Digital => 2,
        ModuleType::Solenoid => 1,
        ModuleType::Unknown => 0,
    }
}

/// Present slots of one module type, ascending by number.
pub fn present_slots(module_type: ModuleType) -> impl Iterator<Item = ModuleSlot> {
    (0..slot_count(module_type)).map(move |number| ModuleSlot::new(module_type, number))
}

/// Every present slot on the backplane, ordered by type code then number.
#[must_use]
pub fn backplane_inventory() -> Vec<ModuleSlot> {
    ModuleType::ALL.into_iter().flat_map(present_slots).collect()
}

// =============================================================================
// TESTS
// =============================================================================
