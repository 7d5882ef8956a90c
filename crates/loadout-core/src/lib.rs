//! # LoadOut Core
//!
//! Static description of the FPGA I/O backplane.
//!
//! The backplane exposes a fixed number of slots per module category. This
//! crate answers one question: does slot `(module_type, module_number)`
//! exist? Callers in the hardware access layer check presence before touching
//! any register that belongs to a slot.
//!
//! Everything here is pure and `Copy`; nothing talks to hardware.

pub mod error;
pub mod module;
pub mod presence;

pub use error::LoadOutError;
pub use module::{ModuleNumber, ModuleSlot, ModuleType};
pub use presence::{
    backplane_inventory, get_module_presence, get_module_presence_raw, present_slots, slot_count,
};
