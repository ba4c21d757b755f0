//! Named status constants.
//!
//! # Code Zones
//!
//! | Module    | Field   | Range             | Contents                     |
//! |-----------|---------|-------------------|------------------------------|
//! | `generic` | generic | `0-9`             | `NONE` plus the nine causes  |
//! | `context` | group   | `0x01000-0x01FFF` | context alloc / lock / unset |
//! | `cmdbuf`  | group   | `0x02000-0x02FFF` | command buffer               |
//! | `mmu`     | group   | `0x03000-0x03FFF` | page tables, arenas, mapping |
//! | `power`   | group   | `0x04000-0x04FFF` | power mode, clock, IRQ       |
//! | `ioctl`   | group   | `0x11000-0x11FFF` | ioctl wrappers and buffers   |
//!
//! Generic values `10-4095` are reserved for future causes.
//!
//! # Usage
//!
//! ```rust
//! use gcerror::codes::*;
//!
//! let err = OODM.with_group(MMU_STLB_ALLOC);
//!
//! match err.group_part() {
//!     MMU_STLB_ALLOC => assert_eq!(err.generic_part(), OODM),
//!     _ => unreachable!(),
//! }
//! ```

use crate::StatusCode;

pub mod generic;
pub mod context;
pub mod cmdbuf;
pub mod mmu;
pub mod power;
pub mod ioctl;

pub use generic::*;
pub use context::*;
pub use cmdbuf::*;
pub use mmu::*;
pub use power::*;
pub use ioctl::*;

/// A named constant in one of the zone tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub name: &'static str,
    pub code: StatusCode,
}

/// All zone tables, generic zone first.
pub static TABLES: [&[Entry]; 6] = [
    GENERIC_CODES,
    CONTEXT_CODES,
    CMDBUF_CODES,
    MMU_CODES,
    POWER_CODES,
    IOCTL_CODES,
];

/// Every named constant, generic zone first.
pub fn all() -> impl Iterator<Item = &'static Entry> {
    TABLES.iter().flat_map(|t| t.iter())
}

/// Name of the constant whose value is exactly `code`.
pub fn name_of(code: StatusCode) -> Option<&'static str> {
    let table: &[Entry] = if code.has_group() {
        match code.subsystem() {
            Some(s) => s.codes(),
            None => return None,
        }
    } else {
        GENERIC_CODES
    };
    table.iter().find(|e| e.code == code).map(|e| e.name)
}

/// Look a constant up by name.
///
/// Case-insensitive; a leading `GCERR_` is accepted and ignored.
pub fn lookup_name(name: &str) -> Option<StatusCode> {
    let name = name.trim();
    let bare = match name.get(..6) {
        Some(prefix) if prefix.eq_ignore_ascii_case("GCERR_") => &name[6..],
        _ => name,
    };
    all()
        .find(|e| e.name.eq_ignore_ascii_case(bare))
        .map(|e| e.code)
}
