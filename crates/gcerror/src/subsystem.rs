//! Subsystem ranges inside the 20-bit group field.
//!
//! # Group Ranges
//!
//! The upper 8 bits of a group value name the subsystem, the lower 12
//! the condition. Conditions are laid out [`CONDITION_STEP`] apart so new
//! ones can be slotted between existing siblings without renumbering.
//!
//! | Group range       | Owner                             |
//! |-------------------|-----------------------------------|
//! | `0x00000`         | No group                          |
//! | `0x01000-0x01FFF` | Context management                |
//! | `0x02000-0x02FFF` | Command queue                     |
//! | `0x03000-0x03FFF` | MMU                               |
//! | `0x04000-0x04FFF` | Power management                  |
//! | `0x05000-0x10FFF` | Reserved for future driver blocks |
//! | `0x11000-0x11FFF` | Ioctl dispatch                    |
//! | `0x12000-0xFFFFF` | Reserved                          |
//!
//! Bases and offsets are stable ABI once published.

use crate::codes::{self, Entry};
use crate::{StatusCode, GROUP_BITS};

/// Width of the per-subsystem condition offset.
pub const CONDITION_BITS: u32 = 12;
/// Spacing between consecutive conditions of one subsystem.
pub const CONDITION_STEP: u32 = 0x10;

const CONDITION_MASK: u32 = (1 << CONDITION_BITS) - 1;
const ID_BITS: u32 = GROUP_BITS - CONDITION_BITS;

const _: () = assert!(ID_BITS == 8);

/// Driver subsystem owning a group range. Discriminant is the id in the
/// top 8 bits of the group field.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    /// Execution-context management.
    Context = 0x01,
    /// Command-queue submission.
    CommandQueue = 0x02,
    /// GPU MMU page tables.
    Mmu = 0x03,
    /// Clock and IRQ power sequencing.
    Power = 0x04,
    /// Control-interface (ioctl) dispatch.
    Ioctl = 0x11,
}

impl Subsystem {
    pub const ALL: [Subsystem; 5] = [
        Subsystem::Context,
        Subsystem::CommandQueue,
        Subsystem::Mmu,
        Subsystem::Power,
        Subsystem::Ioctl,
    ];

    #[inline]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// First group value of this subsystem's range.
    #[inline]
    pub const fn base(self) -> u32 {
        self.id() << CONDITION_BITS
    }

    /// Group status for the condition at `offset` from [`base`](Self::base).
    #[inline]
    pub const fn condition(self, offset: u32) -> StatusCode {
        StatusCode::group(self.base() | (offset & CONDITION_MASK))
    }

    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            0x01 => Some(Subsystem::Context),
            0x02 => Some(Subsystem::CommandQueue),
            0x03 => Some(Subsystem::Mmu),
            0x04 => Some(Subsystem::Power),
            0x11 => Some(Subsystem::Ioctl),
            _ => None,
        }
    }

    /// Owner of a group value (as returned by [`StatusCode::group_code`]).
    #[inline]
    pub const fn from_group_code(group: u32) -> Option<Self> {
        Self::from_id(group >> CONDITION_BITS)
    }

    /// Condition offset of a group value within its subsystem.
    #[inline]
    pub const fn condition_of(group: u32) -> u32 {
        group & CONDITION_MASK
    }

    pub const fn name(self) -> &'static str {
        match self {
            Subsystem::Context => "context",
            Subsystem::CommandQueue => "cmdbuf",
            Subsystem::Mmu => "mmu",
            Subsystem::Power => "power",
            Subsystem::Ioctl => "ioctl",
        }
    }

    /// Named conditions declared for this subsystem.
    pub fn codes(self) -> &'static [Entry] {
        match self {
            Subsystem::Context => codes::CONTEXT_CODES,
            Subsystem::CommandQueue => codes::CMDBUF_CODES,
            Subsystem::Mmu => codes::MMU_CODES,
            Subsystem::Power => codes::POWER_CODES,
            Subsystem::Ioctl => codes::IOCTL_CODES,
        }
    }
}
