//! Generic (subsystem-independent) failure causes.

use crate::StatusCode;

/// Low-level cause carried in the generic field.
///
/// Discriminants are the wire values; `0` means "no cause" and has no
/// variant. `10..4096` are reserved.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generic {
    /// Out of dynamic (kmalloc-style) memory.
    OutOfDynamicMemory = 1,
    /// Out of paged memory.
    OutOfPagedMemory = 2,
    /// Paged memory mapping failed.
    PagedMemoryMapping = 3,
    /// Reading user input failed.
    UserRead = 4,
    /// Writing user output failed.
    UserWrite = 5,
    /// Interrupted by a signal.
    Interrupted = 6,
    /// Timed out waiting for the hardware.
    Timeout = 7,
    /// Data or entry not found.
    NotFound = 8,
    /// IOCTL failed.
    Ioctl = 9,
}

impl Generic {
    /// Every cause, in wire order.
    pub const ALL: [Generic; 9] = [
        Generic::OutOfDynamicMemory,
        Generic::OutOfPagedMemory,
        Generic::PagedMemoryMapping,
        Generic::UserRead,
        Generic::UserWrite,
        Generic::Interrupted,
        Generic::Timeout,
        Generic::NotFound,
        Generic::Ioctl,
    ];

    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Generic::OutOfDynamicMemory),
            2 => Some(Generic::OutOfPagedMemory),
            3 => Some(Generic::PagedMemoryMapping),
            4 => Some(Generic::UserRead),
            5 => Some(Generic::UserWrite),
            6 => Some(Generic::Interrupted),
            7 => Some(Generic::Timeout),
            8 => Some(Generic::NotFound),
            9 => Some(Generic::Ioctl),
            _ => None,
        }
    }

    /// This cause as a pure generic status.
    #[inline]
    pub const fn status(self) -> StatusCode {
        StatusCode::generic(self.code())
    }

    /// Short symbolic name, matching the constant in [`crate::codes`].
    pub const fn name(self) -> &'static str {
        match self {
            Generic::OutOfDynamicMemory => "OODM",
            Generic::OutOfPagedMemory => "OOPM",
            Generic::PagedMemoryMapping => "PMMAP",
            Generic::UserRead => "USER_READ",
            Generic::UserWrite => "USER_WRITE",
            Generic::Interrupted => "INTERRUPTED",
            Generic::Timeout => "TIMEOUT",
            Generic::NotFound => "NOT_FOUND",
            Generic::Ioctl => "IOCTL",
        }
    }
}

impl TryFrom<StatusCode> for Generic {
    type Error = StatusCode;

    /// Succeeds only for a pure generic status with a named cause.
    fn try_from(status: StatusCode) -> Result<Self, Self::Error> {
        if status.has_group() {
            return Err(status);
        }
        Generic::from_code(status.generic_code()).ok_or(status)
    }
}
