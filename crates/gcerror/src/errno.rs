//! Mapping between status codes and POSIX errno values.
//!
//! Only the generic field takes part: the group says where a failure
//! happened, the errno says what kind of failure it was. A status with a
//! group but no cause maps to `EIO`.

use crate::{codes, Generic, StatusCode};

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        use libc::{EFAULT, EINTR, EINVAL, EIO, ENOENT, ENOMEM, ETIMEDOUT};
    } else {
        // Linux values.
        const ENOENT: i32 = 2;
        const EINTR: i32 = 4;
        const EIO: i32 = 5;
        const ENOMEM: i32 = 12;
        const EFAULT: i32 = 14;
        const EINVAL: i32 = 22;
        const ETIMEDOUT: i32 = 110;
    }
}

impl StatusCode {
    /// Positive errno for returning from a kernel entry point; `0` for
    /// success.
    ///
    /// ```
    /// use gcerror::codes::{CTX_ALLOC, OODM};
    /// assert_ne!(OODM.with_group(CTX_ALLOC).to_errno(), 0);
    /// assert_eq!(gcerror::StatusCode::NONE.to_errno(), 0);
    /// ```
    pub fn to_errno(self) -> i32 {
        if self.is_success() {
            return 0;
        }
        match self.cause() {
            Some(Generic::OutOfDynamicMemory)
            | Some(Generic::OutOfPagedMemory)
            | Some(Generic::PagedMemoryMapping) => ENOMEM,
            Some(Generic::UserRead) | Some(Generic::UserWrite) => EFAULT,
            Some(Generic::Interrupted) => EINTR,
            Some(Generic::Timeout) => ETIMEDOUT,
            Some(Generic::NotFound) => ENOENT,
            Some(Generic::Ioctl) => EINVAL,
            None => EIO,
        }
    }

    /// Pure generic status for an errno, where the mapping is unambiguous.
    pub fn from_errno(errno: i32) -> Option<StatusCode> {
        match errno {
            ENOMEM => Some(codes::OODM),
            EFAULT => Some(codes::USER_READ),
            EINTR => Some(codes::INTERRUPTED),
            ETIMEDOUT => Some(codes::TIMEOUT),
            ENOENT => Some(codes::NOT_FOUND),
            EINVAL => Some(codes::IOCTL),
            _ => None,
        }
    }
}
