use std::io;

use crate::codes;
use crate::{GcResult, Generic, StatusCode};

// ── From<io::Error> ───────────────────────────────────────────────

/// Maps `io::ErrorKind` to a generic cause. Anything without a clear
/// counterpart is reported as a failed control call.
fn io_error_status(kind: io::ErrorKind) -> StatusCode {
    match kind {
        io::ErrorKind::OutOfMemory   => codes::OODM,
        io::ErrorKind::Interrupted   => codes::INTERRUPTED,
        io::ErrorKind::TimedOut      => codes::TIMEOUT,
        io::ErrorKind::NotFound      => codes::NOT_FOUND,
        io::ErrorKind::UnexpectedEof => codes::USER_READ,
        io::ErrorKind::WriteZero     => codes::USER_WRITE,
        _                            => codes::IOCTL,
    }
}

impl From<io::Error> for StatusCode {
    /// Convert an `io::Error` into a pure generic status.
    ///
    /// Raw OS errors go through [`StatusCode::from_errno`] first; the
    /// error kind decides otherwise.
    fn from(err: io::Error) -> Self {
        if let Some(status) = err.raw_os_error().and_then(StatusCode::from_errno) {
            return status;
        }
        io_error_status(err.kind())
    }
}

// ── Into<io::Error> ───────────────────────────────────────────────

impl From<StatusCode> for io::Error {
    /// Wrap the status as a custom `io::Error`; the kind follows the
    /// generic cause.
    fn from(status: StatusCode) -> Self {
        let kind = match status.cause() {
            Some(Generic::OutOfDynamicMemory | Generic::OutOfPagedMemory) => {
                io::ErrorKind::OutOfMemory
            }
            Some(Generic::Interrupted) => io::ErrorKind::Interrupted,
            Some(Generic::Timeout) => io::ErrorKind::TimedOut,
            Some(Generic::NotFound) => io::ErrorKind::NotFound,
            _ => io::ErrorKind::Other,
        };
        io::Error::new(kind, status)
    }
}

// ── ResultExt: retagging on Results ──────────────────────────────

/// Extension trait for re-reporting a lower-level failure under the
/// caller's own group while keeping its generic cause.
///
/// ```
/// use gcerror::codes::{CTX_ALLOC, OODM};
/// use gcerror::{GcResult, ResultExt};
///
/// fn kmalloc() -> GcResult<Vec<u8>> {
///     Err(OODM)
/// }
///
/// let err = kmalloc().regroup(CTX_ALLOC).unwrap_err();
/// assert_eq!(err, OODM.with_group(CTX_ALLOC));
/// ```
pub trait ResultExt<T> {
    /// Convert the error into a status and replace its group.
    fn regroup(self, group: StatusCode) -> GcResult<T>;

    /// Convert the error into a status unchanged.
    fn into_status(self) -> GcResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<StatusCode>,
{
    #[inline]
    fn regroup(self, group: StatusCode) -> GcResult<T> {
        self.map_err(|e| e.into().with_group(group))
    }

    #[inline]
    fn into_status(self) -> GcResult<T> {
        self.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::*;

    #[test]
    fn from_io_error_kind() {
        let err = io::Error::new(io::ErrorKind::TimedOut, "fence wait");
        assert_eq!(StatusCode::from(err), TIMEOUT);

        let err = io::Error::new(io::ErrorKind::OutOfMemory, "vmalloc");
        assert_eq!(StatusCode::from(err), OODM);

        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(StatusCode::from(err), IOCTL);
    }

    #[cfg(unix)]
    #[test]
    fn from_io_error_os() {
        let err = io::Error::from_raw_os_error(libc::EINTR);
        assert_eq!(StatusCode::from(err), INTERRUPTED);

        let err = io::Error::from_raw_os_error(libc::ENOENT);
        assert_eq!(StatusCode::from(err), NOT_FOUND);
    }

    #[test]
    fn into_io_error_keeps_status() {
        let status = OODM.with_group(MMU_DESC_ALLOC);
        let err: io::Error = status.into();
        assert_eq!(err.kind(), io::ErrorKind::OutOfMemory);
        let inner = err.get_ref().and_then(|e| e.downcast_ref::<StatusCode>());
        assert_eq!(inner, Some(&status));

        let err: io::Error = POWER_MODE.into();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn regroup_keeps_cause() {
        fn alloc() -> GcResult<u32> {
            Err(OODM.with_group(CMD_ALLOC))
        }
        let e = alloc().regroup(IOCTL_BUF_ALLOC).unwrap_err();
        assert_eq!(e.generic_code(), OODM.generic_code());
        assert_eq!(e.group_code(), IOCTL_BUF_ALLOC.group_code());
    }

    #[test]
    fn regroup_ok_passes_through() {
        let ok: GcResult<u32> = Ok(3);
        assert_eq!(ok.regroup(CTX_ALLOC), Ok(3));
    }

    #[test]
    fn regroup_io_error() {
        fn read() -> Result<(), io::Error> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "short copy"))
        }
        let e = read().regroup(IOCTL_FIXUP_ALLOC).unwrap_err();
        assert_eq!(e, USER_READ.with_group(IOCTL_FIXUP_ALLOC));
    }

    #[test]
    fn question_mark_conversion() {
        fn inner() -> Result<(), io::Error> {
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
        }
        fn outer() -> GcResult<()> {
            inner()?;
            Ok(())
        }
        assert_eq!(outer(), Err(NOT_FOUND));
    }

    #[test]
    fn into_status_unchanged() {
        let r: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::Interrupted, "sig"));
        assert_eq!(r.into_status(), Err(INTERRUPTED));
    }
}
