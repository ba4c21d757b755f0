use std::error::Error;
use std::fmt;

use crate::codes;
use crate::{Generic, GcResult, Subsystem};

// ── Bit layout ────────────────────────────────────────────────────

/// Width of the generic (low-level cause) field.
pub const GENERIC_BITS: u32 = 12;
/// Bit position of the generic field.
pub const GENERIC_SHIFT: u32 = 0;
/// Generic field mask, in place.
pub const GENERIC_MASK: u32 = ((1 << GENERIC_BITS) - 1) << GENERIC_SHIFT;

/// Width of the group (subsystem + condition) field.
pub const GROUP_BITS: u32 = 32 - GENERIC_BITS;
/// Bit position of the group field.
pub const GROUP_SHIFT: u32 = GENERIC_SHIFT + GENERIC_BITS;
/// Group field mask, in place.
pub const GROUP_MASK: u32 = ((1 << GROUP_BITS) - 1) << GROUP_SHIFT;

// Fields are disjoint and together cover all 32 bits.
const _: () = assert!(GENERIC_MASK & GROUP_MASK == 0);
const _: () = assert!(GENERIC_MASK | GROUP_MASK == u32::MAX);

/// A driver status code.
///
/// `#[repr(transparent)]` over `u32`: the bit layout is the ABI, so a
/// `StatusCode` can be handed across an ioctl or logged as a plain
/// integer and decoded on the other side.
///
/// Equality is bitwise. No `Ord`: distinct error values carry no
/// ordering.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct StatusCode(u32);

// ── Constructors ──────────────────────────────────────────────────

impl StatusCode {
    /// Success. The only value with both fields zero.
    pub const NONE: StatusCode = StatusCode(0);

    /// A pure generic status: `cause` in the generic field, group cleared.
    ///
    /// Bits of `cause` above [`GENERIC_BITS`] are dropped.
    ///
    /// ```
    /// use gcerror::StatusCode;
    /// let oodm = StatusCode::generic(1);
    /// assert_eq!(oodm.generic_code(), 1);
    /// assert_eq!(oodm.group_code(), 0);
    /// ```
    #[inline]
    pub const fn generic(cause: u32) -> Self {
        Self((cause << GENERIC_SHIFT) & GENERIC_MASK)
    }

    /// A pure group status from a declared group value (subsystem base
    /// plus condition offset, e.g. `0x01010`).
    ///
    /// Bits of `code` above [`GROUP_BITS`] are dropped.
    ///
    /// ```
    /// use gcerror::StatusCode;
    /// let ctx_change = StatusCode::group(0x01010);
    /// assert_eq!(ctx_change.group_code(), 0x01010);
    /// assert_eq!(ctx_change.raw(), 0x0101_0000);
    /// ```
    #[inline]
    pub const fn group(code: u32) -> Self {
        Self((code & (GROUP_MASK >> GROUP_SHIFT)) << GROUP_SHIFT)
    }

    /// Build from both field values at once.
    #[inline]
    pub const fn from_parts(cause: u32, group: u32) -> Self {
        Self::generic(cause).with_group(Self::group(group))
    }

    /// Reinterpret a raw 32-bit value, e.g. one received from user space.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Keep this status's generic cause, replace its group with
    /// `group`'s group field.
    ///
    /// Any generic bits in `group` are ignored; the cause is never
    /// altered.
    ///
    /// ```
    /// use gcerror::codes::{CMD_ALLOC, CTX_ALLOC, OODM};
    /// let ctx = OODM.with_group(CTX_ALLOC);
    /// let cmd = ctx.with_group(CMD_ALLOC);
    /// assert_eq!(cmd.generic_code(), OODM.generic_code());
    /// assert_eq!(cmd.group_code(), CMD_ALLOC.group_code());
    /// ```
    #[inline]
    pub const fn with_group(self, group: StatusCode) -> Self {
        Self((self.0 & GENERIC_MASK) | (group.0 & GROUP_MASK))
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl StatusCode {
    /// Raw 32-bit value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The generic field, `0..4096`.
    #[inline]
    pub const fn generic_code(self) -> u32 {
        (self.0 & GENERIC_MASK) >> GENERIC_SHIFT
    }

    /// The group field, unshifted (`0x01000` for `CTX_ALLOC`).
    #[inline]
    pub const fn group_code(self) -> u32 {
        (self.0 & GROUP_MASK) >> GROUP_SHIFT
    }

    /// Only the generic field, as a status.
    #[inline]
    pub const fn generic_part(self) -> Self {
        Self(self.0 & GENERIC_MASK)
    }

    /// Only the group field, as a status.
    #[inline]
    pub const fn group_part(self) -> Self {
        Self(self.0 & GROUP_MASK)
    }

    #[inline]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn has_generic(self) -> bool {
        self.0 & GENERIC_MASK != 0
    }

    #[inline]
    pub const fn has_group(self) -> bool {
        self.0 & GROUP_MASK != 0
    }

    /// The named generic cause, if the generic field holds one.
    #[inline]
    pub const fn cause(self) -> Option<Generic> {
        Generic::from_code(self.generic_code())
    }

    /// The subsystem owning the group field, if any.
    #[inline]
    pub const fn subsystem(self) -> Option<Subsystem> {
        Subsystem::from_group_code(self.group_code())
    }

    /// Condition offset within the owning subsystem's range.
    #[inline]
    pub const fn condition(self) -> u32 {
        Subsystem::condition_of(self.group_code())
    }

    /// Symbolic name, if this value is exactly one named constant.
    pub fn name(self) -> Option<&'static str> {
        codes::name_of(self)
    }

    /// `Ok(())` for success, `Err(self)` otherwise.
    #[inline]
    pub const fn into_result(self) -> GcResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Collapse a result back into a status: `Ok` becomes [`NONE`](Self::NONE).
    #[inline]
    pub fn from_result(result: GcResult<()>) -> Self {
        match result {
            Ok(()) => Self::NONE,
            Err(status) => status,
        }
    }
}

// ── Conversions ───────────────────────────────────────────────────

impl From<u32> for StatusCode {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<StatusCode> for u32 {
    #[inline]
    fn from(status: StatusCode) -> Self {
        status.raw()
    }
}

impl From<Generic> for StatusCode {
    #[inline]
    fn from(cause: Generic) -> Self {
        cause.status()
    }
}

// ── Display / Debug ───────────────────────────────────────────────

impl fmt::Display for StatusCode {
    /// `NONE`, or `GROUP|GENERIC` with hex for unnamed fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return f.write_str("NONE");
        }

        if self.has_group() {
            match codes::name_of(self.group_part()) {
                Some(name) => f.write_str(name)?,
                None => write!(f, "group:{:#07x}", self.group_code())?,
            }
            if self.has_generic() {
                f.write_str("|")?;
            }
        }

        if self.has_generic() {
            match codes::name_of(self.generic_part()) {
                Some(name) => f.write_str(name)?,
                None => write!(f, "generic:{:#05x}", self.generic_code())?,
            }
        }

        Ok(())
    }
}

impl fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatusCode({:#010x} {})", self.0, self)
    }
}

impl Error for StatusCode {}
