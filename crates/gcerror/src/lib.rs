//! # gcerror: GPU driver status codes
//!
//! Every failure in the driver (context management, command queue, MMU,
//! power management, ioctl dispatch) is reported as one 32-bit
//! [`StatusCode`]:
//!
//! ```text
//! ┌──────────────────────────────────────┬────────────────────────┐
//! │  group (20 bits)                     │  generic (12 bits)     │
//! │  subsystem id (8) │ condition (12)   │  low-level cause       │
//! └──────────────────────────────────────┴────────────────────────┘
//!  31                                  12 11                      0
//! ```
//!
//! The all-zero value is success. A status may carry only a generic
//! cause (`OODM`), only a group (`MMU_ARG`), or both (`OODM` caught by
//! the context layer and re-reported as `CTX_ALLOC`).
//!
//! ## Quick Start
//!
//! ```rust
//! use gcerror::codes::*;
//! use gcerror::{GcResult, ResultExt, StatusCode, Subsystem};
//!
//! fn alloc_buffer() -> GcResult<()> {
//!     Err(OODM)
//! }
//!
//! fn alloc_context() -> GcResult<()> {
//!     alloc_buffer().regroup(CTX_ALLOC)?;
//!     Ok(())
//! }
//!
//! let err = alloc_context().unwrap_err();
//! assert_eq!(err.generic_code(), 1);
//! assert_eq!(err.group_code(), 0x01000);
//! assert_eq!(err.subsystem(), Some(Subsystem::Context));
//! assert_eq!(err.to_string(), "CTX_ALLOC|OODM");
//! assert!(StatusCode::NONE.into_result().is_ok());
//! ```
//!
//! ## Dependencies
//!
//! `libc` for errno values, `cfg-if` for the platform fallback. Nothing
//! else.

#[macro_use]
mod macros;
mod status;
mod generic;
mod subsystem;
mod convert;
mod errno;
mod parse;

pub mod codes;
pub mod kprint;

// ── Public API ────────────────────────────────────────────────────

pub use status::{
    StatusCode, GENERIC_BITS, GENERIC_MASK, GENERIC_SHIFT, GROUP_BITS, GROUP_MASK, GROUP_SHIFT,
};
pub use generic::Generic;
pub use subsystem::{Subsystem, CONDITION_BITS, CONDITION_STEP};
pub use convert::ResultExt;
pub use parse::ParseStatusError;
pub use kprint::{set_flush_enabled, set_log_level, LogLevel};

/// Convenience Result alias.
pub type GcResult<T> = Result<T, StatusCode>;
