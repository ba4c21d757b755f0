//! Context management zone.

use crate::Subsystem;

const BASE: u32 = Subsystem::Context.base();

status_codes! {
    CONTEXT_CODES;

    /// Context allocation.
    CTX_ALLOC = group(BASE + 0x000);

    /// Lock/unlock error.
    CTX_CHANGE = group(BASE + 0x010);

    /// Context not set.
    CTX_NULL = group(BASE + 0x020);
}
