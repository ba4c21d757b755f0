//! Command queue zone.

use crate::Subsystem;

const BASE: u32 = Subsystem::CommandQueue.base();

status_codes! {
    CMDBUF_CODES;

    /// Buffer allocation.
    CMD_ALLOC = group(BASE + 0x000);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_values() {
        assert_eq!(CMD_ALLOC.group_code(), 0x02000);
        assert_eq!(CMD_ALLOC.raw(), 0x0200_0000);
    }
}
