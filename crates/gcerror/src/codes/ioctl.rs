//! Ioctl dispatch zone.
//!
//! Sits well above the core driver blocks so that `0x05000-0x10FFF`
//! stays free for new hardware units.

use crate::Subsystem;

const BASE: u32 = Subsystem::Ioctl.base();

status_codes! {
    IOCTL_CODES;

    /// Context wrapper allocation.
    IOCTL_CTX_ALLOC = group(BASE + 0x000);

    /// Command buffer allocation.
    IOCTL_BUF_ALLOC = group(BASE + 0x010);

    /// Fixup buffer allocation.
    IOCTL_FIXUP_ALLOC = group(BASE + 0x020);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_values() {
        assert_eq!(IOCTL_CTX_ALLOC.group_code(), 0x11000);
        assert_eq!(IOCTL_BUF_ALLOC.group_code(), 0x11010);
        assert_eq!(IOCTL_FIXUP_ALLOC.group_code(), 0x11020);
        assert_eq!(IOCTL_FIXUP_ALLOC.raw(), 0x1102_0000);
    }
}
