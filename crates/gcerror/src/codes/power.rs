//! Power management zone.

use crate::Subsystem;

const BASE: u32 = Subsystem::Power.base();

status_codes! {
    POWER_CODES;

    /// Invalid power mode requested.
    POWER_MODE = group(BASE + 0x000);

    /// Failed to enable clock.
    POWER_CLOCK_ON = group(BASE + 0x010);

    /// Failed to install IRQ handler.
    POWER_IRQ_ON = group(BASE + 0x020);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_values() {
        assert_eq!(POWER_MODE.group_code(), 0x04000);
        assert_eq!(POWER_CLOCK_ON.group_code(), 0x04010);
        assert_eq!(POWER_IRQ_ON.group_code(), 0x04020);
    }
}
