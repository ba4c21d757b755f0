//! Generic zone: the low-level reason for a failure, with no information
//! about which part of the driver raised it.
//!
//! Code formula: the generic field holds the cause directly, so `OODM`
//! is `0x00000001` on the wire.

status_codes! {
    GENERIC_CODES;

    /// Success.
    NONE = generic(0);

    /// Out of dynamic memory.
    OODM = generic(1);

    /// Out of paged memory.
    OOPM = generic(2);

    /// Paged memory mapping.
    PMMAP = generic(3);

    /// Reading user input.
    USER_READ = generic(4);

    /// Writing user output.
    USER_WRITE = generic(5);

    /// Interrupted by a signal.
    INTERRUPTED = generic(6);

    /// Timed out waiting for the hardware.
    TIMEOUT = generic(7);

    /// Data/entry not found.
    NOT_FOUND = generic(8);

    /// IOCTL failed.
    IOCTL = generic(9);
}
