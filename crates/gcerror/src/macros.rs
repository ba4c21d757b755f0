/// Declare status constants for one code zone and its lookup table.
///
/// ```ignore
/// status_codes! {
///     CONTEXT_CODES;
///
///     /// Context allocation.
///     CTX_ALLOC = group(BASE + 0x000);
///     /// Out of dynamic memory.
///     OODM = generic(1);
/// }
/// ```
///
/// Each line expands to `pub const NAME: StatusCode = StatusCode::ctor(arg);`
/// plus the named `&[Entry]` table listing every constant in declaration
/// order.
macro_rules! status_codes {
    ($table:ident; $( $(#[$meta:meta])* $name:ident = $ctor:ident($value:expr); )*) => {
        $(
            $(#[$meta])*
            pub const $name: $crate::StatusCode = $crate::StatusCode::$ctor($value);
        )*

        /// Every constant declared in this module, in declaration order.
        pub const $table: &[$crate::codes::Entry] = &[
            $( $crate::codes::Entry { name: stringify!($name), code: $name }, )*
        ];
    };
}

/// Early-return `Err(status)` if a condition is false.
///
/// ```
/// use gcerror::{gc_ensure, GcResult};
/// use gcerror::codes::MMU_ARG;
///
/// fn map(size: usize) -> GcResult<()> {
///     gc_ensure!(size > 0, MMU_ARG);
///     Ok(())
/// }
///
/// assert_eq!(map(0), Err(MMU_ARG));
/// assert!(map(4096).is_ok());
/// ```
#[macro_export]
macro_rules! gc_ensure {
    ($cond:expr, $status:expr) => {
        if !$cond {
            return Err($status);
        }
    };
}

/// Early-return `Err(cause.with_group(group))` if a condition is false.
///
/// ```ignore
/// gc_ensure_in!(mtlb.is_some(), OODM, MMU_MTLB_ALLOC);
/// ```
#[macro_export]
macro_rules! gc_ensure_in {
    ($cond:expr, $cause:expr, $group:expr) => {
        if !$cond {
            return Err($crate::StatusCode::with_group($cause, $group));
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::codes::*;
    use crate::GcResult;

    #[test]
    fn ensure_passes() {
        fn check(val: i32) -> GcResult<()> {
            gc_ensure!(val > 0, POWER_MODE);
            Ok(())
        }
        assert!(check(5).is_ok());
    }

    #[test]
    fn ensure_fails() {
        fn check(val: i32) -> GcResult<()> {
            gc_ensure!(val > 0, POWER_MODE);
            Ok(())
        }
        assert_eq!(check(-1), Err(POWER_MODE));
    }

    #[test]
    fn ensure_in_tags_cause() {
        fn alloc(avail: bool) -> GcResult<u32> {
            gc_ensure_in!(avail, OODM, MMU_MTLB_ALLOC);
            Ok(7)
        }
        assert_eq!(alloc(true), Ok(7));
        let e = alloc(false).unwrap_err();
        assert_eq!(e.generic_code(), OODM.generic_code());
        assert_eq!(e.group_code(), MMU_MTLB_ALLOC.group_code());
    }
}
