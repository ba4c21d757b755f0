//! Environment variable helpers with typed defaults.
//!
//! ```ignore
//! let strict = env_get_bool("GCERR_DECODE_STRICT", false);
//! let format = env_get_str("GCERR_DECODE_FORMAT", "line");
//! ```

/// "1", "true", "yes", "on" (any case) are true; any other value is
/// false; unset returns `default`.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

/// Variable as a string; `default` when unset.
#[inline]
pub fn env_get_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_get_bool_default() {
        assert!(env_get_bool("__GCERR_TEST_UNSET__", true));
        assert!(!env_get_bool("__GCERR_TEST_UNSET__", false));
    }

    #[test]
    fn test_env_get_str() {
        assert_eq!(env_get_str("__GCERR_TEST_UNSET__", "line"), "line");
        std::env::set_var("__GCERR_TEST_STR__", "Verbose");
        assert_eq!(env_get_str("__GCERR_TEST_STR__", "line"), "Verbose");
        std::env::remove_var("__GCERR_TEST_STR__");
    }

    #[test]
    fn test_env_get_bool_variants() {
        for (raw, expected) in [("1", true), ("TRUE", true), ("on", true), ("0", false), ("garbage", false)] {
            std::env::set_var("__GCERR_TEST_BOOL__", raw);
            assert_eq!(env_get_bool("__GCERR_TEST_BOOL__", !expected), expected, "{}", raw);
        }
        std::env::remove_var("__GCERR_TEST_BOOL__");
    }
}
