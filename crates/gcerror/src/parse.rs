//! Parsing status codes from text (log lines, command-line arguments).

use std::fmt;
use std::str::FromStr;

use crate::codes;
use crate::{StatusCode, GENERIC_BITS, GROUP_BITS};

/// Errors from `StatusCode::from_str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStatusError {
    /// Input was empty or a `|` separated an empty token.
    Empty,
    /// Token looked numeric but had stray characters or did not fit in a
    /// `u32` (or in its field, for `group:` / `generic:`).
    InvalidNumber(String),
    /// Token is not the name of any constant.
    UnknownName(String),
    /// Two tokens both set the generic field, or both set the group field.
    Conflict(StatusCode, StatusCode),
}

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty status token"),
            Self::InvalidNumber(s) => write!(f, "invalid status value: {}", s),
            Self::UnknownName(s) => write!(f, "unknown status name: {}", s),
            Self::Conflict(a, b) => write!(f, "{} and {} set the same field", a, b),
        }
    }
}

impl std::error::Error for ParseStatusError {}

/// `0x`-prefixed hex or plain decimal. `None` when the text is not
/// numeric at all; `Some(None)` when it is but does not fit in a `u32`.
fn parse_number(text: &str) -> Option<Option<u32>> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Some(None);
        }
        Some(u32::from_str_radix(hex, 16).ok())
    } else if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        Some(text.parse().ok())
    } else {
        None
    }
}

/// The `group:0x05000` / `generic:0x00a` forms `Display` uses for fields
/// without a name. The value must fit its field.
fn parse_field(token: &str) -> Option<Result<StatusCode, ParseStatusError>> {
    let (value, bits, ctor): (&str, u32, fn(u32) -> StatusCode) =
        if let Some(value) = token.strip_prefix("group:") {
            (value, GROUP_BITS, StatusCode::group)
        } else if let Some(value) = token.strip_prefix("generic:") {
            (value, GENERIC_BITS, StatusCode::generic)
        } else {
            return None;
        };

    Some(match parse_number(value.trim()) {
        Some(Some(n)) if n >> bits == 0 => Ok(ctor(n)),
        _ => Err(ParseStatusError::InvalidNumber(token.to_string())),
    })
}

fn parse_token(token: &str) -> Result<StatusCode, ParseStatusError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ParseStatusError::Empty);
    }

    if let Some(field) = parse_field(token) {
        return field;
    }

    match parse_number(token) {
        Some(Some(raw)) => Ok(StatusCode::from_raw(raw)),
        Some(None) => Err(ParseStatusError::InvalidNumber(token.to_string())),
        None => codes::lookup_name(token)
            .ok_or_else(|| ParseStatusError::UnknownName(token.to_string())),
    }
}

impl FromStr for StatusCode {
    type Err = ParseStatusError;

    /// Accepts `0x01000001`, `16777217`, `NONE`, `CTX_ALLOC|OODM`,
    /// `GCERR_CTX_ALLOC | gcerr_oodm` or `group:0x05000|OODM`. Tokens joined by `|` must not set
    /// the same field twice.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut acc = StatusCode::NONE;
        for token in s.split('|') {
            let part = parse_token(token)?;
            if (acc.has_generic() && part.has_generic()) || (acc.has_group() && part.has_group()) {
                return Err(ParseStatusError::Conflict(acc, part));
            }
            acc = StatusCode::from_raw(acc.raw() | part.raw());
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::*;

    #[test]
    fn numbers() {
        assert_eq!("0x01000001".parse(), Ok(OODM.with_group(CTX_ALLOC)));
        assert_eq!("0X03090000".parse(), Ok(MMU_ARG));
        assert_eq!("16777217".parse(), Ok(OODM.with_group(CTX_ALLOC)));
        assert_eq!("0".parse(), Ok(StatusCode::NONE));
    }

    #[test]
    fn names() {
        assert_eq!("MMU_ARG".parse(), Ok(MMU_ARG));
        assert_eq!("NONE".parse(), Ok(StatusCode::NONE));
        assert_eq!("CTX_ALLOC|OODM".parse(), Ok(OODM.with_group(CTX_ALLOC)));
        assert_eq!("gcerr_oodm | GCERR_CTX_ALLOC".parse(), Ok(OODM.with_group(CTX_ALLOC)));
    }

    #[test]
    fn display_round_trip() {
        for e in all() {
            for cause in [NONE, OODM, TIMEOUT] {
                let s = if e.code.has_group() { cause.with_group(e.code) } else { e.code };
                assert_eq!(s.to_string().parse(), Ok(s), "{}", s);
            }
        }
    }

    #[test]
    fn display_round_trip_unnamed_fields() {
        let cases = [
            StatusCode::group(0x05000),
            StatusCode::generic(0x00A),
            OODM.with_group(StatusCode::group(0x05000)),
            StatusCode::generic(0xFFF).with_group(MMU_ARG),
            StatusCode::from_raw(0xFFFF_FFFF),
        ];
        for s in cases {
            assert_eq!(s.to_string().parse(), Ok(s), "{}", s);
        }
        assert_eq!("group:0x05000".parse(), Ok(StatusCode::group(0x05000)));
        assert_eq!("generic:10".parse(), Ok(StatusCode::generic(10)));
    }

    #[test]
    fn field_value_must_fit() {
        for bad in ["group:0x100000", "generic:0x1000", "generic:", "group:MMU_ARG"] {
            assert_eq!(
                bad.parse::<StatusCode>(),
                Err(ParseStatusError::InvalidNumber(bad.to_string())),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn hex_digits_only() {
        for bad in ["0x+7", "0x", "0x-1", "0x 7", "0x7g"] {
            assert_eq!(
                bad.parse::<StatusCode>(),
                Err(ParseStatusError::InvalidNumber(bad.to_string())),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn mixed_tokens() {
        assert_eq!("POWER_MODE|0x7".parse(), Ok(TIMEOUT.with_group(POWER_MODE)));
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<StatusCode>(), Err(ParseStatusError::Empty));
        assert_eq!("OODM|".parse::<StatusCode>(), Err(ParseStatusError::Empty));
        assert_eq!(
            "0x100000000".parse::<StatusCode>(),
            Err(ParseStatusError::InvalidNumber("0x100000000".to_string()))
        );
        assert_eq!(
            "99999999999".parse::<StatusCode>(),
            Err(ParseStatusError::InvalidNumber("99999999999".to_string()))
        );
        assert_eq!(
            "CTX_FREE".parse::<StatusCode>(),
            Err(ParseStatusError::UnknownName("CTX_FREE".to_string()))
        );
    }

    #[test]
    fn conflicts() {
        assert_eq!(
            "OODM|TIMEOUT".parse::<StatusCode>(),
            Err(ParseStatusError::Conflict(OODM, TIMEOUT))
        );
        assert_eq!(
            "CTX_ALLOC|CMD_ALLOC".parse::<StatusCode>(),
            Err(ParseStatusError::Conflict(CTX_ALLOC, CMD_ALLOC))
        );
    }

    #[test]
    fn error_display() {
        let e = ParseStatusError::Conflict(OODM, TIMEOUT);
        assert_eq!(e.to_string(), "OODM and TIMEOUT set the same field");
    }
}
