//! Text rendering of decoded status codes.

use std::fmt::Write;

use gcerror::codes;
use gcerror::{StatusCode, Subsystem};

/// True if every nonzero field of `status` has a symbolic name.
pub fn is_fully_named(status: StatusCode) -> bool {
    let generic_ok = !status.has_generic() || codes::name_of(status.generic_part()).is_some();
    let group_ok = !status.has_group() || codes::name_of(status.group_part()).is_some();
    generic_ok && group_ok
}

fn field_name(part: StatusCode) -> &'static str {
    if part.is_success() {
        "-"
    } else {
        codes::name_of(part).unwrap_or("?")
    }
}

fn subsystem_label(status: StatusCode) -> String {
    match status.subsystem() {
        Some(s) => format!("{}+{:#05x}", s.name(), status.condition()),
        None if status.has_group() => "?".to_string(),
        None => "-".to_string(),
    }
}

/// `0x01000001  CTX_ALLOC|OODM  generic=0x001(OODM) group=0x01000(CTX_ALLOC) subsys=context+0x000 errno=12`
pub fn render_line(status: StatusCode) -> String {
    format!(
        "{:#010x}  {:<28} generic={:#05x}({}) group={:#07x}({}) subsys={} errno={}",
        status.raw(),
        status.to_string(),
        status.generic_code(),
        field_name(status.generic_part()),
        status.group_code(),
        field_name(status.group_part()),
        subsystem_label(status),
        status.to_errno(),
    )
}

pub fn render_verbose(status: StatusCode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:#010x}", status.raw());
    let _ = writeln!(out, "  name       {}", status);
    let _ = writeln!(
        out,
        "  generic    {:#05x} {}",
        status.generic_code(),
        field_name(status.generic_part())
    );
    let _ = writeln!(
        out,
        "  group      {:#07x} {}",
        status.group_code(),
        field_name(status.group_part())
    );
    let _ = writeln!(out, "  subsystem  {}", subsystem_label(status));
    let _ = writeln!(out, "  errno      {}", status.to_errno());
    out
}

/// Every named constant, generic zone first then one block per subsystem.
pub fn render_table() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "generic:");
    for e in codes::GENERIC_CODES {
        let _ = writeln!(out, "  {:<20} {:#010x}  cause={}", e.name, e.code.raw(), e.code.generic_code());
    }
    for s in Subsystem::ALL {
        let _ = writeln!(out, "{} (base {:#07x}):", s.name(), s.base());
        for e in s.codes() {
            let _ = writeln!(
                out,
                "  {:<20} {:#010x}  group={:#07x}",
                e.name,
                e.code.raw(),
                e.code.group_code()
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcerror::codes::*;

    #[test]
    fn fully_named() {
        assert!(is_fully_named(StatusCode::NONE));
        assert!(is_fully_named(OODM.with_group(CTX_ALLOC)));
        assert!(!is_fully_named(StatusCode::generic(0x0a)));
        assert!(!is_fully_named(StatusCode::group(0x05000)));
        assert!(!is_fully_named(OODM.with_group(StatusCode::group(0x01030))));
    }

    #[test]
    fn line_fields() {
        let status = OODM.with_group(CTX_ALLOC);
        let line = render_line(status);
        assert!(line.starts_with("0x01000001  CTX_ALLOC|OODM"), "{}", line);
        assert!(line.contains("generic=0x001(OODM)"), "{}", line);
        assert!(line.contains("group=0x01000(CTX_ALLOC)"), "{}", line);
        assert!(line.contains("subsys=context+0x000"), "{}", line);
        assert!(line.ends_with(&format!("errno={}", status.to_errno())), "{}", line);
    }

    #[test]
    fn line_unknown_group() {
        let line = render_line(StatusCode::group(0x05010));
        assert!(line.contains("group=0x05010(?)"), "{}", line);
        assert!(line.contains("subsys=?"), "{}", line);
        assert!(line.contains("generic=0x000(-)"), "{}", line);
    }

    #[test]
    fn verbose_block() {
        let out = render_verbose(TIMEOUT.with_group(POWER_CLOCK_ON));
        assert!(out.starts_with("0x04010007\n"), "{}", out);
        assert!(out.contains("  name       POWER_CLOCK_ON|TIMEOUT\n"), "{}", out);
        assert!(out.contains("  subsystem  power+0x010\n"), "{}", out);
    }

    #[test]
    fn table_lists_every_constant() {
        let table = render_table();
        for e in all() {
            assert!(table.contains(e.name), "missing {}", e.name);
        }
        assert!(table.contains("ioctl (base 0x11000):"), "{}", table);
    }
}
