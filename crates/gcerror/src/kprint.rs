//! Kernel-style leveled printing to stderr.
//!
//! # Environment Variables
//!
//! - `GCERR_LOG_LEVEL=<level>` - off, error, warn, info, debug, trace (or 0..5). Default: info.
//! - `GCERR_FLUSH_EPRINT=1` - Flush stderr after each line
//!
//! # Usage
//!
//! ```ignore
//! use gcerror::{kinfo, kstatus};
//! use gcerror::codes::{MMU_STLB_ALLOC, OOPM};
//!
//! kinfo!("mmu client {} attached", id);
//! kstatus!(Warn, OOPM.with_group(MMU_STLB_ALLOC), "mapping {} pages", n);
//! ```
//!
//! Nothing in the status code operations themselves logs; these macros
//! are for the subsystems that produce and consume statuses.

use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::StatusCode;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Off => "",
            LogLevel::Error => "[ERROR]",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Info => "[INFO] ",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Trace => "[TRACE]",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "0" => Ok(LogLevel::Off),
            "error" | "1" => Ok(LogLevel::Error),
            "warn" | "2" => Ok(LogLevel::Warn),
            "info" | "3" => Ok(LogLevel::Info),
            "debug" | "4" => Ok(LogLevel::Debug),
            "trace" | "5" => Ok(LogLevel::Trace),
            _ => Err(()),
        }
    }
}

static FLUSH_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Read `GCERR_LOG_LEVEL` / `GCERR_FLUSH_EPRINT`. Runs once; later calls
/// are no-ops. Called implicitly on first log.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Ok(val) = std::env::var("GCERR_FLUSH_EPRINT") {
        let flush = matches!(val.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        FLUSH_ENABLED.store(flush, Ordering::Relaxed);
    }

    if let Ok(val) = std::env::var("GCERR_LOG_LEVEL") {
        let level = val.parse().unwrap_or(LogLevel::Info);
        LOG_LEVEL.store(level as u8, Ordering::Relaxed);
    }
}

#[inline]
pub fn flush_enabled() -> bool {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init();
    }
    FLUSH_ENABLED.load(Ordering::Relaxed)
}

#[inline]
pub fn log_level() -> LogLevel {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init();
    }
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Override the level. The environment is read first, so neither this
/// nor a later `init()` lets it clobber the override.
pub fn set_log_level(level: LogLevel) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Override flushing, with the same ordering as [`set_log_level`].
pub fn set_flush_enabled(enabled: bool) {
    init();
    FLUSH_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn level_enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && level <= log_level()
}

/// Render the fields of a status the way every status log line shows them.
pub fn status_fields(status: StatusCode) -> String {
    let subsystem = status.subsystem().map_or("-", |s| s.name());
    format!(
        "{} raw={:#010x} generic={:#05x} group={:#07x} subsys={} errno={}",
        status,
        status.raw(),
        status.generic_code(),
        status.group_code(),
        subsystem,
        status.to_errno(),
    )
}

fn write_line(level: Option<LogLevel>, args: std::fmt::Arguments<'_>) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    if let Some(level) = level {
        let _ = write!(handle, "{} ", level.prefix());
    }
    let _ = handle.write_fmt(args);
    let _ = handle.write_all(b"\n");
    if flush_enabled() {
        let _ = handle.flush();
    }
}

#[doc(hidden)]
pub fn _kprint_impl(args: std::fmt::Arguments<'_>) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = handle.write_fmt(args);
    if flush_enabled() {
        let _ = handle.flush();
    }
}

#[doc(hidden)]
pub fn _kprintln_impl(args: std::fmt::Arguments<'_>) {
    write_line(None, args);
}

#[doc(hidden)]
pub fn _klog_impl(level: LogLevel, args: std::fmt::Arguments<'_>) {
    if level_enabled(level) {
        write_line(Some(level), args);
    }
}

#[doc(hidden)]
pub fn _kstatus_impl(level: LogLevel, status: StatusCode, args: std::fmt::Arguments<'_>) {
    if level_enabled(level) {
        write_line(Some(level), format_args!("{}: {}", status_fields(status), args));
    }
}

// ============================================================================
// Public Macros
// ============================================================================

/// Print to stderr (no newline), honoring `GCERR_FLUSH_EPRINT`.
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {{
        $crate::kprint::_kprint_impl(format_args!($($arg)*));
    }};
}

/// Print a line to stderr, honoring `GCERR_FLUSH_EPRINT`.
#[macro_export]
macro_rules! kprintln {
    () => {{
        $crate::kprint::_kprintln_impl(format_args!(""));
    }};
    ($($arg:tt)*) => {{
        $crate::kprint::_kprintln_impl(format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! kerror {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Error, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! kwarn {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Warn, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! kinfo {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Info, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! kdebug {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Debug, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! ktrace {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Trace, format_args!($($arg)*));
    }};
}

/// Log a status code with its decoded fields at the given level.
///
/// ```ignore
/// kstatus!(Error, err, "ctx {} lock failed", ctx_id);
/// // [ERROR] CTX_CHANGE|INTERRUPTED raw=0x01010006 generic=0x006 group=0x01010 subsys=context errno=4: ctx 3 lock failed
/// ```
#[macro_export]
macro_rules! kstatus {
    ($level:ident, $status:expr, $($arg:tt)*) => {{
        $crate::kprint::_kstatus_impl(
            $crate::kprint::LogLevel::$level,
            $status,
            format_args!($($arg)*)
        );
    }};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::*;

    #[test]
    fn test_log_levels() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_level_from_u8() {
        assert_eq!(LogLevel::from_u8(0), LogLevel::Off);
        assert_eq!(LogLevel::from_u8(1), LogLevel::Error);
        assert_eq!(LogLevel::from_u8(4), LogLevel::Debug);
        assert_eq!(LogLevel::from_u8(99), LogLevel::Trace);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("warn".parse(), Ok(LogLevel::Warn));
        assert_eq!("TRACE".parse(), Ok(LogLevel::Trace));
        assert_eq!("2".parse(), Ok(LogLevel::Warn));
        assert_eq!(" off ".parse(), Ok(LogLevel::Off));
        assert_eq!("loud".parse::<LogLevel>(), Err(()));
    }

    #[test]
    fn test_status_fields() {
        let s = status_fields(INTERRUPTED.with_group(CTX_CHANGE));
        assert!(s.starts_with("CTX_CHANGE|INTERRUPTED raw=0x01010006"), "{}", s);
        assert!(s.contains("generic=0x006"), "{}", s);
        assert!(s.contains("group=0x01010"), "{}", s);
        assert!(s.contains("subsys=context"), "{}", s);

        let s = status_fields(OODM);
        assert!(s.contains("subsys=-"), "{}", s);
    }

    #[test]
    fn test_overrides_survive_init() {
        set_flush_enabled(true);
        init();
        assert!(flush_enabled());
        set_flush_enabled(false);
        init();
        assert!(!flush_enabled());

        set_log_level(LogLevel::Off);
        init();
        assert_eq!(log_level(), LogLevel::Off);
    }

    #[test]
    fn test_macros_compile() {
        set_log_level(LogLevel::Off);

        kprint!("test");
        kprintln!("test {}", 42);
        kerror!("error {}", "msg");
        kwarn!("warn");
        kinfo!("info");
        kdebug!("debug");
        ktrace!("trace");
        kstatus!(Error, OODM.with_group(CMD_ALLOC), "ring {}", 0);
        assert!(!level_enabled(LogLevel::Error));
    }
}
