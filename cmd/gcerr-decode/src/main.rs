//! gcerr-decode: turn raw driver status values into their fields
//!
//! ```text
//! gcerr-decode [--list] [--verbose] [--strict] VALUE...
//! ```
//!
//! VALUE is hex (`0x01000001`), decimal, or symbolic (`CTX_ALLOC|OODM`).
//!
//! # Exit Status
//!
//! - `0` every value decoded
//! - `1` strict mode and some value has an unnamed field
//! - `2` bad arguments or unparsable value
//!
//! # Environment Variables
//!
//! - `GCERR_DECODE_FORMAT=line|verbose` - Output layout
//! - `GCERR_DECODE_STRICT=1` - Same as `--strict`
//! - `GCERR_LOG_LEVEL=debug` - Log level (off, error, warn, info, debug, trace)
//! - `GCERR_FLUSH_EPRINT=1` - Flush log output immediately

mod config;
mod env;
mod render;

use std::process::ExitCode;

use gcerror::{kdebug, kerror, kstatus, kwarn, StatusCode};

use config::{DecodeConfig, Format};

const USAGE: &str = "usage: gcerr-decode [--list] [--verbose] [--strict] VALUE...";

fn run(config: &DecodeConfig) -> ExitCode {
    if config.list {
        print!("{}", render::render_table());
        return ExitCode::SUCCESS;
    }

    if config.values.is_empty() {
        kerror!("{}", USAGE);
        return ExitCode::from(2);
    }

    let mut parse_failed = false;
    let mut unnamed = false;

    for value in &config.values {
        let status: StatusCode = match value.parse() {
            Ok(status) => status,
            Err(e) => {
                kerror!("{}: {}", value, e);
                parse_failed = true;
                continue;
            }
        };

        kdebug!("decoding {} as {:?}", value, status);

        match config.format {
            Format::Line => println!("{}", render::render_line(status)),
            Format::Verbose => print!("{}", render::render_verbose(status)),
        }

        if !render::is_fully_named(status) {
            kstatus!(Warn, status, "{} has an unnamed field", value);
            unnamed = true;
        }
    }

    if parse_failed {
        ExitCode::from(2)
    } else if unnamed && config.strict {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> ExitCode {
    gcerror::kprint::init();

    let config = match DecodeConfig::from_env().with_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            kerror!("{}", e);
            kwarn!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    kdebug!("config: {:?}", config);
    run(&config)
}
