//! Decoder configuration

use std::str::FromStr;

use gcerror::kwarn;

use crate::env::{env_get_bool, env_get_str};

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One line per value
    Line,
    /// One block per value, one field per line
    Verbose,
}

impl Format {
    /// Parse a `GCERR_DECODE_FORMAT` value, warning and falling back to
    /// `Line` when it is not recognised.
    fn from_env_value(value: &str) -> Self {
        value.trim().parse().unwrap_or_else(|()| {
            kwarn!("GCERR_DECODE_FORMAT={:?} not recognised, using line", value);
            Format::Line
        })
    }
}

impl FromStr for Format {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(Format::Line),
            "verbose" => Ok(Format::Verbose),
            _ => Err(()),
        }
    }
}

/// Configuration for a decoder run
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Output layout (default: line)
    pub format: Format,

    /// Exit nonzero when a value has an unnamed generic or group field
    pub strict: bool,

    /// Print the full constant table instead of decoding values
    pub list: bool,

    /// Values to decode, as given on the command line
    pub values: Vec<String>,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            format: Format::Line,
            strict: false,
            list: false,
            values: Vec::new(),
        }
    }
}

impl DecodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `GCERR_DECODE_FORMAT` and `GCERR_DECODE_STRICT`.
    pub fn from_env() -> Self {
        Self::default()
            .format(Format::from_env_value(&env_get_str("GCERR_DECODE_FORMAT", "line")))
            .strict(env_get_bool("GCERR_DECODE_STRICT", false))
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }

    /// Apply command-line arguments (without the program name). Flags
    /// override the environment.
    pub fn with_args<I, S>(mut self, args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for arg in args {
            let arg = arg.into();
            match arg.as_str() {
                "--list" | "-l" => self.list = true,
                "--verbose" | "-v" => self.format = Format::Verbose,
                "--strict" | "-s" => self.strict = true,
                flag if flag.starts_with("--") => return Err(format!("unknown option: {}", flag)),
                _ => self.values.push(arg),
            }
        }
        Ok(self)
    }
}
