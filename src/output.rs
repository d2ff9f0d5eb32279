//! Process-wide output settings.
//!
//! stdout carries only the rewritten document. Everything meant for the
//! user (status lines, warnings, the spinner, logs) goes to stderr.

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Hide status lines and the spinner. Warnings still show.
    pub quiet: bool,
    /// Print without ANSI styling. Defaults to whether `NO_COLOR` is set.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Sets the output settings. Only the first call has an effect.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Prints a status line to stderr unless `--quiet` was given.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Prints a warning to stderr, quiet or not.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}
