//! CLI styling utilities for lesson output.
//!
//! Provides semantic colors, output helpers, the banner, key-value tables
//! and spinners for lessons that wait.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

pub mod banner;
pub mod colors;
pub mod output;
pub mod spinner;
pub mod table;

pub use output::*;
pub use spinner::*;
pub use table::*;

/// Global flag to track if colors are disabled.
static NO_COLOR: AtomicBool = AtomicBool::new(false);

/// Sets the global no-color flag.
pub fn set_no_color(value: bool) {
    NO_COLOR.store(value, Ordering::SeqCst);
}

/// Checks if colors are disabled.
pub fn no_color() -> bool {
    NO_COLOR.load(Ordering::SeqCst)
}

/// Decides whether to color output.
///
/// Colors are off when asked for on the command line, when config disables
/// them, when `NO_COLOR` is set, or when stdout is not a terminal.
pub fn resolve_no_color(flag: bool, config_color: bool) -> bool {
    flag || !config_color
        || std::env::var_os("NO_COLOR").is_some()
        || !std::io::stdout().is_terminal()
}
