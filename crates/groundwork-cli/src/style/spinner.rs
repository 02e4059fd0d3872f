//! Spinner helpers using indicatif.
//!
//! Spinners draw on stderr and stay hidden when it is not a terminal, so
//! lesson output on stdout is unaffected.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Hourglass-themed spinner characters.
const WAIT_SPINNER: &[&str] = &["◐ ", "◓ ", "◑ ", "◒ "];

fn template(pb: &ProgressBar, template: &str) {
    // Templates are static; a malformed one only loses the styling.
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(WAIT_SPINNER)
        .template(template)
    {
        pb.set_style(style);
    }
}

/// Creates a spinner with a message.
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if super::no_color() {
        template(&pb, "{spinner} {msg}");
    } else {
        template(&pb, "{spinner:.cyan} {msg}");
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Finishes a spinner and clears it from the terminal.
pub fn finish_and_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
