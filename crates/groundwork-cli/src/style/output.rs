//! Output helper functions for consistent lesson messages.

use super::colors::SemanticStyle;

/// Prints a lesson section header.
pub fn print_section(title: &str) {
    println!("{}", title.header());
}

/// Prints a success message with a checkmark.
pub fn print_success(msg: &str) {
    println!("{} {}", "✓".success(), msg);
}

/// Prints an error message with an X mark.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".error(), msg);
}

/// Prints a failure the lesson raised on purpose and caught.
pub fn print_caught(msg: &str) {
    println!("{} caught: {}", "⚠".warning(), msg);
}

/// Prints a labeled key-value pair with indentation.
pub fn print_labeled(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.muted(), value);
}

/// Prints an indented line.
pub fn print_item(line: &str) {
    println!("  {line}");
}

/// Prints an empty line for spacing.
pub fn print_spacer() {
    println!();
}
