//! Banner for the version screen.

use super::colors::SemanticStyle;

/// Prints the version banner.
pub fn print_version_banner(version: &str) {
    println!();
    println!(
        "  {} {} {}",
        "▲".info(),
        "Groundwork".header(),
        format!("v{version}").muted()
    );
    println!("  {}", "Typed fundamentals, one lesson at a time".muted());
    println!();
}
