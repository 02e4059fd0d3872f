//! Version command implementation.

use crate::style::banner::print_version_banner;
use crate::style::print_labeled;

/// Version information for the CLI.
const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

pub fn run() {
    print_version_banner(VERSION);
    println!("{NAME} {VERSION}");
    println!();
    println!("Build info:");
    print_labeled("Target", std::env::consts::ARCH);
    print_labeled("OS", std::env::consts::OS);
}
