//! Configuration commands.

use std::path::Path;

use anyhow::{Context, Result};
use groundwork_config::{GroundworkConfig, Paths};

use crate::style::{print_labeled, print_section, print_spacer, print_success};

/// Output format for `config show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
    Toml,
}

/// Show the effective configuration.
pub fn show(config: &GroundworkConfig, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(config)?;
            println!("{json}");
        }
        Format::Toml => {
            let toml_str = toml::to_string_pretty(config)?;
            println!("{toml_str}");
        }
        Format::Text => {
            print_section("Groundwork Configuration");
            print_spacer();

            print_section("Project:");
            print_labeled("Name", &config.project.name);
            print_spacer();

            print_section("Timing:");
            print_labeled("Fetch delay", format!("{}ms", config.timing.fetch_delay_ms));
            print_labeled("Settle delay", format!("{}ms", config.timing.settle_delay_ms));
            print_labeled("User delay", format!("{}ms", config.timing.user_delay_ms));
            print_labeled("Posts delay", format!("{}ms", config.timing.posts_delay_ms));
            print_labeled("Risky delay", format!("{}ms", config.timing.risky_delay_ms));
            print_labeled("Timeout", format!("{}ms", config.timing.timeout_ms));
            print_spacer();

            print_section("Rules:");
            print_labeled("Legal age", config.rules.legal_age);
            print_spacer();

            print_section("Output:");
            print_labeled("Color", config.output.color);
        }
    }

    Ok(())
}

/// Validate a single config file, or the project's groundwork.toml.
pub fn validate(project: &Path, file: Option<&Path>) -> Result<()> {
    let path = file.map_or_else(|| Paths::project_config_file(project), Path::to_path_buf);

    GroundworkConfig::from_file(&path)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    print_success(&format!("{} is valid", path.display()));
    Ok(())
}
