//! Groundwork lesson runner.
//!
//! Typed fundamentals, one subcommand per lesson.
//!
//! # Quick Start
//!
//! ```bash
//! # Push 12, 13, 14 and pop them back off
//! groundwork stack
//!
//! # Classify a pet from JSON by probing its fields
//! groundwork pets --json '{"bark": true, "breed": "Beagle"}'
//!
//! # Run two fetches concurrently with custom delays
//! groundwork fanout --user-delay 300 --posts-delay 100
//! ```

mod commands;
mod style;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use groundwork_async::{ChainStage, FanoutFaults};

use commands::asynchronous::FanoutArgs;
use commands::config::Format;

/// Groundwork - typed fundamentals, one lesson at a time.
#[derive(Parser)]
#[command(name = "groundwork")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project directory containing groundwork.toml.
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Push values onto a stack, then peek and pop them.
    Stack {
        /// Values to push, bottom first.
        #[arg(default_values_t = [12, 13, 14])]
        values: Vec<i64>,
    },

    /// Dispatch over shapes: area and perimeter per kind.
    Shapes,

    /// Handle success and error outcomes.
    Results,

    /// Make dogs bark and cats meow.
    Pets {
        /// Classify this JSON object by its fields instead of the built-in pets.
        #[arg(long)]
        json: Option<String>,
    },

    /// Transform text or numbers depending on which one arrived.
    Values,

    /// Guard clauses: division, ages, balances, grades and temperatures.
    Guards,

    /// Composition and trait dispatch.
    Oop,

    /// Generic access, partial updates and field selection on records.
    Records,

    /// Run the fetch-then-settle chain.
    Chain {
        /// Make one stage fail.
        #[arg(long, value_enum)]
        fail: Option<Stage>,
    },

    /// Fetch a user and their posts concurrently.
    Fanout {
        /// User to fetch.
        #[arg(long, default_value = "1")]
        user_id: u32,

        /// User fetch delay in milliseconds (overrides config).
        #[arg(long)]
        user_delay: Option<u64>,

        /// Posts fetch delay in milliseconds (overrides config).
        #[arg(long)]
        posts_delay: Option<u64>,

        /// Make the user fetch fail.
        #[arg(long)]
        fail_user: bool,

        /// Make the posts fetch fail.
        #[arg(long)]
        fail_posts: bool,
    },

    /// Run a succeeding and a failing operation, catching the failure.
    Risky,

    /// Run simulated work under the configured deadline.
    Timeout {
        /// How long the work takes, in milliseconds.
        #[arg(long, default_value = "3000")]
        work: u64,
    },

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Validate a configuration file (defaults to the project's groundwork.toml).
    Validate {
        /// File to validate.
        file: Option<PathBuf>,
    },
}

/// Chain stage selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Stage {
    Fetch,
    Settle,
}

impl From<Stage> for ChainStage {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Fetch => Self::Fetch,
            Stage::Settle => Self::Settle,
        }
    }
}

fn main() {
    // Logs go to stderr so lesson output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        style::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Config(ConfigCommands::Validate { file }) = &cli.command {
        style::set_no_color(style::resolve_no_color(cli.no_color, true));
        return commands::config::validate(&cli.project, file.as_deref());
    }

    let config = commands::load_config(&cli.project)?;
    style::set_no_color(style::resolve_no_color(cli.no_color, config.output.color));
    let timings = commands::timings(&config);

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Stack { values } => commands::stack::run(&values),
        Commands::Shapes => commands::unions::shapes(),
        Commands::Results => commands::unions::results(),
        Commands::Pets { json } => commands::unions::pets(json.as_deref()),
        Commands::Values => commands::unions::values(),
        Commands::Guards => commands::guards::run(&config),
        Commands::Oop => commands::oop::run(),
        Commands::Records => commands::records::run(),
        Commands::Chain { fail } => commands::asynchronous::chain(&timings, fail.map(Into::into)),
        Commands::Fanout {
            user_id,
            user_delay,
            posts_delay,
            fail_user,
            fail_posts,
        } => commands::asynchronous::fanout(
            &timings,
            FanoutArgs {
                user_id,
                user_delay,
                posts_delay,
                faults: FanoutFaults {
                    user: fail_user,
                    posts: fail_posts,
                },
            },
        ),
        Commands::Risky => commands::asynchronous::risky(&timings),
        Commands::Timeout { work } => commands::asynchronous::timeout(&timings, work),
        Commands::Config(ConfigCommands::Show { format }) => {
            commands::config::show(&config, format)
        }
        Commands::Config(ConfigCommands::Validate { file }) => {
            commands::config::validate(&cli.project, file.as_deref())
        }
    }
}
