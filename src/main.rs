use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use guidegen::validation::ValidationPolicy;

mod commands;

#[derive(Parser)]
#[command(
    name = "guidegen",
    about = "Validates and normalizes project-spec documents for guidance-doc generation",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Treat machines with more than one entry state as a warning
    #[arg(long, global = true)]
    require_single_entry_point: bool,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a project spec file
    Validate {
        /// Path to the spec file (.yml, .yaml or .json)
        file: PathBuf,
    },

    /// Print the parsed (or normalized) object model
    Inspect {
        /// Path to the spec file (.yml, .yaml or .json)
        file: PathBuf,

        /// Build and print the normalized model instead of the raw spec
        #[arg(long)]
        normalized: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    let policy = ValidationPolicy {
        require_single_entry_point: cli.require_single_entry_point,
    };

    match cli.command {
        Commands::Validate { file } => {
            commands::validate_command(&file, policy)?;
        }
        Commands::Inspect { file, normalized } => {
            commands::inspect_command(&file, normalized, policy)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("guidegen=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("guidegen=info"), // -v: info messages
        _ => EnvFilter::new("guidegen=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
