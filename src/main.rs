use anyhow::Result;
use buildgate::commands::{check, list, validate, CheckOptions, OutputFormat};
use buildgate::completions::{generate_completions, Shell};
use buildgate::logging::init_tracing;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

/// Exit status when any check failed, errored, or the build step failed
const EXIT_GATE_FAILED: u8 = 1;

/// Exit status when verification could not start
const EXIT_FATAL: u8 = 2;

#[derive(Parser)]
#[command(name = "buildgate")]
#[command(about = "Verify that a build produced every expected artifact and declaration", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every check in the catalog and report the verdict
    ///
    /// Exits 0 when everything passed, 1 when any check failed or errored,
    /// and 2 when verification could not start.
    Check {
        /// Catalog file (default: buildgate.yaml, buildgate.yml or buildgate.toml)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Base directory for relative paths (default: the catalog's directory)
        #[arg(short, long)]
        base: Option<PathBuf>,

        /// Also run the catalog's build step
        #[arg(long)]
        build: bool,

        /// Override the build step timeout, in seconds
        #[arg(long, value_name = "SECS", requires = "build")]
        build_timeout: Option<u64>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the catalog's groups and checks without running them
    List {
        /// Catalog file
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Check that a catalog file loads and is well-formed
    Validate {
        /// Catalog file
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

fn dispatch(command: Commands) -> Result<bool> {
    match command {
        Commands::Check {
            catalog,
            base,
            build,
            build_timeout,
            format,
        } => check::execute(&CheckOptions {
            catalog,
            base,
            build,
            build_timeout,
            format,
        }),
        Commands::List { catalog } => list::execute(catalog.as_deref()).map(|_| true),
        Commands::Validate { catalog } => validate::execute(catalog.as_deref()).map(|_| true),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell, &mut std::io::stdout());
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match dispatch(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_GATE_FAILED),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(EXIT_FATAL)
        }
    }
}
