//! Feynman CLI - validate particle reactions and classify their interactions
//!
//! ```text
//! feynman classify "e+ e- -> mu+ mu-"
//! feynman validate "sigma0 -> lambda0 pi0"
//! feynman diagram --out build "e+ e- -> mu+ mu-"
//! feynman --output json particles --category quark
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use config::{CliConfig, Settings};
use error::CliResult;
use output::{print_document, print_error, print_field, OutputFormat};

/// Feynman CLI application
#[derive(Parser)]
#[command(name = "feynman")]
#[command(about = "Feynman - particle reaction validation and interaction classification", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "FEYNMAN_CONFIG")]
    config: Option<String>,

    /// Particle table (JSON) to use instead of the bundled one
    #[arg(short, long, env = "FEYNMAN_TABLE")]
    table: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Validate a reaction and break it into interaction vertices
    Classify {
        /// Reaction, e.g. "e+ e- -> mu+ mu-"
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        reaction: Vec<String>,

        /// Do not classify reactions that violate a conservation law
        #[arg(long)]
        skip_forbidden: bool,
    },

    /// Check conservation laws only (exit code 1 when forbidden)
    Validate {
        /// Reaction, e.g. "n -> p e- nu_e~"
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        reaction: Vec<String>,
    },

    /// Write a TikZ-Feynman diagram of the classified reaction
    Diagram {
        /// Reaction, e.g. "e+ e- -> mu+ mu-"
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        reaction: Vec<String>,

        /// Directory for the generated files
        #[arg(long, default_value = "output/diagrams")]
        out: PathBuf,

        /// File stem of the generated files
        #[arg(long, default_value = "diagram")]
        name: String,

        /// Run the TeX engine to produce a PDF
        #[arg(long)]
        compile: bool,

        /// TeX engine used with --compile
        #[arg(long, default_value = "lualatex")]
        engine: String,
    },

    /// List the particle table
    Particles {
        /// Only show categories containing this text (quark, lepton, boson, ...)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show configuration
    Config,
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let skip_forbidden = matches!(
        cli.command,
        Commands::Classify {
            skip_forbidden: true,
            ..
        }
    );
    let settings = Settings::resolve(&config, cli.table, skip_forbidden);

    match cli.command {
        Commands::Classify { reaction, .. } => {
            let table = settings.load_table()?;
            commands::classify::execute(&reaction, &table, &settings.classifier(), cli.output)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { reaction } => {
            let table = settings.load_table()?;
            let allowed =
                commands::validate::execute(&reaction, &table, &settings.validator(), cli.output)?;
            Ok(if allowed {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Commands::Diagram {
            reaction,
            out,
            name,
            compile,
            engine,
        } => {
            let table = settings.load_table()?;
            let target = commands::diagram::DiagramTarget {
                out_dir: &out,
                name: &name,
                engine: compile.then_some(engine.as_str()),
            };
            commands::diagram::execute(&reaction, &table, &settings.classifier(), &target, cli.output)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Particles { category } => {
            let table = settings.load_table()?;
            commands::particles::execute(&table, category.as_deref(), cli.output)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config => {
            match cli.output {
                OutputFormat::Table => {
                    let table = settings
                        .particle_table
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(bundled standard table)".to_string());
                    print_field("particle_table", table);
                    print_field("skip_forbidden", settings.skip_forbidden);
                    print_field("check_mass", settings.check_mass);
                }
                format => print_document(&settings, format)?,
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so JSON/YAML output stays clean
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::from(2)
        }
    }
}
