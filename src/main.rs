use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "propchain")]
#[command(
    version,
    about = "Resolve declared external configuration sources into an ordered property chain"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, help = "Resource root for classpath-scoped declarations", default_value = "resources")]
    resource_root: PathBuf,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a declaration manifest and print the resulting chain
    Resolve {
        #[arg(help = "Path to the TOML declaration manifest")]
        manifest: PathBuf,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Validate a manifest and print the planned targets without loading
    Check {
        #[arg(help = "Path to the TOML declaration manifest")]
        manifest: PathBuf,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Resolve { manifest, format } => {
            propchain::cli::commands::resolve::run(&manifest, &cli.resource_root, &format)?;
        }
        Commands::Check { manifest } => {
            propchain::cli::commands::check::run(&manifest, &cli.resource_root)?;
        }
    }

    Ok(())
}
