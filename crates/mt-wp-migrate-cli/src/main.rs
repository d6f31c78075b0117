//! Command line interface for the Movable Type to WordPress migration.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use mt_wp_migrate::config::Config;
use mt_wp_migrate::error::Result;
use mt_wp_migrate::orchestrator::Orchestrator;

#[derive(Parser)]
#[command(
    name = "mt-wp-migrate",
    version,
    about = "Migrate a Movable Type database to WordPress"
)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, global = true, default_value = "config.yaml")]
    config: PathBuf,

    /// Log verbosity (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    verbosity: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full migration
    Run {
        /// Print the run summary as JSON on completion
        #[arg(long)]
        output_json: bool,
    },

    /// Check connectivity to both databases without migrating
    HealthCheck,
}

fn setup_logging(verbosity: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity));

    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Run { output_json } => {
            let result = Orchestrator::new(config).await?.run().await?;

            if output_json {
                println!("{}", result.to_json()?);
            } else {
                println!(
                    "Migrated {} rows in {:.1}s (run {})",
                    result.rows_transferred, result.duration_seconds, result.run_id
                );
            }
        }
        Command::HealthCheck => {
            Orchestrator::new(config).await?.health_check().await?;
            println!("Source and target databases are reachable");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli.verbosity, cli.log_format);

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.format_detailed());
            ExitCode::from(err.exit_code())
        }
    }
}
