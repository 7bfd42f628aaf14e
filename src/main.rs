use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mlproject::common::{create_directories, get_size, read_yaml};
use mlproject::{DataTransformation, StageConfig};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Data transformation stage of the ML pipeline
#[derive(Parser)]
#[command(name = "mlproject")]
#[command(version)]
#[command(about = "Split a cleaned dataset into train/test sets", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split the configured dataset into train.csv and test.csv
    Split {
        /// Path to the project configuration file
        #[arg(short, long, default_value = "config/config.yaml")]
        config: PathBuf,
    },
    /// Report the approximate size of a file in KB
    Size {
        /// File to measure
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    mlproject::logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Split { config } => run_split(&config),
        Commands::Size { path } => run_size(&path),
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_split(config_path: &Path) -> Result<()> {
    let config: StageConfig = read_yaml(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    create_directories(&config.required_directories(), true)
        .context("Failed to create stage directories")?;

    info!(">>>>>> stage Data Transformation started <<<<<<");
    DataTransformation::new(config.data_transformation)
        .train_test_splitting()
        .context("Data transformation failed")?;
    info!(">>>>>> stage Data Transformation completed <<<<<<");

    Ok(())
}

fn run_size(path: &Path) -> Result<()> {
    let size = get_size(path).with_context(|| format!("Failed to stat {}", path.display()))?;
    println!("{size}");
    Ok(())
}
