use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

mod breeds;
mod config;
mod core;
mod fetch;
mod logging;

use config::PipelineConfig;
use crate::core::dataset::setup_directories;
use crate::core::organize::organize_source;
use crate::core::stats::{write_class_mapping, write_stats, OutputError};

/// Download, validate, and organize the cattle/buffalo breed image corpus
/// into train/validation/test directories for classifier training.
#[derive(Parser)]
#[command(name = "prepare-bovine-dataset", version, about)]
struct Cli {
    /// Base data directory
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Seed for the deterministic split shuffle
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[command(subcommand)]
    command: Option<PipelineCommand>,
}

#[derive(Subcommand)]
enum PipelineCommand {
    /// Download and unpack the source datasets from Kaggle
    Fetch,
    /// Validate, split, and re-encode raw images into the processed tree
    Organize,
    /// Regenerate dataset statistics and the class mapping
    Stats,
}

/// Errors that abort the run with a non-zero exit code.
#[derive(Debug)]
enum PipelineError {
    Setup(std::io::Error),
    Output(OutputError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Setup(e) => write!(f, "directory setup failed: {}", e),
            PipelineError::Output(e) => write!(f, "output write failed: {}", e),
        }
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(error: std::io::Error) -> Self {
        PipelineError::Setup(error)
    }
}

impl From<OutputError> for PipelineError {
    fn from(error: OutputError) -> Self {
        PipelineError::Output(error)
    }
}

fn main() -> ExitCode {
    logging::setup_logging();

    let cli = Cli::parse();
    let config = PipelineConfig {
        base_dir: cli.data_dir,
        seed: cli.seed,
        ..PipelineConfig::default()
    };

    let result = match cli.command {
        Some(PipelineCommand::Fetch) => run_fetch(&config),
        Some(PipelineCommand::Organize) => run_organize(&config),
        Some(PipelineCommand::Stats) => run_stats(&config),
        None => run_all(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Pipeline failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_fetch(config: &PipelineConfig) -> Result<(), PipelineError> {
    setup_directories(config)?;
    fetch::download_datasets(config);
    fetch::verify_downloads(config);
    Ok(())
}

fn run_organize(config: &PipelineConfig) -> Result<(), PipelineError> {
    setup_directories(config)?;
    for dataset in fetch::SOURCE_DATASETS {
        organize_source(config, dataset.extract_to);
    }
    Ok(())
}

fn run_stats(config: &PipelineConfig) -> Result<(), PipelineError> {
    setup_directories(config)?;

    let stats = write_stats(config)?;
    write_class_mapping(config)?;

    info!("Total breeds: {}", stats.total_breeds);
    info!(
        "Cattle breeds: {}, buffalo breeds: {}",
        stats.cattle_breeds, stats.buffalo_breeds
    );
    info!("Train: {} images", stats.splits.train.total_images);
    info!("Validation: {} images", stats.splits.validation.total_images);
    info!("Test: {} images", stats.splits.test.total_images);

    Ok(())
}

fn run_all(config: &PipelineConfig) -> Result<(), PipelineError> {
    info!("Preparing cattle/buffalo breed dataset");

    setup_directories(config)?;

    // Download failures never stop the run; raw data may be placed manually
    fetch::download_datasets(config);
    fetch::verify_downloads(config);

    for dataset in fetch::SOURCE_DATASETS {
        organize_source(config, dataset.extract_to);
    }

    run_stats(config)?;

    info!(
        "Data preparation completed, organized data in {:?}",
        config.processed_dir()
    );
    Ok(())
}
