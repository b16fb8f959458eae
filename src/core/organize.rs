//! Organizing raw source datasets into the processed train/validation/test tree.
//!
//! Each source dataset is handled independently: its folders are matched to
//! the breed table, every candidate image is validated, breeds below the
//! minimum-sample threshold are skipped, and the survivors are split and
//! re-encoded under deterministic names.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::breeds::TARGET_BREEDS;
use crate::config::PipelineConfig;
use crate::core::dataset::{collect_images, DatasetSplit};
use crate::core::operations::{reencode_as_jpeg, FileOpResult};
use crate::core::split::split_two_stage;
use crate::core::validation::validate_image;

/// Aggregate outcome of organizing one source dataset.
#[derive(Debug, Clone, Default)]
pub struct OrganizeReport {
    pub breeds_processed: usize,
    pub breeds_skipped: usize,
    pub images_written: usize,
    pub images_rejected: usize,
}

struct BreedOutcome {
    written: usize,
    rejected: usize,
}

/// Map immediate subdirectories of `source_dir` to breed names.
///
/// Matching is case-insensitive containment of the breed name in the folder
/// name, with underscores in breed names read as spaces. The first matching
/// breed in table order wins.
fn map_breed_folders(source_dir: &Path) -> BTreeMap<PathBuf, &'static str> {
    let mut mapping = BTreeMap::new();

    let entries = match fs::read_dir(source_dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to read source directory {:?}: {}", source_dir, e);
            return mapping;
        }
    };

    for entry in entries.flatten() {
        let folder = entry.path();
        if !folder.is_dir() {
            continue;
        }
        let folder_name = folder
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        for (breed, _) in TARGET_BREEDS {
            let needle = breed.to_lowercase().replace('_', " ");
            if folder_name.contains(&needle) {
                mapping.insert(folder, *breed);
                break;
            }
        }
    }

    mapping
}

/// Organize one source dataset from `data/raw/<source>` into the processed
/// tree. A missing source directory is logged and skipped, not an error.
pub fn organize_source(config: &PipelineConfig, source: &str) -> OrganizeReport {
    let mut report = OrganizeReport::default();

    let source_dir = config.raw_dir().join(source);
    if !source_dir.exists() {
        warn!("Source dataset not found, skipping: {:?}", source_dir);
        return report;
    }

    info!("Organizing source dataset: {}", source);

    let mapping = map_breed_folders(&source_dir);
    if mapping.is_empty() {
        warn!("No breed folders matched in {:?}", source_dir);
        return report;
    }

    for (folder, breed) in &mapping {
        match organize_breed(config, folder, breed) {
            Ok(Some(outcome)) => {
                report.breeds_processed += 1;
                report.images_written += outcome.written;
                report.images_rejected += outcome.rejected;
            }
            Ok(None) => report.breeds_skipped += 1,
            Err(e) => {
                error!("Failed to organize breed {}: {}", breed, e);
                report.breeds_skipped += 1;
            }
        }
    }

    info!(
        "{}: {} breeds organized, {} skipped, {} images written, {} rejected",
        source,
        report.breeds_processed,
        report.breeds_skipped,
        report.images_written,
        report.images_rejected
    );

    report
}

/// Validate, split, and re-encode one breed folder.
///
/// Returns `Ok(None)` when the breed falls below the minimum-sample
/// threshold, in which case nothing is written for it.
fn organize_breed(
    config: &PipelineConfig,
    folder: &Path,
    breed: &str,
) -> FileOpResult<Option<BreedOutcome>> {
    let candidates = collect_images(folder);

    let mut valid = Vec::new();
    let mut rejected = 0;
    for path in candidates {
        match validate_image(&path, config.min_dimension, config.max_aspect_ratio) {
            Ok(()) => valid.push(path),
            Err(reason) => {
                rejected += 1;
                debug!("Rejected {:?}: {}", path, reason);
            }
        }
    }

    if valid.len() < config.min_images_per_breed {
        warn!("Skipping {}: only {} valid images", breed, valid.len());
        return Ok(None);
    }

    let sets = split_two_stage(
        &valid,
        config.holdout_fraction,
        config.test_fraction,
        config.seed,
    );

    let mut written = 0;
    let assignments: [(DatasetSplit, &[PathBuf]); 3] = [
        (DatasetSplit::Train, &sets.train),
        (DatasetSplit::Validation, &sets.validation),
        (DatasetSplit::Test, &sets.test),
    ];
    for (split, images) in assignments {
        let dest_dir = config.split_dir(split).join(breed);
        fs::create_dir_all(&dest_dir)?;

        // Indices restart at 0 within each split
        for (i, src) in images.iter().enumerate() {
            let dest = dest_dir.join(format!("{}_{:04}.jpg", breed, i));
            reencode_as_jpeg(src, &dest, config.jpeg_quality)?;
            written += 1;
        }
    }

    info!(
        "{}: {} train, {} validation, {} test",
        breed,
        sets.train.len(),
        sets.validation.len(),
        sets.test.len()
    );

    Ok(Some(BreedOutcome { written, rejected }))
}
