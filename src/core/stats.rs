//! Derived JSON outputs: dataset statistics and the class mapping.
//!
//! Both documents are recomputed from scratch on every run. Key ordering is
//! stable (`BTreeMap` plus fixed struct fields) so regenerating against an
//! unchanged tree produces byte-identical files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::breeds::{breed_names_sorted, buffalo_count, cattle_count, BreedCategory, TARGET_BREEDS};
use crate::config::PipelineConfig;
use crate::core::dataset::DatasetSplit;

/// Result type for JSON output writers
pub type OutputResult<T> = Result<T, OutputError>;

/// Error types for JSON output writers
#[derive(Debug)]
pub enum OutputError {
    SerializeFailed(serde_json::Error),
    IoError(std::io::Error),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::SerializeFailed(e) => write!(f, "Serialize failed: {}", e),
            OutputError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {}

impl From<std::io::Error> for OutputError {
    fn from(error: std::io::Error) -> Self {
        OutputError::IoError(error)
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(error: serde_json::Error) -> Self {
        OutputError::SerializeFailed(error)
    }
}

/// Image counts for one split of the processed tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SplitStats {
    pub breeds: BTreeMap<String, usize>,
    pub total_images: usize,
}

/// Per-split sections in their on-disk order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SplitSections {
    pub train: SplitStats,
    pub validation: SplitStats,
    pub test: SplitStats,
}

/// Aggregate dataset statistics, derived from the processed tree.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetStats {
    pub total_breeds: usize,
    pub cattle_breeds: usize,
    pub buffalo_breeds: usize,
    pub splits: SplitSections,
}

/// Bidirectional breed/id mapping. Ids are contiguous from 0 and assigned in
/// alphabetical breed order.
#[derive(Debug, Clone, Serialize)]
pub struct ClassMapping {
    pub breed_to_id: BTreeMap<String, usize>,
    pub id_to_breed: BTreeMap<usize, String>,
    pub breed_types: BTreeMap<String, BreedCategory>,
}

/// Count `.jpg` files per breed directory under one split.
fn count_split(split_dir: &Path) -> SplitStats {
    let mut stats = SplitStats::default();

    if let Ok(entries) = fs::read_dir(split_dir) {
        for entry in entries.flatten() {
            let breed_dir = entry.path();
            if !breed_dir.is_dir() {
                continue;
            }
            let breed = breed_dir
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();

            let image_count = fs::read_dir(&breed_dir)
                .map(|files| {
                    files
                        .flatten()
                        .filter(|f| f.path().extension().is_some_and(|ext| ext == "jpg"))
                        .count()
                })
                .unwrap_or(0);

            stats.total_images += image_count;
            stats.breeds.insert(breed, image_count);
        }
    }

    stats
}

/// Recompute statistics from the processed directory tree.
pub fn compute_stats(config: &PipelineConfig) -> DatasetStats {
    DatasetStats {
        total_breeds: TARGET_BREEDS.len(),
        cattle_breeds: cattle_count(),
        buffalo_breeds: buffalo_count(),
        splits: SplitSections {
            train: count_split(&config.split_dir(DatasetSplit::Train)),
            validation: count_split(&config.split_dir(DatasetSplit::Validation)),
            test: count_split(&config.split_dir(DatasetSplit::Test)),
        },
    }
}

/// Write `dataset_stats.json` and return the computed statistics.
pub fn write_stats(config: &PipelineConfig) -> OutputResult<DatasetStats> {
    let stats = compute_stats(config);
    let json = serde_json::to_string_pretty(&stats)?;
    fs::write(config.stats_path(), json)?;
    info!("Dataset statistics written to {:?}", config.stats_path());
    Ok(stats)
}

/// Build the class mapping from the static breed table.
pub fn build_class_mapping() -> ClassMapping {
    let mut breed_to_id = BTreeMap::new();
    let mut id_to_breed = BTreeMap::new();
    for (id, breed) in breed_names_sorted().into_iter().enumerate() {
        breed_to_id.insert(breed.to_string(), id);
        id_to_breed.insert(id, breed.to_string());
    }

    let breed_types = TARGET_BREEDS
        .iter()
        .map(|(breed, category)| (breed.to_string(), *category))
        .collect();

    ClassMapping {
        breed_to_id,
        id_to_breed,
        breed_types,
    }
}

/// Write `class_mapping.json` and return the mapping.
pub fn write_class_mapping(config: &PipelineConfig) -> OutputResult<ClassMapping> {
    let mapping = build_class_mapping();
    let json = serde_json::to_string_pretty(&mapping)?;
    fs::write(config.class_mapping_path(), json)?;
    info!("Class mapping written to {:?}", config.class_mapping_path());
    Ok(mapping)
}
