use std::path::PathBuf;

use crate::core::dataset::DatasetSplit;

/// Pipeline configuration containing all hardcoded values
///
/// This struct centralizes configuration values to make them easier to manage
/// and provides a foundation for future configuration file support.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Base data directory; raw and processed trees live underneath it.
    pub base_dir: PathBuf,
    /// Seed for the deterministic split shuffle.
    pub seed: u64,
    /// Fraction carved off the shuffled pool for validation + test.
    pub holdout_fraction: f64,
    /// Fraction of the holdout that becomes the test set.
    pub test_fraction: f64,
    /// Breeds with fewer valid images than this are skipped entirely.
    pub min_images_per_breed: usize,
    /// Both image sides must be at least this many pixels.
    pub min_dimension: u32,
    /// Longer side divided by shorter side must not exceed this.
    pub max_aspect_ratio: f32,
    /// Quality for the RGB JPEG re-encode of every accepted image.
    pub jpeg_quality: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("data"),
            seed: 42,
            holdout_fraction: 0.3,
            test_fraction: 0.5,
            min_images_per_breed: 10,
            min_dimension: 100,
            max_aspect_ratio: 5.0,
            jpeg_quality: 95,
        }
    }
}

impl PipelineConfig {
    pub fn raw_dir(&self) -> PathBuf {
        self.base_dir.join("raw")
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.base_dir.join("processed")
    }

    pub fn split_dir(&self, split: DatasetSplit) -> PathBuf {
        self.processed_dir().join(split.as_str())
    }

    pub fn stats_path(&self) -> PathBuf {
        self.processed_dir().join("dataset_stats.json")
    }

    pub fn class_mapping_path(&self) -> PathBuf {
        self.processed_dir().join("class_mapping.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = PipelineConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.min_images_per_breed, 10);
        assert_eq!(config.min_dimension, 100);
        assert_eq!(config.jpeg_quality, 95);
        assert!((config.holdout_fraction - 0.3).abs() < 1e-6);
        assert!((config.test_fraction - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_derived_paths() {
        let config = PipelineConfig {
            base_dir: PathBuf::from("some/base"),
            ..PipelineConfig::default()
        };
        assert_eq!(config.raw_dir(), PathBuf::from("some/base/raw"));
        assert_eq!(
            config.split_dir(DatasetSplit::Validation),
            PathBuf::from("some/base/processed/validation")
        );
        assert_eq!(
            config.stats_path(),
            PathBuf::from("some/base/processed/dataset_stats.json")
        );
    }
}
