use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::breeds::TARGET_BREEDS;
use crate::config::PipelineConfig;

/// The three output partitions of the processed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetSplit {
    Train,
    Validation,
    Test,
}

impl DatasetSplit {
    pub fn as_str(&self) -> &str {
        match self {
            DatasetSplit::Train => "train",
            DatasetSplit::Validation => "validation",
            DatasetSplit::Test => "test",
        }
    }

    pub fn all() -> [DatasetSplit; 3] {
        [
            DatasetSplit::Train,
            DatasetSplit::Validation,
            DatasetSplit::Test,
        ]
    }
}

/// Create the raw/processed directory skeleton, including one directory per
/// breed under every split.
pub fn setup_directories(config: &PipelineConfig) -> std::io::Result<()> {
    let mut directories = vec![config.raw_dir(), config.processed_dir()];

    for split in DatasetSplit::all() {
        let split_dir = config.split_dir(split);
        for (breed, _) in TARGET_BREEDS {
            directories.push(split_dir.join(breed));
        }
        directories.push(split_dir);
    }

    for directory in &directories {
        fs::create_dir_all(directory)?;
    }

    info!("Directory skeleton ready under {:?}", config.base_dir);
    Ok(())
}

/// Collect image files directly inside `dir`.
///
/// Extensions are matched case-insensitively against jpg/jpeg/png; the result
/// is sorted for consistent ordering.
pub fn collect_images(dir: &Path) -> Vec<PathBuf> {
    let mut image_files = Vec::new();

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if let Some(ext) = path.extension() {
                let ext = ext.to_string_lossy().to_lowercase();
                if ext == "png" || ext == "jpg" || ext == "jpeg" {
                    image_files.push(path);
                }
            }
        }
    } else {
        warn!("Failed to read directory: {:?}", dir);
    }

    image_files.sort();
    image_files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bovine_dataset_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_split_as_str() {
        assert_eq!(DatasetSplit::Train.as_str(), "train");
        assert_eq!(DatasetSplit::Validation.as_str(), "validation");
        assert_eq!(DatasetSplit::Test.as_str(), "test");
    }

    #[test]
    fn test_setup_directories_creates_breed_dirs() {
        let base = scratch_dir("setup");
        let config = PipelineConfig {
            base_dir: base.clone(),
            ..PipelineConfig::default()
        };

        setup_directories(&config).unwrap();

        assert!(config.raw_dir().is_dir());
        for split in DatasetSplit::all() {
            assert!(config.split_dir(split).join("Gir").is_dir());
            assert!(config.split_dir(split).join("Murrah").is_dir());
        }

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn test_collect_images_filters_and_sorts() {
        let dir = scratch_dir("collect");
        for name in ["b.jpg", "a.PNG", "c.jpeg", "notes.txt", "d.gif"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let images = collect_images(&dir);
        let names: Vec<String> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.PNG", "b.jpg", "c.jpeg"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_collect_images_missing_dir_is_empty() {
        let dir = std::env::temp_dir().join("bovine_dataset_does_not_exist");
        assert!(collect_images(&dir).is_empty());
    }
}
