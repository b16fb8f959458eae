//! Downloading and unpacking the Kaggle source datasets.
//!
//! The `kaggle` CLI does the actual downloading; this module drives it as a
//! subprocess, unpacks the resulting zip archives, and reports what landed
//! on disk. Every failure here is non-fatal: the pipeline assumes a manual
//! download fallback into `data/raw/`.

use std::fs::{self, File};
use std::path::Path;
use std::process::Command;

use directories::BaseDirs;
use tracing::{info, warn};
use zip::ZipArchive;

use crate::config::PipelineConfig;

/// A Kaggle dataset slug and the raw subdirectory it unpacks into.
#[derive(Debug, Clone, Copy)]
pub struct KaggleDataset {
    pub slug: &'static str,
    pub extract_to: &'static str,
}

/// Source archives feeding the pipeline.
pub const SOURCE_DATASETS: &[KaggleDataset] = &[
    KaggleDataset {
        slug: "lukex9442/indian-bovine-breeds",
        extract_to: "indian_bovine",
    },
    KaggleDataset {
        slug: "anandkumarsahu09/cattle-breeds-dataset",
        extract_to: "cattle_breeds",
    },
];

/// Result type for archive extraction
pub type FetchResult<T> = Result<T, FetchError>;

/// Error types for archive extraction
#[derive(Debug)]
pub enum FetchError {
    ArchiveFailed(zip::result::ZipError),
    IoError(std::io::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::ArchiveFailed(e) => write!(f, "Archive failed: {}", e),
            FetchError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<std::io::Error> for FetchError {
    fn from(error: std::io::Error) -> Self {
        FetchError::IoError(error)
    }
}

impl From<zip::result::ZipError> for FetchError {
    fn from(error: zip::result::ZipError) -> Self {
        FetchError::ArchiveFailed(error)
    }
}

/// Check for the Kaggle API token at `~/.kaggle/kaggle.json`.
pub fn kaggle_credentials_present() -> bool {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".kaggle").join("kaggle.json").exists())
        .unwrap_or(false)
}

/// Download and unpack every source dataset.
///
/// Failures are logged and skipped; nothing here stops the pipeline.
pub fn download_datasets(config: &PipelineConfig) {
    if !kaggle_credentials_present() {
        warn!("Kaggle credentials not found at ~/.kaggle/kaggle.json");
        warn!("Create an API token at https://www.kaggle.com/account and place it there,");
        warn!(
            "or download the datasets manually into {:?}",
            config.raw_dir()
        );
        return;
    }

    for dataset in SOURCE_DATASETS {
        let extract_dir = config.raw_dir().join(dataset.extract_to);
        if let Err(e) = fs::create_dir_all(&extract_dir) {
            warn!("Failed to create {:?}: {}", extract_dir, e);
            continue;
        }

        info!("Downloading {}...", dataset.slug);
        let status = Command::new("kaggle")
            .args(["datasets", "download", "-d", dataset.slug, "-p"])
            .arg(&extract_dir)
            .status();

        match status {
            Ok(exit) if exit.success() => {
                if let Err(e) = extract_archives(&extract_dir) {
                    warn!("Extraction failed for {}: {}", dataset.slug, e);
                }
            }
            Ok(exit) => warn!("kaggle exited with {} for {}", exit, dataset.slug),
            Err(e) => warn!(
                "Failed to run the kaggle CLI: {} (download {} manually)",
                e, dataset.slug
            ),
        }
    }
}

/// Unpack every `.zip` in `dir` in place, removing each archive afterwards.
pub fn extract_archives(dir: &Path) -> FetchResult<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        let is_zip = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("zip"))
            .unwrap_or(false);
        if !is_zip {
            continue;
        }

        info!("Extracting {:?}", path);
        let file = File::open(&path)?;
        let mut archive = ZipArchive::new(file)?;
        archive.extract(dir)?;
        fs::remove_file(&path)?;
    }
    Ok(())
}

/// Report recursive file counts for the expected extraction directories.
pub fn verify_downloads(config: &PipelineConfig) {
    for dataset in SOURCE_DATASETS {
        let dir = config.raw_dir().join(dataset.extract_to);
        if dir.exists() {
            info!(
                "{}: {} files under {:?}",
                dataset.slug,
                count_files(&dir),
                dir
            );
        } else {
            warn!("{}: not found at {:?}", dataset.slug, dir);
        }
    }
}

fn count_files(dir: &Path) -> usize {
    let mut count = 0;
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                count += count_files(&path);
            } else {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir =
            std::env::temp_dir().join(format!("bovine_fetch_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_extract_archives_unpacks_and_removes_zip() {
        let dir = scratch_dir("extract");
        let zip_path = dir.join("dataset.zip");

        let mut writer = ZipWriter::new(File::create(&zip_path).unwrap());
        let options = SimpleFileOptions::default();
        writer.start_file("Gir/photo_000.jpg", options).unwrap();
        writer.write_all(b"fake image bytes").unwrap();
        writer.finish().unwrap();

        extract_archives(&dir).unwrap();

        assert!(dir.join("Gir").join("photo_000.jpg").exists());
        assert!(!zip_path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_extract_archives_ignores_other_files() {
        let dir = scratch_dir("ignore");
        fs::write(dir.join("readme.txt"), b"hello").unwrap();

        extract_archives(&dir).unwrap();
        assert!(dir.join("readme.txt").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_count_files_recurses() {
        let dir = scratch_dir("count");
        fs::create_dir_all(dir.join("a/b")).unwrap();
        fs::write(dir.join("one.jpg"), b"").unwrap();
        fs::write(dir.join("a/two.jpg"), b"").unwrap();
        fs::write(dir.join("a/b/three.jpg"), b"").unwrap();

        assert_eq!(count_files(&dir), 3);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_source_dataset_table() {
        assert_eq!(SOURCE_DATASETS.len(), 2);
        assert_eq!(SOURCE_DATASETS[0].extract_to, "indian_bovine");
        assert_eq!(SOURCE_DATASETS[1].extract_to, "cattle_breeds");
    }
}
