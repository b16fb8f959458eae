use std::fs::File;
use std::path::Path;
use tracing::error;

use image::codecs::jpeg::JpegEncoder;

/// Result type for file operations
pub type FileOpResult<T> = Result<T, FileOpError>;

/// Error types for file operations
#[derive(Debug)]
pub enum FileOpError {
    DecodeFailed(String),
    EncodeFailed(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for FileOpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOpError::DecodeFailed(msg) => write!(f, "Decode failed: {}", msg),
            FileOpError::EncodeFailed(msg) => write!(f, "Encode failed: {}", msg),
            FileOpError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FileOpError {}

impl From<std::io::Error> for FileOpError {
    fn from(error: std::io::Error) -> Self {
        FileOpError::IoError(error)
    }
}

/// Re-encode an image as RGB JPEG at the given quality, regardless of the
/// source format. Lossy; the source file is left in place.
///
/// # Arguments
/// * `src` - Source image path (any decodable format)
/// * `dest` - Destination path for the JPEG
/// * `quality` - JPEG quality (1-100)
///
/// # Returns
/// * `Ok(())` if the image was decoded and written
/// * `Err(FileOpError)` if decode, create, or encode failed
pub fn reencode_as_jpeg(src: &Path, dest: &Path, quality: u8) -> FileOpResult<()> {
    let img = image::open(src).map_err(|e| {
        error!("Failed to decode {:?}: {}", src, e);
        FileOpError::DecodeFailed(format!("{:?}: {}", src, e))
    })?;

    let rgb = img.to_rgb8();

    let file = File::create(dest)?;
    let encoder = JpegEncoder::new_with_quality(file, quality);
    rgb.write_with_encoder(encoder).map_err(|e| {
        error!("Failed to encode {:?}: {}", dest, e);
        // Try to clean up the partially written destination file
        let _ = std::fs::remove_file(dest);
        FileOpError::EncodeFailed(format!("{:?}: {}", dest, e))
    })?;

    Ok(())
}
