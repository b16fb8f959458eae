use std::fmt;
use std::path::Path;

use image::{ImageFormat, ImageReader};

/// Why the validator rejected an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRejection {
    /// The file could not be opened or sniffed at all
    Unreadable,
    /// Detected format outside the JPEG/PNG allow-list
    UnsupportedFormat,
    /// Decoding failed partway through the file
    Corrupted,
    /// At least one side below the minimum dimension
    TooSmall,
    /// Longer side exceeds the allowed multiple of the shorter side
    ExtremeAspectRatio,
}

impl fmt::Display for ImageRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRejection::Unreadable => write!(f, "unreadable file"),
            ImageRejection::UnsupportedFormat => write!(f, "unsupported format"),
            ImageRejection::Corrupted => write!(f, "corrupted image data"),
            ImageRejection::TooSmall => write!(f, "below minimum dimensions"),
            ImageRejection::ExtremeAspectRatio => write!(f, "extreme aspect ratio"),
        }
    }
}

/// Validate a single candidate image.
///
/// All rules must hold: the content-sniffed format is JPEG or PNG, the image
/// decodes fully, both sides are at least `min_dimension` pixels, and the
/// longer side is at most `max_aspect_ratio` times the shorter one. Any I/O
/// or decode failure counts as invalid (fail-closed).
pub fn validate_image(
    path: &Path,
    min_dimension: u32,
    max_aspect_ratio: f32,
) -> Result<(), ImageRejection> {
    let reader = ImageReader::open(path)
        .map_err(|_| ImageRejection::Unreadable)?
        .with_guessed_format()
        .map_err(|_| ImageRejection::Unreadable)?;

    match reader.format() {
        Some(ImageFormat::Jpeg) | Some(ImageFormat::Png) => {}
        _ => return Err(ImageRejection::UnsupportedFormat),
    }

    // A full decode doubles as the corruption check
    let img = reader.decode().map_err(|_| ImageRejection::Corrupted)?;

    let (width, height) = (img.width(), img.height());
    if width < min_dimension || height < min_dimension {
        return Err(ImageRejection::TooSmall);
    }

    let ratio = width.max(height) as f32 / width.min(height) as f32;
    if ratio > max_aspect_ratio {
        return Err(ImageRejection::ExtremeAspectRatio);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;
    use std::path::PathBuf;

    const MIN_DIMENSION: u32 = 100;
    const MAX_ASPECT_RATIO: f32 = 5.0;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir =
            std::env::temp_dir().join(format!("bovine_validation_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_image(path: &Path, width: u32, height: u32) {
        RgbImage::from_pixel(width, height, Rgb([120, 90, 60]))
            .save(path)
            .unwrap();
    }

    fn check(path: &Path) -> Result<(), ImageRejection> {
        validate_image(path, MIN_DIMENSION, MAX_ASPECT_RATIO)
    }

    #[test]
    fn test_accepts_well_formed_jpeg_and_png() {
        let dir = scratch_dir("accept");
        let jpeg = dir.join("ok.jpg");
        let png = dir.join("ok.png");
        write_image(&jpeg, 200, 150);
        write_image(&png, 100, 100);

        assert_eq!(check(&jpeg), Ok(()));
        assert_eq!(check(&png), Ok(()));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_rejects_below_minimum_dimension() {
        let dir = scratch_dir("small");
        let small = dir.join("small.png");
        let thin = dir.join("thin.png");
        write_image(&small, 50, 50);
        write_image(&thin, 300, 99);

        assert_eq!(check(&small), Err(ImageRejection::TooSmall));
        assert_eq!(check(&thin), Err(ImageRejection::TooSmall));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_aspect_ratio_boundary() {
        let dir = scratch_dir("ratio");
        let extreme = dir.join("extreme.png");
        let boundary = dir.join("boundary.png");
        write_image(&extreme, 600, 100); // 6:1
        write_image(&boundary, 500, 100); // exactly 5:1

        assert_eq!(check(&extreme), Err(ImageRejection::ExtremeAspectRatio));
        assert_eq!(check(&boundary), Ok(()));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_rejects_format_outside_allow_list() {
        let dir = scratch_dir("format");
        let bmp = dir.join("image.bmp");
        write_image(&bmp, 200, 200);

        assert_eq!(check(&bmp), Err(ImageRejection::UnsupportedFormat));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_rejects_corrupted_file() {
        let dir = scratch_dir("corrupt");

        // Garbage bytes behind a .jpg extension
        let garbage = dir.join("garbage.jpg");
        fs::write(&garbage, b"definitely not an image").unwrap();
        assert_eq!(check(&garbage), Err(ImageRejection::Corrupted));

        // A real PNG cut off halfway through
        let whole = dir.join("whole.png");
        write_image(&whole, 200, 200);
        let bytes = fs::read(&whole).unwrap();
        let truncated = dir.join("truncated.png");
        fs::write(&truncated, &bytes[..bytes.len() / 2]).unwrap();
        assert_eq!(check(&truncated), Err(ImageRejection::Corrupted));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_rejects_missing_file() {
        let missing = std::env::temp_dir().join("bovine_validation_missing.jpg");
        assert_eq!(check(&missing), Err(ImageRejection::Unreadable));
    }

    #[test]
    fn test_format_sniffed_from_content_not_extension() {
        let dir = scratch_dir("sniff");

        // PNG bytes behind a .jpg extension still pass the allow-list
        let png_bytes = dir.join("actually_png.jpg");
        RgbImage::from_pixel(200, 200, Rgb([10, 20, 30]))
            .save_with_format(&png_bytes, ImageFormat::Png)
            .unwrap();
        assert_eq!(check(&png_bytes), Ok(()));

        // BMP bytes behind a .png extension do not
        let bmp_bytes = dir.join("actually_bmp.png");
        RgbImage::from_pixel(200, 200, Rgb([10, 20, 30]))
            .save_with_format(&bmp_bytes, ImageFormat::Bmp)
            .unwrap();
        assert_eq!(check(&bmp_bytes), Err(ImageRejection::UnsupportedFormat));

        let _ = fs::remove_dir_all(&dir);
    }
}
