/// Key visual decoder
///
/// Decodes any supported container into RGBA8 and shrinks images whose
/// larger side exceeds the configured ceiling. The full-resolution result
/// is what zoom and edit result views display.
use image::{imageops::FilterType, ImageReader, RgbaImage};
use std::path::Path;
use tracing::{debug, info};

use super::AssetError;

/// Default ceiling for the larger side of a decoded image
pub const DEFAULT_MAX_DIMENSION: u32 = 2400;

/// Load a key visual from disk as RGBA8
///
/// The format is sniffed from the file content first, so a PNG saved
/// as `.jpg` still decodes. Never upscales.
pub fn load_visual(path: &Path, max_dimension: u32) -> Result<RgbaImage, AssetError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let decoded = reader.decode().map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = decoded.into_rgba8();
    debug!("📷 Decoded {} ({}x{})", path.display(), rgba.width(), rgba.height());

    Ok(limit_dimension(rgba, max_dimension))
}

/// Downscale so the larger side equals `max_dimension`, keeping aspect ratio
fn limit_dimension(image: RgbaImage, max_dimension: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    let larger = width.max(height);
    if max_dimension == 0 || larger <= max_dimension {
        return image;
    }

    let (new_width, new_height) = scaled_size(width, height, max_dimension);
    info!(
        "📐 Downscaling {}x{} -> {}x{}",
        width, height, new_width, new_height
    );
    image::imageops::resize(&image, new_width, new_height, FilterType::Lanczos3)
}

/// Target size for a downscale; the larger side lands exactly on `max_dimension`
fn scaled_size(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let shrink = |side: u32, larger: u32| -> u32 {
        ((u64::from(side) * u64::from(max_dimension)) / u64::from(larger)).max(1) as u32
    };

    if width >= height {
        (max_dimension, shrink(height, width))
    } else {
        (shrink(width, height), max_dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::fs;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbImage::from_pixel(width, height, Rgb([200, 40, 40]))
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    #[test]
    fn test_load_converts_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("KV1.png");
        write_png(&path, 800, 600);

        let image = load_visual(&path, DEFAULT_MAX_DIMENSION).unwrap();
        assert_eq!(image.dimensions(), (800, 600));
        assert_eq!(image.get_pixel(0, 0).0, [200, 40, 40, 255]);
    }

    #[test]
    fn test_oversized_image_is_downscaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        write_png(&path, 3000, 1500);

        let image = load_visual(&path, 2400).unwrap();
        assert_eq!(image.dimensions(), (2400, 1200));
    }

    #[test]
    fn test_tall_image_downscales_on_height() {
        assert_eq!(scaled_size(1000, 4800, 2400), (500, 2400));
        assert_eq!(scaled_size(2401, 3, 2400), (2400, 2));
        assert_eq!(scaled_size(9000, 1, 2400), (2400, 1));
    }

    #[test]
    fn test_small_image_is_never_upscaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");
        write_png(&path, 40, 30);

        let image = load_visual(&path, 2400).unwrap();
        assert_eq!(image.dimensions(), (40, 30));
    }

    #[test]
    fn test_content_sniffing_ignores_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("KV2.jpg");
        write_png(&path, 16, 8);

        assert!(load_visual(&path, 2400).is_ok());
    }

    #[test]
    fn test_corrupt_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("KV3.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let result = load_visual(&path, 2400);
        assert!(matches!(result, Err(AssetError::Decode { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_visual(&dir.path().join("nope.png"), 2400);
        assert!(matches!(result, Err(AssetError::Io { .. })));
    }
}
