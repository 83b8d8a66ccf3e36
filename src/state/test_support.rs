use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Write a small solid PNG under any file name
///
/// The loader sniffs content, so the extension only matters to the resolver.
pub fn write_visual(dir: &Path, file_name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(file_name);
    let shade = (file_name.len() * 17 % 256) as u8;
    RgbaImage::from_pixel(width, height, Rgba([shade, 90, 160, 255]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}
