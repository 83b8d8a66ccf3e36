/// Grid thumbnail generation
///
/// Every candidate is shown in the same square cell regardless of its
/// aspect ratio. The stored full-resolution image is never touched; the
/// thumbnail is a new buffer.
use image::{imageops::FilterType, Rgba, RgbaImage};

/// Size of generated grid thumbnails
pub const DEFAULT_BOX: (u32, u32) = (640, 640);

/// Light grey behind letterboxed thumbnails
pub const BACKGROUND: Rgba<u8> = Rgba([245, 245, 245, 255]);

/// Scale `image` to fit inside the box and center it on a solid canvas
///
/// The output is always exactly `box_width x box_height`.
pub fn fit_to_box(image: &RgbaImage, box_width: u32, box_height: u32, background: Rgba<u8>) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(box_width, box_height, background);

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || box_width == 0 || box_height == 0 {
        return canvas;
    }

    let (new_width, new_height) = fitted_size(width, height, box_width, box_height);
    let x = (box_width - new_width) / 2;
    let y = (box_height - new_height) / 2;

    if (new_width, new_height) == (width, height) {
        composite_over(&mut canvas, image, x, y);
    } else {
        let resized = image::imageops::resize(image, new_width, new_height, FilterType::Lanczos3);
        composite_over(&mut canvas, &resized, x, y);
    }

    canvas
}

/// Size after scaling by min(box_w / w, box_h / h), truncated
///
/// Integer math so the tighter side lands exactly on the box edge.
fn fitted_size(width: u32, height: u32, box_width: u32, box_height: u32) -> (u32, u32) {
    let (w, h) = (u64::from(width), u64::from(height));
    let (bw, bh) = (u64::from(box_width), u64::from(box_height));

    if bw * h <= bh * w {
        (box_width, ((h * bw) / w).clamp(1, bh) as u32)
    } else {
        (((w * bh) / h).clamp(1, bw) as u32, box_height)
    }
}

/// Porter-Duff "over" of `top` onto `canvas` at (x, y)
fn composite_over(canvas: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (px, py, src) in top.enumerate_pixels() {
        let dst = canvas.get_pixel_mut(x + px, y + py);
        *dst = blend_over(*dst, *src);
    }
}

/// Integer alpha blending; fully opaque and fully transparent sources are exact
fn blend_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let src_alpha = u32::from(src[3]);
    match src_alpha {
        255 => return src,
        0 => return dst,
        _ => {}
    }

    let dst_weight = u32::from(dst[3]) * (255 - src_alpha);
    let src_weight = src_alpha * 255;
    let total = src_weight + dst_weight;

    let mut out = [0u8; 4];
    for channel in 0..3 {
        let mixed = u32::from(src[channel]) * src_weight + u32::from(dst[channel]) * dst_weight;
        out[channel] = ((mixed + total / 2) / total) as u8;
    }
    out[3] = ((total + 127) / 255) as u8;
    Rgba(out)
}
