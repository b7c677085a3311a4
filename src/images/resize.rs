use image::imageops::FilterType;
use image::DynamicImage;

/// Dimensions of a `width` × `height` image scaled to `target_width` with its aspect ratio
/// preserved. The height never drops below one pixel.
pub fn target_dimensions(width: u32, height: u32, target_width: u32) -> (u32, u32) {
    let scaled_height = (f64::from(height) * f64::from(target_width) / f64::from(width)).round();
    (target_width, (scaled_height as u32).max(1))
}

pub fn exceeds_pixel_limit(width: u32, height: u32, max_pixels: u64) -> bool {
    u64::from(width) * u64::from(height) > max_pixels
}

/// Lanczos3 resample to `width` × `height`. Upscales narrow images the same way it
/// downscales wide ones.
pub fn resize_exact(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width, height, FilterType::Lanczos3)
}
