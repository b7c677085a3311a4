use crate::images::format::SupportedFormat;
use image::{DynamicImage, ImageResult};
use std::io::Cursor;

pub fn decode(bytes: &[u8], format: SupportedFormat) -> ImageResult<DynamicImage> {
    image::load_from_memory_with_format(bytes, format.image_format())
}

pub fn encode(image: DynamicImage, format: SupportedFormat) -> ImageResult<Vec<u8>> {
    let image = format.encodable(image);
    // For a rough estimate, assume one byte per pixel after compression.
    let estimated_size = (image.width() as usize) * (image.height() as usize);
    let mut buffer = Cursor::new(Vec::with_capacity(estimated_size));
    image.write_to(&mut buffer, format.image_format())?;
    Ok(buffer.into_inner())
}
