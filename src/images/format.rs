use image::{DynamicImage, ImageFormat};

/// Formats the service decodes and re-encodes. The output always has the input's format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedFormat {
    Jpeg,
    Png,
    WebP,
}

impl SupportedFormat {
    /// Exact, case-sensitive match on an extension including its leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".jpg" | ".jpeg" => Some(Self::Jpeg),
            ".png" => Some(Self::Png),
            ".webp" => Some(Self::WebP),
            _ => None,
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::WebP => ImageFormat::WebP,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }

    /// Converts the pixels into a layout the format's encoder accepts.
    pub fn encodable(self, image: DynamicImage) -> DynamicImage {
        match self {
            // The JPEG encoder has no alpha channel and only 8-bit samples.
            Self::Jpeg => DynamicImage::ImageRgb8(image.into_rgb8()),
            Self::WebP if image.color().has_alpha() => DynamicImage::ImageRgba8(image.into_rgba8()),
            Self::WebP => DynamicImage::ImageRgb8(image.into_rgb8()),
            Self::Png => image,
        }
    }
}
