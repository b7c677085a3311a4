use crate::app_context::AppContext;
use crate::images::codec;
use crate::images::consts::{MAX_OUTPUT_PIXELS, TARGET_WIDTH};
use crate::images::errors::ResizeError;
use crate::images::format::SupportedFormat;
use crate::images::requests::ResizeImageRequest;
use crate::images::resize;
use crate::images::responses::ResizeImageResponse;
use crate::images::source::SourceImage;
use crate::storage::s3::{S3Object, S3ObjectKey};
use axum::body::Bytes;

pub struct ResizeImageHttpHandler {
    app_context: AppContext,
}

struct EncodedImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl ResizeImageHttpHandler {
    pub fn new(app_context: AppContext) -> Self {
        Self { app_context }
    }

    pub async fn resize(
        &self,
        request: ResizeImageRequest,
    ) -> Result<ResizeImageResponse, ResizeError> {
        let source = SourceImage::parse(&request.image_link).map_err(|reason| {
            ResizeError::InvalidImageLink {
                link: request.image_link.clone(),
                reason,
            }
        })?;
        // Checked before fetching so unsupported links cost no traffic.
        let format = SupportedFormat::from_extension(&source.extension).ok_or_else(|| {
            ResizeError::UnsupportedFormat {
                extension: source.extension.clone(),
            }
        })?;

        let original_bytes = self.app_context.fetcher.fetch(&source.url).await?;
        tracing::debug!(
            url = %source.url,
            size = original_bytes.len(),
            "Fetched source image."
        );

        let encoded =
            tokio::task::spawn_blocking(move || Self::transform(original_bytes, format)).await??;

        let key = S3ObjectKey::in_directory(&request.directory_name, &source.resized_file_name());
        let size = encoded.bytes.len();
        let object = S3Object::new(key.clone(), encoded.bytes, format.content_type());
        self.app_context.storage.put_object(object).await?;
        tracing::info!(
            task = "resize_image",
            key = key.as_ref(),
            width = encoded.width,
            height = encoded.height,
            size,
            "Uploaded resized image."
        );

        Ok(ResizeImageResponse {
            error: false,
            key: key.into_inner(),
            content_type: format.content_type().to_string(),
            width: encoded.width,
            height: encoded.height,
            size,
        })
    }

    fn transform(bytes: Bytes, format: SupportedFormat) -> Result<EncodedImage, ResizeError> {
        let image = codec::decode(&bytes, format).map_err(ResizeError::Decode)?;
        drop(bytes);
        let (width, height) = resize::target_dimensions(image.width(), image.height(), TARGET_WIDTH);
        if resize::exceeds_pixel_limit(width, height, MAX_OUTPUT_PIXELS) {
            return Err(ResizeError::TooLarge { width, height });
        }
        let resized = resize::resize_exact(&image, width, height);
        drop(image);
        let bytes = codec::encode(resized, format).map_err(ResizeError::Encode)?;
        Ok(EncodedImage {
            bytes,
            width,
            height,
        })
    }
}
