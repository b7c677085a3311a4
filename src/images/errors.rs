use crate::fetch::FetchError;
use crate::images::responses::{ResizeImageErrorReason, ResizeImageErrorResponse};
use crate::storage::StorageError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use image::ImageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("Invalid image link `{link}`: {reason}")]
    InvalidImageLink { link: String, reason: String },
    #[error("Unsupported image extension `{extension}`")]
    UnsupportedFormat { extension: String },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Failed to decode the source image: {0}")]
    Decode(#[source] ImageError),
    #[error("Resized image would be {width}x{height} pixels, which is over the limit")]
    TooLarge { width: u32, height: u32 },
    #[error("Failed to encode the resized image: {0}")]
    Encode(#[source] ImageError),
    #[error(transparent)]
    Upload(#[from] StorageError),
    #[error("Image processing task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl ResizeError {
    pub fn reason(&self) -> ResizeImageErrorReason {
        match self {
            Self::InvalidImageLink { .. } => ResizeImageErrorReason::InvalidImageLink,
            Self::UnsupportedFormat { .. } => ResizeImageErrorReason::UnsupportedFormat,
            Self::Fetch(FetchError::TooLarge { .. }) | Self::TooLarge { .. } => {
                ResizeImageErrorReason::TooLarge
            }
            Self::Fetch(_) => ResizeImageErrorReason::FetchFailed,
            Self::Decode(_) => ResizeImageErrorReason::DecodeFailed,
            Self::Encode(_) => ResizeImageErrorReason::EncodeFailed,
            Self::Upload(_) => ResizeImageErrorReason::UploadFailed,
            Self::Worker(_) => ResizeImageErrorReason::Internal,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidImageLink { .. } => StatusCode::BAD_REQUEST,
            Self::UnsupportedFormat { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Fetch(FetchError::TooLarge { .. }) | Self::TooLarge { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Fetch(_) | Self::Upload(_) => StatusCode::BAD_GATEWAY,
            Self::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Encode(_) | Self::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ResizeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(task = "resize_image", reason = ?self.reason(), "{}", self);
        } else {
            tracing::warn!(task = "resize_image", reason = ?self.reason(), "{}", self);
        }
        let body = ResizeImageErrorResponse {
            error: true,
            reason: self.reason(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
