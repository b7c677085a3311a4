use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeImageResponse {
    pub error: bool,
    /// Object key the resized image was stored under.
    pub key: String,
    pub content_type: String,
    pub width: u32,
    pub height: u32,
    /// Size of the uploaded payload in bytes.
    pub size: usize,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeImageErrorResponse {
    pub error: bool,
    pub reason: ResizeImageErrorReason,
    pub message: String,
}

/// All possible reasons why an image could not be resized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeImageErrorReason {
    InvalidImageLink,
    UnsupportedFormat,
    FetchFailed,
    DecodeFailed,
    TooLarge,
    EncodeFailed,
    UploadFailed,
    Internal,
}
