use crate::storage::env::{AWS_ENDPOINT_URL, S3_FORCE_PATH_STYLE};
use crate::storage::s3::S3Object;
use crate::warn_if_env_var_is_missing;
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

pub mod env;
#[cfg(test)]
pub mod mock;
pub mod s3;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to upload `{key}`: {message}")]
    PutObject { key: String, message: String },
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put_object(&self, object: S3Object) -> Result<(), StorageError>;
}

/// Loads the `.env`-style file into the process environment without overriding variables
/// that are already set.
pub fn load_env_file(path: &Path) -> Result<(), dotenvy::Error> {
    dotenvy::from_filename(path).map(|_| ())
}

pub fn init() {
    warn_if_env_var_is_missing!(AWS_ENDPOINT_URL, "Will use global AWS S3.");
    warn_if_env_var_is_missing!(S3_FORCE_PATH_STYLE, "Will use virtual-hosted-style URLs.");
}
