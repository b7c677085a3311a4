use crate::storage::env::StorageConfig;
use crate::storage::{ObjectStorage, StorageError};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::{Client, Config};

#[derive(Debug)]
pub struct S3Storage {
    client: Client,
    bucket: String,
}

impl S3Storage {
    const CREDENTIALS_PROVIDER_NAME: &'static str = "image-resize-service-env";

    pub fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            Self::CREDENTIALS_PROVIDER_NAME,
        );
        let mut config_builder = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials);
        if let Some(endpoint_url) = &config.endpoint_url {
            // Custom endpoint for LocalStack or MinIO instead of AWS S3.
            config_builder = config_builder.endpoint_url(endpoint_url);
        }
        if config.force_path_style {
            config_builder = config_builder.force_path_style(true);
        }

        Self {
            client: Client::from_conf(config_builder.build()),
            bucket: config.bucket.clone(),
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn put_object(&self, object: S3Object) -> Result<(), StorageError> {
        let key = object.key.into_inner();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(object.bytes))
            .content_type(object.content_type)
            .content_length(object.size)
            .send()
            .await
            .map_err(|err| StorageError::PutObject {
                key: key.clone(),
                message: DisplayErrorContext(&err).to_string(),
            })?;
        tracing::debug!(bucket = %self.bucket, key = %key, "Uploaded object.");
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct S3Object {
    pub bytes: Vec<u8>,
    pub key: S3ObjectKey,
    pub size: i64,
    pub content_type: &'static str,
}

impl S3Object {
    pub fn new(key: S3ObjectKey, bytes: Vec<u8>, content_type: &'static str) -> Self {
        Self {
            size: bytes.len() as i64,
            bytes,
            key,
            content_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct S3ObjectKey(String);

impl S3ObjectKey {
    pub fn in_directory(directory: &str, file_name: &str) -> Self {
        let directory = directory.trim_end_matches('/');
        if directory.is_empty() {
            Self(file_name.to_string())
        } else {
            Self(format!("{}/{}", directory, file_name))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for S3ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
