use thiserror::Error;

pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_BUCKET: &str = "AWS_BUCKET";
pub const AWS_ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";
pub const S3_FORCE_PATH_STYLE: &str = "S3_FORCE_PATH_STYLE";

#[macro_export]
macro_rules! warn_if_env_var_is_missing {
    ($var:expr, $message:expr) => {
        if std::env::var($var).is_err() {
            tracing::warn!(
                "The `{}` environment variable isn't set. {}",
                $var,
                $message
            );
        }
    };
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("The `{0}` environment variable is not set.")]
    Missing(&'static str),
    #[error("The `{0}` environment variable is empty.")]
    Empty(&'static str),
}

/// Where and as whom resized images get uploaded. Read once at startup.
#[derive(Clone, PartialEq)]
pub struct StorageConfig {
    pub region: String,
    pub bucket: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| match lookup(name) {
            Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
            Some(value) => Ok(value),
            None => Err(ConfigError::Missing(name)),
        };

        Ok(Self {
            region: required(AWS_DEFAULT_REGION)?,
            bucket: required(AWS_BUCKET)?,
            access_key_id: required(AWS_ACCESS_KEY_ID)?,
            secret_access_key: required(AWS_SECRET_ACCESS_KEY)?,
            endpoint_url: lookup(AWS_ENDPOINT_URL).filter(|url| !url.trim().is_empty()),
            force_path_style: lookup(S3_FORCE_PATH_STYLE).is_some_and(|value| value == "true"),
        })
    }
}

// Keeps the secret out of logs.
impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("endpoint_url", &self.endpoint_url)
            .field("force_path_style", &self.force_path_style)
            .finish()
    }
}
