use crate::fetch::{FetchError, ImageFetcher};
use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::Url;

/// Serves canned bodies by URL. Unknown URLs answer with `404 Not Found`.
#[derive(Clone, Default)]
pub struct MockImageFetcher {
    bodies: Arc<Mutex<HashMap<String, Bytes>>>,
    fetch_count: Arc<Mutex<usize>>,
}

impl MockImageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, url: &str, body: Vec<u8>) -> Self {
        self.bodies
            .lock()
            .unwrap()
            .insert(url.to_string(), Bytes::from(body));
        self
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

#[async_trait]
impl ImageFetcher for MockImageFetcher {
    async fn fetch(&self, url: &Url) -> Result<Bytes, FetchError> {
        *self.fetch_count.lock().unwrap() += 1;
        self.bodies
            .lock()
            .unwrap()
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND,
            })
    }
}
