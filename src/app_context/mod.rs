use crate::fetch::ImageFetcher;
use crate::storage::ObjectStorage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub fetcher: Arc<dyn ImageFetcher>,
    pub storage: Arc<dyn ObjectStorage>,
}

impl AppContext {
    pub fn new(fetcher: Arc<dyn ImageFetcher>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self { fetcher, storage }
    }
}
