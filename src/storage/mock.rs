use crate::storage::s3::S3Object;
use crate::storage::{ObjectStorage, StorageError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockObjectStorage {
    objects: Arc<Mutex<Vec<S3Object>>>,
    failing: bool,
}

impl MockObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> Vec<S3Object> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for MockObjectStorage {
    async fn put_object(&self, object: S3Object) -> Result<(), StorageError> {
        if self.failing {
            return Err(StorageError::PutObject {
                key: object.key.into_inner(),
                message: String::from("service unavailable"),
            });
        }
        self.objects.lock().unwrap().push(object);
        Ok(())
    }
}
