use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ResizeImageRequest {
    pub image_link: String,
    pub directory_name: String,
}
