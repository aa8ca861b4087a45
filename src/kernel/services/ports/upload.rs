//! Image upload gateway contract.

use crate::models::{LocalImage, UploadedImageUrls};

pub type Result<T> = std::result::Result<T, UploadError>;

#[derive(Debug)]
pub enum UploadError {
    Empty,
    Failed(String),
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::Empty => write!(f, "No pending images to upload"),
            UploadError::Failed(detail) => write!(f, "Upload failed: {}", detail),
        }
    }
}

impl std::error::Error for UploadError {}

/// Takes the pending local images, returns final URLs keyed by role. The
/// editor applies the mapping via the `SetImageUrls` action.
pub trait ImageUploadGateway {
    fn upload(&mut self, images: &[LocalImage]) -> Result<UploadedImageUrls>;
}
