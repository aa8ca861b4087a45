//! Service ports: traits + data contracts.

pub mod persistence;
pub mod upload;

pub use persistence::{PersistError, PersistenceGateway, Result as PersistResult};
pub use upload::{ImageUploadGateway, Result as UploadResult, UploadError};
