//! Persistence gateway contract.
//!
//! The editor never talks to storage directly: the host runs one of these
//! round-trips and feeds the outcome back through `SaveCompleted` /
//! `SaveFailed` actions.

use crate::kernel::diff::DocumentPatch;
use crate::models::Document;

pub type Result<T> = std::result::Result<T, PersistError>;

#[derive(Debug)]
pub enum PersistError {
    NotFound(u64),
    Rejected(String),
    Io(String),
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistError::NotFound(id) => write!(f, "Document not found: {}", id),
            PersistError::Rejected(reason) => write!(f, "Save rejected: {}", reason),
            PersistError::Io(detail) => write!(f, "Storage error: {}", detail),
        }
    }
}

impl std::error::Error for PersistError {}

/// Abstract save/update surface. `create` takes a full document and returns
/// the server's canonical copy (ids assigned); `update` takes the minimal
/// changes patch shaped exactly like `extract_changes` output.
pub trait PersistenceGateway {
    fn create(&mut self, document: &Document) -> Result<Document>;
    fn update(&mut self, id: u64, patch: &DocumentPatch) -> Result<Document>;
}
