use crate::models::{Document, LocalImage};

use super::diff::DocumentPatch;

/// Work the store wants the host to perform against its gateways. The store
/// never blocks on these; results come back as discrete actions
/// (`SaveCompleted`, `SaveFailed`, `SetImageUrls`).
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// First save of an unpersisted draft: ship the full document.
    CreateDocument { document: Document },
    /// Subsequent save: ship only what changed since the last commit.
    UpdateDocument { id: u64, patch: DocumentPatch },
    /// Upload the pending local images.
    UploadImages { images: Vec<LocalImage> },
}
