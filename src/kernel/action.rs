use compact_str::CompactString;

use crate::models::{
    BackgroundPatch, Document, DocumentStatus, LocalImage, StampPatch, StylePatch,
    UploadedImageUrls,
};

use super::state::CellPatch;

/// Everything the UI (or the host's gateway callbacks) can ask the store to
/// do. Each document mutation is atomic: one dispatch, one undo step.
#[derive(Debug, Clone)]
pub enum Action {
    SetTitle {
        title: CompactString,
    },
    SetTitleWidth {
        title_width: Option<u32>,
    },
    /// Resizes to `n * n` fresh cells; old cell data is discarded.
    SetGridSize {
        n: usize,
    },
    UpdateCell {
        index: usize,
        patch: CellPatch,
    },
    UpdateStyle {
        patch: StylePatch,
    },
    UpdateBackground {
        patch: BackgroundPatch,
    },
    UpdateStamp {
        patch: StampPatch,
    },
    /// Flip `cells[index].validated`.
    ToggleStamp {
        index: usize,
    },
    SetStatus {
        status: DocumentStatus,
    },
    /// Replace the whole present document (loading a fetched record).
    SetBingo {
        document: Document,
    },
    Undo,
    Redo,
    Reset,
    ClearFutureHistory,
    SetLocalImage {
        image: LocalImage,
    },
    RemoveCellLocalImage {
        index: usize,
    },
    RemoveLocalBackgroundImage,
    /// Apply final URLs produced by the upload gateway.
    SetImageUrls {
        urls: UploadedImageUrls,
    },
    /// Ask for an [`Effect::UploadImages`] covering the pending queue.
    RequestImageUpload,
    /// Ask for a create/update effect covering the unsaved changes.
    RequestSave,
    /// The host's save round-trip succeeded with this canonical document.
    SaveCompleted {
        document: Document,
    },
    /// The host's save round-trip failed; history and baseline stay put.
    SaveFailed {
        message: String,
    },
}
