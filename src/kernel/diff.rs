//! Change extraction against the last committed baseline.
//!
//! The patch has the same wire shape as the document but carries only the
//! fields that actually differ: primitives when unequal, nested objects
//! whole when any sub-field differs, and cells as a sparse list of the
//! changed cells tagged by position. Local images never participate.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::models::{Background, Cell, Document, DocumentStatus, Stamp, Style};

/// Minimal update payload for the persistence gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamp: Option<Stamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<Cell>>,
}

impl DocumentPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.title_width.is_none()
            && self.grid_size.is_none()
            && self.style.is_none()
            && self.background.is_none()
            && self.stamp.is_none()
            && self.status.is_none()
            && self.cells.is_none()
    }
}

/// Compute the fields of `present` that differ from `baseline`.
pub fn extract_changes(baseline: &Document, present: &Document) -> DocumentPatch {
    let mut patch = DocumentPatch::default();

    if present.title != baseline.title {
        patch.title = Some(present.title.clone());
    }
    if present.title_width != baseline.title_width {
        patch.title_width = present.title_width;
    }
    if present.grid_size != baseline.grid_size {
        patch.grid_size = Some(present.grid_size);
    }
    if present.style != baseline.style {
        patch.style = Some(present.style.clone());
    }
    if present.background != baseline.background {
        patch.background = Some(present.background.clone());
    }
    if present.stamp != baseline.stamp {
        patch.stamp = Some(present.stamp.clone());
    }
    if present.status != baseline.status {
        patch.status = Some(present.status);
    }

    let changed_cells: Vec<Cell> = present
        .cells
        .iter()
        .filter(|cell| baseline.cell(cell.position) != Some(*cell))
        .cloned()
        .collect();
    if !changed_cells.is_empty() {
        patch.cells = Some(changed_cells);
    }

    patch
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/diff.rs"]
mod tests;
