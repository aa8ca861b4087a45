//! Editor state: the snapshot timeline plus the committed baseline.
//!
//! Every mutating method goes through [`History::record`], so each call is
//! one undo step. Malformed input from the UI layer (out-of-range cell
//! index, zero grid size) is a logged no-op, never an error.

use compact_str::CompactString;

use crate::models::{
    fresh_cells, BackgroundPatch, CellStyle, Document, DocumentStatus, ImageRole, LocalImage,
    StampKind, StampPatch, StylePatch, UploadedImageUrls,
};

use super::config::EditorLimits;
use super::diff::{extract_changes, DocumentPatch};
use super::history::History;

/// Partial update for one cell. `cell_style`, when present, replaces the
/// cell's override wholesale (callers pass the already-merged object).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellPatch {
    pub content: Option<CompactString>,
    pub validated: Option<bool>,
    pub cell_style: Option<Option<CellStyle>>,
}

pub struct EditorState {
    history: History,
    /// Last committed snapshot; `extract_changes` diffs against this.
    baseline: Document,
    limits: EditorLimits,
}

impl EditorState {
    pub fn new(initial: Document, limits: EditorLimits) -> Self {
        let baseline = initial.clone();
        Self {
            history: History::new(initial, limits.history_depth),
            baseline,
            limits,
        }
    }

    pub fn present(&self) -> &Document {
        self.history.present()
    }

    pub fn baseline(&self) -> &Document {
        &self.baseline
    }

    pub fn limits(&self) -> &EditorLimits {
        &self.limits
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Whether the present document differs from the committed baseline.
    pub fn can_save(&self) -> bool {
        !self.changes_since_commit().is_empty()
    }

    pub fn changes_since_commit(&self) -> DocumentPatch {
        extract_changes(&self.baseline, self.present())
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Back to the built-in default card, with empty history and baseline.
    pub fn reset(&mut self) {
        tracing::info!("editor reset to default draft");
        let initial = Document::new_draft();
        self.baseline = initial.clone();
        self.history.reset(initial);
    }

    pub fn clear_future_history(&mut self) {
        self.history.clear_future();
    }

    // ---- mutation actions -------------------------------------------------

    pub fn set_title(&mut self, title: CompactString) {
        self.history.record(|doc| doc.title = title);
    }

    pub fn set_title_width(&mut self, title_width: Option<u32>) {
        self.history.record(|doc| doc.title_width = title_width);
    }

    /// Resize the grid to `n` by `n`, discarding all cell data.
    pub fn set_grid_size(&mut self, n: usize) -> bool {
        if n == 0 {
            tracing::warn!("set_grid_size(0) ignored");
            return false;
        }
        let limits = self.limits;
        self.history.record(|doc| {
            doc.grid_size = n;
            doc.cells = fresh_cells(n);
            clamp_cell_size(doc, &limits);
        });
        true
    }

    /// Shallow-merge `patch` into `cells[index]`. Out-of-range is a no-op.
    pub fn update_cell(&mut self, index: usize, patch: CellPatch) -> bool {
        if index >= self.present().cells.len() {
            tracing::warn!(
                index,
                len = self.present().cells.len(),
                "update_cell out of range"
            );
            return false;
        }
        self.history.record(|doc| {
            let cell = &mut doc.cells[index];
            if let Some(content) = patch.content {
                cell.content = content;
            }
            if let Some(validated) = patch.validated {
                cell.validated = validated;
            }
            if let Some(cell_style) = patch.cell_style {
                cell.cell_style = cell_style;
            }
        });
        true
    }

    pub fn update_style(&mut self, patch: StylePatch) {
        let limits = self.limits;
        self.history.record(|doc| {
            patch.apply(&mut doc.style);
            clamp_cell_size(doc, &limits);
        });
    }

    pub fn update_background(&mut self, patch: BackgroundPatch) {
        self.history.record(|doc| patch.apply(&mut doc.background));
    }

    pub fn update_stamp(&mut self, patch: StampPatch) {
        self.history.record(|doc| patch.apply(&mut doc.stamp));
    }

    /// Flip `cells[index].validated`. Out-of-range is a no-op.
    pub fn toggle_stamp(&mut self, index: usize) -> bool {
        if index >= self.present().cells.len() {
            tracing::warn!(
                index,
                len = self.present().cells.len(),
                "toggle_stamp out of range"
            );
            return false;
        }
        self.history.record(|doc| {
            let cell = &mut doc.cells[index];
            cell.validated = !cell.validated;
        });
        true
    }

    pub fn set_status(&mut self, status: DocumentStatus) {
        self.history.record(|doc| doc.status = status);
    }

    /// Replace the present document wholesale (loading a fetched record).
    /// History-pushing, so the load itself can be undone.
    pub fn set_bingo(&mut self, document: Document) {
        let limits = self.limits;
        self.history.record(|doc| {
            *doc = document;
            clamp_cell_size(doc, &limits);
        });
    }

    /// Rebase on the server's canonical document after a successful save.
    /// Equivalent to `set_bingo` + `clear_future_history` + baseline update;
    /// a failed save must never reach this.
    pub fn rebase_committed(&mut self, document: Document) {
        tracing::info!(id = ?document.id, "committed snapshot rebased");
        self.baseline = document.clone();
        self.baseline.local_images.clear();
        self.set_bingo(document);
        self.history.clear_future();
    }

    // ---- local images (cosmetic: no history snapshots) --------------------

    /// Queue a pending image, replacing any queued image with the same role.
    pub fn set_local_image(&mut self, image: LocalImage) {
        let doc = self.history.present_mut();
        doc.local_images
            .retain(|existing| existing.role != image.role);
        doc.local_images.push(image);
    }

    pub fn remove_cell_local_image(&mut self, index: usize) -> bool {
        let images = &mut self.history.present_mut().local_images;
        let before = images.len();
        images.retain(|image| image.role != ImageRole::Cell { position: index });
        images.len() != before
    }

    pub fn remove_local_background_image(&mut self) -> bool {
        let images = &mut self.history.present_mut().local_images;
        let before = images.len();
        images.retain(|image| image.role != ImageRole::Background);
        images.len() != before
    }

    /// Rewrite image fields from local references to final URLs after the
    /// upload gateway completes, and drop the satisfied queue entries.
    pub fn set_image_urls(&mut self, urls: UploadedImageUrls) {
        if urls.is_empty() {
            return;
        }
        self.history.record(|doc| {
            if let Some(url) = &urls.background {
                doc.background.set_image_url(url.clone());
                doc.local_images
                    .retain(|image| image.role != ImageRole::Background);
            }
            if let Some(url) = &urls.stamp {
                doc.stamp.kind = StampKind::Image;
                doc.stamp.value = url.clone();
                doc.local_images
                    .retain(|image| image.role != ImageRole::Stamp);
            }
            for cell_url in &urls.cells {
                let Some(cell) = doc.cells.get_mut(cell_url.position) else {
                    tracing::warn!(
                        position = cell_url.position,
                        "uploaded cell image has no cell"
                    );
                    continue;
                };
                cell.cell_style
                    .get_or_insert_with(CellStyle::default)
                    .background_image = Some(cell_url.url.clone());
                doc.local_images.retain(|image| {
                    image.role
                        != ImageRole::Cell {
                            position: cell_url.position,
                        }
                });
            }
        });
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Document::new_draft(), EditorLimits::default())
    }
}

/// Standing invariant: `style.cell_size` never exceeds the grid-dependent
/// ceiling. A clamp also shrinks the stamp to fit inside a cell.
fn clamp_cell_size(doc: &mut Document, limits: &EditorLimits) {
    let ceiling = limits.cell_ceiling(doc.grid_size);
    if doc.style.cell_size > ceiling {
        doc.style.cell_size = ceiling;
        doc.stamp.size = ceiling - limits.stamp_size_margin;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
