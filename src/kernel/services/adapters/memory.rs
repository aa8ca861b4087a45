//! In-process gateway adapters.
//!
//! These back the integration tests and demo hosts: a document store that
//! lives in a hash map and an uploader that mints deterministic URLs. Both
//! follow the same contracts a network-backed host would implement.

use compact_str::{format_compact, CompactString};
use rustc_hash::FxHashMap;

use crate::kernel::diff::DocumentPatch;
use crate::kernel::services::ports::persistence::{self, PersistError, PersistenceGateway};
use crate::kernel::services::ports::upload::{self, ImageUploadGateway, UploadError};
use crate::models::{fresh_cells, CellImageUrl, Document, ImageRole, LocalImage, UploadedImageUrls};

#[derive(Default)]
pub struct InMemoryPersistence {
    documents: FxHashMap<u64, Document>,
    next_document_id: u64,
    next_cell_id: u64,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self, id: u64) -> Option<&Document> {
        self.documents.get(&id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn assign_cell_ids(&mut self, document: &mut Document) {
        for cell in &mut document.cells {
            if cell.id.is_none() {
                self.next_cell_id += 1;
                cell.id = Some(self.next_cell_id);
            }
        }
    }
}

impl PersistenceGateway for InMemoryPersistence {
    fn create(&mut self, document: &Document) -> persistence::Result<Document> {
        if let Some(id) = document.id {
            return Err(PersistError::Rejected(format!(
                "document {} already persisted",
                id
            )));
        }
        self.next_document_id += 1;
        let mut stored = document.clone();
        stored.id = Some(self.next_document_id);
        stored.local_images.clear();
        self.assign_cell_ids(&mut stored);
        self.documents.insert(self.next_document_id, stored.clone());
        tracing::debug!(id = self.next_document_id, "document created");
        Ok(stored)
    }

    fn update(&mut self, id: u64, patch: &DocumentPatch) -> persistence::Result<Document> {
        let Some(existing) = self.documents.get(&id) else {
            return Err(PersistError::NotFound(id));
        };
        let mut updated = existing.clone();

        if let Some(title) = &patch.title {
            updated.title = title.clone();
        }
        if let Some(title_width) = patch.title_width {
            updated.title_width = Some(title_width);
        }
        if let Some(grid_size) = patch.grid_size {
            if grid_size == 0 {
                return Err(PersistError::Rejected("grid size must be positive".into()));
            }
            updated.grid_size = grid_size;
            updated.cells = fresh_cells(grid_size);
        }
        if let Some(style) = &patch.style {
            updated.style = style.clone();
        }
        if let Some(background) = &patch.background {
            updated.background = background.clone();
        }
        if let Some(stamp) = &patch.stamp {
            updated.stamp = stamp.clone();
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }
        if let Some(cells) = &patch.cells {
            for cell in cells {
                let Some(slot) = updated.cells.get_mut(cell.position) else {
                    return Err(PersistError::Rejected(format!(
                        "cell position {} outside grid",
                        cell.position
                    )));
                };
                let kept_id = slot.id;
                *slot = cell.clone();
                if slot.id.is_none() {
                    slot.id = kept_id;
                }
            }
        }

        self.assign_cell_ids(&mut updated);
        self.documents.insert(id, updated.clone());
        tracing::debug!(id, "document updated");
        Ok(updated)
    }
}

/// Uploader that mints stable fake CDN URLs, one per pending image.
pub struct InMemoryUploader {
    base_url: CompactString,
    uploaded: u64,
}

impl InMemoryUploader {
    pub fn new() -> Self {
        Self {
            base_url: "https://cdn.invalid/bingolab".into(),
            uploaded: 0,
        }
    }

    fn mint(&mut self, slug: &str) -> CompactString {
        self.uploaded += 1;
        format_compact!("{}/{}-{}.png", self.base_url, slug, self.uploaded)
    }
}

impl Default for InMemoryUploader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageUploadGateway for InMemoryUploader {
    fn upload(&mut self, images: &[LocalImage]) -> upload::Result<UploadedImageUrls> {
        if images.is_empty() {
            return Err(UploadError::Empty);
        }
        let mut urls = UploadedImageUrls::default();
        for image in images {
            match image.role {
                ImageRole::Background => urls.background = Some(self.mint("background")),
                ImageRole::Stamp => urls.stamp = Some(self.mint("stamp")),
                ImageRole::Cell { position } => {
                    let url = self.mint("cell");
                    urls.cells.push(CellImageUrl { position, url });
                }
            }
        }
        tracing::debug!(count = images.len(), "images uploaded");
        Ok(urls)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/memory.rs"]
mod tests;
