//! The bingo card aggregate: one in-progress document.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::background::Background;
use super::image::LocalImage;
use super::stamp::Stamp;
use super::style::{CellStyle, Style};

/// Grid edge length for a fresh card. Valid sizes are constrained by the
/// host UI (3 or 5); the editor accepts any positive value.
pub const DEFAULT_GRID_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentStatus {
    Draft,
    Published,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Absent until the document has been persisted once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: CompactString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_width: Option<u32>,
    pub grid_size: usize,
    /// Always `grid_size * grid_size` entries; `cells[i].position == i`.
    pub cells: Vec<Cell>,
    pub style: Style,
    pub background: Background,
    pub stamp: Stamp,
    pub status: DocumentStatus,
    /// Client-only upload queue; never persisted and never diffed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_images: Vec<LocalImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub content: CompactString,
    /// Index into the grid; the stable identity key for diffing.
    pub position: usize,
    pub validated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_style: Option<CellStyle>,
}

impl Cell {
    pub fn empty(position: usize) -> Self {
        Self {
            id: None,
            content: CompactString::default(),
            position,
            validated: false,
            cell_style: None,
        }
    }
}

/// A full set of blank cells for an `n`-by-`n` grid.
pub fn fresh_cells(grid_size: usize) -> Vec<Cell> {
    (0..grid_size * grid_size).map(Cell::empty).collect()
}

impl Document {
    /// The built-in default card a new editing session starts from.
    pub fn new_draft() -> Self {
        Self {
            id: None,
            title: CompactString::default(),
            title_width: None,
            grid_size: DEFAULT_GRID_SIZE,
            cells: fresh_cells(DEFAULT_GRID_SIZE),
            style: Style::default(),
            background: Background::default(),
            stamp: Stamp::default(),
            status: DocumentStatus::Draft,
            local_images: Vec::new(),
        }
    }

    pub fn cell(&self, position: usize) -> Option<&Cell> {
        self.cells.get(position)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new_draft()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/document.rs"]
mod tests;
