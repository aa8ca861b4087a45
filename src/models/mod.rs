//! Data model layer: the bingo card aggregate and its parts.

pub mod background;
pub mod document;
pub mod image;
pub mod stamp;
pub mod style;

pub use background::{
    Background, BackgroundPatch, GradientSpec, GradientStop, StopPosition, DEFAULT_GRADIENT,
};
pub use document::{fresh_cells, Cell, Document, DocumentStatus, DEFAULT_GRID_SIZE};
pub use image::{CellImageUrl, ImageRole, LocalImage, UploadedImageUrls};
pub use stamp::{Stamp, StampKind, StampPatch};
pub use style::{CellStyle, Style, StylePatch};
