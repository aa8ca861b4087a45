//! Card-wide and per-cell styling.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Document-wide default style, applied to every cell without an override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub font_size: u32,
    pub font_family: CompactString,
    pub font_weight: CompactString,
    pub font_style: CompactString,
    pub color: CompactString,
    pub cell_size: u32,
    pub gap: u32,
    pub cell_border_color: CompactString,
    pub cell_border_width: u32,
    pub cell_background_color: CompactString,
    pub cell_background_opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_size: 16,
            font_family: "sans-serif".into(),
            font_weight: "normal".into(),
            font_style: "normal".into(),
            color: "#1f2933".into(),
            cell_size: 120,
            gap: 8,
            cell_border_color: "#d9e2ec".into(),
            cell_border_width: 1,
            cell_background_color: "#ffffff".into(),
            cell_background_opacity: 0.85,
        }
    }
}

/// Partial update for [`Style`]. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_border_color: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_background_color: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_background_opacity: Option<f32>,
}

impl StylePatch {
    /// Shallow-merge this patch into `style`.
    pub fn apply(&self, style: &mut Style) {
        if let Some(font_size) = self.font_size {
            style.font_size = font_size;
        }
        if let Some(font_family) = &self.font_family {
            style.font_family = font_family.clone();
        }
        if let Some(font_weight) = &self.font_weight {
            style.font_weight = font_weight.clone();
        }
        if let Some(font_style) = &self.font_style {
            style.font_style = font_style.clone();
        }
        if let Some(color) = &self.color {
            style.color = color.clone();
        }
        if let Some(cell_size) = self.cell_size {
            style.cell_size = cell_size;
        }
        if let Some(gap) = self.gap {
            style.gap = gap;
        }
        if let Some(cell_border_color) = &self.cell_border_color {
            style.cell_border_color = cell_border_color.clone();
        }
        if let Some(cell_border_width) = self.cell_border_width {
            style.cell_border_width = cell_border_width;
        }
        if let Some(cell_background_color) = &self.cell_background_color {
            style.cell_background_color = cell_background_color.clone();
        }
        if let Some(cell_background_opacity) = self.cell_background_opacity {
            style.cell_background_opacity = cell_background_opacity;
        }
    }
}

/// Per-cell override of a subset of [`Style`], plus the cell's own
/// background-image fields. Callers pass the already-merged object; the
/// store replaces a cell's override wholesale rather than deep-merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_background_color: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_background_opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image_opacity: Option<f32>,
}

#[cfg(test)]
#[path = "../../tests/unit/models/style.rs"]
mod tests;
