//! Validation mark shown on completed cells.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StampKind {
    /// `value` is a literal glyph.
    Text,
    /// `value` is an image URL.
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    pub kind: StampKind,
    pub value: CompactString,
    pub size: u32,
    pub opacity: f32,
}

impl Default for Stamp {
    fn default() -> Self {
        Self {
            kind: StampKind::Text,
            value: "\u{2605}".into(),
            size: 60,
            opacity: 0.8,
        }
    }
}

/// Partial update for [`Stamp`]. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StampPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<StampKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl StampPatch {
    pub fn apply(&self, stamp: &mut Stamp) {
        if let Some(kind) = self.kind {
            stamp.kind = kind;
        }
        if let Some(value) = &self.value {
            stamp.value = value.clone();
        }
        if let Some(size) = self.size {
            stamp.size = size;
        }
        if let Some(opacity) = self.opacity {
            stamp.opacity = opacity;
        }
    }
}
