//! Not-yet-uploaded image references and the upload result shape.
//!
//! Local images live on the document only until the host runs the upload
//! gateway; they never reach persistence. The result maps each role back to
//! its final URL so the editor can rewrite the affected fields in one step.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Which document field a pending image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "camelCase")]
pub enum ImageRole {
    Background,
    Stamp,
    Cell { position: usize },
}

/// A client-side image reference awaiting upload (object URL, data URL...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalImage {
    pub role: ImageRole,
    pub local_ref: CompactString,
}

impl LocalImage {
    pub fn new(role: ImageRole, local_ref: impl Into<CompactString>) -> Self {
        Self {
            role,
            local_ref: local_ref.into(),
        }
    }
}

/// Final URLs returned by the upload gateway, keyed by role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImageUrls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamp: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cells: Vec<CellImageUrl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellImageUrl {
    pub position: usize,
    pub url: CompactString,
}

impl UploadedImageUrls {
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.stamp.is_none() && self.cells.is_empty()
    }
}
