//! Card background: a radial gradient, optionally with an image on top.
//!
//! The gradient payload is kept as a JSON-encoded string because preview
//! renderers and the API validation schema parse it by this exact shape:
//! `{"backgroundColor": ..., "stops": [{"color": ..., "position": {"x", "y"}}]}`.
//! [`GradientSpec`] is the typed codec for that string; the editor itself
//! merges the value as an opaque string.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Default gradient payload for a fresh card, in the external encoding.
pub const DEFAULT_GRADIENT: &str = r##"{"backgroundColor":"#f3e8ff","stops":[{"color":"#c4b5fd","position":{"x":20.0,"y":20.0}},{"color":"#fbcfe8","position":{"x":80.0,"y":80.0}}]}"##;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Background {
    /// Gradient only.
    Gradient { gradient: CompactString },
    /// Image layered over the gradient.
    #[serde(rename_all = "camelCase")]
    Image {
        gradient: CompactString,
        url: CompactString,
        opacity: f32,
        position: CompactString,
        size: CompactString,
    },
}

impl Default for Background {
    fn default() -> Self {
        Background::Gradient {
            gradient: DEFAULT_GRADIENT.into(),
        }
    }
}

impl Background {
    pub fn gradient(&self) -> &str {
        match self {
            Background::Gradient { gradient } => gradient,
            Background::Image { gradient, .. } => gradient,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            Background::Gradient { .. } => None,
            Background::Image { url, .. } => Some(url),
        }
    }

    /// Layer an image over the current gradient. A gradient-only background
    /// is upgraded to [`Background::Image`] with default layout fields.
    pub fn set_image_url(&mut self, new_url: CompactString) {
        match self {
            Background::Gradient { gradient } => {
                *self = Background::Image {
                    gradient: gradient.clone(),
                    url: new_url,
                    opacity: 1.0,
                    position: "center".into(),
                    size: "cover".into(),
                };
            }
            Background::Image { url, .. } => *url = new_url,
        }
    }

    /// Drop the image layer, keeping the gradient.
    pub fn clear_image(&mut self) {
        if let Background::Image { gradient, .. } = self {
            *self = Background::Gradient {
                gradient: gradient.clone(),
            };
        }
    }
}

/// Partial update for [`Background`]. Setting `url` on a gradient-only
/// background upgrades it to the image variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<CompactString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<CompactString>,
}

impl BackgroundPatch {
    pub fn apply(&self, background: &mut Background) {
        if let Some(new_url) = &self.url {
            background.set_image_url(new_url.clone());
        }
        match background {
            Background::Gradient { gradient } => {
                if let Some(new_gradient) = &self.gradient {
                    *gradient = new_gradient.clone();
                }
            }
            Background::Image {
                gradient,
                opacity,
                position,
                size,
                ..
            } => {
                if let Some(new_gradient) = &self.gradient {
                    *gradient = new_gradient.clone();
                }
                if let Some(new_opacity) = self.opacity {
                    *opacity = new_opacity;
                }
                if let Some(new_position) = &self.position {
                    *position = new_position.clone();
                }
                if let Some(new_size) = &self.size {
                    *size = new_size.clone();
                }
            }
        }
    }
}

/// Typed form of the gradient payload string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientSpec {
    pub background_color: CompactString,
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: CompactString,
    pub position: StopPosition,
}

/// Stop center as percentages of the card surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopPosition {
    pub x: f32,
    pub y: f32,
}

impl GradientSpec {
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/background.rs"]
mod tests;
