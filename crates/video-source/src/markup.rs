//! Iframe markup generation
//!
//! Builds the embed snippet the admin panel stores for a course video.

use crate::source::VideoSource;
use serde::{Deserialize, Serialize};

/// Display options for generated iframe markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedOptions {
    /// Player width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Player height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Accessible title for the iframe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether fullscreen playback is allowed
    pub allow_fullscreen: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self { width: None, height: None, title: None, allow_fullscreen: true }
    }
}

impl EmbedOptions {
    /// Options with explicit player dimensions
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self { width: Some(width), height: Some(height), ..Self::default() }
    }
}

impl VideoSource {
    /// Build iframe markup for this source
    pub fn embed_code(&self, options: &EmbedOptions) -> String {
        let mut markup = format!("<iframe src=\"{}\"", self.embed_url());
        if let Some(width) = options.width {
            markup.push_str(&format!(" width=\"{}\"", width));
        }
        if let Some(height) = options.height {
            markup.push_str(&format!(" height=\"{}\"", height));
        }
        if let Some(title) = &options.title {
            markup.push_str(&format!(" title=\"{}\"", escape_attribute(title)));
        }
        markup.push_str(" frameborder=\"0\"");
        if options.allow_fullscreen {
            markup.push_str(" allowfullscreen");
        }
        markup.push_str("></iframe>");
        markup
    }
}

/// Escape a string for use inside a double-quoted HTML attribute
fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
