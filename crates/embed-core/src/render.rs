//! Render routing for the video player component

use crate::classify::EmbedInfo;
use crate::sanitize::EmbedClassifier;
use serde::{Deserialize, Serialize};
use video_source::Platform;

/// How the player component should render the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    /// Render the sanitized embed markup
    Embed,
    /// Nothing renderable; show the "no video available" placeholder
    #[default]
    None,
}

/// Everything the player component needs to render an embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderInfo {
    /// Whether there is anything to render
    #[serde(rename = "type")]
    pub kind: RenderKind,
    /// The sanitized markup, present only when `kind` is `Embed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Hosting platform of the embed
    pub platform: Platform,
    /// Source URL of the embed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Full extracted metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<EmbedInfo>,
}

impl RenderInfo {
    /// The empty "nothing to render" result
    pub fn none() -> Self {
        Self {
            kind: RenderKind::None,
            content: None,
            platform: Platform::Unknown,
            src: None,
            metadata: None,
        }
    }

    /// Check whether there is content to render
    pub fn is_renderable(&self) -> bool {
        self.kind == RenderKind::Embed
    }
}

impl EmbedClassifier {
    /// Decide how to render an embed code.
    ///
    /// Produces an `Embed` result with full metadata only when sanitization
    /// succeeds; any rejection collapses to the `None` placeholder result.
    pub fn render_info(&self, content: &str) -> RenderInfo {
        match self.check(content) {
            Ok(info) => RenderInfo {
                kind: RenderKind::Embed,
                content: Some(content.to_string()),
                platform: info.platform,
                src: info.src.clone(),
                metadata: Some(info),
            },
            Err(e) => {
                tracing::debug!("nothing to render: {}", e);
                RenderInfo::none()
            }
        }
    }
}
