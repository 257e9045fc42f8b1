//! Admin-panel embed validation
//!
//! User-facing variant of the classification pipeline: instead of silently
//! collapsing rejections, it reports them as human-readable error strings so
//! the admin can fix the pasted snippet before it is persisted.

use crate::classify::EmbedError;
use crate::sanitize::EmbedClassifier;
use serde::{Deserialize, Serialize};
use video_source::{Platform, VideoSource};

/// What kind of content the validator recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationKind {
    /// A valid, trusted embed
    Embed,
    /// Content present but not an acceptable embed
    Invalid,
    /// No content to validate
    None,
}

/// Outcome of validating an embed code before persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// Whether the content may be saved
    pub is_valid: bool,
    /// What the validator recognized
    #[serde(rename = "type")]
    pub kind: ValidationKind,
    /// Hosting platform, when recognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Human-readable problems with the content
    pub errors: Vec<String>,
}

impl Validation {
    fn invalid(error: String) -> Self {
        Self { is_valid: false, kind: ValidationKind::Invalid, platform: None, errors: vec![error] }
    }
}

impl EmbedClassifier {
    /// Validate an embed code pasted into the admin panel.
    ///
    /// Empty input reports `none` with no errors (nothing to complain about
    /// yet); any rejected content reports `invalid` with one error string.
    /// A pasted watch/share link is still invalid, but the error suggests
    /// the embed URL to use instead.
    pub fn validate_embed_code(&self, content: &str) -> Validation {
        match self.check(content) {
            Ok(info) => Validation {
                is_valid: true,
                kind: ValidationKind::Embed,
                platform: Some(info.platform),
                errors: Vec::new(),
            },
            Err(EmbedError::EmptyInput) => Validation {
                is_valid: false,
                kind: ValidationKind::None,
                platform: None,
                errors: Vec::new(),
            },
            Err(e @ EmbedError::NotAnEmbed) => {
                // Admins regularly paste the video page link instead of the
                // embed snippet; point them at the player URL when we can.
                if let Ok(source) = VideoSource::parse(content) {
                    Validation::invalid(format!(
                        "Content is a plain video link, not an embed code; \
                         paste an iframe snippet using {}",
                        source.embed_url()
                    ))
                } else {
                    Validation::invalid(e.to_string())
                }
            }
            Err(e) => Validation::invalid(e.to_string()),
        }
    }
}
