//! Iframe detection and metadata extraction
//!
//! Stored embed codes are free-form HTML snippets pasted by course admins,
//! so detection deliberately searches anywhere in the string and takes the
//! first match for every attribute. The iframe may be wrapped in arbitrary
//! parent markup.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use video_source::Platform;

/// Errors that can occur while classifying an embed code
#[derive(Debug, Error)]
pub enum EmbedError {
    /// Content is empty or whitespace-only
    #[error("Embed content is empty")]
    EmptyInput,

    /// Content contains no iframe embed
    #[error("No iframe embed found in content")]
    NotAnEmbed,

    /// The src attribute is not a parseable URL
    #[error("Embed source is not a valid URL: {0}")]
    MalformedSource(String),

    /// The src hostname is not on the trusted allow-list
    #[error("Embed source domain is not trusted: {0}")]
    UntrustedDomain(String),
}

/// Result type for embed operations
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Metadata extracted from an embed code
///
/// Computed fresh on every classification call; never cached or stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedInfo {
    /// Source URL of the first iframe src attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Player width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Player height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Hosting platform inferred from the source URL
    pub platform: Platform,
    /// Title attribute of the iframe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether the markup requests fullscreen permission
    pub allow_fullscreen: bool,
}

fn iframe_regex() -> &'static Regex {
    static IFRAME_REGEX: OnceLock<Regex> = OnceLock::new();
    IFRAME_REGEX.get_or_init(|| {
        // An iframe whose opening tag carries an http(s) src, closed
        // somewhere later in the string. Case-insensitive, dot matches
        // newline so multi-line snippets are handled.
        Regex::new(r#"(?is)<iframe[^>]*\bsrc\s*=\s*["']https?://.*?</iframe>"#)
            .unwrap()
    })
}

fn src_regex() -> &'static Regex {
    static SRC_REGEX: OnceLock<Regex> = OnceLock::new();
    SRC_REGEX.get_or_init(|| {
        Regex::new(r#"(?i)\bsrc\s*=\s*["']([^"']+)["']"#)
            .unwrap()
    })
}

fn title_regex() -> &'static Regex {
    static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
    TITLE_REGEX.get_or_init(|| {
        Regex::new(r#"(?i)\btitle\s*=\s*["']([^"']*)["']"#)
            .unwrap()
    })
}

fn dimension_regex(name: &str) -> Regex {
    // Matches both attribute (width="640") and inline style (width: 640px)
    // forms, anywhere in the markup.
    Regex::new(&format!(r#"(?i)\b{name}\s*[=:]\s*["']?(\d+)"#)).unwrap()
}

fn width_regex() -> &'static Regex {
    static WIDTH_REGEX: OnceLock<Regex> = OnceLock::new();
    WIDTH_REGEX.get_or_init(|| dimension_regex("width"))
}

fn height_regex() -> &'static Regex {
    static HEIGHT_REGEX: OnceLock<Regex> = OnceLock::new();
    HEIGHT_REGEX.get_or_init(|| dimension_regex("height"))
}

/// Check whether a string contains an iframe video embed.
///
/// Returns true iff the content contains an `<iframe ... src="https?://...">
/// ... </iframe>` pattern anywhere, permitting the iframe to be wrapped in
/// arbitrary parent markup.
pub fn is_embed_code(content: &str) -> bool {
    if content.trim().is_empty() {
        return false;
    }
    iframe_regex().is_match(content)
}

/// Extract display metadata from an embed code.
///
/// Returns `None` unless [`is_embed_code`] holds. Every attribute is taken
/// from its first match in the whole string, not scoped to the iframe tag,
/// matching how stored embed codes have always been interpreted. Multiple
/// iframes in one string are not rejected; the first match wins.
pub fn parse_embed_code(content: &str) -> Option<EmbedInfo> {
    if !is_embed_code(content) {
        return None;
    }

    let capture = |re: &Regex| {
        re.captures(content)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    };

    let src = capture(src_regex());
    let platform = src.as_deref().map(Platform::from_src).unwrap_or_default();

    Some(EmbedInfo {
        src,
        width: capture(width_regex()).and_then(|v| v.parse().ok()),
        height: capture(height_regex()).and_then(|v| v.parse().ok()),
        platform,
        title: capture(title_regex()),
        allow_fullscreen: content.to_ascii_lowercase().contains("allowfullscreen"),
    })
}
