//! Embed classification and sanitization for YouthPargati course videos
//!
//! This crate decides whether an arbitrary string is a safe, renderable
//! video embed, extracts its display metadata, and gates it against an
//! allow-list of trusted hosting domains before the rendering layer ever
//! sees it. Everything is synchronous and pure: no network calls, no
//! caching, no hidden state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod domains;
pub mod render;
pub mod sanitize;
pub mod validate;

pub use classify::{is_embed_code, parse_embed_code, EmbedError, EmbedInfo, Result};
pub use domains::{TrustedDomains, DEFAULT_TRUSTED_DOMAINS};
pub use render::{RenderInfo, RenderKind};
pub use sanitize::EmbedClassifier;
pub use validate::{Validation, ValidationKind};

// Platform classification lives with the URL-level helpers.
pub use video_source::Platform;
