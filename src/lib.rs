//! YouthPargati embed handling
//!
//! Umbrella crate re-exporting the embed classification pipeline
//! ([`embed_core`]) and the plain-URL platform helpers ([`video_source`]).
//! Integration tests for the full accept/reject flow live in `tests/`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use embed_core;
pub use video_source;
