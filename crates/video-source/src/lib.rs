//! Video source identification for YouthPargati
//!
//! This crate identifies which hosting platform a video URL belongs to,
//! extracts the video ID from watch and share links, and builds canonical
//! player URLs and iframe markup for course content.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod markup;
pub mod platform;
pub mod source;

pub use markup::EmbedOptions;
pub use platform::Platform;
pub use source::{Result, SourceError, VideoSource};
