//! Video hosting platform identification

use serde::{Deserialize, Serialize};

/// Video hosting platform inferred from a source URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// YouTube video
    YouTube,
    /// Vimeo video
    Vimeo,
    /// Dailymotion video
    Dailymotion,
    /// Odysee (LBRY) video
    Odysee,
    /// Twitch stream or VOD
    Twitch,
    /// Unrecognized source
    #[default]
    Unknown,
}

impl Platform {
    /// Get the platform as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Vimeo => "vimeo",
            Platform::Dailymotion => "dailymotion",
            Platform::Odysee => "odysee",
            Platform::Twitch => "twitch",
            Platform::Unknown => "unknown",
        }
    }

    /// Classify a source URL by substring match against known hostnames.
    ///
    /// Checks run in a fixed priority order (YouTube, Vimeo, Dailymotion,
    /// Odysee, Twitch) and the first match wins, so a URL containing more
    /// than one platform substring resolves to the earliest-checked one.
    /// A `youtube-nocookie.com` source matches none of these substrings and
    /// classifies as `Unknown`, even though the embed allow-list accepts it.
    pub fn from_src(src: &str) -> Platform {
        let src = src.to_ascii_lowercase();
        if src.contains("youtube.com") || src.contains("youtu.be") {
            Platform::YouTube
        } else if src.contains("vimeo.com") {
            Platform::Vimeo
        } else if src.contains("dailymotion.com") || src.contains("dai.ly") {
            Platform::Dailymotion
        } else if src.contains("odysee.com") || src.contains("lbry.tv") {
            Platform::Odysee
        } else if src.contains("twitch.tv") {
            Platform::Twitch
        } else {
            Platform::Unknown
        }
    }

    /// Check if the platform was recognized
    pub fn is_known(&self) -> bool {
        !matches!(self, Platform::Unknown)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
