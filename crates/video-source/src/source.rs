//! Parsing of plain video page URLs into platform + video ID
//!
//! Course admins often paste a watch or share link instead of an embed
//! snippet. This module recognizes those links so the application can build
//! the canonical player URL for them.

use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors that can occur while parsing a video URL
#[derive(Debug, Error)]
pub enum SourceError {
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Host is not a recognized video platform
    #[error("Unsupported video host: {0}")]
    UnsupportedHost(String),

    /// URL belongs to a platform but carries no video ID
    #[error("Missing video ID in URL")]
    MissingId,
}

/// Result type for video source operations
pub type Result<T> = std::result::Result<T, SourceError>;

/// A video identified on a known hosting platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "camelCase")]
pub enum VideoSource {
    /// YouTube video
    #[serde(rename = "youtube")]
    YouTube {
        /// Video ID
        id: String,
        /// Start time in seconds
        #[serde(skip_serializing_if = "Option::is_none")]
        start: Option<u32>,
    },
    /// Vimeo video
    #[serde(rename = "vimeo")]
    Vimeo {
        /// Numeric video ID
        id: String,
    },
    /// Dailymotion video
    #[serde(rename = "dailymotion")]
    Dailymotion {
        /// Video ID
        id: String,
    },
    /// Odysee (LBRY) video
    #[serde(rename = "odysee")]
    Odysee {
        /// Claim path, e.g. `@channel/video-name`
        path: String,
    },
    /// Twitch VOD
    #[serde(rename = "twitchVideo")]
    TwitchVideo {
        /// Numeric VOD ID
        id: String,
    },
    /// Twitch channel (live)
    #[serde(rename = "twitchChannel")]
    TwitchChannel {
        /// Channel name
        name: String,
    },
}

impl VideoSource {
    /// Parse a video page URL into a source.
    ///
    /// Recognized forms:
    /// - YouTube: `watch?v=`, `youtu.be/`, `/embed/`, `/shorts/`, `/live/`
    /// - Vimeo: `vimeo.com/{id}`, `player.vimeo.com/video/{id}`
    /// - Dailymotion: `/video/{id}`, `/embed/video/{id}`, `dai.ly/{id}`
    /// - Odysee: `odysee.com/{claim}`, `odysee.com/$/embed/{claim}`
    /// - Twitch: `twitch.tv/videos/{id}`, `twitch.tv/{channel}`,
    ///   `player.twitch.tv/?video=` / `?channel=`
    pub fn parse(input: &str) -> Result<VideoSource> {
        let url = Url::parse(input.trim()).map_err(|_| SourceError::InvalidUrl(input.to_string()))?;
        let host = url
            .host_str()
            .ok_or_else(|| SourceError::InvalidUrl(input.to_string()))?
            .to_ascii_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host).to_string();

        match host.as_str() {
            "youtube.com" | "m.youtube.com" | "youtube-nocookie.com" => Self::parse_youtube(&url),
            "youtu.be" => {
                let id = first_segment(&url).ok_or(SourceError::MissingId)?;
                Ok(VideoSource::YouTube { id, start: extract_start(&url) })
            }
            "vimeo.com" => {
                // The numeric segment is the video ID, whatever path form
                // (plain, channel, showcase) surrounds it.
                let id = segments(&url)
                    .into_iter()
                    .find(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
                    .ok_or(SourceError::MissingId)?;
                Ok(VideoSource::Vimeo { id })
            }
            "player.vimeo.com" => {
                let id = segment_after(&url, "video").ok_or(SourceError::MissingId)?;
                Ok(VideoSource::Vimeo { id })
            }
            "dailymotion.com" => {
                let id = segment_after(&url, "video").ok_or(SourceError::MissingId)?;
                Ok(VideoSource::Dailymotion { id })
            }
            "dai.ly" => {
                let id = first_segment(&url).ok_or(SourceError::MissingId)?;
                Ok(VideoSource::Dailymotion { id })
            }
            "odysee.com" | "lbry.tv" => {
                let segs = segments(&url);
                let claim: Vec<String> = if segs.first().map(String::as_str) == Some("$")
                    && segs.get(1).map(String::as_str) == Some("embed")
                {
                    segs[2..].to_vec()
                } else {
                    segs
                };
                if claim.is_empty() {
                    return Err(SourceError::MissingId);
                }
                Ok(VideoSource::Odysee { path: claim.join("/") })
            }
            "twitch.tv" => {
                let segs = segments(&url);
                match segs.first().map(String::as_str) {
                    Some("videos") => {
                        let id = segs.get(1).filter(|s| !s.is_empty()).ok_or(SourceError::MissingId)?;
                        Ok(VideoSource::TwitchVideo { id: id.clone() })
                    }
                    Some(name) if !name.is_empty() => {
                        Ok(VideoSource::TwitchChannel { name: name.to_string() })
                    }
                    _ => Err(SourceError::MissingId),
                }
            }
            "player.twitch.tv" => {
                if let Some(id) = query_param(&url, "video") {
                    Ok(VideoSource::TwitchVideo { id })
                } else if let Some(name) = query_param(&url, "channel") {
                    Ok(VideoSource::TwitchChannel { name })
                } else {
                    Err(SourceError::MissingId)
                }
            }
            _ => Err(SourceError::UnsupportedHost(host)),
        }
    }

    fn parse_youtube(url: &Url) -> Result<VideoSource> {
        let start = extract_start(url);
        let segs = segments(url);

        // watch?v= form
        if segs.first().map(String::as_str) == Some("watch") {
            let id = query_param(url, "v").ok_or(SourceError::MissingId)?;
            return Ok(VideoSource::YouTube { id, start });
        }

        // /embed/{id}, /shorts/{id}, /live/{id} forms
        for prefix in ["embed", "shorts", "live"] {
            if let Some(id) = segment_after(url, prefix) {
                return Ok(VideoSource::YouTube { id, start });
            }
        }

        Err(SourceError::MissingId)
    }

    /// Get the platform this source belongs to
    pub fn platform(&self) -> Platform {
        match self {
            VideoSource::YouTube { .. } => Platform::YouTube,
            VideoSource::Vimeo { .. } => Platform::Vimeo,
            VideoSource::Dailymotion { .. } => Platform::Dailymotion,
            VideoSource::Odysee { .. } => Platform::Odysee,
            VideoSource::TwitchVideo { .. } | VideoSource::TwitchChannel { .. } => Platform::Twitch,
        }
    }

    /// Get the canonical player URL for this source
    pub fn embed_url(&self) -> String {
        match self {
            VideoSource::YouTube { id, start } => {
                let mut url = format!("https://www.youtube.com/embed/{}", id);
                if let Some(start) = start {
                    url.push_str(&format!("?start={}", start));
                }
                url
            }
            VideoSource::Vimeo { id } => format!("https://player.vimeo.com/video/{}", id),
            VideoSource::Dailymotion { id } => {
                format!("https://www.dailymotion.com/embed/video/{}", id)
            }
            VideoSource::Odysee { path } => format!("https://odysee.com/$/embed/{}", path),
            VideoSource::TwitchVideo { id } => format!("https://player.twitch.tv/?video={}", id),
            VideoSource::TwitchChannel { name } => {
                format!("https://player.twitch.tv/?channel={}", name)
            }
        }
    }

    /// Get the canonical watch/share URL for this source
    pub fn watch_url(&self) -> String {
        match self {
            VideoSource::YouTube { id, start } => {
                let mut url = format!("https://www.youtube.com/watch?v={}", id);
                if let Some(start) = start {
                    url.push_str(&format!("&t={}s", start));
                }
                url
            }
            VideoSource::Vimeo { id } => format!("https://vimeo.com/{}", id),
            VideoSource::Dailymotion { id } => format!("https://www.dailymotion.com/video/{}", id),
            VideoSource::Odysee { path } => format!("https://odysee.com/{}", path),
            VideoSource::TwitchVideo { id } => format!("https://www.twitch.tv/videos/{}", id),
            VideoSource::TwitchChannel { name } => format!("https://www.twitch.tv/{}", name),
        }
    }
}

/// Path segments of a URL, excluding empty trailing segments
fn segments(url: &Url) -> Vec<String> {
    url.path_segments()
        .map(|s| s.map(str::to_string).filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

/// First path segment, if present
fn first_segment(url: &Url) -> Option<String> {
    segments(url).into_iter().next()
}

/// Path segment immediately following the named one
fn segment_after(url: &Url, name: &str) -> Option<String> {
    let segs = segments(url);
    let pos = segs.iter().position(|s| s == name)?;
    segs.get(pos + 1).filter(|s| !s.is_empty()).cloned()
}

/// First value of the named query parameter
fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// Start offset from a `t=` or `start=` query parameter
fn extract_start(url: &Url) -> Option<u32> {
    for param in ["t", "start"] {
        if let Some(value) = query_param(url, param) {
            let value = value.trim_end_matches('s');
            if let Ok(seconds) = value.parse::<u32>() {
                return Some(seconds);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_youtube_watch_url() {
        let source = VideoSource::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(source, VideoSource::YouTube { id: "dQw4w9WgXcQ".to_string(), start: None });
    }

    #[test]
    fn test_parse_youtube_short_url() {
        let source = VideoSource::parse("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(source, VideoSource::YouTube { id: "dQw4w9WgXcQ".to_string(), start: None });
    }

    #[test]
    fn test_parse_youtube_embed_url() {
        let source = VideoSource::parse("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap();
        assert_eq!(source.platform(), Platform::YouTube);
    }

    #[test]
    fn test_parse_youtube_shorts_url() {
        let source = VideoSource::parse("https://www.youtube.com/shorts/abc123").unwrap();
        assert_eq!(source, VideoSource::YouTube { id: "abc123".to_string(), start: None });
    }

    #[test]
    fn test_parse_youtube_with_timestamp() {
        let source =
            VideoSource::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap();
        assert_eq!(source, VideoSource::YouTube { id: "dQw4w9WgXcQ".to_string(), start: Some(42) });
    }

    #[test]
    fn test_parse_youtube_with_start_param() {
        let source =
            VideoSource::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ&start=100").unwrap();
        assert_eq!(
            source,
            VideoSource::YouTube { id: "dQw4w9WgXcQ".to_string(), start: Some(100) }
        );
    }

    #[test]
    fn test_parse_youtube_missing_id() {
        assert!(matches!(
            VideoSource::parse("https://www.youtube.com/watch"),
            Err(SourceError::MissingId)
        ));
    }

    #[test]
    fn test_parse_vimeo_url() {
        let source = VideoSource::parse("https://vimeo.com/123456789").unwrap();
        assert_eq!(source, VideoSource::Vimeo { id: "123456789".to_string() });
    }

    #[test]
    fn test_parse_vimeo_player_url() {
        let source = VideoSource::parse("https://player.vimeo.com/video/123456789").unwrap();
        assert_eq!(source, VideoSource::Vimeo { id: "123456789".to_string() });
    }

    #[test]
    fn test_parse_dailymotion_url() {
        let source = VideoSource::parse("https://www.dailymotion.com/video/x8abcd").unwrap();
        assert_eq!(source, VideoSource::Dailymotion { id: "x8abcd".to_string() });
    }

    #[test]
    fn test_parse_dailymotion_short_url() {
        let source = VideoSource::parse("https://dai.ly/x8abcd").unwrap();
        assert_eq!(source, VideoSource::Dailymotion { id: "x8abcd".to_string() });
    }

    #[test]
    fn test_parse_odysee_url() {
        let source = VideoSource::parse("https://odysee.com/@channel/some-video").unwrap();
        assert_eq!(source, VideoSource::Odysee { path: "@channel/some-video".to_string() });
    }

    #[test]
    fn test_parse_odysee_embed_url() {
        let source = VideoSource::parse("https://odysee.com/$/embed/@channel/some-video").unwrap();
        assert_eq!(source, VideoSource::Odysee { path: "@channel/some-video".to_string() });
    }

    #[test]
    fn test_parse_twitch_vod_url() {
        let source = VideoSource::parse("https://www.twitch.tv/videos/1234567").unwrap();
        assert_eq!(source, VideoSource::TwitchVideo { id: "1234567".to_string() });
    }

    #[test]
    fn test_parse_twitch_channel_url() {
        let source = VideoSource::parse("https://www.twitch.tv/somestreamer").unwrap();
        assert_eq!(source, VideoSource::TwitchChannel { name: "somestreamer".to_string() });
    }

    #[test]
    fn test_parse_twitch_player_url() {
        let source = VideoSource::parse("https://player.twitch.tv/?video=1234567").unwrap();
        assert_eq!(source, VideoSource::TwitchVideo { id: "1234567".to_string() });

        let source = VideoSource::parse("https://player.twitch.tv/?channel=somestreamer").unwrap();
        assert_eq!(source, VideoSource::TwitchChannel { name: "somestreamer".to_string() });
    }

    #[test]
    fn test_parse_invalid_url() {
        assert!(matches!(
            VideoSource::parse("not a url at all"),
            Err(SourceError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_parse_unsupported_host() {
        assert!(matches!(
            VideoSource::parse("https://example.com/video.mp4"),
            Err(SourceError::UnsupportedHost(_))
        ));
    }

    #[test]
    fn test_embed_url_youtube() {
        let source = VideoSource::YouTube { id: "dQw4w9WgXcQ".to_string(), start: None };
        assert_eq!(source.embed_url(), "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }

    #[test]
    fn test_embed_url_youtube_with_start() {
        let source = VideoSource::YouTube { id: "dQw4w9WgXcQ".to_string(), start: Some(42) };
        assert_eq!(source.embed_url(), "https://www.youtube.com/embed/dQw4w9WgXcQ?start=42");
    }

    #[test]
    fn test_embed_url_vimeo() {
        let source = VideoSource::Vimeo { id: "123456789".to_string() };
        assert_eq!(source.embed_url(), "https://player.vimeo.com/video/123456789");
    }

    #[test]
    fn test_embed_url_dailymotion() {
        let source = VideoSource::Dailymotion { id: "x8abcd".to_string() };
        assert_eq!(source.embed_url(), "https://www.dailymotion.com/embed/video/x8abcd");
    }

    #[test]
    fn test_embed_url_odysee() {
        let source = VideoSource::Odysee { path: "@channel/some-video".to_string() };
        assert_eq!(source.embed_url(), "https://odysee.com/$/embed/@channel/some-video");
    }

    #[test]
    fn test_embed_url_twitch() {
        let source = VideoSource::TwitchVideo { id: "1234567".to_string() };
        assert_eq!(source.embed_url(), "https://player.twitch.tv/?video=1234567");
    }

    #[test]
    fn test_watch_url_youtube_with_start() {
        let source = VideoSource::YouTube { id: "dQw4w9WgXcQ".to_string(), start: Some(42) };
        assert_eq!(source.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s");
    }

    #[test]
    fn test_watch_url_roundtrip() {
        let source = VideoSource::parse("https://vimeo.com/123456789").unwrap();
        let reparsed = VideoSource::parse(&source.watch_url()).unwrap();
        assert_eq!(source, reparsed);
    }

    #[test]
    fn test_source_serialization() {
        let source = VideoSource::YouTube { id: "dQw4w9WgXcQ".to_string(), start: None };
        let json = serde_json::to_string(&source).unwrap();
        assert!(json.contains("\"platform\":\"youtube\""));
        assert!(json.contains("dQw4w9WgXcQ"));

        let deserialized: VideoSource = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, source);
    }
}
