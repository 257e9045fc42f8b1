//! Trusted embed domain allow-list
//!
//! The allow-list is loaded once at startup and immutable thereafter; the
//! classifier only ever reads it. Extending it widens acceptance, narrowing
//! it restricts.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Stock allow-list of video hosting domains
pub const DEFAULT_TRUSTED_DOMAINS: [&str; 8] = [
    "youtube.com",
    "youtube-nocookie.com",
    "vimeo.com",
    "player.vimeo.com",
    "dailymotion.com",
    "odysee.com",
    "lbry.tv",
    "player.twitch.tv",
];

/// Set of domains whose embeds are considered safe to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedDomains {
    domains: HashSet<String>,
}

impl TrustedDomains {
    /// Create an allow-list from an explicit set of domains
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(|d| d.into().to_ascii_lowercase()).collect(),
        }
    }

    /// Check whether a hostname is trusted.
    ///
    /// A hostname matches if it equals an allow-listed domain exactly, or is
    /// a subdomain of one (suffix match on `.domain`).
    pub fn is_trusted(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        self.domains
            .iter()
            .any(|domain| host == *domain || host.ends_with(&format!(".{}", domain)))
    }

    /// Check whether a domain is on the list verbatim
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(&domain.to_ascii_lowercase())
    }

    /// Iterate over the allow-listed domains
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    /// Number of allow-listed domains
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Check if the allow-list is empty
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for TrustedDomains {
    fn default() -> Self {
        Self::new(DEFAULT_TRUSTED_DOMAINS)
    }
}
