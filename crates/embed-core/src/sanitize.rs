//! The embed accept/reject gate
//!
//! Sanitization never rewrites markup: an embed code is either returned to
//! the caller byte-for-byte or rejected outright, so the consuming player
//! always has a safe "no video available" fallback instead of a crash.

use crate::classify::{parse_embed_code, EmbedError, EmbedInfo, Result};
use crate::domains::TrustedDomains;
use url::Url;

/// Classifier deciding whether embed codes are safe to render
///
/// Holds the trusted-domain allow-list, which is loaded once at startup and
/// immutable thereafter. All operations are synchronous and pure.
#[derive(Debug, Clone, Default)]
pub struct EmbedClassifier {
    trusted: TrustedDomains,
}

impl EmbedClassifier {
    /// Create a classifier with an explicit allow-list
    pub fn new(trusted: TrustedDomains) -> Self {
        Self { trusted }
    }

    /// The allow-list this classifier gates against
    pub fn trusted_domains(&self) -> &TrustedDomains {
        &self.trusted
    }

    /// Full classification: parse the embed and gate its source hostname.
    ///
    /// This is the shared pipeline behind sanitization, render routing and
    /// admin validation; each caller collapses the error taxonomy to its own
    /// boundary shape.
    pub(crate) fn check(&self, content: &str) -> Result<EmbedInfo> {
        if content.trim().is_empty() {
            return Err(EmbedError::EmptyInput);
        }
        let info = parse_embed_code(content).ok_or(EmbedError::NotAnEmbed)?;
        let src = info.src.as_deref().ok_or(EmbedError::NotAnEmbed)?;
        let url = Url::parse(src).map_err(|_| EmbedError::MalformedSource(src.to_string()))?;
        let host = url
            .host_str()
            .ok_or_else(|| EmbedError::MalformedSource(src.to_string()))?;
        if !self.trusted.is_trusted(host) {
            return Err(EmbedError::UntrustedDomain(host.to_string()));
        }
        Ok(info)
    }

    /// Gate an embed code against the trusted allow-list.
    ///
    /// Returns the original input unmodified when the first iframe's source
    /// hostname is allow-listed, `None` otherwise. No HTML rewriting is
    /// performed beyond this accept/reject decision.
    pub fn sanitize_embed_code<'a>(&self, content: &'a str) -> Option<&'a str> {
        match self.check(content) {
            Ok(_) => Some(content),
            Err(e) => {
                tracing::debug!("rejected embed code: {}", e);
                None
            }
        }
    }
}
