//! Target endpoint construction.
//!
//! Pure, total functions from resolved configuration to URL strings. They
//! never perform I/O and never fail: an empty or nonsense input still
//! yields a syntactically-formed URL, and the check that probes it reports
//! the semantic failure with a useful message.

/// Harmless fallback endpoint used when the website host is not configured.
///
/// Probing it connects and returns an unexpected body, which fails the
/// dependent check with a clear message instead of erroring out on a
/// malformed request target.
pub const PLACEHOLDER_ENDPOINT: &str = "http://example.com";

/// Shortest website-host value considered configured at all.
const MIN_WEBHOST_LEN: usize = 5;

/// Direct (virtual-hosted-style) endpoint of a bucket.
///
/// Only meaningful for bucket names without periods; the bucket-name rule
/// enforces that separately.
#[must_use]
pub fn bucket_endpoint(bucket: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com")
}

/// Static-website-hosting endpoint, from the learner-supplied URL.
///
/// Strips any trailing slash so paths can be appended verbatim. Falls back
/// to [`PLACEHOLDER_ENDPOINT`] when the value is absent or shorter than 5
/// characters.
#[must_use]
pub fn website_endpoint(webhost: Option<&str>) -> String {
    match webhost {
        Some(url) if url.len() >= MIN_WEBHOST_LEN => url.trim_end_matches('/').to_owned(),
        _ => PLACEHOLDER_ENDPOINT.to_owned(),
    }
}

/// HTTPS endpoint of a CloudFront distribution.
#[must_use]
pub fn cdn_endpoint(domain: &str) -> String {
    format!("https://{domain}")
}
