//! Expectations over a captured [`Observation`].
//!
//! Each helper checks one property and, on mismatch, produces a
//! [`CheckError::Mismatch`] pairing the caller's diagnostic (what the
//! learner most likely misconfigured) with what the response actually
//! contained.

use reqwest::StatusCode;

use crate::error::CheckError;
use crate::probe::Observation;

/// The response status must equal `expected`.
///
/// # Errors
///
/// Returns [`CheckError::Mismatch`] with `diagnostic` on any other status.
pub fn status(obs: &Observation, expected: StatusCode, diagnostic: &str) -> Result<(), CheckError> {
    if obs.status() == expected {
        return Ok(());
    }
    Err(CheckError::mismatch(
        obs.url(),
        diagnostic,
        format!("expected status {expected}, got {}", obs.status()),
    ))
}

/// The header `name` must be present with exactly the value `expected`.
///
/// # Errors
///
/// Returns [`CheckError::Mismatch`] with `diagnostic` when the header is
/// absent or differs.
pub fn header_eq(
    obs: &Observation,
    name: &str,
    expected: &str,
    diagnostic: &str,
) -> Result<(), CheckError> {
    match obs.header(name) {
        Some(value) if value == expected => Ok(()),
        Some(value) => Err(CheckError::mismatch(
            obs.url(),
            diagnostic,
            format!("expected header {name}: {expected}, got {value}"),
        )),
        None => Err(CheckError::mismatch(
            obs.url(),
            diagnostic,
            format!("header {name} is missing"),
        )),
    }
}

/// The header `name` must be present; its value is not inspected.
///
/// # Errors
///
/// Returns [`CheckError::Mismatch`] with `diagnostic` when absent.
pub fn header_present(obs: &Observation, name: &str, diagnostic: &str) -> Result<(), CheckError> {
    if obs.header(name).is_some() {
        return Ok(());
    }
    Err(CheckError::mismatch(
        obs.url(),
        diagnostic,
        format!("header {name} is missing"),
    ))
}

/// The header `name` must be present and end with `suffix`.
///
/// # Errors
///
/// Returns [`CheckError::Mismatch`] with `diagnostic` when absent or when
/// the value has a different ending.
pub fn header_suffix(
    obs: &Observation,
    name: &str,
    suffix: &str,
    diagnostic: &str,
) -> Result<(), CheckError> {
    match obs.header(name) {
        Some(value) if value.ends_with(suffix) => Ok(()),
        Some(value) => Err(CheckError::mismatch(
            obs.url(),
            diagnostic,
            format!("expected header {name} to end with {suffix}, got {value}"),
        )),
        None => Err(CheckError::mismatch(
            obs.url(),
            diagnostic,
            format!("header {name} is missing"),
        )),
    }
}

/// The response must declare an HTML content type.
///
/// # Errors
///
/// Returns [`CheckError::Mismatch`] with `diagnostic` otherwise.
pub fn is_html(obs: &Observation, diagnostic: &str) -> Result<(), CheckError> {
    content_type(obs, "text/html", diagnostic)
}

/// The response must declare a plain-text content type.
///
/// # Errors
///
/// Returns [`CheckError::Mismatch`] with `diagnostic` otherwise.
pub fn is_text(obs: &Observation, diagnostic: &str) -> Result<(), CheckError> {
    content_type(obs, "text/plain", diagnostic)
}

/// The body must contain the literal `marker`.
///
/// Markers prove that the correct file was uploaded, not merely a file
/// with the correct name.
///
/// # Errors
///
/// Returns [`CheckError::Mismatch`] with `diagnostic` when absent.
pub fn body_contains(obs: &Observation, marker: &str, diagnostic: &str) -> Result<(), CheckError> {
    if obs.body().contains(marker) {
        return Ok(());
    }
    Err(CheckError::mismatch(
        obs.url(),
        diagnostic,
        format!("body does not contain {marker:?}"),
    ))
}

fn content_type(obs: &Observation, expected: &str, diagnostic: &str) -> Result<(), CheckError> {
    match obs.header("content-type") {
        Some(value) if value.starts_with(expected) => Ok(()),
        Some(value) => Err(CheckError::mismatch(
            obs.url(),
            diagnostic,
            format!("expected content type {expected}, got {value}"),
        )),
        None => Err(CheckError::mismatch(
            obs.url(),
            diagnostic,
            "content-type header is missing".to_owned(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderMap, HeaderValue};

    use super::*;

    fn observation(status: u16, headers: &[(&'static str, &str)], body: &str) -> Observation {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        Observation::new(
            "https://bucket.s3.amazonaws.com/index.html",
            StatusCode::from_u16(status).unwrap(),
            map,
            body,
        )
    }

    #[test]
    fn test_should_pass_on_matching_status() {
        let obs = observation(200, &[], "");
        assert!(status(&obs, StatusCode::OK, "should be public").is_ok());
    }

    #[test]
    fn test_should_report_diagnostic_on_status_mismatch() {
        let obs = observation(403, &[], "");
        let err = status(&obs, StatusCode::OK, "permissions should allow public reads")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("permissions should allow public reads"));
        assert!(msg.contains("403"));
    }

    #[test]
    fn test_should_match_header_case_insensitively() {
        let obs = observation(200, &[("Server", "AmazonS3")], "");
        assert!(header_eq(&obs, "server", "AmazonS3", "served from S3").is_ok());
    }

    #[test]
    fn test_should_report_missing_header() {
        let obs = observation(200, &[], "");
        let err = header_present(&obs, "x-amz-cf-id", "proxied by CloudFront").unwrap_err();
        assert!(err.to_string().contains("x-amz-cf-id"));
    }

    #[test]
    fn test_should_check_header_suffix() {
        let obs = observation(200, &[("via", "1.1 abc.cloudfront.net (CloudFront)")], "");
        assert!(header_suffix(&obs, "via", "(CloudFront)", "proxied by CloudFront").is_ok());

        let obs = observation(200, &[("via", "1.1 somewhere-else")], "");
        assert!(header_suffix(&obs, "via", "(CloudFront)", "proxied by CloudFront").is_err());
    }

    #[test]
    fn test_should_accept_content_type_with_charset_parameter() {
        let obs = observation(200, &[("content-type", "text/html; charset=utf-8")], "");
        assert!(is_html(&obs, "should be an HTML file").is_ok());
        assert!(is_text(&obs, "should be a text file").is_err());
    }

    #[test]
    fn test_should_find_marker_in_body() {
        let obs = observation(200, &[], "<html>ps-index</html>");
        assert!(body_contains(&obs, "ps-index", "correct file uploaded").is_ok());
        assert!(body_contains(&obs, "ps-index-2", "correct file uploaded").is_err());
    }
}
