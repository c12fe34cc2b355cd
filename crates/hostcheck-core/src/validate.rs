//! Shape validation for resolved configuration values.
//!
//! Pure predicates over the values in a `LabConfig`. Each failure carries
//! a reason precise enough for the learner to fix the value without
//! reading the harness source. Checks call these themselves rather than
//! relying on an earlier check having done so, so a single bad value
//! fails every check that depends on it and nothing else.

use crate::config::{PS_AWS_ACCOUNT_ID, PS_CF_DOMAIN_NAME, PS_S3_WEBHOST_URL};
use crate::error::ConfigError;

/// Required length of an AWS account ID.
const ACCOUNT_ID_LEN: usize = 12;

/// Minimum length of a usable bucket name.
const MIN_BUCKET_NAME_LEN: usize = 4;

/// Required suffix of a generated CloudFront domain name.
const CF_DOMAIN_SUFFIX: &str = ".cloudfront.net";

/// Validate the learner's AWS account ID.
///
/// Must be present, exactly 12 characters, all ASCII digits.
///
/// # Errors
///
/// Returns [`ConfigError`] naming `PS_AWS_ACCOUNT_ID` and the violated rule.
pub fn validate_account_id(value: Option<&str>) -> Result<(), ConfigError> {
    let Some(id) = value else {
        return Err(ConfigError::Missing {
            var: PS_AWS_ACCOUNT_ID,
            hint: "set it to your 12-digit AWS account ID",
        });
    };
    if id.len() != ACCOUNT_ID_LEN {
        return Err(ConfigError::Invalid {
            var: PS_AWS_ACCOUNT_ID,
            reason: format!("account ID should be exactly {ACCOUNT_ID_LEN} characters long"),
        });
    }
    if !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::Invalid {
            var: PS_AWS_ACCOUNT_ID,
            reason: "account ID should contain only numbers".to_owned(),
        });
    }
    Ok(())
}

/// Validate a bucket name (either lab scenario).
///
/// Must be present, longer than 3 characters, and must not contain a
/// period: virtual-hosted-style addressing embeds the bucket name as a
/// TLS subdomain, which breaks on dotted names.
///
/// # Errors
///
/// Returns [`ConfigError`] naming `var` and the violated rule.
pub fn validate_bucket_name(var: &'static str, value: Option<&str>) -> Result<(), ConfigError> {
    let Some(name) = value else {
        return Err(ConfigError::Missing {
            var,
            hint: "set it to the name of the bucket you created",
        });
    };
    if name.len() < MIN_BUCKET_NAME_LEN {
        return Err(ConfigError::Invalid {
            var,
            reason: "bucket name must be entered by the user (more than 3 characters)".to_owned(),
        });
    }
    if name.contains('.') {
        return Err(ConfigError::Invalid {
            var,
            reason: "bucket name should not contain any periods".to_owned(),
        });
    }
    Ok(())
}

/// Validate the static-website-hosting endpoint URL.
///
/// Must be present and start with `http` — the learner is expected to
/// paste the full endpoint URL from the static website hosting panel.
///
/// # Errors
///
/// Returns [`ConfigError`] naming `PS_S3_WEBHOST_URL` and the violated rule.
pub fn validate_webhost_url(value: Option<&str>) -> Result<(), ConfigError> {
    let Some(url) = value else {
        return Err(ConfigError::Missing {
            var: PS_S3_WEBHOST_URL,
            hint: "set it to the full URL from the static website hosting configuration",
        });
    };
    if !url.starts_with("http") {
        return Err(ConfigError::Invalid {
            var: PS_S3_WEBHOST_URL,
            reason: "enter the full URL from the static website hosting configuration".to_owned(),
        });
    }
    Ok(())
}

/// Validate the generated CloudFront domain name.
///
/// Must be present and end with `.cloudfront.net`.
///
/// # Errors
///
/// Returns [`ConfigError`] naming `PS_CF_DOMAIN_NAME` and the violated rule.
pub fn validate_cf_domain(value: Option<&str>) -> Result<(), ConfigError> {
    let Some(domain) = value else {
        return Err(ConfigError::Missing {
            var: PS_CF_DOMAIN_NAME,
            hint: "set it to the generated CloudFront domain name",
        });
    };
    if !domain.ends_with(CF_DOMAIN_SUFFIX) {
        return Err(ConfigError::Invalid {
            var: PS_CF_DOMAIN_NAME,
            reason: format!(
                "enter the generated CloudFront domain name, which should end with {CF_DOMAIN_SUFFIX}"
            ),
        });
    }
    Ok(())
}
