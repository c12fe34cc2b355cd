//! Resolution of learner-supplied environment values.
//!
//! All configuration is driven by environment variables, matching the lab
//! instructions handed to the learner. Values are read exactly once, at
//! suite start, into an immutable [`LabConfig`] that every check borrows.
//! A missing variable resolves to `None` rather than an error so that the
//! miss surfaces later as a single failing check with an instructive
//! message instead of a crash that hides the remaining checks.

/// Environment variable holding the learner's 12-digit AWS account ID.
pub const PS_AWS_ACCOUNT_ID: &str = "PS_AWS_ACCOUNT_ID";

/// Environment variable holding the bucket name for the direct-access lab.
pub const PS_S3_BUCKET_NAME: &str = "PS_S3_BUCKET_NAME";

/// Environment variable holding the full static-website-hosting endpoint URL.
pub const PS_S3_WEBHOST_URL: &str = "PS_S3_WEBHOST_URL";

/// Environment variable holding the bucket name for the CloudFront lab.
pub const PS_S3_CF_BUCKET_NAME: &str = "PS_S3_CF_BUCKET_NAME";

/// Environment variable holding the generated CloudFront domain name.
pub const PS_CF_DOMAIN_NAME: &str = "PS_CF_DOMAIN_NAME";

/// Resolved lab configuration, read once from the environment.
///
/// Each field is `None` when the corresponding variable is unset. Values
/// are sanitized (see [`LabConfig::from_env`]) but not validated; the
/// shape rules live in the `validate` module and are applied by each
/// check so that one bad value fails one check, not the whole suite.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabConfig {
    /// Learner's AWS account ID (`PS_AWS_ACCOUNT_ID`).
    pub account_id: Option<String>,
    /// Bucket name for the direct-access lab (`PS_S3_BUCKET_NAME`).
    pub bucket_name: Option<String>,
    /// Static-website-hosting endpoint URL (`PS_S3_WEBHOST_URL`).
    pub webhost_url: Option<String>,
    /// Bucket name for the CloudFront lab (`PS_S3_CF_BUCKET_NAME`).
    pub cf_bucket_name: Option<String>,
    /// Generated CloudFront domain name (`PS_CF_DOMAIN_NAME`).
    pub cf_domain_name: Option<String>,
}

impl LabConfig {
    /// Load the lab configuration from environment variables.
    ///
    /// Values longer than 2 characters are trimmed of surrounding
    /// whitespace; shorter values pass through untouched so a too-short
    /// value stays distinguishable from an absent one in later checks.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            account_id: resolve(PS_AWS_ACCOUNT_ID),
            bucket_name: resolve(PS_S3_BUCKET_NAME),
            webhost_url: resolve(PS_S3_WEBHOST_URL),
            cf_bucket_name: resolve(PS_S3_CF_BUCKET_NAME),
            cf_domain_name: resolve(PS_CF_DOMAIN_NAME),
        }
    }
}

/// Read one variable, applying the sanitize rule.
fn resolve(var: &str) -> Option<String> {
    std::env::var(var).ok().map(sanitize)
}

/// Trim surrounding whitespace from values longer than 2 characters.
fn sanitize(raw: String) -> String {
    if raw.len() > 2 {
        raw.trim().to_owned()
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_trim_values_longer_than_two_chars() {
        assert_eq!(sanitize("  my-bucket \n".to_owned()), "my-bucket");
        assert_eq!(sanitize("abc".to_owned()), "abc");
    }

    #[test]
    fn test_should_pass_short_values_through_untrimmed() {
        assert_eq!(sanitize(" a".to_owned()), " a");
        assert_eq!(sanitize("".to_owned()), "");
    }

    #[test]
    fn test_should_default_to_unset_fields() {
        let config = LabConfig::default();
        assert!(config.account_id.is_none());
        assert!(config.webhost_url.is_none());
    }
}
