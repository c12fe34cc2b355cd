//! Suite definitions and check dispatch.

use hostcheck_core::LabConfig;
use hostcheck_http::{CheckError, Probe};

use crate::report::{CheckOutcome, SuiteReport};
use crate::{cloudfront, website};

/// Header every S3-served response carries.
pub(crate) const SERVER_HEADER: &str = "server";

/// Value of the `server` header for responses originating from S3.
pub(crate) const AMAZON_S3: &str = "AmazonS3";

/// Which hosting lab is being graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostingMode {
    /// Public bucket with static website hosting enabled.
    Website,
    /// Private bucket fronted by a CloudFront distribution.
    CloudFront,
}

impl HostingMode {
    /// Suite title shown in reports.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Website => "Deploy a static site on Amazon S3",
            Self::CloudFront => "Deploy a static site to Amazon CloudFront",
        }
    }

    /// The mode's checks, in execution order.
    #[must_use]
    pub fn checks(self) -> &'static [CheckId] {
        match self {
            Self::Website => &[
                CheckId::AwsAccount,
                CheckId::UploadedFiles,
                CheckId::StaticHosting,
                CheckId::WebApplication,
            ],
            Self::CloudFront => &[
                CheckId::CfBucketName,
                CheckId::NoPublicFiles,
                CheckId::CfDomainName,
                CheckId::CloudFrontDeployment,
            ],
        }
    }
}

/// Identifier of one named check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    /// Account-ID shape check.
    AwsAccount,
    /// Bucket files publicly reachable with the right content.
    UploadedFiles,
    /// Website endpoint serves the index and error documents.
    StaticHosting,
    /// Full application deployed behind the website endpoint.
    WebApplication,
    /// Bucket-name shape check (CloudFront lab).
    CfBucketName,
    /// Direct bucket access must be denied.
    NoPublicFiles,
    /// Domain carries the generated CloudFront suffix.
    CfDomainName,
    /// Content delivered through the distribution.
    CloudFrontDeployment,
}

impl CheckId {
    /// Stable tag of the check, as used in lab instructions and reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AwsAccount => "verify-aws-account",
            Self::UploadedFiles => "verify-uploaded-files",
            Self::StaticHosting => "verify-static-hosting",
            Self::WebApplication => "verify-web-application",
            Self::CfBucketName => "verify-s3-cf-bucket-name",
            Self::NoPublicFiles => "verify-no-public-files",
            Self::CfDomainName => "verify-cf-domain-name",
            Self::CloudFrontDeployment => "verify-cloudfront-deployment",
        }
    }

    /// One-line description of what passing means.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::AwsAccount => "should be a valid AWS account id",
            Self::UploadedFiles => "uploaded files should be publicly accessible",
            Self::StaticHosting => "error page should appear when navigating to a page that does not exist",
            Self::WebApplication => "web application should be deployed in the user bucket",
            Self::CfBucketName => "should be a proper bucket name",
            Self::NoPublicFiles => "the index file should not be publicly available",
            Self::CfDomainName => "should be a generated CloudFront domain name",
            Self::CloudFrontDeployment => "content should be available through CloudFront",
        }
    }
}

/// Run a single check against the resolved configuration.
///
/// # Errors
///
/// Returns the [`CheckError`] describing the first violated expectation.
pub async fn run_check(
    id: CheckId,
    config: &LabConfig,
    probe: &Probe,
) -> Result<(), CheckError> {
    match id {
        CheckId::AwsAccount => website::verify_aws_account(config),
        CheckId::UploadedFiles => website::verify_uploaded_files(config, probe).await,
        CheckId::StaticHosting => website::verify_static_hosting(config, probe).await,
        CheckId::WebApplication => website::verify_web_application(config, probe).await,
        CheckId::CfBucketName => cloudfront::verify_bucket_name(config),
        CheckId::NoPublicFiles => cloudfront::verify_no_public_files(config, probe).await,
        CheckId::CfDomainName => cloudfront::verify_domain_name(config),
        CheckId::CloudFrontDeployment => {
            cloudfront::verify_cloudfront_deployment(config, probe).await
        }
    }
}

/// Run every check of `mode` in declared order, never skipping on failure.
pub async fn run_suite(mode: HostingMode, config: &LabConfig, probe: &Probe) -> SuiteReport {
    let mut outcomes = Vec::with_capacity(mode.checks().len());
    for &id in mode.checks() {
        let result = run_check(id, config, probe).await;
        match &result {
            Ok(()) => tracing::info!(check = id.name(), "passed"),
            Err(err) => tracing::warn!(check = id.name(), %err, "failed"),
        }
        outcomes.push(CheckOutcome::new(id, result));
    }
    SuiteReport::new(mode, outcomes)
}

#[cfg(test)]
mod tests {
    use hostcheck_core::{LabConfig, PS_CF_DOMAIN_NAME};

    use super::*;

    fn cf_config() -> LabConfig {
        LabConfig {
            cf_bucket_name: Some("my-cf-bucket".to_owned()),
            cf_domain_name: Some("d111111abcdef8.cloudfront.net".to_owned()),
            ..LabConfig::default()
        }
    }

    #[test]
    fn test_should_order_website_checks_as_declared() {
        let names: Vec<_> = HostingMode::Website
            .checks()
            .iter()
            .map(|id| id.name())
            .collect();
        assert_eq!(
            names,
            [
                "verify-aws-account",
                "verify-uploaded-files",
                "verify-static-hosting",
                "verify-web-application",
            ]
        );
    }

    #[test]
    fn test_should_order_cloudfront_checks_as_declared() {
        let names: Vec<_> = HostingMode::CloudFront
            .checks()
            .iter()
            .map(|id| id.name())
            .collect();
        assert_eq!(
            names,
            [
                "verify-s3-cf-bucket-name",
                "verify-no-public-files",
                "verify-cf-domain-name",
                "verify-cloudfront-deployment",
            ]
        );
    }

    #[tokio::test]
    async fn test_should_fail_account_check_on_missing_id() {
        let config = LabConfig::default();
        let err = run_check(CheckId::AwsAccount, &config, &Probe::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("PS_AWS_ACCOUNT_ID"));
    }

    #[tokio::test]
    async fn test_should_fail_domain_check_with_suffix_in_message() {
        let mut config = cf_config();
        config.cf_domain_name = Some("d111111abcdef8.example.net".to_owned());
        let err = run_check(CheckId::CfDomainName, &config, &Probe::new())
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(PS_CF_DOMAIN_NAME));
        assert!(msg.contains(".cloudfront.net"));
    }

    #[tokio::test]
    async fn test_should_pass_domain_check_on_generated_domain() {
        let config = cf_config();
        assert!(
            run_check(CheckId::CfDomainName, &config, &Probe::new())
                .await
                .is_ok()
        );
    }
}
