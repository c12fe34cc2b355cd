//! Checks for the CloudFront-fronted private-bucket lab.

use hostcheck_core::{
    LabConfig, PS_S3_CF_BUCKET_NAME, bucket_endpoint, cdn_endpoint, validate_bucket_name,
    validate_cf_domain,
};
use hostcheck_http::{CheckError, Probe, expect};
use reqwest::StatusCode;

use crate::suite::{AMAZON_S3, SERVER_HEADER};

/// Marker embedded in the correct CloudFront-lab `index.html` fixture.
const CDN_INDEX_MARKER: &str = "ps-index-2";

/// Suffix CloudFront appends to the `via` header of proxied responses.
const VIA_SUFFIX: &str = "(CloudFront)";

/// CloudFront request-id header, present on proxied responses.
const CF_ID_HEADER: &str = "x-amz-cf-id";

/// CloudFront point-of-presence header, present on proxied responses.
const CF_POP_HEADER: &str = "x-amz-cf-pop";

/// CloudFront cache-status header, present on proxied responses.
const CACHE_HEADER: &str = "x-cache";

/// The CloudFront-lab bucket name must have a usable shape.
pub(crate) fn verify_bucket_name(config: &LabConfig) -> Result<(), CheckError> {
    validate_bucket_name(PS_S3_CF_BUCKET_NAME, config.cf_bucket_name.as_deref())?;
    Ok(())
}

/// Direct bucket access must be denied, forcing traffic through the
/// distribution.
pub(crate) async fn verify_no_public_files(
    config: &LabConfig,
    probe: &Probe,
) -> Result<(), CheckError> {
    let host = bucket_endpoint(config.cf_bucket_name.as_deref().unwrap_or_default());

    let obs = probe.get(&host, "/index.html").await?;
    expect::status(
        &obs,
        StatusCode::FORBIDDEN,
        "make sure you did not make index.html publicly readable or configure static website hosting",
    )?;
    expect::header_eq(
        &obs,
        SERVER_HEADER,
        AMAZON_S3,
        "the file should be served from Amazon S3",
    )?;

    Ok(())
}

/// The domain must be the generated one, ending in `.cloudfront.net`.
pub(crate) fn verify_domain_name(config: &LabConfig) -> Result<(), CheckError> {
    validate_bucket_name(PS_S3_CF_BUCKET_NAME, config.cf_bucket_name.as_deref())?;
    validate_cf_domain(config.cf_domain_name.as_deref())?;
    Ok(())
}

/// The distribution must serve the correct content from the S3 origin.
pub(crate) async fn verify_cloudfront_deployment(
    config: &LabConfig,
    probe: &Probe,
) -> Result<(), CheckError> {
    let host = cdn_endpoint(config.cf_domain_name.as_deref().unwrap_or_default());

    let obs = probe.get(&host, "/").await?;
    expect::status(
        &obs,
        StatusCode::OK,
        "make sure you uploaded all of the correct files into the S3 bucket and configured the distribution properly",
    )?;
    expect::body_contains(
        &obs,
        CDN_INDEX_MARKER,
        "the file should contain the correct key; make sure the correct file was uploaded",
    )?;
    expect::header_eq(
        &obs,
        SERVER_HEADER,
        AMAZON_S3,
        "the file should be served from the Amazon S3 origin",
    )?;
    expect::header_suffix(
        &obs,
        "via",
        VIA_SUFFIX,
        "the file should be proxied by Amazon CloudFront",
    )?;
    expect::header_present(
        &obs,
        CF_ID_HEADER,
        "the file should be proxied by Amazon CloudFront",
    )?;
    expect::header_present(
        &obs,
        CF_POP_HEADER,
        "the file should be proxied by Amazon CloudFront",
    )?;
    expect::header_present(
        &obs,
        CACHE_HEADER,
        "the file should be proxied by Amazon CloudFront",
    )?;

    Ok(())
}
