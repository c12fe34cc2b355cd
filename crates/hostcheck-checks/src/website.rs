//! Checks for the direct-bucket + static-website-hosting lab.

use hostcheck_core::{
    LabConfig, PS_S3_BUCKET_NAME, bucket_endpoint, validate_account_id, validate_bucket_name,
    validate_webhost_url, website_endpoint,
};
use hostcheck_http::{CheckError, Probe, expect};
use reqwest::StatusCode;

use crate::suite::{AMAZON_S3, SERVER_HEADER};

/// Marker embedded in the correct `index.html` fixture.
const INDEX_MARKER: &str = "ps-index";

/// Marker embedded in the correct `test.txt` fixture.
const TEXT_MARKER: &str = "ps-ccp-02";

/// Marker embedded in the error document and in `verify.txt`; the lab
/// fixtures share the literal.
const ERROR_MARKER: &str = "ps-ccp-03";

/// A path no lab fixture provides, used to exercise the error document.
const MISSING_PATH: &str = "/file-that-doesnt-exist";

/// The account ID must be a 12-digit numeric string.
pub(crate) fn verify_aws_account(config: &LabConfig) -> Result<(), CheckError> {
    validate_account_id(config.account_id.as_deref())?;
    Ok(())
}

/// Both fixture files must be publicly reachable on the bucket endpoint
/// with the right content.
pub(crate) async fn verify_uploaded_files(
    config: &LabConfig,
    probe: &Probe,
) -> Result<(), CheckError> {
    validate_bucket_name(PS_S3_BUCKET_NAME, config.bucket_name.as_deref())?;
    let host = bucket_endpoint(config.bucket_name.as_deref().unwrap_or_default());

    let obs = probe.get(&host, "/index.html").await?;
    expect::status(
        &obs,
        StatusCode::OK,
        "permissions should be set to make the file available to the public",
    )?;
    expect::header_eq(
        &obs,
        SERVER_HEADER,
        AMAZON_S3,
        "the file should be served from Amazon S3",
    )?;
    expect::is_html(
        &obs,
        "the file should be an HTML file; verify the correct file was uploaded",
    )?;
    expect::body_contains(
        &obs,
        INDEX_MARKER,
        "the file should contain the correct content; make sure the correct index.html was uploaded",
    )?;

    let obs = probe.get(&host, "/test.txt").await?;
    expect::status(
        &obs,
        StatusCode::OK,
        "permissions should be set to make the file available to the public",
    )?;
    expect::header_eq(
        &obs,
        SERVER_HEADER,
        AMAZON_S3,
        "the file should be served from Amazon S3",
    )?;
    expect::is_text(
        &obs,
        "the file should be a plain-text file; verify the correct file was uploaded",
    )?;
    expect::body_contains(
        &obs,
        TEXT_MARKER,
        "the file should contain the correct content; make sure the correct test.txt was uploaded",
    )?;

    Ok(())
}

/// The website endpoint must serve the error document on unknown paths and
/// the index document at the root.
pub(crate) async fn verify_static_hosting(
    config: &LabConfig,
    probe: &Probe,
) -> Result<(), CheckError> {
    validate_webhost_url(config.webhost_url.as_deref())?;
    let host = website_endpoint(config.webhost_url.as_deref());

    let obs = probe.get(&host, MISSING_PATH).await?;
    expect::status(
        &obs,
        StatusCode::NOT_FOUND,
        "make sure you did not upload any additional files into the bucket",
    )?;
    expect::header_eq(
        &obs,
        SERVER_HEADER,
        AMAZON_S3,
        "the file should be served from Amazon S3",
    )?;
    expect::is_html(
        &obs,
        "make sure the error document is set to error.html in the static website hosting settings",
    )?;
    expect::body_contains(
        &obs,
        ERROR_MARKER,
        "make sure the error document is set to error.html in the static website hosting settings",
    )?;

    let obs = probe.get(&host, "/").await?;
    expect::status(
        &obs,
        StatusCode::OK,
        "permissions should make index.html available and the index document should be set to index.html",
    )?;
    expect::header_eq(
        &obs,
        SERVER_HEADER,
        AMAZON_S3,
        "the file should be served from Amazon S3",
    )?;
    expect::is_html(
        &obs,
        "the file should be an HTML file; verify the correct file was uploaded",
    )?;
    expect::body_contains(
        &obs,
        INDEX_MARKER,
        "the file should contain the correct content; make sure the correct index.html was uploaded",
    )?;

    Ok(())
}

/// The full web application must be deployed and publicly readable.
///
/// Distinguishes "bucket policy applied" from "website feature configured":
/// `verify.txt` proves the policy covers every object, the root proves the
/// index document still serves.
pub(crate) async fn verify_web_application(
    config: &LabConfig,
    probe: &Probe,
) -> Result<(), CheckError> {
    validate_webhost_url(config.webhost_url.as_deref())?;
    let host = website_endpoint(config.webhost_url.as_deref());

    let obs = probe.get(&host, "/verify.txt").await?;
    expect::status(
        &obs,
        StatusCode::OK,
        "make sure you added the bucket policy to make all files publicly readable",
    )?;
    expect::header_eq(
        &obs,
        SERVER_HEADER,
        AMAZON_S3,
        "the file should be served from Amazon S3",
    )?;
    expect::is_text(
        &obs,
        "the file should be a plain-text file; verify the correct file was uploaded",
    )?;
    expect::body_contains(
        &obs,
        ERROR_MARKER,
        "the file should contain the verification key; make sure the correct file was uploaded",
    )?;

    let obs = probe.get(&host, "/").await?;
    expect::status(
        &obs,
        StatusCode::OK,
        "make sure you added the bucket policy to make all files publicly readable and uploaded the whole application",
    )?;
    expect::header_eq(
        &obs,
        SERVER_HEADER,
        AMAZON_S3,
        "the file should be served from Amazon S3",
    )?;
    expect::is_html(
        &obs,
        "the file should be an HTML file; verify the correct file was uploaded",
    )?;
    expect::body_contains(
        &obs,
        INDEX_MARKER,
        "the file should contain the correct key; make sure the correct file was uploaded",
    )?;

    Ok(())
}
