//! Core building blocks for the hostcheck acceptance harness.
//!
//! This crate provides the pure, I/O-free half of the harness: one-shot
//! resolution of learner-supplied environment values into a [`LabConfig`],
//! shape validation for each value, and construction of the target endpoint
//! URLs the checks probe. Nothing here performs network calls; semantic
//! failures are reported by the checks that consume these values.

mod config;
mod endpoints;
mod error;
mod validate;

pub use config::{
    LabConfig, PS_AWS_ACCOUNT_ID, PS_CF_DOMAIN_NAME, PS_S3_BUCKET_NAME, PS_S3_CF_BUCKET_NAME,
    PS_S3_WEBHOST_URL,
};
pub use endpoints::{PLACEHOLDER_ENDPOINT, bucket_endpoint, cdn_endpoint, website_endpoint};
pub use error::ConfigError;
pub use validate::{
    validate_account_id, validate_bucket_name, validate_cf_domain, validate_webhost_url,
};
