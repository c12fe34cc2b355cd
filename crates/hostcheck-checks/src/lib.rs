//! Acceptance checks for the static-site hosting labs.
//!
//! Two hosting modes exist, each with a fixed, ordered list of named
//! checks:
//!
//! - [`HostingMode::Website`] — files served straight from a public
//!   bucket, plus the static-website-hosting endpoint.
//! - [`HostingMode::CloudFront`] — a private bucket fronted by a
//!   CloudFront distribution.
//!
//! Checks are independent: each validates its own configuration
//! preconditions and a failure never gates a later check. The runner (CLI
//! or cargo test) executes them in declared order and reports every
//! outcome.

mod cloudfront;
mod report;
mod suite;
mod website;

pub use report::{CheckOutcome, SuiteReport};
pub use suite::{CheckId, HostingMode, run_check, run_suite};
