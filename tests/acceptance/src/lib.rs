//! Live acceptance tests for the static-site hosting labs.
//!
//! These tests issue real HTTP requests against the learner's deployed
//! resources, so they need the `PS_*` environment variables set and are
//! marked `#[ignore]` to stay out of normal `cargo test` runs.
//!
//! Run them with:
//! ```text
//! cargo test -p hostcheck-acceptance -- --ignored
//! ```
//!
//! One test per named check, declared in suite order. libtest keeps
//! failures isolated per test and sets the process exit code, so a broken
//! bucket policy fails its own check without hiding the rest.

use std::sync::Once;

use hostcheck_checks::{CheckId, run_check};
use hostcheck_core::LabConfig;
use hostcheck_http::Probe;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Run one named check against the environment-resolved configuration,
/// panicking with its diagnostic on failure.
pub async fn run(id: CheckId) {
    init_tracing();
    let config = LabConfig::from_env();
    let probe = Probe::new();
    if let Err(err) = run_check(id, &config, &probe).await {
        panic!("{}: {err}", id.name());
    }
}

mod test_cloudfront;
mod test_website;
