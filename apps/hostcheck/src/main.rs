//! hostcheck - acceptance runner for the static-site hosting labs.
//!
//! Resolves the learner's configuration from the environment once, runs
//! the selected mode's checks in declared order against the live
//! resources, and reports every outcome. The exit code is 0 only when all
//! checks passed.
//!
//! # Usage
//!
//! ```text
//! hostcheck <website|cloudfront> [--json]
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Used by | Description |
//! |----------|---------|-------------|
//! | `PS_AWS_ACCOUNT_ID` | website | 12-digit AWS account ID |
//! | `PS_S3_BUCKET_NAME` | website | bucket name, direct-access lab |
//! | `PS_S3_WEBHOST_URL` | website | static website hosting endpoint URL |
//! | `PS_S3_CF_BUCKET_NAME` | cloudfront | bucket name, CloudFront lab |
//! | `PS_CF_DOMAIN_NAME` | cloudfront | generated CloudFront domain name |
//! | `RUST_LOG` | both | tracing filter (default `warn`) |

use std::process::ExitCode;

use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;

use hostcheck_checks::{HostingMode, SuiteReport, run_suite};
use hostcheck_core::LabConfig;
use hostcheck_http::Probe;

/// Exit code for a usage error, distinct from check failures.
const USAGE_EXIT: u8 = 2;

const USAGE: &str = "usage: hostcheck <website|cloudfront> [--json]";

/// Parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Args {
    mode: HostingMode,
    json: bool,
}

/// Parse the command line (program name already stripped).
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut mode = None;
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "website" if mode.is_none() => mode = Some(HostingMode::Website),
            "cloudfront" if mode.is_none() => mode = Some(HostingMode::CloudFront),
            "--json" => json = true,
            other => bail!("unexpected argument: {other}"),
        }
    }

    let Some(mode) = mode else {
        bail!("missing hosting mode");
    };
    Ok(Args { mode, json })
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise defaults to `warn` so the report
/// stays readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Print the human-readable report.
fn print_report(report: &SuiteReport) {
    println!("{}", report.title);
    println!();
    for outcome in &report.outcomes {
        let verdict = if outcome.passed { "PASS" } else { "FAIL" };
        println!("  {verdict} {} - {}", outcome.name, outcome.summary);
        if let Some(failure) = &outcome.failure {
            println!("       {failure}");
        }
    }
    println!();
    let total = report.outcomes.len();
    if report.passed() {
        println!("all {total} checks passed");
    } else {
        println!("{} of {total} checks failed", report.failed());
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            return ExitCode::from(USAGE_EXIT);
        }
    };

    let config = LabConfig::from_env();
    let probe = Probe::new();
    let report = run_suite(args.mode, &config, &probe).await;

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("failed to render JSON report: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&report);
    }

    if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
