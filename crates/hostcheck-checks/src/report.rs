//! Per-check outcomes and the suite report.

use hostcheck_http::CheckError;

use crate::suite::{CheckId, HostingMode};

/// Result of one executed check.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    /// Which check ran.
    pub id: CheckId,
    /// Stable tag of the check.
    pub name: &'static str,
    /// One-line description of what passing means.
    pub summary: &'static str,
    /// Whether every expectation held.
    pub passed: bool,
    /// Failure message, when one did not.
    pub failure: Option<String>,
}

impl CheckOutcome {
    /// Record the result of `id`.
    #[must_use]
    pub fn new(id: CheckId, result: Result<(), CheckError>) -> Self {
        let failure = result.err().map(|err| err.to_string());
        Self {
            id,
            name: id.name(),
            summary: id.summary(),
            passed: failure.is_none(),
            failure,
        }
    }
}

/// Outcomes of a full suite run, in execution order.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteReport {
    /// Which hosting lab was graded.
    pub mode: HostingMode,
    /// Suite title shown to the learner.
    pub title: &'static str,
    /// One outcome per declared check.
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    /// Assemble a report for `mode`.
    #[must_use]
    pub fn new(mode: HostingMode, outcomes: Vec<CheckOutcome>) -> Self {
        Self {
            mode,
            title: mode.title(),
            outcomes,
        }
    }

    /// True when every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    /// Number of failed checks.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }
}

#[cfg(test)]
mod tests {
    use hostcheck_core::ConfigError;

    use super::*;

    fn failed_outcome() -> CheckOutcome {
        let err = ConfigError::Missing {
            var: "PS_AWS_ACCOUNT_ID",
            hint: "set it to your 12-digit AWS account ID",
        };
        CheckOutcome::new(CheckId::AwsAccount, Err(err.into()))
    }

    #[test]
    fn test_should_record_failure_message() {
        let outcome = failed_outcome();
        assert!(!outcome.passed);
        assert!(outcome.failure.as_deref().unwrap().contains("PS_AWS_ACCOUNT_ID"));
    }

    #[test]
    fn test_should_aggregate_pass_fail_counts() {
        let passing = CheckOutcome::new(CheckId::CfDomainName, Ok(()));
        let report = SuiteReport::new(HostingMode::Website, vec![passing, failed_outcome()]);
        assert!(!report.passed());
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_should_serialize_report_with_check_names() {
        let report = SuiteReport::new(
            HostingMode::CloudFront,
            vec![CheckOutcome::new(CheckId::CfDomainName, Ok(()))],
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "cloud-front");
        assert_eq!(json["outcomes"][0]["name"], "verify-cf-domain-name");
        assert_eq!(json["outcomes"][0]["passed"], true);
    }
}
