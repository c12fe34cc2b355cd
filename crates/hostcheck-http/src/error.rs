//! Check-level error taxonomy.

use hostcheck_core::ConfigError;

/// Why a single check failed.
///
/// All failures are check-local: the runner records the error and moves on
/// to the next check, so one misconfiguration never hides another.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// A configuration value the check depends on is missing or malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request could not be completed at all (DNS, refused, timeout).
    #[error("request to {url} could not be completed: {source}")]
    Transport {
        /// The URL that was probed.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived but did not match the expectation.
    #[error("{diagnostic} (GET {url}: {observed})")]
    Mismatch {
        /// The URL that was probed.
        url: String,
        /// Likely misconfiguration, phrased for the learner.
        diagnostic: String,
        /// What was expected versus what the response contained.
        observed: String,
    },
}

impl CheckError {
    /// Build a [`CheckError::Mismatch`] for `url`.
    #[must_use]
    pub fn mismatch(url: &str, diagnostic: &str, observed: impl Into<String>) -> Self {
        Self::Mismatch {
            url: url.to_owned(),
            diagnostic: diagnostic.to_owned(),
            observed: observed.into(),
        }
    }
}
