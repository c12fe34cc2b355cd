//! Configuration error type.

/// A learner-supplied configuration value is missing or malformed.
///
/// The message always names the environment variable to set or fix, since
/// the whole point of the harness is telling the learner what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The variable is unset or empty.
    #[error("{var} must be entered by the user: {hint}")]
    Missing {
        /// Environment variable name.
        var: &'static str,
        /// What the learner should put there.
        hint: &'static str,
    },

    /// The variable is set but fails its shape rule.
    #[error("{var} is invalid: {reason}")]
    Invalid {
        /// Environment variable name.
        var: &'static str,
        /// Which rule was violated and how to satisfy it.
        reason: String,
    },
}
