//! HTTP collaborator for the hostcheck acceptance harness.
//!
//! Wraps a reqwest client behind a [`Probe`] that performs exactly one GET
//! per call and captures the response as an [`Observation`] (status,
//! case-insensitive header map, decoded body text). The `expect` module
//! turns observations into pass/fail results: every failed expectation
//! carries the probed URL, what was observed, and a diagnostic naming the
//! misconfiguration most likely responsible.

pub mod expect;

mod error;
mod probe;

pub use error::CheckError;
pub use probe::{Observation, Probe};
