//! Captured error conditions.
//!
//! A [`Fault`] is an error stored as data: the factory protocol converts any
//! error returned by a caller-supplied computation into a `Fault` on the
//! result instead of propagating it. Faults keep the full cause chain as
//! display text so the descriptive content survives a serialization
//! boundary even though the original error value cannot.

use anyhow::Error as AnyError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error condition captured by a factory call.
///
/// `Display` is the top-level description; `chain()` exposes the underlying
/// causes, outermost first. A `Fault` is itself a [`std::error::Error`], so
/// it can be fed back into `anyhow` or any other error machinery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{description}")]
pub struct Fault {
    description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    chain: Vec<String>,
}

impl Fault {
    /// Build a fault from a bare description, with no cause chain.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            chain: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Display text of each underlying cause, outermost first.
    ///
    /// Empty when the captured error had no source.
    #[must_use]
    pub fn chain(&self) -> &[String] {
        &self.chain
    }
}

impl From<AnyError> for Fault {
    fn from(err: AnyError) -> Self {
        Self {
            description: err.to_string(),
            chain: err.chain().skip(1).map(ToString::to_string).collect(),
        }
    }
}
