//! Result carrying a boolean payload.

use std::future::Future;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::envelope::{DataResult, Envelope};
use crate::fault::Fault;

/// A result whose payload is a single `bool`.
///
/// On failure the payload stays at its default, `false`, so converting a
/// failed result to `bool` reads as "not true" while the fault remains
/// retrievable through [`DataResult::fault`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooleanDataResult {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(default)]
    value: bool,
}

impl BooleanDataResult {
    /// A pre-computed success carrying `value`.
    #[must_use]
    pub fn new(value: bool) -> Self {
        Self {
            envelope: Envelope::success(),
            value,
        }
    }

    /// A pre-computed failure; `value` defaults to `false`.
    #[must_use]
    pub fn from_fault(fault: Fault) -> Self {
        Self {
            envelope: Envelope::failure(fault),
            value: false,
        }
    }

    /// Run `get_value` and capture its outcome.
    pub fn create<F>(get_value: F) -> Self
    where
        F: FnOnce() -> Result<bool>,
    {
        let (envelope, value) = Envelope::capture(get_value);
        Self {
            envelope,
            value: value.unwrap_or_default(),
        }
    }

    /// Await `get_value`'s future and capture its outcome.
    pub async fn create_async<F, Fut>(get_value: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<bool>>,
    {
        let (envelope, value) = Envelope::capture_async(get_value).await;
        Self {
            envelope,
            value: value.unwrap_or_default(),
        }
    }

    /// The boolean payload as-is, with no success check.
    #[must_use]
    pub fn value(&self) -> bool {
        self.value
    }
}

impl Default for BooleanDataResult {
    /// Success with the payload default, `false`.
    fn default() -> Self {
        Self::new(false)
    }
}

impl DataResult for BooleanDataResult {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }
}

impl From<BooleanDataResult> for bool {
    fn from(result: BooleanDataResult) -> Self {
        result.value
    }
}

impl From<&BooleanDataResult> for bool {
    fn from(result: &BooleanDataResult) -> Self {
        result.value
    }
}
