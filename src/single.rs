//! Result carrying a single payload item.

use std::future::Future;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::envelope::{DataResult, Envelope};
use crate::fault::Fault;

/// A result whose payload is one item of type `T`, possibly absent.
///
/// `data` is deliberately nullable (unlike [`ListDataResult`]'s list, which
/// is never absent): "succeeded with nothing to return" and "failed" are
/// distinct states, and the accessors surface `None` as-is rather than
/// substituting a default.
///
/// [`ListDataResult`]: crate::ListDataResult
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct SingleDataResult<T> {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> SingleDataResult<T> {
    /// A pre-computed success carrying `data`.
    #[must_use]
    pub fn new(data: T) -> Self {
        Self {
            envelope: Envelope::success(),
            data: Some(data),
        }
    }

    /// A pre-computed success with no data.
    #[must_use]
    pub fn null() -> Self {
        Self {
            envelope: Envelope::success(),
            data: None,
        }
    }

    /// A pre-computed failure; `data` is absent.
    #[must_use]
    pub fn from_fault(fault: Fault) -> Self {
        Self {
            envelope: Envelope::failure(fault),
            data: None,
        }
    }

    /// Run `get_data` and capture its outcome.
    pub fn create<F>(get_data: F) -> Self
    where
        F: FnOnce() -> Result<T>,
    {
        let (envelope, data) = Envelope::capture(get_data);
        Self { envelope, data }
    }

    /// Await `get_data`'s future and capture its outcome.
    pub async fn create_async<F, Fut>(get_data: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let (envelope, data) = Envelope::capture_async(get_data).await;
        Self { envelope, data }
    }

    /// Whether the payload is absent.
    ///
    /// True for every failed result and for successes built via
    /// [`SingleDataResult::null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// The payload as currently held, with no success check.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume the result, yielding the payload if present.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Consume the result, yielding the payload or `default` when absent.
    #[must_use]
    pub fn data_or(self, default: T) -> T {
        self.data.unwrap_or(default)
    }
}

impl<T> Default for SingleDataResult<T> {
    /// Success with no data, like [`SingleDataResult::null`].
    fn default() -> Self {
        Self::null()
    }
}

impl<T> DataResult for SingleDataResult<T> {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }
}

impl<T> From<SingleDataResult<T>> for Option<T> {
    fn from(result: SingleDataResult<T>) -> Self {
        result.data
    }
}
