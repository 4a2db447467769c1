//! The base result contract shared by every specialization.
//!
//! [`Envelope`] holds the stored fields common to all results; concrete
//! result types embed it with `#[serde(flatten)]` so the wire shape matches
//! the field contract. The [`DataResult`] trait exposes the shared read
//! surface plus post-construction annotation, and the capture helpers here
//! are the single place where a computation's error becomes result state.

use std::future::Future;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fault::Fault;

/// Stored fields common to every result.
///
/// Success/failure classification is derived from `fault` and fixed at
/// construction; only the annotation fields (`message`, `error_code`) can
/// change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fault: Option<Fault>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_code: Option<i32>,
    response_time: DateTime<Utc>,
}

impl Envelope {
    /// A successful envelope stamped with the current UTC instant.
    pub(crate) fn success() -> Self {
        Self {
            fault: None,
            message: None,
            error_code: None,
            response_time: Utc::now(),
        }
    }

    /// A failed envelope carrying `fault`, stamped with the current UTC instant.
    pub(crate) fn failure(fault: Fault) -> Self {
        Self {
            fault: Some(fault),
            ..Self::success()
        }
    }

    /// Run a computation and convert its outcome into envelope state.
    ///
    /// `Ok(value)` yields a success envelope plus the payload; `Err` yields
    /// a failure envelope and no payload. The error never escapes.
    pub(crate) fn capture<T, F>(computation: F) -> (Self, Option<T>)
    where
        F: FnOnce() -> Result<T>,
    {
        match computation() {
            Ok(value) => (Self::success(), Some(value)),
            Err(err) => {
                tracing::debug!(error = %err, "computation faulted; capturing");
                (Self::failure(Fault::from(err)), None)
            }
        }
    }

    /// Async form of [`Envelope::capture`].
    ///
    /// Awaiting the computation's future is the only suspension point.
    pub(crate) async fn capture_async<T, F, Fut>(computation: F) -> (Self, Option<T>)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        match computation().await {
            Ok(value) => (Self::success(), Some(value)),
            Err(err) => {
                tracing::debug!(error = %err, "async computation faulted; capturing");
                (Self::failure(Fault::from(err)), None)
            }
        }
    }
}

/// Read surface and annotation shared by every result type.
///
/// `is_success`/`is_failure` are always derived from `fault`; no setter can
/// desynchronize them. Annotation (`message`, `error_code`) never affects
/// classification.
pub trait DataResult {
    /// The shared field set. Implementors store exactly one [`Envelope`].
    fn envelope(&self) -> &Envelope;

    fn envelope_mut(&mut self) -> &mut Envelope;

    /// The captured fault, present iff the operation failed.
    fn fault(&self) -> Option<&Fault> {
        self.envelope().fault.as_ref()
    }

    fn is_success(&self) -> bool {
        self.envelope().fault.is_none()
    }

    fn is_failure(&self) -> bool {
        self.envelope().fault.is_some()
    }

    fn message(&self) -> Option<&str> {
        self.envelope().message.as_deref()
    }

    fn error_code(&self) -> Option<i32> {
        self.envelope().error_code
    }

    /// UTC instant stamped when this result was constructed. Never changes.
    fn response_time(&self) -> DateTime<Utc> {
        self.envelope().response_time
    }

    fn set_message(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.envelope_mut().message = Some(message.into());
    }

    fn set_error_code(&mut self, code: i32)
    where
        Self: Sized,
    {
        self.envelope_mut().error_code = Some(code);
    }

    #[must_use]
    fn with_message(mut self, message: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.set_message(message);
        self
    }

    #[must_use]
    fn with_error_code(mut self, code: i32) -> Self
    where
        Self: Sized,
    {
        self.set_error_code(code);
        self
    }
}
