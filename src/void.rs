//! Result of an operation that produces no value.

use std::future::Future;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::envelope::{DataResult, Envelope};
use crate::fault::Fault;

/// A pure success/failure envelope with no payload.
///
/// Useful for operations whose only outcomes are "it worked" or "it failed
/// with this fault", plus the message/error-code annotation every result
/// carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoidResult {
    #[serde(flatten)]
    envelope: Envelope,
}

impl VoidResult {
    /// A pre-computed success.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::success(),
        }
    }

    /// A pre-computed failure carrying `fault`.
    #[must_use]
    pub fn from_fault(fault: Fault) -> Self {
        Self {
            envelope: Envelope::failure(fault),
        }
    }

    /// Run `do_action` and capture its outcome.
    ///
    /// An `Err` becomes the result's fault; it never propagates past this
    /// call.
    pub fn create<F>(do_action: F) -> Self
    where
        F: FnOnce() -> Result<()>,
    {
        let (envelope, _) = Envelope::capture(do_action);
        Self { envelope }
    }

    /// Await `do_action`'s future and capture its outcome.
    ///
    /// Suspends exactly once, at the await of the supplied future. Safe to
    /// invoke concurrently; every call owns its own result.
    pub async fn create_async<F, Fut>(do_action: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let (envelope, _) = Envelope::capture_async(do_action).await;
        Self { envelope }
    }
}

impl Default for VoidResult {
    fn default() -> Self {
        Self::new()
    }
}

impl DataResult for VoidResult {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_ok_is_success() {
        let result = VoidResult::create(|| Ok(()));
        assert!(result.is_success());
        assert!(!result.is_failure());
        assert!(result.fault().is_none());
    }

    #[test]
    fn create_err_is_failure() {
        let result = VoidResult::create(|| Err(anyhow::anyhow!("cleanup failed")));
        assert!(result.is_failure());
        assert_eq!(result.fault().map(Fault::description), Some("cleanup failed"));
    }

    #[test]
    fn new_and_default_are_success() {
        assert!(VoidResult::new().is_success());
        assert!(VoidResult::default().is_success());
    }

    #[test]
    fn from_fault_is_failure() {
        let result = VoidResult::from_fault(Fault::new("remote rejected"));
        assert!(result.is_failure());
    }

    #[test]
    fn annotation_does_not_change_classification() {
        let mut result = VoidResult::create(|| Ok(()));
        result.set_message("archived 3 items");
        result.set_error_code(0);
        assert!(result.is_success());
        assert_eq!(result.message(), Some("archived 3 items"));
        assert_eq!(result.error_code(), Some(0));
    }

    #[test]
    fn response_time_is_stable_across_reads() {
        let result = VoidResult::create(|| Ok(()));
        let first = result.response_time();
        assert!(result.is_success());
        assert_eq!(result.response_time(), first);
    }

    #[tokio::test]
    async fn create_async_ok_is_success() {
        let result = VoidResult::create_async(|| async {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            Ok(())
        })
        .await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn create_async_sleep_suspends_roughly_that_long() {
        let start = std::time::Instant::now();
        let result = VoidResult::create_async(|| async {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            Ok(())
        })
        .await;
        assert!(result.is_success());
        assert!(start.elapsed() >= std::time::Duration::from_millis(10));
    }

    #[tokio::test]
    async fn create_async_err_is_failure() {
        let result =
            VoidResult::create_async(|| async { Err(anyhow::anyhow!("socket closed")) }).await;
        assert!(result.is_failure());
        assert_eq!(result.fault().map(Fault::description), Some("socket closed"));
    }
}
