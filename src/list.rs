//! Result carrying an ordered sequence of items.

use std::future::Future;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::envelope::{DataResult, Envelope};
use crate::fault::Fault;

/// A result whose payload is an ordered list of `T`.
///
/// The list is never absent: a failed creation and an empty success both
/// hold an empty `Vec`, so "succeeded with zero items" stays representable
/// and consumers never have to null-check the payload. This is asymmetric
/// with [`SingleDataResult`]'s nullable `data` on purpose.
///
/// [`SingleDataResult`]: crate::SingleDataResult
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ListDataResult<T> {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(default = "Vec::new", rename = "dataList")]
    data_list: Vec<T>,
}

impl<T> ListDataResult<T> {
    /// A pre-computed success carrying `data_list`.
    #[must_use]
    pub fn new(data_list: Vec<T>) -> Self {
        Self {
            envelope: Envelope::success(),
            data_list,
        }
    }

    /// A pre-computed failure; the list is empty.
    #[must_use]
    pub fn from_fault(fault: Fault) -> Self {
        Self {
            envelope: Envelope::failure(fault),
            data_list: Vec::new(),
        }
    }

    /// Run `get_data_list` and capture its outcome.
    pub fn create<F>(get_data_list: F) -> Self
    where
        F: FnOnce() -> Result<Vec<T>>,
    {
        let (envelope, data_list) = Envelope::capture(get_data_list);
        Self {
            envelope,
            data_list: data_list.unwrap_or_default(),
        }
    }

    /// Await `get_data_list`'s future and capture its outcome.
    pub async fn create_async<F, Fut>(get_data_list: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let (envelope, data_list) = Envelope::capture_async(get_data_list).await;
        Self {
            envelope,
            data_list: data_list.unwrap_or_default(),
        }
    }

    /// Current number of items, recomputed on every call.
    ///
    /// Always consistent with [`ListDataResult::data_list`], including after
    /// the holder mutated the list.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.data_list.len()
    }

    #[must_use]
    pub fn data_list(&self) -> &[T] {
        &self.data_list
    }

    /// Mutable access for holders that post-process the payload.
    pub fn data_list_mut(&mut self) -> &mut Vec<T> {
        &mut self.data_list
    }

    /// Consume the result, yielding the list.
    #[must_use]
    pub fn into_data_list(self) -> Vec<T> {
        self.data_list
    }
}

impl<T> Default for ListDataResult<T> {
    /// Success with an empty list.
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> DataResult for ListDataResult<T> {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }
}

impl<T> From<ListDataResult<T>> for Vec<T> {
    fn from(result: ListDataResult<T>) -> Self {
        result.data_list
    }
}
