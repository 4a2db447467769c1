//! Fault-capturing result envelopes for sync and async computations.
//!
//! Instead of letting failures propagate as control flow, a factory call
//! runs a caller-supplied computation and hands back a fully populated
//! result: the payload on success, a captured [`Fault`] on failure. The
//! factory boundary is a fault barrier — an error returned by the
//! computation never escapes it.
//!
//! Four payload shapes cover the common cases:
//!
//! - [`VoidResult`] — no payload, success/failure only
//! - [`BooleanDataResult`] — a `bool`, defaulting to `false` on failure
//! - [`SingleDataResult<T>`] — one item, absent on failure
//! - [`ListDataResult<T>`] — an ordered list, empty (never absent) on failure
//!
//! All four share the [`DataResult`] contract: `fault`, `message`,
//! `error_code`, a construction-time UTC `response_time`, and the derived
//! `is_success`/`is_failure` pair, which no setter can desynchronize.
//!
//! ```
//! use data_result::{DataResult, SingleDataResult};
//!
//! let result = SingleDataResult::create(|| Ok(42));
//! assert!(result.is_success());
//! assert_eq!(result.data(), Some(&42));
//! ```
//!
//! The suspending factories (`create_async`) await the supplied future at
//! exactly one point and are runtime-agnostic; each invocation owns its own
//! result, so concurrent calls never interfere. Dropping the returned
//! future cancels the computation — cancellation produces no result value
//! rather than a synthesized fault. Panics inside a computation are
//! programming defects, not runtime outcomes, and propagate past the
//! factory.

mod boolean;
mod envelope;
mod fault;
mod list;
mod single;
mod void;

pub use boolean::BooleanDataResult;
pub use envelope::{DataResult, Envelope};
pub use fault::Fault;
pub use list::ListDataResult;
pub use single::SingleDataResult;
pub use void::VoidResult;
