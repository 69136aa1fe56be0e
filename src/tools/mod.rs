//! Caller-policy helpers around the readiness primitive.
//!
//! This module provides the thin wrapping loops the primitive deliberately
//! leaves to its caller.
//!
//! The main entry point is [`retry_interrupted`], which re-invokes an
//! operation produced by a factory closure while it keeps failing with
//! [`Error::Interrupted`](crate::Error::Interrupted).

mod retry;

#[doc(inline)]
pub use retry::retry_interrupted;
