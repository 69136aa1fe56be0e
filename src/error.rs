//! Failure taxonomy for readiness waits.
//!
//! Every failure is surfaced to the immediate caller as a typed [`Error`];
//! nothing is retried inside the primitive, and no failure is fatal: the
//! caller decides whether to re-invoke or abandon the wait. Retrying on
//! [`Error::Interrupted`] is available as
//! [`tools::retry_interrupted`](crate::tools::retry_interrupted).

use std::io;

/// Errors reported by a readiness wait.
///
/// After a failed wait the interest sets inside the request are in an
/// unspecified state; rebuild them before waiting again.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An interest set references a descriptor that is not open.
    #[error("interest set references a descriptor that is not open")]
    InvalidDescriptor(#[source] io::Error),

    /// A descriptor index or `nfds` bound does not fit the fixed capacity
    /// of the descriptor sets.
    #[error("descriptor range {requested} exceeds the multiplexer capacity {capacity}")]
    CapacityExceeded {
        /// The exclusive upper bound the caller asked for.
        requested: usize,
        /// The fixed capacity of the descriptor sets.
        capacity: usize,
    },

    /// A signal interrupted the wait before readiness or timeout.
    ///
    /// Distinct from timeout expiry, which is a successful wait reporting
    /// zero ready descriptors.
    #[error("wait interrupted by a signal")]
    Interrupted,

    /// Malformed input.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was malformed.
        reason: &'static str,
    },

    /// The OS reported a failure outside the taxonomy above.
    #[error("unexpected readiness failure")]
    Unexpected(#[source] io::Error),
}

impl Error {
    /// Classifies an OS failure from the blocking call.
    pub(crate) fn from_os(err: io::Error) -> Self {
        match err.raw_os_error() {
            Some(libc::EBADF) => Error::InvalidDescriptor(err),
            Some(libc::EINTR) => Error::Interrupted,
            Some(libc::EINVAL) => Error::InvalidArgument {
                reason: "rejected by the operating system",
            },
            _ => Error::Unexpected(err),
        }
    }
}
