use crate::set::FdSet;

use std::os::fd::RawFd;
use std::time::Duration;

/// Configuration for a single readiness wait.
///
/// A request names the categories of interest and the wait bound. Interest
/// sets that are `None` are not examined; a `None` timeout blocks until
/// readiness or an interrupting signal.
///
/// [`wait`](crate::wait) overwrites each present set with the ready subset
/// of its members, so a request must be rebuilt (or its sets re-copied
/// from templates) before every call.
///
/// # Examples
///
/// ```rust,ignore
/// let mut interest = FdSet::new();
/// interest.insert(socket_fd)?;
///
/// let mut request = WaitRequest::new(socket_fd + 1)
///     .readable(interest)
///     .timeout(Duration::from_millis(500));
///
/// let ready = paratus::wait(&mut request)?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WaitRequest {
    /// Exclusive upper bound on the descriptor indices the OS examines.
    ///
    /// Platform convention: one greater than the highest index present in
    /// any interest set ("number of descriptors to examine").
    pub nfds: RawFd,

    /// Descriptors watched for read readiness.
    pub read: Option<FdSet>,

    /// Descriptors watched for write readiness.
    pub write: Option<FdSet>,

    /// Descriptors watched for exceptional conditions.
    pub except: Option<FdSet>,

    /// Wait bound: `None` blocks indefinitely, a zero duration polls once,
    /// a positive duration bounds the wait (microsecond granularity).
    pub timeout: Option<Duration>,
}

impl WaitRequest {
    /// Creates a request examining descriptors `0..nfds`, with no interest
    /// sets and no timeout.
    pub fn new(nfds: RawFd) -> Self {
        Self {
            nfds,
            read: None,
            write: None,
            except: None,
            timeout: None,
        }
    }

    /// Sets the read-interest set.
    pub fn readable(mut self, set: FdSet) -> Self {
        self.read = Some(set);
        self
    }

    /// Sets the write-interest set.
    pub fn writable(mut self, set: FdSet) -> Self {
        self.write = Some(set);
        self
    }

    /// Sets the exception-interest set.
    pub fn exceptional(mut self, set: FdSet) -> Self {
        self.except = Some(set);
        self
    }

    /// Bounds the wait.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Highest descriptor index present in any interest set.
    pub(crate) fn highest(&self) -> Option<RawFd> {
        [&self.read, &self.write, &self.except]
            .into_iter()
            .flatten()
            .filter_map(FdSet::highest)
            .max()
    }
}

impl Default for WaitRequest {
    /// An empty request: no descriptors examined, no timeout.
    ///
    /// Waiting on it blocks until an external interruption.
    fn default() -> Self {
        Self::new(0)
    }
}
