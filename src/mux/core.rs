use crate::error::Error;
use crate::mux::request::WaitRequest;
use crate::mux::sys::{sys_select, sys_timeval};
use crate::set::FdSet;

use log::trace;

/// Blocks until a descriptor of interest becomes ready, the timeout
/// elapses, or a signal interrupts the wait.
///
/// On success each present interest set in `request` is overwritten with
/// exactly the ready subset of its original members, and the returned count
/// is the total membership across the three returned sets; a descriptor
/// ready in two categories counts twice. Timeout expiry with nothing ready
/// is a success: `Ok(0)` with all present sets emptied.
///
/// Readiness is level-triggered: repeating a wait with identical interest
/// re-reports persistent readiness. Concurrent waits on a shared descriptor
/// inherit the OS delivery semantics; the primitive adds no exclusivity,
/// and callers needing single-consumer behavior must serialize externally.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `nfds` is negative, if `nfds` does not
///   exceed the highest member of any interest set, or if the timeout does
///   not fit the platform time representation.
/// - [`Error::CapacityExceeded`] if `nfds` exceeds [`FdSet::CAPACITY`].
/// - [`Error::InvalidDescriptor`] if an interest set references a
///   descriptor that is not open.
/// - [`Error::Interrupted`] if a signal arrived before readiness or
///   timeout. The wait is never retried internally; see
///   [`tools::retry_interrupted`](crate::tools::retry_interrupted).
///
/// After a failure the interest sets are in an unspecified state and must
/// be rebuilt before the request is reused.
pub fn wait(request: &mut WaitRequest) -> Result<usize, Error> {
    if request.nfds < 0 {
        return Err(Error::InvalidArgument {
            reason: "nfds is negative",
        });
    }
    if request.nfds as usize > FdSet::CAPACITY {
        return Err(Error::CapacityExceeded {
            requested: request.nfds as usize,
            capacity: FdSet::CAPACITY,
        });
    }
    if let Some(highest) = request.highest() {
        if request.nfds <= highest {
            return Err(Error::InvalidArgument {
                reason: "nfds must exceed the highest descriptor of interest",
            });
        }
    }

    let mut timeout = match request.timeout {
        Some(duration) => Some(sys_timeval(duration).ok_or(Error::InvalidArgument {
            reason: "timeout does not fit the platform time representation",
        })?),
        None => None,
    };

    let mut read = request.read.map(|set| set.to_raw());
    let mut write = request.write.map(|set| set.to_raw());
    let mut except = request.except.map(|set| set.to_raw());

    trace!(
        "waiting on {} descriptors (timeout: {:?})",
        request.nfds, request.timeout
    );

    let ready = sys_select(
        request.nfds,
        read.as_mut(),
        write.as_mut(),
        except.as_mut(),
        timeout.as_mut(),
    )
    .map_err(Error::from_os)?;

    if let (Some(set), Some(raw)) = (request.read.as_mut(), read.as_ref()) {
        set.retain_raw(raw);
    }
    if let (Some(set), Some(raw)) = (request.write.as_mut(), write.as_ref()) {
        set.retain_raw(raw);
    }
    if let (Some(set), Some(raw)) = (request.except.as_mut(), except.as_ref()) {
        set.retain_raw(raw);
    }

    trace!("{ready} descriptors ready");

    debug_assert_eq!(
        ready,
        request.read.map_or(0, |s| s.len())
            + request.write.map_or(0, |s| s.len())
            + request.except.map_or(0, |s| s.len()),
        "ready count must match the membership of the returned sets"
    );

    Ok(ready)
}
