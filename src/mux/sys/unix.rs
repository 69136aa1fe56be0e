//! Unix `select(2)` backend.
//!
//! This module provides the POSIX implementation of the blocking readiness
//! call behind thin `sys_*` wrappers.
//!
//! Responsibilities:
//! - Issue `select(2)` over the staged `fd_set`s
//! - Convert the optional timeout into a `timeval`
//! - Surface OS failures as `io::Error`

use libc::{fd_set, suseconds_t, time_t, timeval};

use std::io;
use std::ptr;
use std::time::Duration;

/// Issues `select(2)`.
///
/// Absent sets are passed as null, meaning that category is not examined.
/// An absent timeout blocks indefinitely.
///
/// Returns the number of ready membership bits across the three sets.
pub(crate) fn sys_select(
    nfds: libc::c_int,
    read: Option<&mut fd_set>,
    write: Option<&mut fd_set>,
    except: Option<&mut fd_set>,
    timeout: Option<&mut timeval>,
) -> io::Result<usize> {
    let rc = unsafe {
        libc::select(
            nfds,
            opt_ptr(read),
            opt_ptr(write),
            opt_ptr(except),
            opt_ptr(timeout),
        )
    };

    if rc < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(rc as usize)
    }
}

/// Builds the `timeval` for a bounded wait.
///
/// Granularity is one microsecond; a positive sub-microsecond remainder
/// rounds up so a bounded wait never degrades into an immediate poll.
///
/// Returns `None` if the duration does not fit the platform `timeval`.
pub(crate) fn sys_timeval(timeout: Duration) -> Option<timeval> {
    let mut secs = time_t::try_from(timeout.as_secs()).ok()?;

    let nanos = timeout.subsec_nanos();
    let mut micros = nanos / 1_000 + u32::from(nanos % 1_000 != 0);
    if micros == 1_000_000 {
        secs = secs.checked_add(1)?;
        micros = 0;
    }

    Some(timeval {
        tv_sec: secs,
        tv_usec: micros as suseconds_t,
    })
}

/// Converts an optional reference into a raw pointer for the syscall.
fn opt_ptr<T>(value: Option<&mut T>) -> *mut T {
    match value {
        Some(v) => v,
        None => ptr::null_mut(),
    }
}
