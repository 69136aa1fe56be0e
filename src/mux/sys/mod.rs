//! Platform-specific syscall layer.
//!
//! The concrete backend is selected at compile time depending on the
//! target operating system. Only Unix targets are supported: the
//! descriptor-number-indexed data model of [`FdSet`](crate::FdSet) follows
//! the POSIX `select(2)` convention.

#[cfg(unix)]
mod unix;

#[cfg(unix)]
pub(crate) use unix::{sys_select, sys_timeval};
