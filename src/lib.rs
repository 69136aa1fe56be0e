//! # Paratus
//!
//! **Paratus** is a select-style readiness multiplexer for raw file
//! descriptors: the blocking synchronization primitive an I/O event loop
//! is built on.
//!
//! Given descriptors grouped by interest (readable, writable, exceptional)
//! and an optional timeout, a wait blocks the calling thread until at least
//! one descriptor becomes ready, the timeout elapses, or a signal interrupts
//! the wait, and reports how many descriptors are ready. Readiness is
//! level-triggered: repeated waits re-report persistent readiness.
//!
//! The crate is small on purpose; the work is in precise boundary and
//! timeout semantics rather than volume. It offers:
//!
//! - An explicit bounded **descriptor bitset** ([`FdSet`]) sized to the
//!   platform descriptor-table limit, rejecting out-of-range indices before
//!   any wait executes
//! - **Interest-by-category configuration** ([`WaitRequest`]) in place of a
//!   positional three-sets-plus-timeout signature, with absence as an
//!   explicit tagged state
//! - A **typed failure taxonomy** ([`Error`]) that keeps signal
//!   interruption distinct from timeout expiry (a successful wait that
//!   reports zero ready descriptors)
//! - **Caller-policy tools** ([`tools`]) such as the retry-on-interrupt
//!   loop the primitive itself never performs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paratus::{FdSet, WaitRequest};
//! use std::time::Duration;
//!
//! // Standing interest: the descriptors this loop watches.
//! let mut template = FdSet::new();
//! template.insert(socket_fd)?;
//!
//! loop {
//!     // A wait overwrites the sets with the ready subsets, so each
//!     // iteration re-arms from the template.
//!     let mut request = WaitRequest::new(socket_fd + 1)
//!         .readable(template)
//!         .timeout(Duration::from_secs(5));
//!
//!     match paratus::wait(&mut request)? {
//!         0 => println!("timed out"),
//!         n => handle(n, &request.read.unwrap()),
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`tools`] — Caller-policy helpers such as retry-on-interrupt
//!
//! ## Getting Started
//!
//! Add Paratus to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! paratus = { git = "https://github.com/nebula-platform/paratus" }
//! ```

mod error;
mod mux;
mod set;

pub mod tools;

pub use error::Error;
pub use mux::{WaitRequest, wait};
pub use set::{FdSet, FdSetIter};
