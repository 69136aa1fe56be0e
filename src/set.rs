use crate::error::Error;

use std::fmt;
use std::os::fd::RawFd;

/// Number of descriptor indices a set can track.
///
/// Matches the platform descriptor-table limit used by `select(2)`.
const CAPACITY: usize = libc::FD_SETSIZE as usize;

/// Words backing the membership bits.
const WORDS: usize = CAPACITY.div_ceil(64);

/// A bounded set of file descriptors, indexed by descriptor number.
///
/// `FdSet` is the interest/readiness unit consumed by [`wait`](crate::wait):
/// bit `i` set means "interested in descriptor `i`" on input and
/// "descriptor `i` is ready" on output.
///
/// Capacity is fixed at [`FdSet::CAPACITY`]; indices outside `0..CAPACITY`
/// are rejected by [`insert`](Self::insert) before any wait executes.
///
/// The set is `Copy`. Callers typically keep template sets describing their
/// standing interest and copy them into a [`WaitRequest`](crate::WaitRequest)
/// before every wait, since the wait overwrites the request's sets with the
/// ready subsets.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FdSet {
    /// Membership bits, one per descriptor index.
    bits: [u64; WORDS],
}

impl FdSet {
    /// Number of descriptor indices a set can track (`0..CAPACITY`).
    pub const CAPACITY: usize = CAPACITY;

    /// Creates an empty set.
    pub fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Adds a descriptor to the set.
    ///
    /// Adding a descriptor that is already a member is a no-op.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `fd` is negative.
    /// - [`Error::CapacityExceeded`] if `fd` is not below
    ///   [`CAPACITY`](Self::CAPACITY).
    pub fn insert(&mut self, fd: RawFd) -> Result<(), Error> {
        let idx = Self::index_of(fd)?;
        self.bits[idx / 64] |= 1 << (idx % 64);

        Ok(())
    }

    /// Removes a descriptor from the set.
    ///
    /// Returns whether the descriptor was a member. Indices outside
    /// `0..CAPACITY` are never members, so removal reports `false` for them.
    pub fn remove(&mut self, fd: RawFd) -> bool {
        let Ok(idx) = Self::index_of(fd) else {
            return false;
        };

        let mask = 1u64 << (idx % 64);
        let present = self.bits[idx / 64] & mask != 0;
        self.bits[idx / 64] &= !mask;

        present
    }

    /// Returns whether a descriptor is a member of the set.
    pub fn contains(&self, fd: RawFd) -> bool {
        match Self::index_of(fd) {
            Ok(idx) => self.bits[idx / 64] & (1 << (idx % 64)) != 0,
            Err(_) => false,
        }
    }

    /// Removes every descriptor from the set.
    pub fn clear(&mut self) {
        self.bits = [0; WORDS];
    }

    /// Number of descriptors in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|w| *w == 0)
    }

    /// Iterates over the members in ascending descriptor order.
    pub fn iter(&self) -> FdSetIter<'_> {
        FdSetIter { set: self, next: 0 }
    }

    /// Highest member index, if the set is non-empty.
    pub(crate) fn highest(&self) -> Option<RawFd> {
        for (i, word) in self.bits.iter().enumerate().rev() {
            if *word != 0 {
                let bit = 63 - word.leading_zeros() as usize;
                return Some((i * 64 + bit) as RawFd);
            }
        }

        None
    }

    /// Builds the raw `fd_set` handed to the OS.
    pub(crate) fn to_raw(&self) -> libc::fd_set {
        let mut raw = unsafe { std::mem::zeroed::<libc::fd_set>() };
        for fd in self.iter() {
            unsafe { libc::FD_SET(fd, &mut raw) };
        }

        raw
    }

    /// Keeps only the members the OS reported ready in `raw`.
    pub(crate) fn retain_raw(&mut self, raw: &libc::fd_set) {
        let mut ready = Self::new();
        for fd in self.iter() {
            if unsafe { libc::FD_ISSET(fd, raw) } {
                ready.bits[fd as usize / 64] |= 1 << (fd as usize % 64);
            }
        }

        *self = ready;
    }

    /// Maps a descriptor to its bit index, validating the range.
    fn index_of(fd: RawFd) -> Result<usize, Error> {
        if fd < 0 {
            return Err(Error::InvalidArgument {
                reason: "descriptor index is negative",
            });
        }

        let idx = fd as usize;
        if idx >= CAPACITY {
            return Err(Error::CapacityExceeded {
                requested: idx + 1,
                capacity: CAPACITY,
            });
        }

        Ok(idx)
    }
}

impl Default for FdSet {
    /// Creates an empty set.
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FdSet {
    /// Formats the set as the list of member descriptors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a FdSet {
    type Item = RawFd;
    type IntoIter = FdSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of an [`FdSet`], in ascending order.
pub struct FdSetIter<'a> {
    set: &'a FdSet,
    next: usize,
}

impl Iterator for FdSetIter<'_> {
    type Item = RawFd;

    fn next(&mut self) -> Option<RawFd> {
        while self.next < CAPACITY {
            let word = self.set.bits[self.next / 64] >> (self.next % 64);
            if word == 0 {
                // jump to the next word boundary
                self.next = (self.next / 64 + 1) * 64;
                continue;
            }

            let idx = self.next + word.trailing_zeros() as usize;
            self.next = idx + 1;
            return Some(idx as RawFd);
        }

        None
    }
}
