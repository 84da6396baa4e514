//! Defines the error returned by checked indexed access into a [`crate::RingQueue`].

use thiserror::Error;

/// An index passed to [`crate::RingQueue::try_get`] (or one of the panicking accessors) was not
/// in `0..len`.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
#[error("index out of range: the len is {len} but the index is {index}")]
pub struct IndexOutOfRange {
    /// The offending index.
    pub index: usize,
    /// Length of the queue at the time of access.
    pub len: usize,
}
