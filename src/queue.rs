use alloc::{boxed::Box, vec::Vec};
use core::{
    fmt::{Debug, Formatter},
    ops::{Index, IndexMut},
};

use crate::error::IndexOutOfRange;

/// A FIFO queue backed by a growable ring buffer.
///
/// Elements are appended at the tail ([`Self::add`]) and read / removed at the head
/// ([`Self::peek`], [`Self::remove`]); any live element can also be reached by its logical index
/// ([`Self::get`], `q[i]`), where index `0` is the front.
///
/// The buffer holds at least [`Self::MIN_CAPACITY`] slots. It doubles when an append finds it
/// full, and halves once a removal leaves it at most a quarter occupied. Both cases go through the
/// same relinearization, after which the live elements start at slot `0`.
///
/// ## Caller obligations
///
/// - [`Self::peek`] and [`Self::remove`] do _not_ check for emptiness. On an empty queue the result
///   is unspecified (okay to panic), and after [`Self::remove`] the queue itself is left in an
///   unspecified state. Check [`Self::len`] first, or use [`Self::front`] / [`Self::pop`].
/// - [`Self::get`], [`Self::get_mut`] and indexing panic if the index is out of range;
///   [`Self::try_get`] reports it instead.
/// - Not thread-safe. Wrap it in a lock if it has to be shared.
///
/// Example:
/// ```
/// use ringq::RingQueue;
/// let mut q = [1, 2, 3].into_iter().collect::<RingQueue<_>>();
/// q.add(4);
/// assert_eq!(*q.peek(), 1);
/// q.remove();
/// assert_eq!(q.get(2), &4);
/// assert_eq!(q.pop(), Some(2));
/// assert_eq!(format!("{:?}", q), "[3, 4]");
/// ```
///
#[derive(Clone)]
pub struct RingQueue<T> {
    /// `Some` exactly at the live slots `head, head + 1, ..., head + count - 1` (mod capacity).
    buf: Box<[Option<T>]>,
    head: usize,
    /// Always `(head + count) % capacity`.
    tail: usize,
    count: usize,
}

fn vacant<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

#[cold]
fn vacant_slot() -> ! {
    panic!("ring queue: read from a vacant slot (queue is empty or corrupted)")
}

impl<T> RingQueue<T> {
    /// The initial capacity, and the capacity below which the queue never shrinks.
    pub const MIN_CAPACITY: usize = 16;

    ////////////////////////////////////////////////////////////////////
    // basics

    /// Creates an empty queue with [`Self::MIN_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            buf: vacant(Self::MIN_CAPACITY),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Returns how many elements are currently in the queue.
    pub fn len(&self) -> usize { self.count }

    /// Returns if this queue is empty.
    pub fn is_empty(&self) -> bool { self.count == 0 }

    /// Returns the number of slots in the backing buffer.
    pub fn capacity(&self) -> usize { self.buf.len() }

    /// Drops every element and goes back to a fresh [`Self::MIN_CAPACITY`]-slot buffer.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    ////////////////////////////////////////////////////////////////////
    // add

    /// Appends an element to the back of the queue, growing the buffer first if it is full.
    pub fn add(&mut self, elem: T) {
        if self.count == self.buf.len() {
            self.resize();
        }
        self.buf[self.tail] = Some(elem);
        self.tail = (self.tail + 1) % self.buf.len();
        self.count += 1;
    }

    ////////////////////////////////////////////////////////////////////
    // peek

    /// Returns the element at the front of the queue.
    /// The result is unspecified (okay to panic) if the queue is empty.
    pub fn peek(&self) -> &T {
        match &self.buf[self.head] {
            Some(elem) => elem,
            None => vacant_slot(),
        }
    }

    /// Returns the element at the front of the queue, or `None` if the queue is empty.
    pub fn front(&self) -> Option<&T> {
        (self.count > 0).then(|| self.peek())
    }

    ////////////////////////////////////////////////////////////////////
    // index

    /// Returns the `i`-th element from the front.
    /// Panics if the index is out of bounds.
    pub fn get(&self, i: usize) -> &T {
        match self.try_get(i) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }

    /// Returns the `i`-th element from the front.
    /// Panics if the index is out of bounds.
    pub fn get_mut(&mut self, i: usize) -> &mut T {
        if let Err(e) = self.check_index(i) {
            panic!("{}", e);
        }
        let modi = self.wrap(i);
        match &mut self.buf[modi] {
            Some(elem) => elem,
            None => vacant_slot(),
        }
    }

    /// Returns the `i`-th element from the front, or [`IndexOutOfRange`] if `i >= self.len()`.
    pub fn try_get(&self, i: usize) -> Result<&T, IndexOutOfRange> {
        self.check_index(i)?;
        match &self.buf[self.wrap(i)] {
            Some(elem) => Ok(elem),
            None => vacant_slot(),
        }
    }

    fn check_index(&self, i: usize) -> Result<(), IndexOutOfRange> {
        if i < self.count {
            Ok(())
        } else {
            Err(IndexOutOfRange { index: i, len: self.count })
        }
    }

    /// Maps a logical index to a buffer slot.
    fn wrap(&self, i: usize) -> usize {
        (self.head + i) % self.buf.len()
    }

    ////////////////////////////////////////////////////////////////////
    // remove

    /// Removes and drops the element at the front of the queue, shrinking the buffer if it has
    /// become sparse.
    /// If the queue is empty, the queue is left in an unspecified state (okay to panic).
    pub fn remove(&mut self) {
        self.buf[self.head] = None;
        self.advance_head();
    }

    /// Removes the element at the front of the queue and returns it;
    /// `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.count == 0 { return None; }
        let front = self.buf[self.head].take();
        self.advance_head();
        front
    }

    fn advance_head(&mut self) {
        self.head = (self.head + 1) % self.buf.len();
        self.count -= 1;
        if self.buf.len() > Self::MIN_CAPACITY && self.count * 4 <= self.buf.len() {
            self.resize();
        }
    }

    ////////////////////////////////////////////////////////////////////
    // resize

    /// Moves the live elements into a new buffer of `2 * count` slots, starting at slot `0`.
    /// Serves both growth (called when full) and shrinking (called at quarter occupancy).
    fn resize(&mut self) {
        let capacity = self.count * 2;
        debug_assert!(capacity >= Self::MIN_CAPACITY);
        log::trace!(
            "ring queue resize: {} -> {} slots ({} live)",
            self.buf.len(), capacity, self.count,
        );

        let mut buf = Vec::with_capacity(capacity);
        if self.tail > self.head {
            buf.extend(self.buf[self.head..self.tail].iter_mut().map(Option::take));
        } else {
            // wrapped (or full): [head, capacity) then [0, tail)
            buf.extend(self.buf[self.head..].iter_mut().map(Option::take));
            buf.extend(self.buf[..self.tail].iter_mut().map(Option::take));
        }
        buf.resize_with(capacity, || None);

        self.head = 0;
        self.tail = self.count;
        self.buf = buf.into_boxed_slice();
    }
}

impl<T>
Default for RingQueue<T> {
    fn default() -> Self { Self::new() }
}

impl<T>
Index<usize> for RingQueue<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T { self.get(i) }
}

impl<T>
IndexMut<usize> for RingQueue<T> {
    fn index_mut(&mut self, i: usize) -> &mut T { self.get_mut(i) }
}

impl<T>
FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

impl<T>
Extend<T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

// Two queues are equal if they hold equal elements in the same order; capacity and where the
// elements sit in the buffer do not matter.
impl<T: PartialEq>
PartialEq for RingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && (0..self.count).all(|i| self.get(i) == other.get(i))
    }
}

impl<T: Eq>
Eq for RingQueue<T> {}

impl<T: Debug>
Debug for RingQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries((0..self.count).map(|i| self.get(i))).finish()
    }
}
