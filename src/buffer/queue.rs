use std::{
    fmt::Debug,
    iter::FusedIterator,
    mem,
    ops::{Index, IndexMut},
};

use crate::error::QueueError;

use super::{empty_slots, BoundedStack};

/// Fixed-capacity FIFO ring buffer.
///
/// Occupied slots run from `head` for `len` positions, wrapping at the end of
/// the backing storage. Insertion into a full queue is refused, never
/// overwrites.
#[derive(Clone, Debug)]
pub struct BoundedQueue<T> {
    head: usize,
    len: usize,
    elements: Box<[Option<T>]>,
}

impl<T> BoundedQueue<T>
where
    T: Debug,
{
    pub fn new(capacity: usize) -> Self {
        assert!(capacity.ge(&1));

        Self {
            head: 0,
            len: 0,
            elements: empty_slots(capacity),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    pub(crate) const fn head(&self) -> usize {
        self.head
    }

    #[inline]
    pub(crate) fn tail(&self) -> usize {
        self.slot(self.len)
    }

    #[inline]
    fn slot(&self, rank: usize) -> usize {
        (self.head + rank) % self.capacity()
    }

    #[inline]
    fn head_forward(&mut self) {
        self.head = self.slot(1);
    }

    pub fn enqueue(&mut self, elem: T) -> Result<(), QueueError<T>> {
        if self.is_full() {
            return Err(QueueError::QueueFullInsertionError(elem));
        }

        let index = self.tail();
        self.elements[index] = Some(elem);
        self.len += 1;

        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T, QueueError<T>> {
        if self.is_empty() {
            return Err(QueueError::QueueEmptyError);
        }

        let index = self.head();
        let elem = self.elements[index]
            .take()
            .ok_or(QueueError::QueueEmptyError)?;

        self.head_forward();
        self.len -= 1;

        Ok(elem)
    }

    /// Element at `rank` positions behind the front.
    pub fn get(&self, rank: usize) -> Option<&T> {
        if rank >= self.len {
            return None;
        }

        self.elements[self.slot(rank)].as_ref()
    }

    pub fn get_mut(&mut self, rank: usize) -> Option<&mut T> {
        if rank >= self.len {
            return None;
        }

        let index = self.slot(rank);
        self.elements[index].as_mut()
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Exchanges the element at `rank` with the one `stack_rank` below the
    /// top of `stack`. Neither length changes. `None` if either slot is
    /// unoccupied, in which case nothing moved.
    pub(crate) fn swap_with(
        &mut self,
        rank: usize,
        stack: &mut BoundedStack<T>,
        stack_rank: usize,
    ) -> Option<()> {
        let queued = self.get_mut(rank)?;
        let reserved = stack.get_mut(stack_rank)?;
        mem::swap(queued, reserved);

        Some(())
    }

    /// Walks the queue front to back without consuming it.
    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter {
            queue: self,
            rank: 0,
        }
    }
}

impl<T> Index<usize> for BoundedQueue<T>
where
    T: Debug,
{
    type Output = T;

    fn index(&self, rank: usize) -> &Self::Output {
        assert!(rank < self.len());
        self.get(rank).expect("occupied slot should hold an element")
    }
}

impl<T> IndexMut<usize> for BoundedQueue<T>
where
    T: Debug,
{
    fn index_mut(&mut self, rank: usize) -> &mut Self::Output {
        assert!(rank < self.len());
        self.get_mut(rank)
            .expect("occupied slot should hold an element")
    }
}

#[derive(Debug)]
pub struct QueueIter<'a, T> {
    queue: &'a BoundedQueue<T>,
    rank: usize,
}

impl<T> Clone for QueueIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            rank: self.rank,
        }
    }
}

impl<'a, T> Iterator for QueueIter<'a, T>
where
    T: Debug,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.queue.get(self.rank)?;
        self.rank += 1;

        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len().saturating_sub(self.rank);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for QueueIter<'_, T> where T: Debug {}

impl<T> FusedIterator for QueueIter<'_, T> where T: Debug {}

impl<'a, T> IntoIterator for &'a BoundedQueue<T>
where
    T: Debug,
{
    type Item = &'a T;
    type IntoIter = QueueIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
