use std::{fmt::Debug, iter::FusedIterator};

use crate::error::StackError;

use super::empty_slots;

/// Fixed-capacity LIFO reserve.
///
/// Slot `len - 1` is the top. A capacity of zero is allowed and gives a
/// stack that is permanently both empty and full.
#[derive(Clone, Debug)]
pub struct BoundedStack<T> {
    len: usize,
    elements: Box<[Option<T>]>,
}

impl<T> BoundedStack<T>
where
    T: Debug,
{
    pub fn new(capacity: usize) -> Self {
        Self {
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

    /// Slot index of the top element, `None` when empty.
    #[inline]
    pub const fn top(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    #[inline]
    fn slot(&self, rank: usize) -> Option<usize> {
        self.top()?.checked_sub(rank)
    }

    pub fn push(&mut self, elem: T) -> Result<(), StackError<T>> {
        if self.is_full() {
            return Err(StackError::StackFullInsertionError(elem));
        }

        self.elements[self.len] = Some(elem);
        self.len += 1;

        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, StackError<T>> {
        let index = self.top().ok_or(StackError::StackEmptyError)?;
        let elem = self.elements[index]
            .take()
            .ok_or(StackError::StackEmptyError)?;

        self.len = index;

        Ok(elem)
    }

    /// Element `rank` positions below the top.
    pub fn get(&self, rank: usize) -> Option<&T> {
        self.elements[self.slot(rank)?].as_ref()
    }

    pub fn get_mut(&mut self, rank: usize) -> Option<&mut T> {
        let index = self.slot(rank)?;
        self.elements[index].as_mut()
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Walks the stack top to bottom without consuming it.
    pub fn iter(&self) -> StackIter<'_, T> {
        StackIter {
            stack: self,
            rank: 0,
        }
    }
}

#[derive(Debug)]
pub struct StackIter<'a, T> {
    stack: &'a BoundedStack<T>,
    rank: usize,
}

impl<T> Clone for StackIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack,
            rank: self.rank,
        }
    }
}

impl<'a, T> Iterator for StackIter<'a, T>
where
    T: Debug,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.stack.get(self.rank)?;
        self.rank += 1;

        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stack.len().saturating_sub(self.rank);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for StackIter<'_, T> where T: Debug {}

impl<T> FusedIterator for StackIter<'_, T> where T: Debug {}

impl<'a, T> IntoIterator for &'a BoundedStack<T>
where
    T: Debug,
{
    type Item = &'a T;
    type IntoIter = StackIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
