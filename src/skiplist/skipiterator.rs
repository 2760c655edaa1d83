use crate::skiplist::skipnode::{NodeArena, NodeId};
use crate::skiplist::SkipList;

/// In-order iterator over level 0.
pub struct SkipIterator<'a, T> {
    arena: &'a NodeArena<T>,
    cur: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> SkipIterator<'a, T> {
    pub(crate) fn new(arena: &'a NodeArena<T>, first: Option<NodeId>, len: usize) -> Self {
        SkipIterator {
            arena,
            cur: first,
            remaining: len,
        }
    }
}

/**
The iterator borrows the arena for 'a, so no value can be removed
while a reference handed out by the iterator is still alive.
 */
impl<'a, T> IntoIterator for &'a SkipList<T> {
    type Item = &'a T;
    type IntoIter = SkipIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Iterator for SkipIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        self.cur = self.arena.get(id).next();
        self.remaining = self.remaining.saturating_sub(1);
        self.arena.value(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for SkipIterator<'a, T> {}

// drain version of iterator. values left unconsumed are dropped with the drain.
pub struct SkipDrain<'a, T> {
    skiplist: &'a mut SkipList<T>,
}

impl<'a, T> SkipDrain<'a, T> {
    pub(crate) fn new(skiplist: &'a mut SkipList<T>) -> Self {
        SkipDrain { skiplist }
    }
}

impl<'a, T> Iterator for SkipDrain<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.skiplist.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.skiplist.len(), Some(self.skiplist.len()))
    }
}

impl<'a, T> Drop for SkipDrain<'a, T> {
    fn drop(&mut self) {
        if !self.skiplist.is_empty() {
            self.skiplist.clear();
        }
    }
}
