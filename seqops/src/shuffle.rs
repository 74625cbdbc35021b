use std::collections::VecDeque;
use std::ops::ControlFlow;

use rand::Rng;
use tracing::trace;

use crate::sequence::Sequence;

/// Indexable storage whose items can be swapped in place.
///
/// This is what [`shuffle`] permutes. It is implemented for slices, vectors
/// and deques; implement it yourself for storage that isn't contiguous.
pub trait Swap {
    type Item;

    /// The number of items in the storage.
    fn len(&self) -> usize;

    /// Whether the storage holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The item at `index`, if it exists.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Exchange the items at positions `i` and `j`.
    ///
    /// Both positions are below `len()`.
    fn swap(&mut self, i: usize, j: usize);
}

impl<T> Swap for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }
}

impl<T> Swap for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self.as_slice(), index)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self.as_mut_slice(), i, j)
    }
}

impl<T> Swap for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j)
    }
}

/// A sequence over storage that has been shuffled.
#[derive(Debug)]
pub struct Shuffled<'a, S: ?Sized> {
    storage: &'a S,
}

impl<S: ?Sized> Clone for Shuffled<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Shuffled<'_, S> {}

impl<'a, S> Sequence for Shuffled<'a, S>
where
    S: Swap + ?Sized,
{
    type Item = &'a S::Item;

    #[inline]
    fn drive<F>(&mut self, mut step: F) -> ControlFlow<()>
    where
        F: FnMut(&'a S::Item) -> ControlFlow<()>,
    {
        let storage: &'a S = self.storage;
        let mut index = 0;
        while let Some(item) = storage.get(index) {
            step(item)?;
            index += 1;
        }
        ControlFlow::Continue(())
    }
}

/// Shuffle storage in place using the thread-local random generator.
///
/// See [`shuffle_with`]; the result cannot be reproduced.
#[cfg(feature = "thread-rng")]
pub fn shuffle<S>(storage: &mut S) -> Shuffled<'_, S>
where
    S: Swap + ?Sized,
{
    shuffle_with(storage, &mut rand::thread_rng())
}

/// Shuffle storage in place, then return a sequence over it.
///
/// The storage is permuted with a Fisher-Yates shuffle: going from the last
/// position down to the second, each item is swapped with one at a
/// uniformly chosen position at or before it. With a uniform `rng` every
/// ordering is equally likely.
///
/// The whole permutation happens before this function returns; stopping
/// the returned sequence early leaves the storage fully shuffled. The
/// storage is not copied, so clone it first if you need the original order.
pub fn shuffle_with<'a, S, R>(storage: &'a mut S, rng: &mut R) -> Shuffled<'a, S>
where
    S: Swap + ?Sized,
    R: Rng,
{
    let len = storage.len();
    for i in (1..len).rev() {
        let j = rng.gen_range(0..=i);
        storage.swap(i, j);
    }
    trace!(len, "shuffled storage in place");
    Shuffled { storage }
}
