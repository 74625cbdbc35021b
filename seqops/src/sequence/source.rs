use std::fmt;
use std::marker::PhantomData;
use std::ops::ControlFlow;

use super::traits::Sequence;

/// A sequence over the items of a slice, by reference.
#[derive(Debug)]
pub struct Values<'a, T> {
    items: &'a [T],
}

// a values sequence is just the slice reference
#[cfg(target_arch = "x86_64")]
static_assertions::assert_eq_size!(Values<'static, u64>, &'static [u64]);

impl<T> Clone for Values<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Values<'_, T> {}

/// Create a sequence over the items of a slice.
pub fn values<T>(items: &[T]) -> Values<'_, T> {
    Values { items }
}

impl<'a, T> Sequence for Values<'a, T> {
    type Item = &'a T;

    #[inline]
    fn drive<F>(&mut self, mut step: F) -> ControlFlow<()>
    where
        F: FnMut(&'a T) -> ControlFlow<()>,
    {
        for item in self.items {
            step(item)?;
        }
        ControlFlow::Continue(())
    }
}

/// A sequence backed by a cloneable iterator.
///
/// Every drive works on a fresh clone of the iterator, so the sequence
/// restarts each time.
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: I,
}

/// Create a sequence from anything that can be iterated over repeatedly.
pub fn from_iter<I>(iterable: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    FromIter {
        iter: iterable.into_iter(),
    }
}

impl<I> Sequence for FromIter<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    #[inline]
    fn drive<F>(&mut self, mut step: F) -> ControlFlow<()>
    where
        F: FnMut(I::Item) -> ControlFlow<()>,
    {
        for item in self.iter.clone() {
            step(item)?;
        }
        ControlFlow::Continue(())
    }
}

/// A sequence produced by a closure.
///
/// The closure receives the step function and calls it once per item. It
/// must return as soon as the step function returns `Break`; using `?` on
/// the step result does exactly that.
pub struct FromFn<T, P> {
    producer: P,
    _item: PhantomData<fn() -> T>,
}

impl<T, P> fmt::Debug for FromFn<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Create a sequence from a producer closure.
///
/// ```
/// use std::ops::ControlFlow;
/// use seqops::{from_fn, Sequence, SequenceExt};
///
/// // an infinite sequence of natural numbers
/// let naturals = from_fn(|step: &mut dyn FnMut(u64) -> ControlFlow<()>| {
///     let mut n = 0;
///     loop {
///         step(n)?;
///         n += 1;
///     }
/// });
/// let mut evens = Vec::new();
/// let _ = naturals.filter(|n| n % 2 == 0).drive(|n| {
///     evens.push(n);
///     if evens.len() == 3 {
///         ControlFlow::Break(())
///     } else {
///         ControlFlow::Continue(())
///     }
/// });
/// assert_eq!(evens, vec![0, 2, 4]);
/// ```
pub fn from_fn<T, P>(producer: P) -> FromFn<T, P>
where
    P: FnMut(&mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()>,
{
    FromFn {
        producer,
        _item: PhantomData,
    }
}

impl<T, P> Sequence for FromFn<T, P>
where
    P: FnMut(&mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()>,
{
    type Item = T;

    #[inline]
    fn drive<F>(&mut self, mut step: F) -> ControlFlow<()>
    where
        F: FnMut(T) -> ControlFlow<()>,
    {
        (self.producer)(&mut step)
    }
}

/// A sequence without any items.
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

/// Create an empty sequence.
pub fn empty<T>() -> Empty<T> {
    Empty { _item: PhantomData }
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    #[inline]
    fn drive<F>(&mut self, _step: F) -> ControlFlow<()>
    where
        F: FnMut(T) -> ControlFlow<()>,
    {
        ControlFlow::Continue(())
    }
}
