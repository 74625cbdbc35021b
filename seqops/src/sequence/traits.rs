use std::ops::ControlFlow;

use crate::concat::{concat_sequences, ConcatSequences};
use crate::filter::Filter;
use crate::map::{Cloned, Map};
use crate::terminal;

use super::boxed::BoxedSequence;

/// The core sequence interface: a lazy producer of items.
///
/// A sequence is driven by handing it a step function. The sequence calls
/// `step` once for every item, in order. When `step` returns
/// [`ControlFlow::Break`] the sequence stops producing immediately and
/// `drive` returns `Break` too; when the producer runs out it returns
/// [`ControlFlow::Continue`].
///
/// Driving a sequence again starts over from the beginning: the producer is
/// re-executed, there is no cursor to rewind.
///
/// If you implement this, [`SequenceExt`] provides the rest of the API on top
/// of it.
pub trait Sequence {
    /// The type of the items produced.
    type Item;

    /// Drive the sequence, feeding each item to `step` until it says stop.
    fn drive<F>(&mut self, step: F) -> ControlFlow<()>
    where
        F: FnMut(Self::Item) -> ControlFlow<()>;
}

// driving through a mutable reference lets a caller keep the sequence
// and drive it again later
impl<S> Sequence for &mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn drive<F>(&mut self, step: F) -> ControlFlow<()>
    where
        F: FnMut(Self::Item) -> ControlFlow<()>,
    {
        (**self).drive(step)
    }
}

/// Combinators and terminal operations available on every sequence.
pub trait SequenceExt: Sequence {
    /// Only keep the items for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transform every item with `f`.
    fn map<R, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        Map::new(self, f)
    }

    /// Turn a sequence of references into a sequence of owned clones.
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + Sequence<Item = &'a T>,
        T: Clone + 'a,
    {
        Cloned::new(self)
    }

    /// Follow this sequence by the items of `others`, in order.
    fn concat_with<I>(self, others: I) -> ConcatSequences<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        concat_sequences(std::iter::once(self).chain(others))
    }

    /// Erase the type of this sequence.
    fn boxed<'a>(self) -> BoxedSequence<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Call `f` with the index and value of every item.
    fn for_each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(usize, Self::Item),
    {
        terminal::for_each(self, f)
    }

    /// Left fold over all items, starting with `init`.
    fn reduce<R, F>(self, reducer: F, init: R) -> R
    where
        Self: Sized,
        F: FnMut(R, Self::Item) -> R,
    {
        terminal::reduce(self, reducer, init)
    }

    /// Drive the sequence to completion, gathering its items.
    fn collect<C>(self) -> C
    where
        Self: Sized,
        C: FromIterator<Self::Item>,
    {
        terminal::collect(self)
    }

    /// Drive the sequence to completion into a vector.
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        terminal::to_vec(self)
    }
}

impl<S> SequenceExt for S where S: Sequence + ?Sized {}
