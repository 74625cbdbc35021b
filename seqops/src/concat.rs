use std::marker::PhantomData;
use std::ops::ControlFlow;

use crate::sequence::Sequence;

/// A sequence over several slices, one after the other.
#[derive(Debug)]
pub struct Concat<'a, P, T> {
    parts: &'a [P],
    _item: PhantomData<&'a T>,
}

impl<P, T> Clone for Concat<'_, P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, T> Copy for Concat<'_, P, T> {}

/// Concatenate materialized sequences.
///
/// The resulting sequence yields every item of the first part, then every
/// item of the second, and so on. Nothing is copied; the items are yielded
/// by reference. Stopping halts immediately, so remaining parts are never
/// visited.
///
/// Parts can be anything that can be viewed as a slice: arrays, vectors,
/// slice references, boxed slices.
pub fn concat<P, T>(parts: &[P]) -> Concat<'_, P, T>
where
    P: AsRef<[T]>,
{
    Concat {
        parts,
        _item: PhantomData,
    }
}

impl<'a, P, T> Sequence for Concat<'a, P, T>
where
    P: AsRef<[T]>,
    T: 'a,
{
    type Item = &'a T;

    #[inline]
    fn drive<F>(&mut self, mut step: F) -> ControlFlow<()>
    where
        F: FnMut(&'a T) -> ControlFlow<()>,
    {
        let parts: &'a [P] = self.parts;
        for part in parts {
            for item in <P as AsRef<[T]>>::as_ref(part) {
                step(item)?;
            }
        }
        ControlFlow::Continue(())
    }
}

/// A sequence over several sequences, one after the other.
#[derive(Debug, Clone)]
pub struct ConcatSequences<S> {
    sequences: Vec<S>,
}

/// Concatenate lazy sequences.
///
/// Each sequence is driven in turn. Only as many items are pulled from the
/// inputs as the consumer actually takes: once the consumer stops, the
/// current input is stopped too and the later ones are never driven. This
/// makes it possible to concatenate infinite sequences.
///
/// To concatenate sequences of different types, box them first with
/// [`SequenceExt::boxed`](crate::SequenceExt::boxed).
pub fn concat_sequences<I>(sequences: I) -> ConcatSequences<I::Item>
where
    I: IntoIterator,
    I::Item: Sequence,
{
    ConcatSequences {
        sequences: sequences.into_iter().collect(),
    }
}

impl<S> Sequence for ConcatSequences<S>
where
    S: Sequence,
{
    type Item = S::Item;

    #[inline]
    fn drive<F>(&mut self, mut step: F) -> ControlFlow<()>
    where
        F: FnMut(S::Item) -> ControlFlow<()>,
    {
        for sequence in &mut self.sequences {
            sequence.drive(&mut step)?;
        }
        ControlFlow::Continue(())
    }
}
