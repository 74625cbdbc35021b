use std::ops::ControlFlow;

use super::traits::Sequence;

/// An object safe version of [`Sequence`].
///
/// `Sequence::drive` is generic over the step function so it cannot be
/// called through a trait object. This trait takes the step function as a
/// trait object instead, and is implemented for every sequence.
pub trait DynSequence {
    /// The type of the items produced.
    type Item;

    /// Drive the sequence with a type-erased step function.
    ///
    /// Behaves like [`Sequence::drive`].
    fn drive_dyn(&mut self, step: &mut dyn FnMut(Self::Item) -> ControlFlow<()>)
        -> ControlFlow<()>;
}

impl<S> DynSequence for S
where
    S: Sequence,
{
    type Item = S::Item;

    #[inline]
    fn drive_dyn(&mut self, step: &mut dyn FnMut(S::Item) -> ControlFlow<()>) -> ControlFlow<()> {
        self.drive(step)
    }
}

/// A sequence with its concrete type erased.
///
/// Use this to put sequences of different types side by side, for instance
/// to concatenate them.
pub type BoxedSequence<'a, T> = Box<dyn DynSequence<Item = T> + 'a>;

impl<T> Sequence for Box<dyn DynSequence<Item = T> + '_> {
    type Item = T;

    #[inline]
    fn drive<F>(&mut self, mut step: F) -> ControlFlow<()>
    where
        F: FnMut(T) -> ControlFlow<()>,
    {
        (**self).drive_dyn(&mut step)
    }
}
