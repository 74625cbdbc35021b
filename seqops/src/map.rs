use std::ops::ControlFlow;

use crate::sequence::Sequence;

/// A sequence that transforms every item of another sequence.
///
/// Created by [`map`] or [`SequenceExt::map`](crate::SequenceExt::map).
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    sequence: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(sequence: S, f: F) -> Self {
        Map { sequence, f }
    }
}

/// Map every item of a sequence through `f`.
///
/// One output per input, in the same order. `f` runs exactly once per item
/// and only when the consumer asks for it.
pub fn map<S, F, R>(sequence: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> R,
{
    Map::new(sequence, f)
}

impl<S, F, R> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> R,
{
    type Item = R;

    #[inline]
    fn drive<G>(&mut self, mut step: G) -> ControlFlow<()>
    where
        G: FnMut(R) -> ControlFlow<()>,
    {
        let f = &mut self.f;
        self.sequence.drive(|item| step(f(item)))
    }
}

/// A sequence that clones the items of a sequence of references.
#[derive(Debug, Clone)]
pub struct Cloned<S> {
    sequence: S,
}

impl<S> Cloned<S> {
    pub(crate) fn new(sequence: S) -> Self {
        Cloned { sequence }
    }
}

/// Clone every item of a sequence of references.
pub fn cloned<'a, S, T>(sequence: S) -> Cloned<S>
where
    S: Sequence<Item = &'a T>,
    T: Clone + 'a,
{
    Cloned::new(sequence)
}

impl<'a, S, T> Sequence for Cloned<S>
where
    S: Sequence<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;

    #[inline]
    fn drive<F>(&mut self, mut step: F) -> ControlFlow<()>
    where
        F: FnMut(T) -> ControlFlow<()>,
    {
        self.sequence.drive(|item| step(item.clone()))
    }
}
