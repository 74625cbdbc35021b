use std::ops::ControlFlow;

use crate::sequence::Sequence;

/// A sequence that only yields the items accepted by a predicate.
///
/// Created by [`filter`] or [`SequenceExt::filter`](crate::SequenceExt::filter).
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    sequence: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(sequence: S, predicate: P) -> Self {
        Filter {
            sequence,
            predicate,
        }
    }
}

/// Filter a sequence, keeping the items for which `predicate` returns true.
///
/// The predicate is called exactly once for every upstream item, in order,
/// and only when the consumer asks for more. Nothing is buffered.
pub fn filter<S, P>(sequence: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter::new(sequence, predicate)
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn drive<F>(&mut self, mut step: F) -> ControlFlow<()>
    where
        F: FnMut(S::Item) -> ControlFlow<()>,
    {
        let predicate = &mut self.predicate;
        self.sequence.drive(|item| {
            if predicate(&item) {
                step(item)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}
