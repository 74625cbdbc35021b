//! Terminal operations: these drive a sequence to the end and produce a
//! plain value instead of another sequence.

use std::ops::ControlFlow;

use tracing::trace;

use crate::sequence::Sequence;

/// Call `f` for every item of the sequence.
///
/// `f` receives the zero-based position of the item in this pass along with
/// the item itself. The whole sequence is consumed; only the sequence itself
/// can end it early.
pub fn for_each<S, F>(mut sequence: S, mut f: F)
where
    S: Sequence,
    F: FnMut(usize, S::Item),
{
    let mut index = 0;
    let _ = sequence.drive(|item| {
        f(index, item);
        index += 1;
        ControlFlow::Continue(())
    });
    trace!(count = index, "for_each consumed sequence");
}

/// Fold the sequence from left to right.
///
/// `reducer` is called with the accumulator and each item in turn, and its
/// result becomes the next accumulator. An empty sequence returns `init`
/// unchanged. There is no short-circuiting.
pub fn reduce<S, F, R>(mut sequence: S, mut reducer: F, init: R) -> R
where
    S: Sequence,
    F: FnMut(R, S::Item) -> R,
{
    let mut count = 0usize;
    // the accumulator moves through the reducer, so it lives in an option
    // for the duration of the drive
    let mut accumulator = Some(init);
    let _ = sequence.drive(|item| {
        accumulator = accumulator.take().map(|acc| reducer(acc, item));
        count += 1;
        ControlFlow::Continue(())
    });
    trace!(count, "reduce consumed sequence");
    // every call above put a new accumulator back before returning, and a
    // panicking reducer unwinds past this point
    accumulator.expect("accumulator is restored after every item")
}

/// Drive the sequence to completion, gathering all items into a collection.
///
/// Any collection that can be built from an iterator works, including boxed
/// and reference counted slices.
pub fn collect<S, C>(sequence: S) -> C
where
    S: Sequence,
    C: FromIterator<S::Item>,
{
    to_vec(sequence).into_iter().collect()
}

/// Drive the sequence to completion, gathering all items into a vector.
pub fn to_vec<S>(mut sequence: S) -> Vec<S::Item>
where
    S: Sequence,
{
    let mut items = Vec::new();
    let _ = sequence.drive(|item| {
        items.push(item);
        ControlFlow::Continue(())
    });
    trace!(count = items.len(), "collected sequence");
    items
}
