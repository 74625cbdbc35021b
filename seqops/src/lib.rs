//! Lazy, composable operations over ordered sequences.
//!
//! A [`Sequence`] is a producer that is driven by a consumer: it hands its
//! items one at a time to a step function, which decides after every item
//! whether to go on. Adapters such as [`filter`] and [`map`] wrap a sequence
//! without materializing anything, and terminal operations such as
//! [`reduce`] and [`for_each`] drive a sequence to the end.
//!
//! ```
//! use seqops::{concat, SequenceExt};
//!
//! let parts = [vec![1, 2, 3], vec![7, 8, 9]];
//! let sum = concat(&parts)
//!     .filter(|v| **v % 2 == 0)
//!     .map(|v| v * 10)
//!     .reduce(|acc, v| acc + v, 0);
//! assert_eq!(sum, 100);
//! ```

mod concat;
mod filter;
mod map;
mod sequence;
mod shuffle;
mod terminal;

pub use concat::{concat, concat_sequences, Concat, ConcatSequences};
pub use filter::{filter, Filter};
pub use map::{cloned, map, Cloned, Map};
pub use sequence::{
    empty, from_fn, from_iter, values, BoxedSequence, DynSequence, Empty, FromFn, FromIter,
    Sequence, SequenceExt, Values,
};
#[cfg(feature = "thread-rng")]
pub use shuffle::shuffle;
pub use shuffle::{shuffle_with, Shuffled, Swap};
pub use terminal::{collect, for_each, reduce, to_vec};
