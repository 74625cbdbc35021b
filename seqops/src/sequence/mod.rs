//! A sequence is a lazy producer of items, driven by a consumer that decides
//! after every item whether it wants more.
//!
//! The `Sequence` trait is the whole contract; sources and adapters in this
//! crate all implement it.

mod boxed;
mod source;
mod traits;

pub use boxed::{BoxedSequence, DynSequence};
pub use source::{empty, from_fn, from_iter, values, Empty, FromFn, FromIter, Values};
pub use traits::{Sequence, SequenceExt};
