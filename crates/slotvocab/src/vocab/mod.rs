//! # Vocabulary
//!
//! This module provides the global/local vocabulary machinery and related io.
//!
//! ## Global Vocabulary
//!
//! The session-wide, append-only ``{ K <-> T }`` bijection is an [`Indexer`].
//! It is an explicit value: callers own it, thread it by `&mut` borrow
//! into every indexing call, and choose whether to persist it (see [`io`]).
//!
//! Any [`KeyInterner`] can stand in for the global vocabulary; see
//! [`crate::concurrency::SharedIndexer`] for a lock-serialized handle.
//!
//! ## Local Vocabulary
//!
//! [`local_vocabulary`] re-indexes a batch of [`ValuedTuple`]s into
//! [`IndexedTuple`]s over a compact local id space, and returns the
//! [`LocalVocab`] mapping local indices back to global ids.
pub mod indexer;
pub mod interner;
pub mod io;
pub mod local_vocab;
pub mod utility;

#[doc(inline)]
pub use indexer::Indexer;
#[doc(inline)]
pub use interner::KeyInterner;
#[doc(inline)]
pub use local_vocab::{
    IndexedTuple,
    LocalBatch,
    LocalVocab,
    ValuedTuple,
    index_locally,
    local_vocabulary,
    resolve_globally,
};
