//! # Concurrency Tools
//!
//! [`SharedIndexer`] lets several producers grow one global vocabulary;
//! any function which takes a [`KeyInterner`](crate::vocab::KeyInterner)
//! accepts it in place of a plain [`Indexer`](crate::vocab::Indexer).

mod shared_indexer;

#[doc(inline)]
pub use shared_indexer::SharedIndexer;
