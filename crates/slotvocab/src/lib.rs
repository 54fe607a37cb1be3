//! # `slotvocab` Local Vocabulary Indexing
//!
//! This crate indexes batches of keyed tuples (facts, questions, table cells)
//! against a compact per-batch *local* vocabulary, while growing a session-wide
//! *global* vocabulary.
//!
//! A model which only updates the embeddings touched by a batch needs:
//! * the batch re-written over local slots ``0..n``,
//! * the map from each local slot to its global id.
//!
//! See:
//! * [`vocab`] for the global [`vocab::Indexer`], [`vocab::local_vocabulary`], and vocab io.
//! * [`batch`] to index machine-reading [`batch::ReadingRecord`]s.
//! * [`vectorize`] for fixed-shape layouts of indexed records.
//! * [`concurrency`] to share one global vocabulary between producers.
//!
//! ## Example
//!
//! ```rust
//! use slotvocab::vocab::{Indexer, ValuedTuple, local_vocabulary};
//!
//! let mut voc: Indexer<String> = Indexer::from_keys(["likes", "is"])?;
//! let tuples: Vec<ValuedTuple<String, bool>> = vec![
//!     ValuedTuple::new(["Alice", "likes", "Bob"], true),
//!     ValuedTuple::new(["Bob", "is", "alive"], false),
//! ];
//!
//! let batch = local_vocabulary(&tuples, &mut voc)?;
//! assert_eq!(batch.tuples[1].slots, vec![2, 3, 4]);
//! assert_eq!(batch.local_voc.as_slice(), &[2, 0, 3, 1, 4]);
//! assert_eq!(voc.len(), 5);
//! # Ok::<(), slotvocab::SlotVocabError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod batch;
pub mod concurrency;
pub mod errors;
pub mod types;
pub mod vectorize;
pub mod vocab;

#[doc(inline)]
pub use errors::{SVResult, SlotVocabError};
#[doc(inline)]
pub use types::{IdType, KeyType};
#[doc(inline)]
pub use vocab::{Indexer, KeyInterner, LocalVocab};
