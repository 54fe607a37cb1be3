//! # Batch Indexing
//!
//! Machine-reading data arrives as [`ReadingRecord`]s: a context (`inputs`)
//! and a set of questions (`outputs`). [`create_local_voc`] indexes every
//! record against its own [`LocalVocab`](crate::vocab::LocalVocab), while
//! growing one shared global vocabulary across the batch.
//!
//! [`BatchOptions`] controls how the batch is processed.

mod batch_options;
mod local_voc_batch;
mod records;

#[doc(inline)]
pub use batch_options::BatchOptions;
#[doc(inline)]
pub use local_voc_batch::create_local_voc;
#[doc(inline)]
pub use records::{LocalRecord, ReadingRecord};
