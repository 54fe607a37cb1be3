//! # Vocabulary IO
//!
//! The global vocabulary is persisted as plain text: one key per line,
//! where the (0-based) line number is the id.
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use slotvocab::vocab::{Indexer, io::load_vocab_path};
//!
//! fn example() -> slotvocab::SVResult<Indexer<String>> {
//!     let voc: Indexer<String> = load_vocab_path("global.vocab")?;
//!     Ok(voc)
//! }
//! ```

mod line_vocab;

#[doc(inline)]
pub use line_vocab::*;
