use std::path::PathBuf;

use slotvocab::{SVResult, vocab::io::load_vocab_path};

/// The id type used by the command line tools.
pub type CliId = u32;

/// The global vocabulary type used by the command line tools.
pub type CliVocab = slotvocab::Indexer<String, CliId>;

/// Global vocabulary argument group.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Optional line vocab file to seed the global vocabulary.
    #[clap(long, default_value = None)]
    pub vocab: Option<PathBuf>,
}

impl VocabArgs {
    /// Load the seed vocabulary; or start empty.
    pub fn load_vocab(&self) -> SVResult<CliVocab> {
        match &self.vocab {
            Some(path) => load_vocab_path(path),
            None => {
                log::info!("starting from an empty vocabulary");
                Ok(CliVocab::default())
            }
        }
    }
}
