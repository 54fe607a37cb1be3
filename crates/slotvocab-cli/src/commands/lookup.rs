use std::{io::Write, path::PathBuf};

use slotvocab::vocab::io::load_vocab_path;

use crate::vocab_args::{CliId, CliVocab};

/// Args for the lookup command.
#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// Line vocab file.
    #[clap(long)]
    vocab: PathBuf,

    /// Global ids to look up.
    #[arg(required = true, num_args = 1..)]
    ids: Vec<CliId>,
}

impl LookupArgs {
    /// Run the lookup command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let voc: CliVocab = load_vocab_path(&self.vocab)?;
        let mut writer = std::io::stdout().lock();
        write_lookup(&mut writer, &voc, &self.ids)
    }
}

fn write_lookup(
    writer: &mut dyn Write,
    voc: &CliVocab,
    ids: &[CliId],
) -> Result<(), Box<dyn std::error::Error>> {
    for &id in ids {
        writeln!(writer, "{id}\t{}", voc.try_lookup_key(id)?)?;
    }
    writer.flush()?;
    Ok(())
}
