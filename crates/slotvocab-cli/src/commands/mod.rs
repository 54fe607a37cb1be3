mod index;
mod lookup;

/// Subcommands for slotvocab-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Index a JSONL stream of reading records.
    Index(index::IndexArgs),

    /// Print the keys of global ids.
    Lookup(lookup::LookupArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Index(cmd) => cmd.run(),
            Commands::Lookup(cmd) => cmd.run(),
        }
    }
}
