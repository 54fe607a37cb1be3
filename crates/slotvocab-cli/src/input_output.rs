//! JSONL record streams: one JSON value per line.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Serialize, de::DeserializeOwned};
use slotvocab::{SVResult, SlotVocabError};

/// `None` selects stdio; "-" is an explicit request for it.
fn stream_path(path: &Option<String>) -> Option<&Path> {
    path.as_deref().filter(|p| *p != "-").map(Path::new)
}

/// JSONL input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional JSONL input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Read every record of the input.
    pub fn read_records<R: DeserializeOwned>(
        &self
    ) -> Result<Vec<R>, Box<dyn std::error::Error>> {
        let records = match stream_path(&self.input) {
            None => read_jsonl(std::io::stdin().lock())?,
            Some(path) => {
                let records = read_jsonl(BufReader::new(File::open(path)?))?;
                log::info!("read {} records from {}", records.len(), path.display());
                records
            }
        };
        Ok(records)
    }
}

/// JSONL output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional JSONL output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Write every record to the output, one per line.
    pub fn write_records<R: Serialize>(
        &self,
        records: &[R],
    ) -> Result<(), Box<dyn std::error::Error>> {
        match stream_path(&self.output) {
            None => write_jsonl(BufWriter::new(std::io::stdout().lock()), records)?,
            Some(path) => write_jsonl(BufWriter::new(File::create(path)?), records)?,
        }
        Ok(())
    }
}

/// Parse one record per non-blank line.
///
/// ## Returns
/// The records; or [`SlotVocabError::Parse`] naming the 1-based line
/// which failed to parse.
pub fn read_jsonl<R, B>(reader: B) -> SVResult<Vec<R>>
where
    R: DeserializeOwned,
    B: BufRead,
{
    let mut records = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .map_err(|e| SlotVocabError::Parse(format!("line {}: {e}", line_no + 1)))?;
        records.push(record);
    }
    Ok(records)
}

/// Write one compact JSON record per line, then flush.
pub fn write_jsonl<R, W>(
    mut writer: W,
    records: &[R],
) -> SVResult<()>
where
    R: Serialize,
    W: Write,
{
    for record in records {
        serde_json::to_writer(&mut writer, record).map_err(std::io::Error::from)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
