use std::path::PathBuf;

use slotvocab::{
    SVResult,
    batch::{BatchOptions, LocalRecord, ReadingRecord},
    vocab::io::save_vocab_path,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    vocab_args::{CliId, CliVocab, VocabArgs},
};

/// Record values are passed through untouched.
type Value = serde_json::Value;

/// Args for the index command.
#[derive(clap::Args, Debug)]
pub struct IndexArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    vocab: VocabArgs,

    /// Optional path to save the grown vocabulary to.
    #[clap(long, default_value = None)]
    save_vocab: Option<PathBuf>,

    /// Run the per-record local phase in parallel.
    #[clap(long)]
    parallel: bool,
}

impl IndexArgs {
    /// Run the index command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let voc = self.vocab.load_vocab()?;
        let options = BatchOptions::default().with_parallel(self.parallel);

        let records: Vec<ReadingRecord<String, Value>> = self.input.read_records()?;
        let (indexed, voc) = index_batch(&records, voc, options)?;
        self.output.write_records(&indexed)?;

        if let Some(path) = &self.save_vocab {
            save_vocab_path(&voc, path)?;
        }

        Ok(())
    }
}

/// Index a batch against the seed vocabulary; returns the grown vocabulary.
fn index_batch(
    records: &[ReadingRecord<String, Value>],
    voc: CliVocab,
    options: BatchOptions,
) -> SVResult<(Vec<LocalRecord<CliId, Value>>, CliVocab)> {
    let (indexed, voc) = options.create_local_voc(records, Some(voc))?;
    log::info!("indexed {} records; {} keys", indexed.len(), voc.len());
    Ok((indexed, voc))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::input_output::{read_jsonl, write_jsonl};

    const RECORDS: &str = concat!(
        r#"{"inputs":[{"keys":["Alice","likes","Bob"],"value":true}],"#,
        r#""outputs":[{"keys":["Bob","likes","Alice"],"value":false}]}"#,
        "\n\n",
        r#"{"inputs":[{"keys":["Bob","sings"],"value":0.5}],"outputs":[]}"#,
        "\n",
    );

    #[test]
    fn test_index_batch() {
        let records: Vec<ReadingRecord<String, Value>> =
            read_jsonl(RECORDS.as_bytes()).unwrap();
        let voc = CliVocab::from_keys(["likes"]).unwrap();

        let (indexed, voc) = index_batch(&records, voc, BatchOptions::default()).unwrap();
        assert_eq!(voc.keys(), &["likes", "Alice", "Bob", "sings"]);

        let mut out: Vec<u8> = Vec::new();
        write_jsonl(&mut out, &indexed).unwrap();
        let lines: Vec<Value> = read_jsonl(out.as_slice()).unwrap();
        assert_eq!(
            lines,
            vec![
                json!({
                    "inputs": [{"slots": [0, 1, 2], "value": true}],
                    "outputs": [{"slots": [2, 1, 0], "value": false}],
                    "local_voc": [1, 0, 2],
                }),
                json!({
                    "inputs": [{"slots": [0, 1], "value": 0.5}],
                    "outputs": [],
                    "local_voc": [2, 3],
                }),
            ]
        );
    }

    #[test]
    fn test_record_shape_is_checked() {
        let text = "{\"inputs\": 3}\n";
        let err = read_jsonl::<ReadingRecord<String, Value>, _>(text.as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("parse error: line 1:"), "{err}");
    }
}
