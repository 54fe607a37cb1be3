//! # Line Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{SVResult, SlotVocabError},
    types::IdType,
    vocab::Indexer,
};

/// Load an [`Indexer`] from a line vocab file.
///
/// Lines are:
/// ```terminaloutput
/// {KEY}
/// ```
/// and the 0-based line number is the id.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_path<T, P>(path: P) -> SVResult<Indexer<String, T>>
where
    T: IdType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let voc = read_vocab_lines(reader)?;
    log::info!("loaded {} keys from {}", voc.len(), path.display());
    Ok(voc)
}

/// Read an [`Indexer`] from a line vocab reader.
///
/// A key repeated on a later line is an error;
/// every line must receive the id of its line number.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_vocab_lines<T, R>(reader: R) -> SVResult<Indexer<String, T>>
where
    T: IdType,
    R: BufRead,
{
    let mut voc = Indexer::new();

    for (line_no, line) in reader.lines().enumerate() {
        let key = line?;
        if voc.contains(key.as_str()) {
            return Err(SlotVocabError::Parse(format!(
                "duplicate key {key:?} on line {}",
                line_no + 1
            )));
        }
        voc.intern(key)?;
    }

    Ok(voc)
}

/// Save an [`Indexer`] to a line vocab file.
///
/// # Arguments
/// * `voc` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_path<K, T, P>(
    voc: &Indexer<K, T>,
    path: P,
) -> SVResult<()>
where
    K: crate::types::KeyType + AsRef<str>,
    T: IdType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab_lines(voc, &mut writer)?;
    writer.flush()?;
    log::info!("saved {} keys to {}", voc.len(), path.display());
    Ok(())
}

/// Write an [`Indexer`] to a [`Write`] writer, one key per line.
///
/// Keys containing line breaks cannot be represented, and are rejected
/// before anything is written.
pub fn write_vocab_lines<K, T, W>(
    voc: &Indexer<K, T>,
    writer: &mut W,
) -> SVResult<()>
where
    K: crate::types::KeyType + AsRef<str>,
    T: IdType,
    W: Write,
{
    if let Some(key) = voc
        .keys()
        .iter()
        .find(|key| key.as_ref().contains(['\n', '\r']))
    {
        return Err(SlotVocabError::InvalidKey(format!(
            "{:?} contains a line break",
            key.as_ref()
        )));
    }

    for key in voc.keys() {
        writeln!(writer, "{}", key.as_ref())?;
    }

    Ok(())
}
