//! # Batch Local Vocabulary

use crate::{
    batch::{BatchOptions, LocalRecord, ReadingRecord},
    errors::SVResult,
    types::{IdType, KeyType},
    vocab::{IndexedTuple, Indexer, KeyInterner, index_locally, resolve_globally},
};

/// The output of the local phase for one record.
type LocalPhase<'a, K, T, V> = (Vec<IndexedTuple<T, V>>, Indexer<&'a K, T>);

/// Index a batch of records, each against its own local vocabulary.
///
/// Each record's `inputs ++ outputs` is indexed as one sequence, with a fresh
/// local numbering per record; one global vocabulary is shared and grown
/// across the whole batch.
///
/// ## Arguments
/// * `records` - the batch.
/// * `global_voc` - the global vocabulary to grow; `None` starts empty.
///
/// ## Returns
/// The indexed records, and the final global vocabulary.
pub fn create_local_voc<K, T, V>(
    records: &[ReadingRecord<K, V>],
    global_voc: Option<Indexer<K, T>>,
) -> SVResult<(Vec<LocalRecord<T, V>>, Indexer<K, T>)>
where
    K: KeyType,
    T: IdType,
    V: Clone + Send + Sync,
{
    BatchOptions::default().create_local_voc(records, global_voc)
}

impl BatchOptions {
    /// Index a batch of records, with these options.
    ///
    /// See: [`create_local_voc`].
    pub fn create_local_voc<K, T, V>(
        &self,
        records: &[ReadingRecord<K, V>],
        global_voc: Option<Indexer<K, T>>,
    ) -> SVResult<(Vec<LocalRecord<T, V>>, Indexer<K, T>)>
    where
        K: KeyType,
        T: IdType,
        V: Clone + Send + Sync,
    {
        let mut global = global_voc.unwrap_or_default();
        let new_data = self.index_records(records, &mut global)?;
        Ok((new_data, global))
    }

    /// Index a batch of records against any [`KeyInterner`].
    ///
    /// Global ids are resolved record by record, in batch order; the result is
    /// identical whether or not the local phase ran in parallel.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, records, global), fields(n_records = records.len()))
    )]
    pub fn index_records<K, T, V, G>(
        &self,
        records: &[ReadingRecord<K, V>],
        global: &mut G,
    ) -> SVResult<Vec<LocalRecord<T, V>>>
    where
        K: KeyType,
        T: IdType,
        V: Clone + Send + Sync,
        G: KeyInterner<K, T> + ?Sized,
    {
        let initial_len = global.vocab_len();
        let locals = self.index_records_locally(records)?;

        let mut new_data = Vec::with_capacity(records.len());
        for (idx, (record, (tuples, local))) in records.iter().zip(locals).enumerate() {
            let local_voc = resolve_globally(&local, global)?;
            log::trace!(
                "record {idx}: {} inputs, {} outputs, {} local keys",
                record.inputs.len(),
                record.outputs.len(),
                local_voc.len()
            );
            new_data.push(LocalRecord::split(tuples, record.inputs.len(), local_voc));
        }

        log::debug!(
            "indexed {} records; global vocab {} -> {}",
            new_data.len(),
            initial_len,
            global.vocab_len()
        );

        Ok(new_data)
    }

    fn index_records_locally<'a, K, T, V>(
        &self,
        records: &'a [ReadingRecord<K, V>],
    ) -> SVResult<Vec<LocalPhase<'a, K, T, V>>>
    where
        K: KeyType,
        T: IdType,
        V: Clone + Send + Sync,
    {
        #[cfg(feature = "rayon")]
        {
            if self.parallel() {
                use rayon::prelude::*;
                return records
                    .par_iter()
                    .map(|record| index_locally(record.tuples()))
                    .collect();
            }
        }

        records
            .iter()
            .map(|record| index_locally(record.tuples()))
            .collect()
    }
}
