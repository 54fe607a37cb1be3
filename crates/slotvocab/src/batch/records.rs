//! # Reading Records

use crate::vocab::{IndexedTuple, LocalVocab, ValuedTuple};

/// One machine-reading sample.
///
/// The `inputs` are the context the reader consumes;
/// the `outputs` are the questions, each paired with its answer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadingRecord<K, V> {
    /// Context tuples.
    pub inputs: Vec<ValuedTuple<K, V>>,

    /// Question tuples.
    pub outputs: Vec<ValuedTuple<K, V>>,
}

impl<K, V> ReadingRecord<K, V> {
    /// Build a new record.
    pub fn new(
        inputs: Vec<ValuedTuple<K, V>>,
        outputs: Vec<ValuedTuple<K, V>>,
    ) -> Self {
        Self { inputs, outputs }
    }

    /// Iterate over the inputs, then the outputs.
    pub fn tuples(&self) -> impl Iterator<Item = &ValuedTuple<K, V>> {
        self.inputs.iter().chain(self.outputs.iter())
    }
}

/// A [`ReadingRecord`] re-indexed against its own local vocabulary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalRecord<T, V> {
    /// Context tuples, as local slots.
    pub inputs: Vec<IndexedTuple<T, V>>,

    /// Question tuples, as local slots.
    pub outputs: Vec<IndexedTuple<T, V>>,

    /// The record's ``{ local index -> global id }`` map.
    pub local_voc: LocalVocab<T>,
}

impl<T, V> LocalRecord<T, V> {
    /// Split a concatenated ``inputs ++ outputs`` sequence back into its parts.
    ///
    /// ## Arguments
    /// * `tuples` - the indexed concatenation.
    /// * `n_inputs` - the length of the inputs prefix.
    /// * `local_voc` - the local vocabulary of the concatenation.
    pub fn split(
        mut tuples: Vec<IndexedTuple<T, V>>,
        n_inputs: usize,
        local_voc: LocalVocab<T>,
    ) -> Self {
        let outputs = tuples.split_off(n_inputs.min(tuples.len()));
        Self {
            inputs: tuples,
            outputs,
            local_voc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuples_order() {
        let record: ReadingRecord<&str, i32> = ReadingRecord::new(
            vec![ValuedTuple::new(["a"], 1), ValuedTuple::new(["b"], 2)],
            vec![ValuedTuple::new(["c"], 3)],
        );
        let values: Vec<i32> = record.tuples().map(|t| t.value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_split() {
        let tuples: Vec<IndexedTuple<u32, i32>> = vec![
            IndexedTuple::new(vec![0], 1),
            IndexedTuple::new(vec![1], 2),
            IndexedTuple::new(vec![0, 1], 3),
        ];
        let record = LocalRecord::split(tuples, 2, LocalVocab::from(vec![5, 6]));
        assert_eq!(record.inputs.len(), 2);
        assert_eq!(record.outputs, vec![IndexedTuple::new(vec![0, 1], 3)]);
        assert_eq!(record.local_voc.as_slice(), &[5, 6]);
    }
}
