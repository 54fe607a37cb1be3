//! # Fixed-Shape Records

use crate::{
    batch::LocalRecord,
    errors::SVResult,
    types::IdType,
    vectorize::force_list_length,
};

/// A [`LocalRecord`] laid out with a fixed context length.
///
/// Every field has one row per context (or question) position; the context
/// rows are exactly `max_context_length` long.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorizedRecord<T> {
    /// Context slot tuples; padding repeats the first tuple.
    pub context: Vec<Vec<T>>,

    /// Context values; `0.0` on padding.
    pub context_values: Vec<f32>,

    /// Context weights; `1.0` on real tuples, `0.0` on padding.
    pub context_weights: Vec<f32>,

    /// Question slot tuples.
    pub questions: Vec<Vec<T>>,

    /// Question answers.
    pub answers: Vec<f32>,
}

impl<T> VectorizedRecord<T> {
    /// The number of real (weighted) context tuples.
    pub fn context_len(&self) -> usize {
        self.context_weights.iter().filter(|&&w| w > 0.0).count()
    }
}

/// Lay out one record with exactly `max_context_length` context rows.
///
/// Contexts longer than `max_context_length` are truncated.
///
/// ## Returns
/// The vectorized record; or [`SlotVocabError::EmptyPadSource`](crate::SlotVocabError::EmptyPadSource)
/// if the context is empty and `max_context_length > 0`.
pub fn vectorize_record<T, V>(
    record: &LocalRecord<T, V>,
    max_context_length: usize,
) -> SVResult<VectorizedRecord<T>>
where
    T: IdType,
    V: Copy + Into<f32>,
{
    let used = &record.inputs[..record.inputs.len().min(max_context_length)];
    let padding = max_context_length - used.len();

    let slots: Vec<Vec<T>> = used.iter().map(|t| t.slots.clone()).collect();
    let context = force_list_length(&slots, max_context_length)?;

    let mut context_values: Vec<f32> = used.iter().map(|t| t.value.into()).collect();
    context_values.extend(std::iter::repeat_n(0.0, padding));

    let mut context_weights = vec![1.0; used.len()];
    context_weights.extend(std::iter::repeat_n(0.0, padding));

    Ok(VectorizedRecord {
        context,
        context_values,
        context_weights,
        questions: record.outputs.iter().map(|t| t.slots.clone()).collect(),
        answers: record.outputs.iter().map(|t| t.value.into()).collect(),
    })
}

/// Lay out a batch of records with a common context length.
///
/// ## Arguments
/// * `records` - the batch.
/// * `max_context_length` - the context length; `None` uses the longest
///   context in the batch.
pub fn vectorize_records<T, V>(
    records: &[LocalRecord<T, V>],
    max_context_length: Option<usize>,
) -> SVResult<Vec<VectorizedRecord<T>>>
where
    T: IdType,
    V: Copy + Into<f32>,
{
    let max_context_length = max_context_length.unwrap_or_else(|| {
        records
            .iter()
            .map(|r| r.inputs.len())
            .max()
            .unwrap_or_default()
    });

    records
        .iter()
        .map(|record| vectorize_record(record, max_context_length))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        SlotVocabError,
        batch::{ReadingRecord, create_local_voc},
        vocab::{
            IndexedTuple,
            LocalVocab,
            utility::testing::{likes_batch, sings_batch},
        },
    };

    fn record(
        inputs: Vec<(Vec<u32>, f32)>,
        outputs: Vec<(Vec<u32>, f32)>,
    ) -> LocalRecord<u32, f32> {
        let build = |rows: Vec<(Vec<u32>, f32)>| -> Vec<IndexedTuple<u32, f32>> {
            rows.into_iter().map(IndexedTuple::from).collect()
        };
        LocalRecord {
            inputs: build(inputs),
            outputs: build(outputs),
            local_voc: LocalVocab::default(),
        }
    }

    #[test]
    fn test_pad_context() {
        let r = record(
            vec![(vec![0, 1], 0.5), (vec![1, 2], 1.0)],
            vec![(vec![0, 2], 1.0)],
        );
        let v = vectorize_record(&r, 4).unwrap();

        assert_eq!(
            v.context,
            vec![vec![0, 1], vec![1, 2], vec![0, 1], vec![0, 1]]
        );
        assert_eq!(v.context_values, vec![0.5, 1.0, 0.0, 0.0]);
        assert_eq!(v.context_weights, vec![1.0, 1.0, 0.0, 0.0]);
        assert_eq!(v.questions, vec![vec![0, 2]]);
        assert_eq!(v.answers, vec![1.0]);
        assert_eq!(v.context_len(), 2);
    }

    #[test]
    fn test_truncate_context() {
        let r = record(
            vec![(vec![0], 1.0), (vec![1], 2.0), (vec![2], 3.0)],
            vec![],
        );
        let v = vectorize_record(&r, 2).unwrap();

        assert_eq!(v.context, vec![vec![0], vec![1]]);
        assert_eq!(v.context_values, vec![1.0, 2.0]);
        assert_eq!(v.context_weights, vec![1.0, 1.0]);
        assert!(v.questions.is_empty());
    }

    #[test]
    fn test_empty_context() {
        let r = record(vec![], vec![(vec![0], 1.0)]);
        assert!(vectorize_record(&r, 0).unwrap().context.is_empty());
        assert!(matches!(
            vectorize_record(&r, 1),
            Err(SlotVocabError::EmptyPadSource { length: 1 })
        ));
    }

    #[test]
    fn test_vectorize_batch() {
        let records = vec![
            ReadingRecord::new(likes_batch(), sings_batch()),
            ReadingRecord::new(likes_batch()[..1].to_vec(), sings_batch()[..1].to_vec()),
        ];
        let (local, _voc) = create_local_voc::<String, u32, bool>(&records, None).unwrap();

        let vectorized = vectorize_records(&local, None).unwrap();
        assert_eq!(vectorized.len(), 2);
        for v in &vectorized {
            assert_eq!(v.context.len(), 3);
            assert_eq!(v.context_values.len(), 3);
        }
        assert_eq!(vectorized[0].context_values, vec![1.0, 1.0, 0.0]);
        assert_eq!(vectorized[0].answers, vec![1.0, 1.0, 0.0]);
        assert_eq!(vectorized[1].context_weights, vec![1.0, 0.0, 0.0]);
        assert_eq!(vectorized[1].context[2], vectorized[1].context[0]);

        let fixed = vectorize_records(&local, Some(1)).unwrap();
        assert_eq!(fixed[0].context.len(), 1);
    }
}
