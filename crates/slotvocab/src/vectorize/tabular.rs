//! # Tabular Data as Reading Records
//!
//! A multi-output regression/classification table is phrased as reading:
//! the features of row `i` are the context, the targets are the questions.
//!
//! Every tuple is ``[0, column]``: key `0` is the row entity, and with
//! `n_cat` target columns the column keys are:
//! * `1..=n_cat` - the targets,
//! * `n_cat + 1` - the intercept, when enabled,
//! * `n_cat + 2 + j` - feature `j` (`n_cat + 1 + j` without intercept).

use crate::{
    batch::ReadingRecord,
    errors::{SVResult, SlotVocabError},
    vocab::ValuedTuple,
};

/// The key of the row entity.
pub const ROW_KEY: usize = 0;

/// Convert a feature matrix and a target matrix into reading records.
///
/// ## Arguments
/// * `x` - feature rows.
/// * `y` - target rows; one column per target. A single target is a
///   one-column matrix.
/// * `intercept` - prepend a constant `1.0` intercept input.
///
/// ## Returns
/// One [`ReadingRecord`] per row; or [`SlotVocabError::ShapeMismatch`] if
/// the row counts differ, or the target rows are ragged.
pub fn multitask_to_records(
    x: &[Vec<f32>],
    y: &[Vec<f32>],
    intercept: bool,
) -> SVResult<Vec<ReadingRecord<usize, f32>>> {
    if x.len() != y.len() {
        return Err(SlotVocabError::ShapeMismatch {
            expected: format!("{} target rows", x.len()),
            got: format!("{}", y.len()),
        });
    }

    let n_cat = y.first().map(Vec::len).unwrap_or_default();
    let feature_offset = if intercept { n_cat + 2 } else { n_cat + 1 };

    x.iter()
        .zip(y.iter())
        .map(|(features, targets)| {
            if targets.len() != n_cat {
                return Err(SlotVocabError::ShapeMismatch {
                    expected: format!("{n_cat} target columns"),
                    got: format!("{}", targets.len()),
                });
            }

            let mut inputs = Vec::with_capacity(features.len() + usize::from(intercept));
            if intercept {
                inputs.push(ValuedTuple::from((vec![ROW_KEY, n_cat + 1], 1.0)));
            }
            inputs.extend(
                features
                    .iter()
                    .enumerate()
                    .map(|(j, &v)| ValuedTuple::from((vec![ROW_KEY, j + feature_offset], v))),
            );

            let outputs = targets
                .iter()
                .enumerate()
                .map(|(c, &v)| ValuedTuple::from((vec![ROW_KEY, c + 1], v)))
                .collect();

            Ok(ReadingRecord::new(inputs, outputs))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::create_local_voc;

    #[test]
    fn test_with_intercept() {
        let x = vec![vec![0.5, -1.0]];
        let y = vec![vec![1.0]];
        let records = multitask_to_records(&x, &y, true).unwrap();

        let record = &records[0];
        let keys: Vec<Vec<usize>> = record.inputs.iter().map(|t| t.keys.clone()).collect();
        assert_eq!(keys, vec![vec![0, 2], vec![0, 3], vec![0, 4]]);
        let values: Vec<f32> = record.inputs.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![1.0, 0.5, -1.0]);

        assert_eq!(record.outputs.len(), 1);
        assert_eq!(record.outputs[0].keys, vec![0, 1]);
        assert_eq!(record.outputs[0].value, 1.0);
    }

    #[test]
    fn test_without_intercept() {
        let x = vec![vec![2.0], vec![3.0]];
        let y = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let records = multitask_to_records(&x, &y, false).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].inputs.len(), 1);
        assert_eq!(records[1].inputs[0].keys, vec![0, 3]);
        assert_eq!(records[1].inputs[0].value, 3.0);
        assert_eq!(records[1].outputs[1].keys, vec![0, 2]);
        assert_eq!(records[1].outputs[1].value, 0.0);
    }

    #[test]
    fn test_shape_mismatch() {
        let x = vec![vec![1.0], vec![2.0]];
        assert!(matches!(
            multitask_to_records(&x, &[vec![1.0]], true),
            Err(SlotVocabError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            multitask_to_records(&x, &[vec![1.0], vec![1.0, 2.0]], true),
            Err(SlotVocabError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_records_index_with_shared_keys() {
        let x = vec![vec![0.1, 0.2], vec![0.3, 0.4]];
        let y = vec![vec![1.0], vec![0.0]];
        let records = multitask_to_records(&x, &y, true).unwrap();

        let (local, voc) = create_local_voc::<usize, u32, f32>(&records, None).unwrap();

        // Both rows share the same key layout.
        assert_eq!(local[0].local_voc, local[1].local_voc);
        assert_eq!(local[0].inputs[1].slots, vec![0, 2]);
        assert_eq!(local[0].outputs[0].slots, vec![0, 4]);
        assert_eq!(voc.len(), 5);
        assert_eq!(voc.lookup_id(&1), Some(4));
    }
}
