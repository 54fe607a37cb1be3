//! # Padding

use crate::errors::{SVResult, SlotVocabError};

/// Force a list to exactly `n` items.
///
/// Longer lists are truncated; shorter lists are padded by repeating
/// the first item.
///
/// ## Returns
/// The resized list; or [`SlotVocabError::EmptyPadSource`] when an empty
/// list must grow.
pub fn force_list_length<X: Clone>(
    list: &[X],
    n: usize,
) -> SVResult<Vec<X>> {
    if list.len() >= n {
        return Ok(list[..n].to_vec());
    }
    let first = list
        .first()
        .ok_or(SlotVocabError::EmptyPadSource { length: n })?;

    let mut out = Vec::with_capacity(n);
    out.extend_from_slice(list);
    out.resize(n, first.clone());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_list_length() {
        assert_eq!(force_list_length(&[1, 2, 3], 2).unwrap(), vec![1, 2]);
        assert_eq!(force_list_length(&[1, 2, 3], 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(
            force_list_length(&[7, 2], 5).unwrap(),
            vec![7, 2, 7, 7, 7]
        );

        let empty: [u8; 0] = [];
        assert!(force_list_length(&empty, 0).unwrap().is_empty());
        assert!(matches!(
            force_list_length(&empty, 2),
            Err(SlotVocabError::EmptyPadSource { length: 2 })
        ));
    }
}
