//! # Error Types

/// Errors from slotvocab operations.
#[derive(Debug, thiserror::Error)]
pub enum SlotVocabError {
    /// The id was never assigned by the vocabulary.
    #[error("unknown id: {id}")]
    UnknownId {
        /// The id which was looked up.
        id: usize,
    },

    /// Vocab size exceeds the capacity of the target id type.
    #[error("vocab size ({size}) exceeds id type capacity")]
    IdOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// The key cannot be represented in the target format.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Padding was requested from an empty list.
    #[error("cannot pad an empty list to length {length}")]
    EmptyPadSource {
        /// The requested length.
        length: usize,
    },

    /// Row counts or widths disagree.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch {
        /// The expected shape.
        expected: String,
        /// The shape found.
        got: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for slotvocab operations.
pub type SVResult<T> = core::result::Result<T, SlotVocabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SlotVocabError::UnknownId { id: 12 }.to_string(),
            "unknown id: 12"
        );
        assert_eq!(
            SlotVocabError::IdOverflow { size: 257 }.to_string(),
            "vocab size (257) exceeds id type capacity"
        );
        assert_eq!(
            SlotVocabError::EmptyPadSource { length: 3 }.to_string(),
            "cannot pad an empty list to length 3"
        );
    }

    #[test]
    fn test_io_from() {
        let err: SlotVocabError = std::io::Error::other("boom").into();
        assert!(matches!(err, SlotVocabError::Io(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
