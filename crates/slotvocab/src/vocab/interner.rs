//! # Key Interner Trait

use crate::{
    errors::SVResult,
    types::{IdType, KeyType},
    vocab::Indexer,
};

/// A global vocabulary which can resolve keys to ids, assigning new ids as needed.
///
/// Implementations must be append-only: once a key resolves to an id,
/// it resolves to the same id for the life of the vocabulary.
pub trait KeyInterner<K: KeyType, T: IdType> {
    /// Resolve `key`, assigning the next id if it is new.
    fn intern_key(
        &mut self,
        key: &K,
    ) -> SVResult<T>;

    /// The number of keys in the vocabulary.
    fn vocab_len(&self) -> usize;
}

impl<K: KeyType, T: IdType> KeyInterner<K, T> for Indexer<K, T> {
    fn intern_key(
        &mut self,
        key: &K,
    ) -> SVResult<T> {
        match self.lookup_id(key) {
            Some(id) => Ok(id),
            None => self.intern(key.clone()),
        }
    }

    fn vocab_len(&self) -> usize {
        self.len()
    }
}

impl<K: KeyType, T: IdType, I: KeyInterner<K, T> + ?Sized> KeyInterner<K, T> for &mut I {
    fn intern_key(
        &mut self,
        key: &K,
    ) -> SVResult<T> {
        (**self).intern_key(key)
    }

    fn vocab_len(&self) -> usize {
        (**self).vocab_len()
    }
}
