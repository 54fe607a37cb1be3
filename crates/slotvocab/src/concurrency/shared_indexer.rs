//! # Shared Global Vocabulary

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    errors::SVResult,
    types::{IdType, KeyType},
    vocab::{Indexer, KeyInterner},
};

/// Interior-Mutable Shared [`Indexer`].
///
/// Assigning the "next id" is not safe under concurrent append, so every
/// insert takes the write lock; lookups of known keys only take the read lock.
///
/// Clones share the same vocabulary.
#[derive(Clone, Debug)]
pub struct SharedIndexer<K: KeyType, T: IdType = u32> {
    inner: Arc<RwLock<Indexer<K, T>>>,
}

impl<K: KeyType, T: IdType> Default for SharedIndexer<K, T> {
    fn default() -> Self {
        Self::new(Indexer::new())
    }
}

impl<K: KeyType, T: IdType> From<Indexer<K, T>> for SharedIndexer<K, T> {
    fn from(indexer: Indexer<K, T>) -> Self {
        Self::new(indexer)
    }
}

impl<K: KeyType, T: IdType> SharedIndexer<K, T> {
    /// Wrap an existing indexer.
    pub fn new(indexer: Indexer<K, T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(indexer)),
        }
    }

    /// Return the id for `key`, assigning the next id if it is new.
    pub fn intern(
        &self,
        key: &K,
    ) -> SVResult<T> {
        if let Some(id) = self.inner.read().lookup_id(key) {
            return Ok(id);
        }

        // Another writer may have inserted the key since the read lock dropped;
        // `intern_key` re-checks under the write lock.
        self.inner.write().intern_key(key)
    }

    /// Look up the id of `key` without assigning one.
    pub fn lookup_id(
        &self,
        key: &K,
    ) -> Option<T> {
        self.inner.read().lookup_id(key)
    }

    /// Look up the key for `id`.
    pub fn lookup_key(
        &self,
        id: T,
    ) -> Option<K> {
        self.inner.read().lookup_key(id).cloned()
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if no key has been interned.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Clone the current state of the vocabulary.
    pub fn snapshot(&self) -> Indexer<K, T> {
        self.inner.read().clone()
    }

    /// Unwrap the vocabulary if this is the last handle;
    /// otherwise return the handle unchanged.
    pub fn try_into_inner(self) -> Result<Indexer<K, T>, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<K: KeyType, T: IdType> KeyInterner<K, T> for SharedIndexer<K, T> {
    fn intern_key(
        &mut self,
        key: &K,
    ) -> SVResult<T> {
        self.intern(key)
    }

    fn vocab_len(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{
        batch::{BatchOptions, ReadingRecord},
        types::{check_is_send, check_is_sync},
        vocab::{
            local_vocabulary,
            utility::testing::{build_seed_vocab, likes_batch, sings_batch},
        },
    };

    #[test]
    fn test_shared_is_threadsafe() {
        let shared: SharedIndexer<String> = SharedIndexer::default();
        check_is_send(shared.clone());
        check_is_sync(shared);
    }

    #[test]
    fn test_shared_local_vocabulary() {
        let mut shared: SharedIndexer<String> = build_seed_vocab::<u32>().into();
        let handle = shared.clone();

        let batch = local_vocabulary(&likes_batch(), &mut shared).unwrap();
        assert_eq!(batch.local_voc.as_slice(), &[9, 0, 10, 11]);

        assert_eq!(handle.len(), 12);
        assert_eq!(handle.lookup_id(&"Carla".to_string()), Some(11));
        assert_eq!(handle.lookup_key(10).as_deref(), Some("Bob"));
        assert_eq!(handle.lookup_key(99), None);

        drop(shared);
        let voc = handle.try_into_inner().unwrap();
        assert_eq!(voc.len(), 12);
    }

    #[test]
    fn test_debug() {
        let voc: Indexer<&str, u16> = Indexer::from_keys(["a", "b"]).unwrap();
        let shared = SharedIndexer::from(voc);
        let rendered = format!("{shared:?}");
        assert!(rendered.starts_with("SharedIndexer"), "{rendered}");
        assert!(rendered.contains(r#"Indexer(["a", "b"])"#), "{rendered}");

        let err = shared.clone().try_into_inner().unwrap_err();
        assert!(format!("{err:?}").contains("Indexer"));
    }

    #[test]
    fn test_try_into_inner_with_clones() {
        let shared: SharedIndexer<&str, u16> = SharedIndexer::default();
        let other = shared.clone();
        let shared = shared.try_into_inner().unwrap_err();
        drop(other);
        assert!(shared.try_into_inner().unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_producers() {
        let shared: SharedIndexer<String, u32> = SharedIndexer::default();

        std::thread::scope(|scope| {
            for worker in 0..4 {
                let mut shared = shared.clone();
                scope.spawn(move || {
                    let records: Vec<ReadingRecord<String, bool>> = (0..25)
                        .map(|i| {
                            let mut inputs = likes_batch();
                            inputs.push(crate::vocab::ValuedTuple::new(
                                [format!("w{worker}"), format!("n{}", i % 10)],
                                true,
                            ));
                            ReadingRecord::new(inputs, sings_batch())
                        })
                        .collect();
                    BatchOptions::default()
                        .index_records(&records, &mut shared)
                        .unwrap();
                });
            }
        });

        let voc = shared.snapshot();
        // seed-less: names, predicates, 4 workers, 10 numbers.
        let distinct: HashSet<&String> = voc.keys().iter().collect();
        assert_eq!(distinct.len(), voc.len());
        assert_eq!(voc.len(), 7 + 4 + 10);
        for (id, key) in voc.iter() {
            assert_eq!(shared.lookup_id(key), Some(id));
        }
    }
}
