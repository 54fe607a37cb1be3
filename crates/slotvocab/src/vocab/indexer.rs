//! # Append-Only ``{ K <-> T }`` Indexer

use core::{borrow::Borrow, fmt, hash::Hash};

use crate::{
    errors::{SVResult, SlotVocabError},
    types::{IdType, KeyType, SVHashMap, hash_map_new, hash_map_with_capacity},
};

/// Append-only bijection between keys and dense ids.
///
/// Ids are assigned in first-seen order starting at 0.
/// Once assigned, an id is never reassigned or removed.
///
/// This is the "global vocabulary" of a reading session;
/// and, keyed by borrowed keys, the scratch "local indexer" of a single batch.
#[derive(Clone)]
pub struct Indexer<K: KeyType, T: IdType = u32> {
    /// ``{ K -> T }`` lookup.
    key_to_id: SVHashMap<K, T>,

    /// ``{ T -> K }`` lookup; the position is the id.
    id_to_key: Vec<K>,
}

impl<K: KeyType, T: IdType> Default for Indexer<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeyType, T: IdType> PartialEq for Indexer<K, T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.id_to_key == other.id_to_key
    }
}

impl<K: KeyType, T: IdType> Eq for Indexer<K, T> {}

impl<K: KeyType, T: IdType> fmt::Debug for Indexer<K, T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_tuple("Indexer").field(&self.id_to_key).finish()
    }
}

impl<K: KeyType + fmt::Display, T: IdType> fmt::Display for Indexer<K, T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "Indexer(")?;
        for (idx, key) in self.id_to_key.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, ")")
    }
}

impl<K: KeyType, T: IdType> Indexer<K, T> {
    /// Create a new empty indexer.
    pub fn new() -> Self {
        Self {
            key_to_id: hash_map_new(),
            id_to_key: Vec::new(),
        }
    }

    /// Create a new empty indexer with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            key_to_id: hash_map_with_capacity(capacity),
            id_to_key: Vec::with_capacity(capacity),
        }
    }

    /// Build an indexer seeded with an ordered list of keys.
    ///
    /// Keys are interned in order; a repeated key keeps its first id.
    ///
    /// ## Arguments
    /// * `keys` - the seed keys, in id order.
    ///
    /// ## Returns
    /// The seeded indexer, or [`SlotVocabError::IdOverflow`] if the
    /// keys do not fit in `T`.
    pub fn from_keys<I, Q>(keys: I) -> SVResult<Self>
    where
        I: IntoIterator<Item = Q>,
        Q: Into<K>,
    {
        let keys = keys.into_iter();
        let mut indexer = Self::with_capacity(keys.size_hint().0);
        for key in keys {
            indexer.intern(key.into())?;
        }
        Ok(indexer)
    }

    /// The number of keys in the indexer.
    pub fn len(&self) -> usize {
        self.id_to_key.len()
    }

    /// Returns true if no key has been interned.
    pub fn is_empty(&self) -> bool {
        self.id_to_key.is_empty()
    }

    /// The keys, in id order.
    pub fn keys(&self) -> &[K] {
        &self.id_to_key
    }

    /// Consume the indexer, returning the keys in id order.
    pub fn into_keys(self) -> Vec<K> {
        self.id_to_key
    }

    /// Iterate over ``(id, key)`` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &K)> + '_ {
        // Every position below `len()` was validated on insert.
        self.id_to_key
            .iter()
            .enumerate()
            .filter_map(|(idx, key)| T::from_usize(idx).map(|id| (id, key)))
    }

    /// The id the next new key would receive.
    fn next_id(&self) -> SVResult<T> {
        let size = self.id_to_key.len();
        T::from_usize(size).ok_or(SlotVocabError::IdOverflow { size: size + 1 })
    }

    fn insert_new(
        &mut self,
        key: K,
    ) -> SVResult<T> {
        let id = self.next_id()?;
        self.key_to_id.insert(key.clone(), id);
        self.id_to_key.push(key);
        Ok(id)
    }

    /// Return the id for `key`, assigning the next id if it is new.
    ///
    /// ## Arguments
    /// * `key` - the key to intern.
    ///
    /// ## Returns
    /// The existing or newly assigned id; or [`SlotVocabError::IdOverflow`]
    /// if a new id would not fit in `T`. The indexer is unchanged on error.
    pub fn intern(
        &mut self,
        key: K,
    ) -> SVResult<T> {
        match self.key_to_id.get(&key) {
            Some(&id) => Ok(id),
            None => self.insert_new(key),
        }
    }

    /// Like [`intern`](Self::intern), but only clones the key when it is new.
    pub fn intern_ref<Q>(
        &mut self,
        key: &Q,
    ) -> SVResult<T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        match self.key_to_id.get(key) {
            Some(&id) => Ok(id),
            None => self.insert_new(key.to_owned()),
        }
    }

    /// Look up the id of `key` without assigning one.
    pub fn lookup_id<Q>(
        &self,
        key: &Q,
    ) -> Option<T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_id.get(key).copied()
    }

    /// Returns true if `key` has an id.
    pub fn contains<Q>(
        &self,
        key: &Q,
    ) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_id.contains_key(key)
    }

    /// Look up the key for `id`.
    pub fn lookup_key(
        &self,
        id: T,
    ) -> Option<&K> {
        id.to_usize().and_then(|idx| self.id_to_key.get(idx))
    }

    /// Look up the key for `id`.
    ///
    /// ## Returns
    /// The key; or [`SlotVocabError::UnknownId`] if `id` was never assigned.
    pub fn try_lookup_key(
        &self,
        id: T,
    ) -> SVResult<&K> {
        self.lookup_key(id).ok_or(SlotVocabError::UnknownId {
            id: id.to_usize().unwrap_or(usize::MAX),
        })
    }
}

#[cfg(feature = "serde")]
impl<K, T> serde::Serialize for Indexer<K, T>
where
    K: KeyType + serde::Serialize,
    T: IdType,
{
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        self.id_to_key.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, T> serde::Deserialize<'de> for Indexer<K, T>
where
    K: KeyType + serde::Deserialize<'de>,
    T: IdType,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keys: Vec<K> = Vec::deserialize(deserializer)?;
        let size = keys.len();
        let indexer = Self::from_keys(keys).map_err(serde::de::Error::custom)?;
        if indexer.len() != size {
            return Err(serde::de::Error::custom("duplicate keys in vocabulary"));
        }
        Ok(indexer)
    }
}
