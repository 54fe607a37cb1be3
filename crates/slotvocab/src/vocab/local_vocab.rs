//! # Local Vocabulary
//!
//! A batch of valued tuples is re-indexed into a compact local id space:
//! * every distinct key in the batch receives a local index, in first-seen order,
//! * tuples are rewritten as local indices ("slots"), values untouched,
//! * the [`LocalVocab`] maps each local index back to its global id.
//!
//! The local indexer is fresh on every call; local numbering is never
//! shared between batches.

use crate::{
    errors::{SVResult, SlotVocabError},
    types::{IdType, KeyType},
    vocab::{Indexer, KeyInterner},
};

/// A tuple of keys paired with its value (truth value, weight, or score).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuedTuple<K, V> {
    /// The keys, one per tuple position.
    pub keys: Vec<K>,

    /// The associated value.
    pub value: V,
}

impl<K, V> ValuedTuple<K, V> {
    /// Build a new tuple.
    pub fn new<I, Q>(
        keys: I,
        value: V,
    ) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<K>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            value,
        }
    }

    /// The number of positions in the tuple.
    pub fn arity(&self) -> usize {
        self.keys.len()
    }
}

impl<K, V> From<(Vec<K>, V)> for ValuedTuple<K, V> {
    fn from((keys, value): (Vec<K>, V)) -> Self {
        Self { keys, value }
    }
}

/// A tuple of local indices paired with its value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexedTuple<T, V> {
    /// Local indices, one per tuple position.
    pub slots: Vec<T>,

    /// The associated value.
    pub value: V,
}

impl<T, V> IndexedTuple<T, V> {
    /// Build a new indexed tuple.
    pub fn new(
        slots: Vec<T>,
        value: V,
    ) -> Self {
        Self { slots, value }
    }
}

impl<T, V> From<(Vec<T>, V)> for IndexedTuple<T, V> {
    fn from((slots, value): (Vec<T>, V)) -> Self {
        Self { slots, value }
    }
}

/// Per-batch map of ``{ local index -> global id }``.
///
/// Position `k` holds the global id of local index `k`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocalVocab<T> {
    global_ids: Vec<T>,
}

impl<T: IdType> From<Vec<T>> for LocalVocab<T> {
    fn from(global_ids: Vec<T>) -> Self {
        Self { global_ids }
    }
}

impl<T: IdType> LocalVocab<T> {
    /// The number of local indices.
    pub fn len(&self) -> usize {
        self.global_ids.len()
    }

    /// Returns true if the batch had no keys.
    pub fn is_empty(&self) -> bool {
        self.global_ids.is_empty()
    }

    /// The global ids, in local-index order.
    pub fn as_slice(&self) -> &[T] {
        &self.global_ids
    }

    /// Consume, returning the global ids in local-index order.
    pub fn into_vec(self) -> Vec<T> {
        self.global_ids
    }

    /// Iterate over the global ids in local-index order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.global_ids.iter().copied()
    }

    /// The global id of a local index.
    pub fn global_id(
        &self,
        local: T,
    ) -> Option<T> {
        local
            .to_usize()
            .and_then(|idx| self.global_ids.get(idx))
            .copied()
    }

    /// Map local slots to global ids.
    ///
    /// ## Returns
    /// The global ids; or [`SlotVocabError::UnknownId`] naming the first
    /// slot outside this local vocabulary.
    pub fn to_global_slots(
        &self,
        slots: &[T],
    ) -> SVResult<Vec<T>> {
        slots
            .iter()
            .map(|&slot| {
                self.global_id(slot).ok_or(SlotVocabError::UnknownId {
                    id: slot.to_usize().unwrap_or(usize::MAX),
                })
            })
            .collect()
    }

    /// Resolve local slots all the way back to keys of the global vocabulary.
    pub fn resolve_keys<'g, K: KeyType>(
        &self,
        slots: &[T],
        global: &'g Indexer<K, T>,
    ) -> SVResult<Vec<&'g K>> {
        self.to_global_slots(slots)?
            .into_iter()
            .map(|id| global.try_lookup_key(id))
            .collect()
    }
}

/// The result of indexing one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalBatch<T, V> {
    /// The tuples, with keys replaced by local indices.
    pub tuples: Vec<IndexedTuple<T, V>>,

    /// The ``{ local index -> global id }`` map; `ref_to_global`.
    pub local_voc: LocalVocab<T>,
}

/// The local-only phase of [`local_vocabulary`].
///
/// Assigns local indices in first-seen order and rewrites the tuples;
/// touches no global state.
///
/// ## Returns
/// The rewritten tuples, and the local indexer over borrowed keys.
pub fn index_locally<'a, K, T, V, I>(
    tuples: I
) -> SVResult<(Vec<IndexedTuple<T, V>>, Indexer<&'a K, T>)>
where
    K: KeyType + 'a,
    T: IdType,
    V: Clone + 'a,
    I: IntoIterator<Item = &'a ValuedTuple<K, V>>,
{
    let mut local: Indexer<&'a K, T> = Indexer::new();
    let mut indexed = Vec::new();
    for tuple in tuples {
        let slots = tuple
            .keys
            .iter()
            .map(|key| local.intern(key))
            .collect::<SVResult<Vec<T>>>()?;
        indexed.push(IndexedTuple::new(slots, tuple.value.clone()));
    }
    Ok((indexed, local))
}

/// The global phase of [`local_vocabulary`].
///
/// Resolves (assign-or-fetch) each local key in the global vocabulary,
/// in local-index order.
pub fn resolve_globally<K, T, G>(
    local: &Indexer<&K, T>,
    global: &mut G,
) -> SVResult<LocalVocab<T>>
where
    K: KeyType,
    T: IdType,
    G: KeyInterner<K, T> + ?Sized,
{
    local
        .keys()
        .iter()
        .map(|key| global.intern_key(key))
        .collect::<SVResult<Vec<T>>>()
        .map(LocalVocab::from)
}

/// Create a local index over a batch of valued tuples, and grow the global vocabulary.
///
/// ## Arguments
/// * `tuples` - the valued tuples, in order.
/// * `global` - the global vocabulary; new keys are appended to it.
///
/// ## Returns
/// A [`LocalBatch`] holding `indexed_tuples` and `ref_to_global`.
/// The grown global vocabulary stays with the caller.
///
/// ## Example
/// ```rust
/// use slotvocab::vocab::{Indexer, ValuedTuple, local_vocabulary};
///
/// let mut voc: Indexer<String> = Indexer::from_keys(["likes", "is"]).unwrap();
/// let tuples: Vec<ValuedTuple<String, bool>> = vec![
///     ValuedTuple::new(["Alice", "likes", "Bob"], true),
///     ValuedTuple::new(["Bob", "likes", "Alice"], false),
/// ];
///
/// let batch = local_vocabulary(&tuples, &mut voc).unwrap();
/// assert_eq!(batch.tuples[1].slots, vec![2, 1, 0]);
/// assert_eq!(batch.local_voc.as_slice(), &[2, 0, 3]);
/// assert_eq!(voc.len(), 4);
/// ```
pub fn local_vocabulary<'a, K, T, V, I, G>(
    tuples: I,
    global: &mut G,
) -> SVResult<LocalBatch<T, V>>
where
    K: KeyType + 'a,
    T: IdType,
    V: Clone + 'a,
    I: IntoIterator<Item = &'a ValuedTuple<K, V>>,
    G: KeyInterner<K, T> + ?Sized,
{
    let (tuples, local) = index_locally(tuples)?;
    let local_voc = resolve_globally(&local, global)?;

    log::trace!(
        "local vocabulary: {} tuples, {} keys",
        tuples.len(),
        local_voc.len()
    );

    Ok(LocalBatch { tuples, local_voc })
}
