//! # Vocab Testing Tools

use crate::{
    types::IdType,
    vocab::{Indexer, ValuedTuple},
};

/// Seed keys of the demo global vocabulary; ids 0 through 8.
pub const SEED_KEYS: [&str; 9] = [
    "likes", "is", "work", "home", "has", "seen", "the", "have", "people",
];

/// Build the demo global vocabulary from [`SEED_KEYS`].
pub fn build_seed_vocab<T: IdType>() -> Indexer<String, T> {
    Indexer::from_keys(SEED_KEYS).expect("seed keys fit any id type")
}

/// Build a [`ValuedTuple`] from string literals.
pub fn valued_tuple<V>(
    keys: &[&str],
    value: V,
) -> ValuedTuple<String, V> {
    ValuedTuple::new(keys.iter().copied(), value)
}

/// The first demo batch: who likes whom.
pub fn likes_batch() -> Vec<ValuedTuple<String, bool>> {
    vec![
        valued_tuple(&["Alice", "likes", "Bob"], true),
        valued_tuple(&["Bob", "likes", "Carla"], true),
        valued_tuple(&["Bob", "likes", "Alice"], false),
    ]
}

/// The second demo batch; introduces "sings" and "alive".
pub fn sings_batch() -> Vec<ValuedTuple<String, bool>> {
    vec![
        valued_tuple(&["Alice", "likes", "Carla"], true),
        valued_tuple(&["Alice", "sings"], true),
        valued_tuple(&["Bob", "is", "alive"], false),
    ]
}
