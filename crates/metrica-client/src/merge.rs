//! Reassembly of split responses
//!
//! When a logical operation fans out into several physical requests, the
//! per-chunk response fragments have to be recombined. Splitting along an
//! entity's own identifier axis partitions the result, so plain
//! concatenation suffices. Splitting along a sub-attribute axis (values
//! fetched per characteristic chunk) returns the same entity in several
//! fragments, each carrying a slice of its sub-attribute list; those
//! entities are merged by key.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use metrica_api::MeasurementValues;

/// An entity that can absorb another fragment of itself
pub trait MergeEntity {
    type Key: Eq + Hash;

    /// Stable identity of the entity across fragments
    fn merge_key(&self) -> Self::Key;

    /// Absorbs a later fragment of the same entity. Scalar fields of
    /// `self` win; only sub-attribute lists grow.
    fn merge_from(&mut self, other: Self);
}

/// Combines per-chunk result fragments into one logical result.
///
/// Entities keep the order in which they were first seen across the
/// fragment sequence; an entity reappearing in a later fragment is merged
/// into its first occurrence. The function is deterministic in the
/// fragment sequence, so merging the same fragments twice yields
/// identical results.
pub fn merge_fragments<E, I>(fragments: I) -> Vec<E>
where
    E: MergeEntity,
    I: IntoIterator<Item = Vec<E>>,
{
    let mut merged: Vec<E> = Vec::new();
    let mut index: HashMap<E::Key, usize> = HashMap::new();

    for fragment in fragments {
        for entity in fragment {
            match index.entry(entity.merge_key()) {
                Entry::Occupied(slot) => merged[*slot.get()].merge_from(entity),
                Entry::Vacant(slot) => {
                    slot.insert(merged.len());
                    merged.push(entity);
                }
            }
        }
    }

    merged
}

impl MergeEntity for MeasurementValues {
    type Key = uuid::Uuid;

    fn merge_key(&self) -> Self::Key {
        self.uuid
    }

    fn merge_from(&mut self, other: Self) {
        self.characteristics.extend(other.characteristics);
    }
}
