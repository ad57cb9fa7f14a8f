//! ToArray / ToList / ToDictionary.
//!
//! A source with a known length is copied straight into an exactly-sized
//! `Vec`. Otherwise elements accumulate in a `LargeBuffer` whose pooled
//! segments are returned when this call ends, normally or by unwinding.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use seqflow_core::prelude::*;
use seqflow_mem::{LargeBuffer, SegmentPool};

pub fn to_vec_in<S: Sequence>(source: &S, pool: &SegmentPool<S::Item>) -> Vec<S::Item> {
    let mut cursor = ScopedCursor::new(source.cursor());
    if let Some(mut out) = source.len_hint().and_then(reserve_exact) {
        while cursor.advance() {
            out.push(cursor.current());
        }
        return out;
    }
    let mut buffer = LargeBuffer::new(pool);
    while cursor.advance() {
        buffer.add(cursor.current());
    }
    buffer.finish()
}

// A hint too large to reserve up front falls back to the segmented path,
// which only allocates for elements actually produced.
fn reserve_exact<T>(len: usize) -> Option<Vec<T>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len).ok()?;
    Some(out)
}

/// Draws segments from the process-wide pool for `S::Item`. Sources that
/// yield borrowed items go through `to_vec_in` with a pool of their own.
pub fn to_vec<S>(source: &S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Send + 'static,
{
    to_vec_in(source, &SegmentPool::shared())
}

pub fn to_array_in<S: Sequence>(source: &S, pool: &SegmentPool<S::Item>) -> Box<[S::Item]> {
    to_vec_in(source, pool).into_boxed_slice()
}

pub fn to_array<S>(source: &S) -> Box<[S::Item]>
where
    S: Sequence,
    S::Item: Send + 'static,
{
    to_vec(source).into_boxed_slice()
}

/// Build a map, failing with `DuplicateKey` instead of overwriting.
pub fn to_dictionary_with_hasher<S, K, V, KF, VF, H>(
    source: &S,
    mut key_selector: KF,
    mut element_selector: VF,
    hasher: H,
) -> Result<HashMap<K, V, H>>
where
    S: Sequence,
    K: Eq + Hash,
    KF: FnMut(&S::Item) -> K,
    VF: FnMut(S::Item) -> V,
    H: BuildHasher,
{
    let mut map = HashMap::with_hasher(hasher);
    if let Some(len) = source.len_hint() {
        // Only a sizing hint; an unsatisfiable one just grows on demand.
        let _ = map.try_reserve(len);
    }
    let mut cursor = ScopedCursor::new(source.cursor());
    let mut index = 0;
    while cursor.advance() {
        let item = cursor.current();
        match map.entry(key_selector(&item)) {
            Entry::Occupied(_) => return Err(Error::DuplicateKey { index }),
            Entry::Vacant(slot) => {
                slot.insert(element_selector(item));
            }
        }
        index += 1;
    }
    Ok(map)
}

pub fn to_dictionary_with<S, K, V, KF, VF>(
    source: &S,
    key_selector: KF,
    element_selector: VF,
) -> Result<HashMap<K, V>>
where
    S: Sequence,
    K: Eq + Hash,
    KF: FnMut(&S::Item) -> K,
    VF: FnMut(S::Item) -> V,
{
    to_dictionary_with_hasher(source, key_selector, element_selector, Default::default())
}

pub fn to_dictionary<S, K, KF>(source: &S, key_selector: KF) -> Result<HashMap<K, S::Item>>
where
    S: Sequence,
    K: Eq + Hash,
    KF: FnMut(&S::Item) -> K,
{
    to_dictionary_with(source, key_selector, |item| item)
}
