// src/stats/grouping.rs

use std::collections::BTreeMap;

use serde::Serialize;

/// Tally for one grouping bucket: how many items landed in it, and how
/// many of those satisfied the predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub total: u32,
    pub matching: u32,
}

/// Groups items by a string key and counts, per bucket, the items and the
/// predicate hits. One utility behind every per-dimension breakdown the
/// summaries produce; callers decide what the key is (room type,
/// department) and whether unknown buckets are kept or discarded.
pub fn group_counts<'a, T, I, K, M>(items: I, key_of: K, is_match: M) -> BTreeMap<String, GroupCount>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    K: Fn(&T) -> String,
    M: Fn(&T) -> bool,
{
    let mut buckets: BTreeMap<String, GroupCount> = BTreeMap::new();
    for item in items {
        let bucket = buckets.entry(key_of(item)).or_default();
        bucket.total += 1;
        if is_match(item) {
            bucket.matching += 1;
        }
    }
    buckets
}
