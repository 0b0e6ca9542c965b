//! Winner selection over unindexed collections.

/// Return the element with the greatest key. On ties the earliest element
/// in iteration order wins. `None` for an empty input.
/// Unlike `Iterator::max_by_key`, which keeps the last maximum.
pub fn first_max_by_key<I, K, F>(items: I, mut key: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut best: Option<(K, I::Item)> = None;
    for item in items {
        let k = key(&item);
        let replace = match &best {
            Some((best_key, _)) => k > *best_key,
            None => true,
        };
        if replace {
            best = Some((k, item));
        }
    }
    best.map(|(_, item)| item)
}
