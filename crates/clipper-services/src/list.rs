//! In-place edits shared by the list caches.
//!
//! Each returns whether the list changed so callers can skip waking
//! readers on a no-op.

/// Insert at the front, then drop the oldest entries beyond `bound`.
pub fn prepend_bounded<T>(items: &mut Vec<T>, item: T, bound: usize) -> bool {
    items.insert(0, item);
    items.truncate(bound);
    true
}

/// Remove every item whose key equals `key`.
pub fn remove_by_key<T, K, F>(items: &mut Vec<T>, key: &K, key_of: F) -> bool
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    let before = items.len();
    items.retain(|item| key_of(item) != key);
    items.len() != before
}

/// Replace items whose key matches an incoming item; append the rest in
/// their incoming order.
pub fn upsert_by_key<T, K, F>(items: &mut Vec<T>, incoming: Vec<T>, key_of: F) -> bool
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    if incoming.is_empty() {
        return false;
    }
    items.retain(|item| !incoming.iter().any(|new| key_of(new) == key_of(item)));
    items.extend(incoming);
    true
}

/// Swap the item with the same key for `item`. Missing keys are a no-op.
pub fn replace_by_key<T, K, F>(items: &mut [T], item: T, key_of: F) -> bool
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    match items.iter().position(|existing| key_of(existing) == key_of(&item)) {
        Some(index) => {
            items[index] = item;
            true
        }
        None => false,
    }
}
