use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns a clone of the value associated with `key`, or `default` if the map doesn't contain
/// it.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use workbench::collections::get_or_default;
/// let names = HashMap::from([("linux", "Linux"), ("macos", "macOS")]);
/// assert_eq!(get_or_default(&names, "linux", "unknown"), "Linux");
/// assert_eq!(get_or_default(&names, "haiku", "unknown"), "unknown");
/// ```
pub fn get_or_default<K, V, Q, S>(map: &HashMap<K, V, S>, key: &Q, default: V) -> V
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    V: Clone,
    S: BuildHasher,
{
    match map.get(key) {
        Some(value) => value.clone(),
        None => default,
    }
}

/// Returns true if the map contains an entry for `key`.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use workbench::collections::contains_key;
/// let map = HashMap::from([(1_u32, 'a')]);
/// assert!(contains_key(&map, &1_u32));
/// assert!(!contains_key(&map, &2_u32));
/// ```
pub fn contains_key<K, V, Q, S>(map: &HashMap<K, V, S>, key: &Q) -> bool
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    map.contains_key(key)
}

/// Returns true if any entry in the map has a value equal to `value`. This is a linear scan over
/// every entry.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use workbench::collections::contains_value;
/// let map = HashMap::from([("one", 1), ("two", 2)]);
/// assert!(contains_value(&map, &2));
/// assert!(!contains_value(&map, &3));
/// ```
pub fn contains_value<K, V, S>(map: &HashMap<K, V, S>, value: &V) -> bool
where
    V: PartialEq,
{
    map.values().any(|v| v == value)
}
