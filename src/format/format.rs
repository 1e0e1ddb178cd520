use std::fmt::Display;

/// Formats each entry as `"{key} -> {value}"`, where the value is converted with `f`. Entries are
/// separated by line breaks, with no trailing break, and appear in the iteration order of
/// `entries`.
///
/// Passing a [`HashMap`](std::collections::HashMap) gives lines in an unspecified order, use a
/// [`BTreeMap`](std::collections::BTreeMap) for a stable one.
///
/// # Examples
/// ```
/// # use std::collections::BTreeMap;
/// # use workbench::format::{map_as_string, Vertex};
/// let labs = BTreeMap::from([
///     ("Bell Labs", Vertex::new(40.68433, -74.39967)),
///     ("Google", Vertex::new(37.42202, -122.08408)),
/// ]);
/// assert_eq!(
///     map_as_string(&labs, |v| v.to_string()),
///     "Bell Labs -> (40.68433, -74.39967)\nGoogle -> (37.42202, -122.08408)"
/// );
/// ```
pub fn map_as_string<I, K, V, F>(entries: I, mut f: F) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    F: FnMut(V) -> String,
{
    entries
        .into_iter()
        .map(|(key, value)| format!("{key} -> {}", f(value)))
        .collect::<Vec<_>>()
        .join("\n")
}
