/// Applies `f` to each element of `items`, in order, collecting the results.
///
/// # Examples
/// ```
/// # use workbench::collections::map;
/// assert_eq!(map(&[1_u32, 2, 3], |i| i * 10), [10, 20, 30]);
/// ```
pub fn map<T, V, F>(items: &[T], f: F) -> Vec<V>
where
    F: FnMut(&T) -> V,
{
    items.iter().map(f).collect()
}

/// Creates a [`Vec`] of length `size` where the element at index `i` is `f(i)`.
///
/// # Examples
/// ```
/// # use workbench::collections::fill;
/// assert_eq!(fill(4, |i| i * i), [0, 1, 4, 9]);
/// assert!(fill(0, |_| 'x').is_empty());
/// ```
pub fn fill<T, F>(size: usize, f: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..size).map(f).collect()
}
