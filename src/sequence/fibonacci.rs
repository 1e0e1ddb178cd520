use std::iter::FusedIterator;

/// An iterator over the Fibonacci sequence, starting `0, 1, 1, 2, 3, 5, ...`.
///
/// The iterator ends instead of overflowing, after yielding the largest Fibonacci number that fits
/// in a [`u64`] (the 94th term, `12200160415121876738`).
///
/// # Examples
/// ```
/// # use workbench::sequence::Fibonacci;
/// let first: Vec<u64> = Fibonacci::new().take(8).collect();
/// assert_eq!(first, [0, 1, 1, 2, 3, 5, 8, 13]);
/// assert_eq!(Fibonacci::new().count(), 94);
/// ```
#[derive(Debug, Clone)]
pub struct Fibonacci {
    // None once the next term would overflow.
    current: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    pub const fn new() -> Fibonacci {
        Fibonacci {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Fibonacci::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.current?;
        let following = match self.next {
            Some(next) => current.checked_add(next),
            None => None,
        };
        self.current = self.next;
        self.next = following;
        Some(current)
    }
}

impl FusedIterator for Fibonacci {}

/// Returns a closure which yields the next Fibonacci number each time it is called, starting from
/// 0.
///
/// # Panics
/// The returned closure panics if called again after yielding the last Fibonacci number that fits
/// in a [`u64`], see [`Fibonacci`].
///
/// # Examples
/// ```
/// # use workbench::sequence::fibonacci_generator;
/// let mut fib = fibonacci_generator();
/// assert_eq!(fib(), 0);
/// assert_eq!(fib(), 1);
/// assert_eq!(fib(), 1);
/// assert_eq!(fib(), 2);
/// ```
pub fn fibonacci_generator() -> impl FnMut() -> u64 {
    let mut sequence = Fibonacci::new();
    move || match sequence.next() {
        Some(value) => value,
        None => panic!("Fibonacci sequence exceeded the capacity of u64!"),
    }
}
