use std::iter::{self, FusedIterator};
use std::ops::Range;

use crate::triangle::Orientation;

/// A single line of a triangle: `offset` spaces followed by `count` symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Row {
    pub offset: usize,
    pub count: usize,
}

impl Row {
    pub const fn new(offset: usize, count: usize) -> Row {
        Row { offset, count }
    }

    /// Appends this row to `buffer` using `symbol`, followed by a line break. Equivalent to
    /// [`draw_row`] with this row's offset and count.
    pub fn render_into(self, buffer: &mut String, symbol: char) {
        draw_row(buffer, symbol, self.offset, self.count);
    }
}

/// Appends `offset` spaces, `count` copies of `symbol` and a line break to `buffer`.
///
/// # Examples
/// ```
/// # use workbench::triangle::draw_row;
/// let mut buffer = String::new();
/// draw_row(&mut buffer, '*', 2, 5);
/// assert_eq!(buffer, "  *****\n");
/// ```
pub fn draw_row(buffer: &mut String, symbol: char, offset: usize, count: usize) {
    buffer.reserve(offset + count * symbol.len_utf8() + 1);
    buffer.extend(iter::repeat_n(' ', offset));
    buffer.extend(iter::repeat_n(symbol, count));
    buffer.push('\n');
}

/// An iterator over the [`Row`]s of a triangle, produced by [`Orientation::rows`].
///
/// The size has already been validated by the time one of these exists, so every row is well
/// formed.
#[derive(Debug, Clone)]
pub struct Rows {
    pub(crate) orientation: Orientation,
    pub(crate) size: usize,
    pub(crate) indices: Range<usize>,
}

impl Rows {
    pub(crate) const fn new(orientation: Orientation, size: usize) -> Rows {
        let len = match orientation {
            Orientation::Right | Orientation::Left => size,
            Orientation::Up | Orientation::Down => size.div_ceil(2),
        };
        Rows {
            orientation,
            size,
            indices: 0..len,
        }
    }

    const fn row_at(&self, i: usize) -> Row {
        let size = self.size;
        let half = size / 2;
        let rows = size.div_ceil(2);
        match self.orientation {
            Orientation::Right => Row::new(0, side_count(size, i)),
            Orientation::Left => Row::new(half.abs_diff(i), side_count(size, i)),
            Orientation::Up => Row::new(rows - i - 1, 2 * i + 1),
            // Down walks the same rows as Up, starting from the widest one.
            Orientation::Down => {
                let i = rows - i - 1;
                Row::new(rows - i - 1, 2 * i + 1)
            },
        }
    }
}

/// Width of row `i` in a sideways triangle, growing up to the middle row and shrinking after.
const fn side_count(size: usize, i: usize) -> usize {
    if i < size / 2 { i + 1 } else { size - i }
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let i = self.indices.next()?;
        Some(self.row_at(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl DoubleEndedIterator for Rows {
    fn next_back(&mut self) -> Option<Row> {
        let i = self.indices.next_back()?;
        Some(self.row_at(i))
    }
}

impl ExactSizeIterator for Rows {}

impl FusedIterator for Rows {}
