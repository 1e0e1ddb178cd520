use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::triangle::{self, InvalidSizeError, ParseOrientationError, Rows, TriangleFn};

/// The direction a triangle's tip points.
///
/// Note that [`Up`](Orientation::Up) and [`Down`](Orientation::Down) are named after how the
/// triangle grows when read top to bottom: `Up` starts at the tip and widens downward, while
/// `Down` starts wide and ends with its tip at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Right,
    Left,
    Up,
    Down,
}

use Orientation::*;

impl Orientation {
    /// All orientations, in the order the demo draws them.
    pub const ALL: [Orientation; 4] = [Right, Left, Up, Down];

    /// Returns the geometry of a triangle of the given size as an iterator of rows.
    ///
    /// # Errors
    /// Returns an [`InvalidSizeError`] if `size` is even.
    ///
    /// # Examples
    /// ```
    /// # use workbench::triangle::{Orientation, Row};
    /// let rows: Vec<Row> = Orientation::Left.rows(3).unwrap().collect();
    /// assert_eq!(rows, [Row::new(1, 1), Row::new(0, 2), Row::new(1, 1)]);
    /// ```
    pub fn rows(self, size: usize) -> Result<Rows, InvalidSizeError> {
        if size % 2 == 0 {
            log::debug!("rejecting {self} triangle of even size {size}");
            return Err(InvalidSizeError { size });
        }
        Ok(Rows::new(self, size))
    }

    /// Returns the named drawing function for this orientation.
    pub const fn draw_fn(self) -> TriangleFn {
        match self {
            Right => triangle::right,
            Left => triangle::left,
            Up => triangle::up,
            Down => triangle::down,
        }
    }

    /// The lowercase name used by [`Display`] and accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Right => "right",
            Left => "left",
            Up => "up",
            Down => "down",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOrientationError { input: s.to_owned() })
    }
}
