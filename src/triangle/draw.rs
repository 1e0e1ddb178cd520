use crate::triangle::{InvalidSizeError, Orientation};

/// The common signature of [`right`], [`left`], [`up`] and [`down`].
pub type TriangleFn = fn(char, usize) -> Result<String, InvalidSizeError>;

/// Renders a triangle of `size` using `symbol`, in the given orientation.
///
/// Rows are separated by `'\n'` and there is no trailing line break. Right and left triangles
/// have `size` rows, up and down triangles have `(size + 1) / 2`.
///
/// # Errors
/// Returns an [`InvalidSizeError`] if `size` is even, in which case nothing is rendered.
///
/// # Examples
/// ```
/// # use workbench::triangle::{draw, Orientation};
/// assert_eq!(draw(Orientation::Right, '*', 3).unwrap(), "*\n**\n*");
/// assert_eq!(draw(Orientation::Up, '*', 2).unwrap_err().size, 2);
/// ```
pub fn draw(orientation: Orientation, symbol: char, size: usize) -> Result<String, InvalidSizeError> {
    let rows = orientation.rows(size)?;
    let mut buffer = String::with_capacity(rows.len() * (size * symbol.len_utf8() + 1));

    for row in rows {
        row.render_into(&mut buffer, symbol);
    }
    buffer.pop();

    log::trace!("drew {orientation} triangle of size {size} with {symbol:?}");
    Ok(buffer)
}

/// Renders a triangle pointing right, `size` rows tall, widening to `(size + 1) / 2` symbols on the
/// middle row.
///
/// # Errors
/// Returns an [`InvalidSizeError`] if `size` is even.
///
/// # Examples
/// ```
/// # use workbench::triangle::right;
/// assert_eq!(right('*', 5).unwrap(), "*\n**\n***\n**\n*");
/// ```
pub fn right(symbol: char, size: usize) -> Result<String, InvalidSizeError> {
    draw(Orientation::Right, symbol, size)
}

/// Renders a triangle pointing left, the mirror image of [`right`].
///
/// # Errors
/// Returns an [`InvalidSizeError`] if `size` is even.
///
/// # Examples
/// ```
/// # use workbench::triangle::left;
/// assert_eq!(left('*', 5).unwrap(), "  *\n **\n***\n **\n  *");
/// ```
pub fn left(symbol: char, size: usize) -> Result<String, InvalidSizeError> {
    draw(Orientation::Left, symbol, size)
}

/// Renders a triangle with its tip at the top, widening to `size` symbols on the last row.
///
/// # Errors
/// Returns an [`InvalidSizeError`] if `size` is even.
///
/// # Examples
/// ```
/// # use workbench::triangle::up;
/// assert_eq!(up('*', 5).unwrap(), "  *\n ***\n*****");
/// ```
pub fn up(symbol: char, size: usize) -> Result<String, InvalidSizeError> {
    draw(Orientation::Up, symbol, size)
}

/// Renders a triangle with its tip at the bottom, the vertical mirror of [`up`].
///
/// # Errors
/// Returns an [`InvalidSizeError`] if `size` is even.
///
/// # Examples
/// ```
/// # use workbench::triangle::down;
/// assert_eq!(down('*', 5).unwrap(), "*****\n ***\n  *");
/// ```
pub fn down(symbol: char, size: usize) -> Result<String, InvalidSizeError> {
    draw(Orientation::Down, symbol, size)
}
