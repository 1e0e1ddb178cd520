use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("size must be an odd number")]
pub struct InvalidSizeError {
    pub size: usize,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unknown orientation {input:?}, expected one of: right, left, up, down")]
pub struct ParseOrientationError {
    pub input: String,
}
