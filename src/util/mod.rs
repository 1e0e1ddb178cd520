pub mod float;
pub mod panic;
