//! Matrix module: the row-major dense matrix type.

pub mod dense;
pub use dense::{RowMatrix, check_rows};
