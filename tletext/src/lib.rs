pub use crate::fields::{decode_elements, decode_epoch, FieldError};
pub use crate::scanner::scan_catalog;
pub use crate::writer::write_tle_set;

pub mod fields;
pub mod scanner;
pub mod writer;

/// Line-type marker opening the first element line of a record
pub const LINE1_MARKER: &str = "1 ";
/// Line-type marker opening the second element line of a record
pub const LINE2_MARKER: &str = "2 ";
/// Canonical element line width, excluding the line terminator
pub const CANONICAL_LINE_LEN: usize = 69;
