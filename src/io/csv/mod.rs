//! CSV export of district statistics.

mod write;

pub use write::*;
