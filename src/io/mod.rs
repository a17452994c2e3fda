//! Output formats and side effects.
//!
//! - `color` - CSS colors and the sequential metric ramp
//! - `csv` - tabular export of district statistics
//! - `sink` - download targets for exported files

pub(crate) mod color;
pub(crate) mod csv;
pub(crate) mod sink;
