//! SVG format writing operations for visualization export.

mod color;
mod path;
mod writer;

pub use color::*;
pub(crate) use path::*;
pub(crate) use writer::*;
