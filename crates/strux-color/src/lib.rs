//! STRUX color support
//!
//! - [`Color`] - RGB color values
//! - [`NamedColors`] - the named palette, also used to parse user colors
//! - [`ResidueColorMap`] - per-residue color overrides produced alongside
//!   assembled structures

mod color;
mod error;
mod lookup;
mod named;

pub use color::Color;
pub use error::ColorError;
pub use lookup::{ResidueColorMap, ResidueColorMapBuilder};
pub use named::NamedColors;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Color, NamedColors, ResidueColorMap};
}
