//! Pure math/data for painting gradient text
//!
//! This crate contains the color, brush, geometry, typography and unit types
//! shared by the gradient text widget and its render hosts.

mod brush;
mod color;
mod geometry;
mod typography;
mod unit;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use typography::*;
pub use unit::*;
