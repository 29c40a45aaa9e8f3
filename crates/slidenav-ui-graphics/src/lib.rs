//! Pure math/data for geometry & units in Slidenav
//!
//! This crate contains geometry primitives, the graphics layer applied to the
//! sliding content view, and the unit types used to convert density
//! independent values into pixels.

mod geometry;
mod layer;
mod unit;

pub use geometry::*;
pub use layer::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::layer::GraphicsLayer;
    pub use crate::unit::{Density, Dp, Px};
}
