//! Pure math/data for drawing in the quarter-turn layout host
//!
//! Geometry primitives and the paint-time transform state that draw
//! modifiers write into.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{DrawScope, DrawScopeDefault, GraphicsLayer, Point, Rect, Size};
}
