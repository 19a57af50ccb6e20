//! Layout contracts shared by the modifier node system

mod constraints;
mod core;
mod intrinsics;

pub use constraints::*;
pub use crate::core::*;
pub use intrinsics::*;

pub mod prelude {
    pub use crate::constraints::Constraints;
    pub use crate::core::{LayoutModifierMeasureResult, Measurable, Placeable};
    pub use crate::intrinsics::IntrinsicSize;
}
