//! Foundation elements: modifier nodes, elements and node chains

pub mod modifier;
pub mod modifier_helpers;

pub use modifier::*;

pub mod prelude {
    pub use crate::modifier::{
        BasicModifierNodeContext, Constraints, DrawModifierNode, InvalidationKind,
        LayoutModifierNode, Measurable, ModifierNode, ModifierNodeChain, ModifierNodeContext,
        ModifierNodeElement, NodeCapabilities, Size,
    };

    pub use crate::{impl_draw_node, impl_layout_node, impl_modifier_node};
}
