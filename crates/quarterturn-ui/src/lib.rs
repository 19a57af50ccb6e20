//! Quarter-turn rotation for modifier-based layouts.
//!
//! [`Modifier::quarter_rotate`] rotates an element by a multiple of 90
//! degrees. Half turns only affect drawing; quarter turns also exchange the
//! width and height the element takes up in layout.

pub mod layout;
mod modifier;
mod modifier_nodes;
mod quarter_turn;

pub use layout::{BoundLayoutNode, LayoutMeasurement, LayoutNode};
pub use modifier::{
    DimensionConstraint, EdgeInsets, GraphicsLayer, InspectorInfo, InspectorProperty, Modifier,
    Point, Rect, Size,
};
pub use modifier_nodes::{
    quarter_turn_offset, rotated_constraints, FillElement, FillNode, GraphicsLayerElement,
    GraphicsLayerNode, IntrinsicAxis, IntrinsicSizeElement, IntrinsicSizeNode, PaddingElement,
    PaddingNode, QuarterTurnLayoutElement, QuarterTurnLayoutNode, RotateElement, RotateNode,
    SizeElement, SizeNode,
};
pub use quarter_turn::{classify, QuarterTurn};
pub use quarterturn_foundation::{
    DelegatableNode, InvalidationKind, ModifierNode, ModifierNodeChain, NodeCapabilities,
};
pub use quarterturn_ui_layout::{Constraints, IntrinsicSize, Measurable, Placeable};

pub mod prelude {
    pub use crate::layout::{LayoutMeasurement, LayoutNode};
    pub use crate::modifier::Modifier;
    pub use crate::quarter_turn::QuarterTurn;
    pub use quarterturn_ui_layout::prelude::*;
}
