//! Concrete modifier nodes.
//!
//! Each modifier is a pair: an element holding the configuration, compared
//! structurally so an unchanged modifier keeps its node, and the node that
//! takes part in layout or drawing.
//!
//! # Available Nodes
//!
//! - [`QuarterTurnLayoutNode`] / [`QuarterTurnLayoutElement`]: swaps width and height of a
//!   quarter-turned child in layout (layout)
//! - [`RotateNode`] / [`RotateElement`]: rotates drawing around the node center (draw)
//! - [`GraphicsLayerNode`] / [`GraphicsLayerElement`]: applies a paint-time layer (draw)
//! - [`PaddingNode`] / [`PaddingElement`]: adds padding around content (layout)
//! - [`SizeNode`] / [`SizeElement`]: preferred width and/or height (layout)
//! - [`IntrinsicSizeNode`] / [`IntrinsicSizeElement`]: sizes an axis from intrinsics (layout)
//! - [`FillNode`] / [`FillElement`]: fills a fraction of the available width (layout)

use quarterturn_foundation::{
    impl_modifier_node, Constraints, DelegatableNode, DrawModifierNode, DrawScope,
    LayoutModifierMeasureResult, LayoutModifierNode, Measurable, ModifierNode,
    ModifierNodeContext, ModifierNodeElement, NodeCapabilities, NodeState, Size,
};
use quarterturn_ui_layout::IntrinsicSize;
use std::hash::{Hash, Hasher};

use crate::modifier::{EdgeInsets, GraphicsLayer, Point};

fn hash_f32_value<H: Hasher>(state: &mut H, value: f32) {
    state.write_u32(value.to_bits());
}

fn hash_option_f32<H: Hasher>(state: &mut H, value: Option<f32>) {
    match value {
        Some(v) => {
            state.write_u8(1);
            hash_f32_value(state, v);
        }
        None => state.write_u8(0),
    }
}

// ============================================================================
// Quarter-turn Layout Node
// ============================================================================

/// Constraints handed to a child that will be drawn a quarter turn away.
///
/// Width and height bounds trade places. A minimum taken from an axis that is
/// unbounded in the incoming constraints is dropped to zero.
pub fn rotated_constraints(constraints: Constraints) -> Constraints {
    let swapped = constraints.transpose();
    Constraints {
        min_width: if constraints.has_bounded_height() {
            swapped.min_width
        } else {
            0.0
        },
        min_height: if constraints.has_bounded_width() {
            swapped.min_height
        } else {
            0.0
        },
        ..swapped
    }
}

/// Offset that centers a `child` measured box inside its transposed box.
///
/// Each half-size is truncated toward zero before subtracting, so the
/// offset is always a whole number.
pub fn quarter_turn_offset(child: Size) -> Point {
    let half_width = (child.width / 2.0).trunc();
    let half_height = (child.height / 2.0).trunc();
    Point {
        x: -(half_width - half_height),
        y: -(half_height - half_width),
    }
}

/// Layout node that makes a quarter-turned child occupy its rotated footprint.
///
/// The child is measured against [`rotated_constraints`], reported with its
/// width and height exchanged and placed at [`quarter_turn_offset`] so that
/// its center matches the center of the reported box. Intrinsic queries are
/// answered along the opposite axis.
#[derive(Debug, Default)]
pub struct QuarterTurnLayoutNode {
    state: NodeState,
}

impl QuarterTurnLayoutNode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DelegatableNode for QuarterTurnLayoutNode {
    fn node_state(&self) -> &NodeState {
        &self.state
    }
}

impl ModifierNode for QuarterTurnLayoutNode {
    impl_modifier_node!(layout);
}

impl LayoutModifierNode for QuarterTurnLayoutNode {
    fn measure(
        &self,
        _context: &mut dyn ModifierNodeContext,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> LayoutModifierMeasureResult {
        let child_constraints = rotated_constraints(constraints);
        let placeable = measurable.measure(child_constraints);
        let child = Size::new(placeable.width(), placeable.height());
        let offset = quarter_turn_offset(child);
        log::trace!(
            "quarter turn: child {}x{} under {:?}, offset ({}, {})",
            child.width,
            child.height,
            child_constraints,
            offset.x,
            offset.y
        );
        LayoutModifierMeasureResult::new(child.transposed(), offset.x, offset.y)
    }

    fn min_intrinsic_width(&self, measurable: &dyn Measurable, height: f32) -> f32 {
        measurable.min_intrinsic_height(height)
    }

    fn max_intrinsic_width(&self, measurable: &dyn Measurable, height: f32) -> f32 {
        measurable.max_intrinsic_height(height)
    }

    fn min_intrinsic_height(&self, measurable: &dyn Measurable, width: f32) -> f32 {
        measurable.min_intrinsic_width(width)
    }

    fn max_intrinsic_height(&self, measurable: &dyn Measurable, width: f32) -> f32 {
        measurable.max_intrinsic_width(width)
    }
}

/// Element for [`QuarterTurnLayoutNode`].
///
/// Carries no configuration, so every instance compares equal and hashes the
/// same: re-applying it keeps the existing node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct QuarterTurnLayoutElement;

impl ModifierNodeElement for QuarterTurnLayoutElement {
    type Node = QuarterTurnLayoutNode;

    fn create(&self) -> Self::Node {
        QuarterTurnLayoutNode::new()
    }

    fn update(&self, _node: &mut Self::Node) {}

    fn inspector_name(&self) -> &'static str {
        "rotated_element"
    }

    fn capabilities(&self) -> NodeCapabilities {
        NodeCapabilities::LAYOUT
    }
}

// ============================================================================
// Rotate Modifier Node
// ============================================================================

/// Node that rotates everything drawn after it around the center of its bounds.
#[derive(Debug)]
pub struct RotateNode {
    degrees: f32,
    state: NodeState,
}

impl RotateNode {
    pub fn new(degrees: f32) -> Self {
        Self {
            degrees,
            state: NodeState::new(),
        }
    }

    pub fn degrees(&self) -> f32 {
        self.degrees
    }
}

impl DelegatableNode for RotateNode {
    fn node_state(&self) -> &NodeState {
        &self.state
    }
}

impl ModifierNode for RotateNode {
    impl_modifier_node!(draw);
}

impl DrawModifierNode for RotateNode {
    fn draw(&self, draw_scope: &mut dyn DrawScope) {
        draw_scope.rotate(self.degrees);
    }
}

/// Element that creates and updates rotate nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct RotateElement {
    degrees: f32,
}

impl RotateElement {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }
}

impl Hash for RotateElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32_value(state, self.degrees);
    }
}

impl ModifierNodeElement for RotateElement {
    type Node = RotateNode;

    fn create(&self) -> Self::Node {
        RotateNode::new(self.degrees)
    }

    fn update(&self, node: &mut Self::Node) {
        node.degrees = self.degrees;
    }

    fn inspector_name(&self) -> &'static str {
        "rotate"
    }

    fn inspector_properties(&self, inspector: &mut dyn FnMut(&'static str, String)) {
        inspector("degrees", self.degrees.to_string());
    }

    fn capabilities(&self) -> NodeCapabilities {
        NodeCapabilities::DRAW
    }
}

// ============================================================================
// Graphics Layer Modifier Node
// ============================================================================

/// Node that applies a [`GraphicsLayer`] to its drawing.
#[derive(Debug)]
pub struct GraphicsLayerNode {
    layer: GraphicsLayer,
    state: NodeState,
}

impl GraphicsLayerNode {
    pub fn new(layer: GraphicsLayer) -> Self {
        Self {
            layer,
            state: NodeState::new(),
        }
    }
}

impl DelegatableNode for GraphicsLayerNode {
    fn node_state(&self) -> &NodeState {
        &self.state
    }
}

impl ModifierNode for GraphicsLayerNode {
    impl_modifier_node!(draw);
}

impl DrawModifierNode for GraphicsLayerNode {
    fn draw(&self, draw_scope: &mut dyn DrawScope) {
        draw_scope.apply_layer(self.layer);
    }
}

/// Element that creates and updates graphics layer nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsLayerElement {
    layer: GraphicsLayer,
}

impl GraphicsLayerElement {
    pub fn new(layer: GraphicsLayer) -> Self {
        Self { layer }
    }
}

impl Hash for GraphicsLayerElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32_value(state, self.layer.alpha);
        hash_f32_value(state, self.layer.scale);
        hash_f32_value(state, self.layer.rotation_z);
        hash_f32_value(state, self.layer.translation_x);
        hash_f32_value(state, self.layer.translation_y);
    }
}

impl ModifierNodeElement for GraphicsLayerElement {
    type Node = GraphicsLayerNode;

    fn create(&self) -> Self::Node {
        GraphicsLayerNode::new(self.layer)
    }

    fn update(&self, node: &mut Self::Node) {
        node.layer = self.layer;
    }

    fn inspector_name(&self) -> &'static str {
        "graphicsLayer"
    }

    fn capabilities(&self) -> NodeCapabilities {
        NodeCapabilities::DRAW
    }
}

// ============================================================================
// Padding Modifier Node
// ============================================================================

/// Node that adds padding around its content.
#[derive(Debug)]
pub struct PaddingNode {
    padding: EdgeInsets,
    state: NodeState,
}

impl PaddingNode {
    pub fn new(padding: EdgeInsets) -> Self {
        Self {
            padding,
            state: NodeState::new(),
        }
    }
}

impl DelegatableNode for PaddingNode {
    fn node_state(&self) -> &NodeState {
        &self.state
    }
}

impl ModifierNode for PaddingNode {
    impl_modifier_node!(layout);
}

impl LayoutModifierNode for PaddingNode {
    fn measure(
        &self,
        _context: &mut dyn ModifierNodeContext,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> LayoutModifierMeasureResult {
        let horizontal_padding = self.padding.horizontal_sum();
        let vertical_padding = self.padding.vertical_sum();

        let inner_constraints = constraints.deflate(horizontal_padding, vertical_padding);
        let inner_placeable = measurable.measure(inner_constraints);

        let (width, height) = constraints.constrain(
            inner_placeable.width() + horizontal_padding,
            inner_placeable.height() + vertical_padding,
        );
        LayoutModifierMeasureResult::new(
            Size::new(width, height),
            self.padding.left,
            self.padding.top,
        )
    }

    fn min_intrinsic_width(&self, measurable: &dyn Measurable, height: f32) -> f32 {
        let inner_height = (height - self.padding.vertical_sum()).max(0.0);
        measurable.min_intrinsic_width(inner_height) + self.padding.horizontal_sum()
    }

    fn max_intrinsic_width(&self, measurable: &dyn Measurable, height: f32) -> f32 {
        let inner_height = (height - self.padding.vertical_sum()).max(0.0);
        measurable.max_intrinsic_width(inner_height) + self.padding.horizontal_sum()
    }

    fn min_intrinsic_height(&self, measurable: &dyn Measurable, width: f32) -> f32 {
        let inner_width = (width - self.padding.horizontal_sum()).max(0.0);
        measurable.min_intrinsic_height(inner_width) + self.padding.vertical_sum()
    }

    fn max_intrinsic_height(&self, measurable: &dyn Measurable, width: f32) -> f32 {
        let inner_width = (width - self.padding.horizontal_sum()).max(0.0);
        measurable.max_intrinsic_height(inner_width) + self.padding.vertical_sum()
    }
}

/// Element that creates and updates padding nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddingElement {
    padding: EdgeInsets,
}

impl PaddingElement {
    pub fn new(padding: EdgeInsets) -> Self {
        Self { padding }
    }
}

impl Hash for PaddingElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32_value(state, self.padding.left);
        hash_f32_value(state, self.padding.top);
        hash_f32_value(state, self.padding.right);
        hash_f32_value(state, self.padding.bottom);
    }
}

impl ModifierNodeElement for PaddingElement {
    type Node = PaddingNode;

    fn create(&self) -> Self::Node {
        PaddingNode::new(self.padding)
    }

    fn update(&self, node: &mut Self::Node) {
        node.padding = self.padding;
    }

    fn inspector_name(&self) -> &'static str {
        "padding"
    }

    fn capabilities(&self) -> NodeCapabilities {
        NodeCapabilities::LAYOUT
    }
}

// ============================================================================
// Size Modifier Node
// ============================================================================

/// Node that prefers a specific width and/or height, within the incoming constraints.
#[derive(Debug)]
pub struct SizeNode {
    width: Option<f32>,
    height: Option<f32>,
    state: NodeState,
}

impl SizeNode {
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self {
            width,
            height,
            state: NodeState::new(),
        }
    }
}

impl DelegatableNode for SizeNode {
    fn node_state(&self) -> &NodeState {
        &self.state
    }
}

impl ModifierNode for SizeNode {
    impl_modifier_node!(layout);
}

impl LayoutModifierNode for SizeNode {
    fn measure(
        &self,
        _context: &mut dyn ModifierNodeContext,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> LayoutModifierMeasureResult {
        let width = self
            .width
            .map(|value| value.clamp(constraints.min_width, constraints.max_width));
        let height = self
            .height
            .map(|value| value.clamp(constraints.min_height, constraints.max_height));

        let mut inner_constraints = constraints;
        if let Some(width) = width {
            inner_constraints = inner_constraints.tighten_width(width);
        }
        if let Some(height) = height {
            inner_constraints = inner_constraints.tighten_height(height);
        }

        let placeable = measurable.measure(inner_constraints);
        LayoutModifierMeasureResult::with_size(Size::new(
            width.unwrap_or(placeable.width()),
            height.unwrap_or(placeable.height()),
        ))
    }

    fn min_intrinsic_width(&self, measurable: &dyn Measurable, height: f32) -> f32 {
        self.width
            .unwrap_or_else(|| measurable.min_intrinsic_width(height))
    }

    fn max_intrinsic_width(&self, measurable: &dyn Measurable, height: f32) -> f32 {
        self.width
            .unwrap_or_else(|| measurable.max_intrinsic_width(height))
    }

    fn min_intrinsic_height(&self, measurable: &dyn Measurable, width: f32) -> f32 {
        self.height
            .unwrap_or_else(|| measurable.min_intrinsic_height(width))
    }

    fn max_intrinsic_height(&self, measurable: &dyn Measurable, width: f32) -> f32 {
        self.height
            .unwrap_or_else(|| measurable.max_intrinsic_height(width))
    }
}

/// Element that creates and updates size nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeElement {
    width: Option<f32>,
    height: Option<f32>,
}

impl SizeElement {
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self { width, height }
    }
}

impl Hash for SizeElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_option_f32(state, self.width);
        hash_option_f32(state, self.height);
    }
}

impl ModifierNodeElement for SizeElement {
    type Node = SizeNode;

    fn create(&self) -> Self::Node {
        SizeNode::new(self.width, self.height)
    }

    fn update(&self, node: &mut Self::Node) {
        node.width = self.width;
        node.height = self.height;
    }

    fn inspector_name(&self) -> &'static str {
        "size"
    }

    fn capabilities(&self) -> NodeCapabilities {
        NodeCapabilities::LAYOUT
    }
}

// ============================================================================
// Intrinsic Size Modifier Node
// ============================================================================

/// Axis an [`IntrinsicSizeNode`] resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntrinsicAxis {
    Width,
    Height,
}

/// Node that fixes one axis to the content's min or max intrinsic size,
/// coerced into the incoming constraints.
#[derive(Debug)]
pub struct IntrinsicSizeNode {
    axis: IntrinsicAxis,
    size: IntrinsicSize,
    state: NodeState,
}

impl IntrinsicSizeNode {
    pub fn new(axis: IntrinsicAxis, size: IntrinsicSize) -> Self {
        Self {
            axis,
            size,
            state: NodeState::new(),
        }
    }

    fn intrinsic_width(&self, measurable: &dyn Measurable, height: f32) -> f32 {
        match self.size {
            IntrinsicSize::Min => measurable.min_intrinsic_width(height),
            IntrinsicSize::Max => measurable.max_intrinsic_width(height),
        }
    }

    fn intrinsic_height(&self, measurable: &dyn Measurable, width: f32) -> f32 {
        match self.size {
            IntrinsicSize::Min => measurable.min_intrinsic_height(width),
            IntrinsicSize::Max => measurable.max_intrinsic_height(width),
        }
    }
}

impl DelegatableNode for IntrinsicSizeNode {
    fn node_state(&self) -> &NodeState {
        &self.state
    }
}

impl ModifierNode for IntrinsicSizeNode {
    impl_modifier_node!(layout);
}

impl LayoutModifierNode for IntrinsicSizeNode {
    fn measure(
        &self,
        _context: &mut dyn ModifierNodeContext,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> LayoutModifierMeasureResult {
        let inner_constraints = match self.axis {
            IntrinsicAxis::Width => {
                let width = self
                    .intrinsic_width(measurable, constraints.max_height)
                    .clamp(constraints.min_width, constraints.max_width);
                constraints.tighten_width(width)
            }
            IntrinsicAxis::Height => {
                let height = self
                    .intrinsic_height(measurable, constraints.max_width)
                    .clamp(constraints.min_height, constraints.max_height);
                constraints.tighten_height(height)
            }
        };
        let placeable = measurable.measure(inner_constraints);
        LayoutModifierMeasureResult::with_size(Size::new(placeable.width(), placeable.height()))
    }

    fn min_intrinsic_width(&self, measurable: &dyn Measurable, height: f32) -> f32 {
        match self.axis {
            IntrinsicAxis::Width => self.intrinsic_width(measurable, height),
            IntrinsicAxis::Height => measurable.min_intrinsic_width(height),
        }
    }

    fn max_intrinsic_width(&self, measurable: &dyn Measurable, height: f32) -> f32 {
        match self.axis {
            IntrinsicAxis::Width => self.intrinsic_width(measurable, height),
            IntrinsicAxis::Height => measurable.max_intrinsic_width(height),
        }
    }

    fn min_intrinsic_height(&self, measurable: &dyn Measurable, width: f32) -> f32 {
        match self.axis {
            IntrinsicAxis::Width => measurable.min_intrinsic_height(width),
            IntrinsicAxis::Height => self.intrinsic_height(measurable, width),
        }
    }

    fn max_intrinsic_height(&self, measurable: &dyn Measurable, width: f32) -> f32 {
        match self.axis {
            IntrinsicAxis::Width => measurable.max_intrinsic_height(width),
            IntrinsicAxis::Height => self.intrinsic_height(measurable, width),
        }
    }
}

/// Element that creates and updates intrinsic size nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntrinsicSizeElement {
    axis: IntrinsicAxis,
    size: IntrinsicSize,
}

impl IntrinsicSizeElement {
    pub fn width(size: IntrinsicSize) -> Self {
        Self {
            axis: IntrinsicAxis::Width,
            size,
        }
    }

    pub fn height(size: IntrinsicSize) -> Self {
        Self {
            axis: IntrinsicAxis::Height,
            size,
        }
    }
}

impl ModifierNodeElement for IntrinsicSizeElement {
    type Node = IntrinsicSizeNode;

    fn create(&self) -> Self::Node {
        IntrinsicSizeNode::new(self.axis, self.size)
    }

    fn update(&self, node: &mut Self::Node) {
        node.axis = self.axis;
        node.size = self.size;
    }

    fn inspector_name(&self) -> &'static str {
        "intrinsicSize"
    }

    fn capabilities(&self) -> NodeCapabilities {
        NodeCapabilities::LAYOUT
    }
}

// ============================================================================
// Fill Modifier Node
// ============================================================================

/// Node that fills a fraction of the available width.
///
/// An unbounded width leaves the content free to choose.
#[derive(Debug)]
pub struct FillNode {
    fraction: f32,
    state: NodeState,
}

impl FillNode {
    pub fn new(fraction: f32) -> Self {
        Self {
            fraction,
            state: NodeState::new(),
        }
    }
}

impl DelegatableNode for FillNode {
    fn node_state(&self) -> &NodeState {
        &self.state
    }
}

impl ModifierNode for FillNode {
    impl_modifier_node!(layout);
}

impl LayoutModifierNode for FillNode {
    fn measure(
        &self,
        _context: &mut dyn ModifierNodeContext,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> LayoutModifierMeasureResult {
        let inner_constraints = if constraints.has_bounded_width() {
            let width = (constraints.max_width * self.fraction)
                .round()
                .clamp(constraints.min_width, constraints.max_width);
            constraints.tighten_width(width)
        } else {
            constraints
        };
        let placeable = measurable.measure(inner_constraints);
        LayoutModifierMeasureResult::with_size(Size::new(placeable.width(), placeable.height()))
    }
}

/// Element that creates and updates fill nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct FillElement {
    fraction: f32,
}

impl FillElement {
    pub fn width(fraction: f32) -> Self {
        Self { fraction }
    }
}

impl Hash for FillElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32_value(state, self.fraction);
    }
}

impl ModifierNodeElement for FillElement {
    type Node = FillNode;

    fn create(&self) -> Self::Node {
        FillNode::new(self.fraction)
    }

    fn update(&self, node: &mut Self::Node) {
        node.fraction = self.fraction;
    }

    fn inspector_name(&self) -> &'static str {
        "fillMaxWidth"
    }

    fn capabilities(&self) -> NodeCapabilities {
        NodeCapabilities::LAYOUT
    }
}

#[cfg(test)]
#[path = "tests/modifier_nodes_tests.rs"]
mod tests;
