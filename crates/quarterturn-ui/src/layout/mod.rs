//! Single-node layout host.
//!
//! A [`LayoutNode`] owns the reconciled modifier chain of one UI element and
//! runs it around a piece of content: measurement and placement go through
//! the coordinator chain, drawing through the draw nodes from outermost to
//! innermost.

mod coordinator;

use quarterturn_foundation::{
    BasicModifierNodeContext, InvalidationKind, ModifierNodeChain, ModifierNodeRc,
    NodeCapabilities,
};
use quarterturn_ui_graphics::{DrawScope, DrawScopeDefault};
use quarterturn_ui_layout::{Constraints, Measurable, Placeable};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

use crate::modifier::{Modifier, Point, Rect, Size};
use coordinator::{InnerCoordinator, LayoutModifierCoordinator, NodeCoordinator};

/// Outcome of measuring a [`LayoutNode`] around its content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMeasurement {
    /// Size the node reports to its parent.
    pub size: Size,
    /// Size the content was measured at.
    pub content_size: Size,
    /// Where the content is placed relative to the node's origin.
    pub content_offset: Point,
}

impl LayoutMeasurement {
    /// Content rectangle in the node's coordinates, before any drawing transform.
    pub fn content_bounds(&self) -> Rect {
        Rect::from_origin_size(self.content_offset, self.content_size)
    }
}

/// Host for one element's modifier chain.
pub struct LayoutNode {
    modifier: Modifier,
    chain: ModifierNodeChain,
    context: Rc<RefCell<BasicModifierNodeContext>>,
}

impl LayoutNode {
    pub fn new() -> Self {
        Self {
            modifier: Modifier::empty(),
            chain: ModifierNodeChain::new(),
            context: Rc::new(RefCell::new(BasicModifierNodeContext::new())),
        }
    }

    pub fn with_modifier(modifier: &Modifier) -> Self {
        let mut node = Self::new();
        node.set_modifier(modifier);
        node
    }

    /// Reconciles the node chain against `modifier`.
    ///
    /// Unchanged elements keep their nodes; invalidations raised by the
    /// reconciliation are available from [`Self::take_invalidations`].
    pub fn set_modifier(&mut self, modifier: &Modifier) {
        if *modifier == self.modifier {
            return;
        }
        self.chain
            .update_from_slice(modifier.elements(), &mut *self.context.borrow_mut());
        self.modifier = modifier.clone();
        log::trace!("layout node chain: {:?}", self.chain);
    }

    pub fn modifier(&self) -> &Modifier {
        &self.modifier
    }

    pub fn modifier_chain(&self) -> &ModifierNodeChain {
        &self.chain
    }

    /// Drains the invalidations recorded since the last call.
    pub fn take_invalidations(&self) -> Vec<InvalidationKind> {
        self.context.borrow_mut().take_invalidations()
    }

    /// Pairs this node with its content so it can be measured as one unit,
    /// including as the content of another node.
    pub fn bind<'a>(&'a self, content: &'a dyn Measurable) -> BoundLayoutNode<'a> {
        BoundLayoutNode {
            node: self,
            content,
        }
    }

    /// Measures the chain around `content` and places the content at the
    /// offset the chain settled on.
    pub fn measure(
        &self,
        content: &dyn Measurable,
        constraints: Constraints,
    ) -> LayoutMeasurement {
        let placeable = self.bind(content).measure_node(constraints);
        placeable.place(0.0, 0.0);
        LayoutMeasurement {
            size: placeable.size,
            content_size: placeable.content_size(),
            content_offset: placeable.content_offset,
        }
    }

    /// Runs the draw nodes, outermost first, over a scope of `size` and then
    /// draws the content.
    ///
    /// Every draw node shares one scope, so rotation and scale pivot on the
    /// center of the whole node rather than on the box at the draw node's
    /// place in the chain. The two centers coincide as long as the layout
    /// nodes between them keep the content centered, which holds for the
    /// uniform and symmetric padding factories and the sizing modifiers.
    pub fn draw(&self, size: Size) -> DrawScopeDefault {
        let mut scope = DrawScopeDefault::new(size);
        for node in self.chain.nodes_with_capability(NodeCapabilities::DRAW) {
            if let Some(draw_node) = node.borrow().as_draw_node() {
                draw_node.draw(&mut scope);
            }
        }
        scope.draw_content();
        scope
    }

    /// Where the content of `measurement` shows up once drawing transforms apply.
    pub fn visual_content_bounds(&self, measurement: &LayoutMeasurement) -> Rect {
        self.draw(measurement.size)
            .visual_bounds(measurement.content_bounds())
    }

    fn build_coordinators<'a>(
        &'a self,
        content: &'a dyn Measurable,
        result_holder: Rc<RefCell<Option<Box<dyn Placeable>>>>,
    ) -> Box<dyn NodeCoordinator + 'a> {
        let layout_nodes: SmallVec<[ModifierNodeRc; 4]> = self
            .chain
            .nodes_with_capability(NodeCapabilities::LAYOUT)
            .collect();

        // Innermost first: the last layout modifier wraps the content directly.
        let mut current: Box<dyn NodeCoordinator + 'a> =
            Box::new(InnerCoordinator::new(content, result_holder));
        for node in layout_nodes.into_iter().rev() {
            current = Box::new(LayoutModifierCoordinator::new(
                node,
                current,
                Rc::clone(&self.context),
            ));
        }
        current
    }
}

impl Default for LayoutNode {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LayoutNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutNode").field("chain", &self.chain).finish()
    }
}

/// A [`LayoutNode`] together with its content, measurable as a whole.
pub struct BoundLayoutNode<'a> {
    node: &'a LayoutNode,
    content: &'a dyn Measurable,
}

impl<'a> BoundLayoutNode<'a> {
    fn measure_node(&self, constraints: Constraints) -> NodePlaceable {
        let holder = Rc::new(RefCell::new(None));
        let outer = self.node.build_coordinators(self.content, Rc::clone(&holder));
        let placeable = outer.measure(constraints);
        let content = holder.borrow_mut().take();
        NodePlaceable {
            size: Size::new(placeable.width(), placeable.height()),
            content_offset: outer.total_content_offset(),
            content,
        }
    }

    fn coordinators(&self) -> Box<dyn NodeCoordinator + 'a> {
        self.node
            .build_coordinators(self.content, Rc::new(RefCell::new(None)))
    }
}

impl<'a> Measurable for BoundLayoutNode<'a> {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        Box::new(self.measure_node(constraints))
    }

    fn min_intrinsic_width(&self, height: f32) -> f32 {
        self.coordinators().min_intrinsic_width(height)
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        self.coordinators().max_intrinsic_width(height)
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.coordinators().min_intrinsic_height(width)
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.coordinators().max_intrinsic_height(width)
    }
}

/// Measured node; placing it places the content at the accumulated offset.
struct NodePlaceable {
    size: Size,
    content_offset: Point,
    content: Option<Box<dyn Placeable>>,
}

impl NodePlaceable {
    fn content_size(&self) -> Size {
        self.content
            .as_ref()
            .map(|content| Size::new(content.width(), content.height()))
            .unwrap_or(Size::ZERO)
    }
}

impl Placeable for NodePlaceable {
    fn place(&self, x: f32, y: f32) {
        if let Some(content) = &self.content {
            content.place(x + self.content_offset.x, y + self.content_offset.y);
        }
    }

    fn width(&self) -> f32 {
        self.size.width
    }

    fn height(&self) -> f32 {
        self.size.height
    }

    fn content_offset(&self) -> (f32, f32) {
        (self.content_offset.x, self.content_offset.y)
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
