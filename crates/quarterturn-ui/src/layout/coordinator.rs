//! Node coordinators.
//!
//! Every layout modifier node of a chain gets a coordinator that wraps the
//! next one inward; the innermost wraps the content. Measuring the outermost
//! coordinator measures the whole chain.
//!
//! **Content offset tracking**: each coordinator adds its node's placement
//! offset to the offset accumulated by the coordinator it wraps, so after a
//! measure pass the outermost one knows where the content sits.

use quarterturn_foundation::{
    BasicModifierNodeContext, LayoutModifierNode, ModifierNodeContext, ModifierNodeRc,
};
use quarterturn_ui_layout::{Constraints, Measurable, Placeable};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::modifier::{Point, Size};

/// Core coordinator trait that all coordinators implement.
pub(crate) trait NodeCoordinator: Measurable {
    /// Placement offset accumulated from this coordinator down to the content.
    fn total_content_offset(&self) -> Point;

    fn as_measurable(&self) -> &dyn Measurable;
}

/// Coordinator that wraps a single layout modifier node from the chain.
pub(crate) struct LayoutModifierCoordinator<'a> {
    node: ModifierNodeRc,
    wrapped: Box<dyn NodeCoordinator + 'a>,
    accumulated_offset: Cell<Point>,
    context: Rc<RefCell<BasicModifierNodeContext>>,
}

impl<'a> LayoutModifierCoordinator<'a> {
    /// Only nodes whose element declares `NodeCapabilities::LAYOUT` get a
    /// coordinator, and those nodes implement [`LayoutModifierNode`].
    pub(crate) fn new(
        node: ModifierNodeRc,
        wrapped: Box<dyn NodeCoordinator + 'a>,
        context: Rc<RefCell<BasicModifierNodeContext>>,
    ) -> Self {
        Self {
            node,
            wrapped,
            accumulated_offset: Cell::new(Point::ZERO),
            context,
        }
    }

    fn with_layout_node<R>(&self, f: impl FnOnce(&dyn LayoutModifierNode) -> R) -> R {
        let node = self.node.borrow();
        let layout_node = node
            .as_layout_node()
            .expect("layout coordinator wraps a node without a layout implementation");
        f(layout_node)
    }
}

impl<'a> NodeCoordinator for LayoutModifierCoordinator<'a> {
    fn total_content_offset(&self) -> Point {
        self.accumulated_offset.get()
    }

    fn as_measurable(&self) -> &dyn Measurable {
        self
    }
}

impl<'a> Measurable for LayoutModifierCoordinator<'a> {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        // The wrapped coordinators measure while this node is measuring, so
        // the shared context is only borrowed to merge afterwards.
        let mut scratch = BasicModifierNodeContext::new();
        let result = self.with_layout_node(|layout_node| {
            layout_node.measure(&mut scratch, self.wrapped.as_measurable(), constraints)
        });
        {
            let mut shared = self.context.borrow_mut();
            for kind in scratch.take_invalidations() {
                shared.invalidate(kind);
            }
        }

        let child_accumulated = self.wrapped.total_content_offset();
        let accumulated = Point {
            x: result.placement_offset_x + child_accumulated.x,
            y: result.placement_offset_y + child_accumulated.y,
        };
        self.accumulated_offset.set(accumulated);

        Box::new(CoordinatorPlaceable {
            size: result.size,
            content_offset: accumulated,
        })
    }

    fn min_intrinsic_width(&self, height: f32) -> f32 {
        self.with_layout_node(|layout_node| {
            layout_node.min_intrinsic_width(self.wrapped.as_measurable(), height)
        })
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        self.with_layout_node(|layout_node| {
            layout_node.max_intrinsic_width(self.wrapped.as_measurable(), height)
        })
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.with_layout_node(|layout_node| {
            layout_node.min_intrinsic_height(self.wrapped.as_measurable(), width)
        })
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.with_layout_node(|layout_node| {
            layout_node.max_intrinsic_height(self.wrapped.as_measurable(), width)
        })
    }
}

/// Inner coordinator that wraps the node's content.
///
/// Keeps the content's most recent placeable so the host can place it once
/// the chain has settled on an offset.
pub(crate) struct InnerCoordinator<'a> {
    content: &'a dyn Measurable,
    result_holder: Rc<RefCell<Option<Box<dyn Placeable>>>>,
}

impl<'a> InnerCoordinator<'a> {
    pub(crate) fn new(
        content: &'a dyn Measurable,
        result_holder: Rc<RefCell<Option<Box<dyn Placeable>>>>,
    ) -> Self {
        Self {
            content,
            result_holder,
        }
    }
}

impl<'a> NodeCoordinator for InnerCoordinator<'a> {
    fn total_content_offset(&self) -> Point {
        Point::ZERO
    }

    fn as_measurable(&self) -> &dyn Measurable {
        self
    }
}

impl<'a> Measurable for InnerCoordinator<'a> {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        let placeable = self.content.measure(constraints);
        let size = Size::new(placeable.width(), placeable.height());
        *self.result_holder.borrow_mut() = Some(placeable);
        Box::new(CoordinatorPlaceable {
            size,
            content_offset: Point::ZERO,
        })
    }

    fn min_intrinsic_width(&self, height: f32) -> f32 {
        self.content.min_intrinsic_width(height)
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        self.content.max_intrinsic_width(height)
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.content.min_intrinsic_height(width)
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.content.max_intrinsic_height(width)
    }
}

/// Placeable produced by coordinators.
/// Carries the accumulated content offset from the coordinator chain.
struct CoordinatorPlaceable {
    size: Size,
    content_offset: Point,
}

impl Placeable for CoordinatorPlaceable {
    fn width(&self) -> f32 {
        self.size.width
    }

    fn height(&self) -> f32 {
        self.size.height
    }

    fn place(&self, _x: f32, _y: f32) {
        // The host places the content itself from the accumulated offset.
    }

    fn content_offset(&self) -> (f32, f32) {
        (self.content_offset.x, self.content_offset.y)
    }
}
