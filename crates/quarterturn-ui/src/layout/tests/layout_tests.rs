use super::*;
use crate::modifier::GraphicsLayer;
use std::cell::Cell;

struct ContentPlaceable {
    width: f32,
    height: f32,
    placed_at: Rc<Cell<Option<Point>>>,
}

impl Placeable for ContentPlaceable {
    fn place(&self, x: f32, y: f32) {
        self.placed_at.set(Some(Point::new(x, y)));
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }
}

/// Fixed-size content that remembers where it was placed.
struct Content {
    width: f32,
    height: f32,
    placed_at: Rc<Cell<Option<Point>>>,
}

impl Content {
    fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            placed_at: Rc::new(Cell::new(None)),
        }
    }

    fn placed_at(&self) -> Option<Point> {
        self.placed_at.get()
    }
}

impl Measurable for Content {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        let (width, height) = constraints.constrain(self.width, self.height);
        Box::new(ContentPlaceable {
            width,
            height,
            placed_at: Rc::clone(&self.placed_at),
        })
    }

    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.width
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.width
    }

    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        self.height
    }

    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        self.height
    }
}

#[test]
fn empty_chain_measures_content_directly() {
    let node = LayoutNode::new();
    let content = Content::new(200.0, 50.0);
    let measurement = node.measure(&content, Constraints::unbounded());

    assert_eq!(measurement.size, Size::new(200.0, 50.0));
    assert_eq!(measurement.content_offset, Point::ZERO);
    assert_eq!(content.placed_at(), Some(Point::ZERO));
}

#[test]
fn rotate_right_swaps_footprint_and_places_content() {
    let node = LayoutNode::with_modifier(&Modifier::empty().quarter_rotate(1));
    let content = Content::new(200.0, 50.0);
    let measurement = node.measure(&content, Constraints::unbounded());

    assert_eq!(measurement.size, Size::new(50.0, 200.0));
    assert_eq!(measurement.content_size, Size::new(200.0, 50.0));
    assert_eq!(measurement.content_offset, Point::new(-75.0, 75.0));
    assert_eq!(content.placed_at(), Some(Point::new(-75.0, 75.0)));
}

#[test]
fn rotated_content_visually_fills_reported_box() {
    for turns in [1, -1] {
        let node = LayoutNode::with_modifier(&Modifier::empty().quarter_rotate(turns));
        let content = Content::new(200.0, 50.0);
        let measurement = node.measure(&content, Constraints::unbounded());

        assert_eq!(
            node.visual_content_bounds(&measurement),
            Rect::from_size(measurement.size),
            "turns = {turns}"
        );
    }
}

#[test]
fn upside_down_keeps_layout_and_rotates_drawing() {
    let node = LayoutNode::with_modifier(&Modifier::empty().quarter_rotate(2));
    let content = Content::new(200.0, 50.0);
    let measurement = node.measure(&content, Constraints::unbounded());

    assert_eq!(measurement.size, Size::new(200.0, 50.0));
    assert_eq!(measurement.content_offset, Point::ZERO);

    let scope = node.draw(measurement.size);
    assert_eq!(scope.rotation_degrees(), 180.0);
    assert!(scope.content_drawn());
}

#[test]
fn plain_rotate_overflows_its_box() {
    let node = LayoutNode::with_modifier(&Modifier::empty().rotate(90.0));
    let content = Content::new(200.0, 50.0);
    let measurement = node.measure(&content, Constraints::unbounded());

    assert_eq!(measurement.size, Size::new(200.0, 50.0));
    assert_eq!(
        node.visual_content_bounds(&measurement),
        Rect {
            x: 75.0,
            y: -75.0,
            width: 50.0,
            height: 200.0,
        }
    );
}

#[test]
fn outer_padding_offsets_rotated_content() {
    let modifier = Modifier::empty().padding(4.0).quarter_rotate(1);
    let node = LayoutNode::with_modifier(&modifier);
    let content = Content::new(200.0, 50.0);
    let measurement = node.measure(&content, Constraints::unbounded());

    assert_eq!(measurement.size, Size::new(58.0, 208.0));
    assert_eq!(measurement.content_offset, Point::new(-71.0, 79.0));
    assert_eq!(
        node.visual_content_bounds(&measurement),
        Rect {
            x: 4.0,
            y: 4.0,
            width: 50.0,
            height: 200.0,
        }
    );
}

#[test]
fn inner_padding_is_rotated_with_content() {
    let modifier = Modifier::empty().quarter_rotate(1).padding(4.0);
    let node = LayoutNode::with_modifier(&modifier);
    let content = Content::new(200.0, 50.0);
    let measurement = node.measure(&content, Constraints::unbounded());

    assert_eq!(measurement.size, Size::new(58.0, 208.0));
    assert_eq!(measurement.content_offset, Point::new(-71.0, 79.0));
}

#[test]
fn bound_node_answers_intrinsics_through_chain() {
    let node = LayoutNode::with_modifier(&Modifier::empty().quarter_rotate(-1).padding(4.0));
    let content = Content::new(120.0, 30.0);
    let bound = node.bind(&content);

    assert_eq!(bound.min_intrinsic_width(100.0), 38.0);
    assert_eq!(bound.max_intrinsic_width(100.0), 38.0);
    assert_eq!(bound.min_intrinsic_height(100.0), 128.0);
    assert_eq!(bound.max_intrinsic_height(100.0), 128.0);
}

#[test]
fn nested_nodes_place_innermost_content() {
    let inner = LayoutNode::with_modifier(&Modifier::empty().quarter_rotate(1));
    let outer = LayoutNode::with_modifier(&Modifier::empty().padding(4.0));
    let content = Content::new(200.0, 50.0);

    let measurement = outer.measure(&inner.bind(&content), Constraints::unbounded());

    assert_eq!(measurement.size, Size::new(58.0, 208.0));
    assert_eq!(measurement.content_size, Size::new(50.0, 200.0));
    assert_eq!(content.placed_at(), Some(Point::new(-71.0, 79.0)));
}

#[test]
fn set_modifier_records_invalidations_once() {
    let mut node = LayoutNode::new();
    let modifier = Modifier::empty().quarter_rotate(1);
    node.set_modifier(&modifier);
    assert_eq!(
        node.take_invalidations(),
        vec![InvalidationKind::Draw, InvalidationKind::Layout]
    );

    node.set_modifier(&modifier);
    assert!(node.take_invalidations().is_empty());
    assert_eq!(node.modifier(), &modifier);
}

#[test]
fn graphics_layer_translation_moves_visual_bounds() {
    let node = LayoutNode::with_modifier(&Modifier::empty().graphics_layer(GraphicsLayer {
        translation_x: 10.0,
        ..GraphicsLayer::default()
    }));
    let content = Content::new(200.0, 50.0);
    let measurement = node.measure(&content, Constraints::unbounded());

    assert_eq!(measurement.size, Size::new(200.0, 50.0));
    assert_eq!(
        node.visual_content_bounds(&measurement),
        Rect {
            x: 10.0,
            y: 0.0,
            width: 200.0,
            height: 50.0,
        }
    );
}

#[test]
fn graphics_layer_scale_shrinks_visual_bounds_around_center() {
    let node = LayoutNode::with_modifier(&Modifier::empty().graphics_layer(GraphicsLayer {
        scale: 0.5,
        ..GraphicsLayer::default()
    }));
    let content = Content::new(200.0, 50.0);
    let measurement = node.measure(&content, Constraints::unbounded());

    assert_eq!(
        node.visual_content_bounds(&measurement),
        Rect {
            x: 50.0,
            y: 12.5,
            width: 100.0,
            height: 25.0,
        }
    );
}
