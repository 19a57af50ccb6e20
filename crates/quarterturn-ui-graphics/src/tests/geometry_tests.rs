use super::*;

#[test]
fn quarter_rotation_about_center_swaps_extent() {
    let rect = Rect {
        x: -75.0,
        y: 75.0,
        width: 200.0,
        height: 50.0,
    };
    let bounds = rect.rotated_bounds(Point::new(25.0, 100.0), 90.0);
    assert_eq!(
        bounds,
        Rect {
            x: 0.0,
            y: 0.0,
            width: 50.0,
            height: 200.0,
        }
    );
}

#[test]
fn negative_and_full_turns_are_exact() {
    let rect = Rect::from_size(Size::new(40.0, 10.0));
    let pivot = rect.center();
    assert_eq!(
        rect.rotated_bounds(pivot, -90.0),
        rect.rotated_bounds(pivot, 270.0)
    );
    assert_eq!(rect.rotated_bounds(pivot, 360.0), rect);
    assert_eq!(rect.rotated_bounds(pivot, 180.0), rect);
}

#[test]
fn arbitrary_angle_grows_bounds() {
    let rect = Rect::from_size(Size::new(10.0, 10.0));
    let bounds = rect.rotated_bounds(rect.center(), 45.0);
    let diagonal = 10.0 * std::f32::consts::SQRT_2;
    assert!((bounds.width - diagonal).abs() < 1e-4);
    assert!((bounds.height - diagonal).abs() < 1e-4);
}

#[test]
fn draw_scope_accumulates_rotation() {
    let mut scope = DrawScopeDefault::new(Size::new(50.0, 200.0));
    scope.rotate(90.0);
    scope.rotate(90.0);
    scope.draw_content();
    assert_eq!(scope.rotation_degrees(), 180.0);
    assert!(scope.content_drawn());
}

#[test]
fn layer_concat_multiplies_alpha_and_adds_rotation() {
    let base = GraphicsLayer {
        alpha: 0.5,
        rotation_z: 10.0,
        ..GraphicsLayer::default()
    };
    let combined = base.concat(GraphicsLayer {
        alpha: 0.5,
        rotation_z: -90.0,
        ..GraphicsLayer::default()
    });
    assert_eq!(combined.alpha, 0.25);
    assert_eq!(combined.rotation_z, -80.0);
    assert_eq!(combined.scale, 1.0);
}

#[test]
fn size_transpose_is_involution() {
    let size = Size::new(3.0, 7.0);
    assert_eq!(size.transposed(), Size::new(7.0, 3.0));
    assert_eq!(size.transposed().transposed(), size);
}

#[test]
fn visual_bounds_apply_layer_translation() {
    let mut scope = DrawScopeDefault::new(Size::new(200.0, 50.0));
    scope.apply_layer(GraphicsLayer {
        translation_x: 10.0,
        translation_y: -4.0,
        ..GraphicsLayer::default()
    });
    assert_eq!(
        scope.visual_bounds(Rect::from_size(Size::new(200.0, 50.0))),
        Rect {
            x: 10.0,
            y: -4.0,
            width: 200.0,
            height: 50.0,
        }
    );
}

#[test]
fn visual_bounds_scale_around_center() {
    let mut scope = DrawScopeDefault::new(Size::new(200.0, 50.0));
    scope.apply_layer(GraphicsLayer {
        scale: 0.5,
        ..GraphicsLayer::default()
    });
    assert_eq!(
        scope.visual_bounds(Rect::from_size(Size::new(200.0, 50.0))),
        Rect {
            x: 50.0,
            y: 12.5,
            width: 100.0,
            height: 25.0,
        }
    );
}

#[test]
fn visual_bounds_rotate_scaled_content_before_translating() {
    let mut scope = DrawScopeDefault::new(Size::new(40.0, 40.0));
    scope.apply_layer(GraphicsLayer {
        scale: 0.5,
        rotation_z: 90.0,
        translation_x: 5.0,
        ..GraphicsLayer::default()
    });
    let content = Rect {
        x: 0.0,
        y: 10.0,
        width: 40.0,
        height: 20.0,
    };
    assert_eq!(
        scope.visual_bounds(content),
        Rect {
            x: 20.0,
            y: 10.0,
            width: 10.0,
            height: 20.0,
        }
    );
}
