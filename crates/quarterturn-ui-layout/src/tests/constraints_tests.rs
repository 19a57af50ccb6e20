use super::Constraints;

#[test]
fn transpose_twice_is_identity() {
    let samples = [
        Constraints::tight(10.0, 20.0),
        Constraints::loose(300.0, f32::INFINITY),
        Constraints::unbounded(),
        Constraints {
            min_width: 0.0,
            max_width: 300.0,
            min_height: 10.0,
            max_height: f32::INFINITY,
        },
    ];
    for constraints in samples {
        assert_eq!(constraints.transpose().transpose(), constraints);
    }
}

#[test]
fn transpose_swaps_axes() {
    let constraints = Constraints {
        min_width: 1.0,
        max_width: 2.0,
        min_height: 3.0,
        max_height: 4.0,
    };
    assert_eq!(
        constraints.transpose(),
        Constraints {
            min_width: 3.0,
            max_width: 4.0,
            min_height: 1.0,
            max_height: 2.0,
        }
    );
}

#[test]
fn boundedness_is_per_axis() {
    let constraints = Constraints::loose(300.0, f32::INFINITY);
    assert!(constraints.has_bounded_width());
    assert!(!constraints.has_bounded_height());
    assert!(!constraints.is_bounded());
    assert!(Constraints::tight(1.0, 1.0).is_bounded());
}

#[test]
fn deflate_never_goes_negative() {
    let deflated = Constraints::tight(6.0, 6.0).deflate(8.0, 2.0);
    assert_eq!(deflated.min_width, 0.0);
    assert_eq!(deflated.max_width, 0.0);
    assert_eq!(deflated.min_height, 4.0);
    assert_eq!(deflated.max_height, 4.0);
}

#[test]
fn deflate_keeps_unbounded_axis_unbounded() {
    let deflated = Constraints::unbounded().deflate(8.0, 8.0);
    assert!(!deflated.has_bounded_width());
    assert!(!deflated.has_bounded_height());
}

#[test]
fn constrain_clamps_into_bounds() {
    let constraints = Constraints {
        min_width: 10.0,
        max_width: 100.0,
        min_height: 0.0,
        max_height: 20.0,
    };
    assert_eq!(constraints.constrain(5.0, 50.0), (10.0, 20.0));
    assert_eq!(constraints.constrain(50.0, 5.0), (50.0, 5.0));
}

#[test]
fn tighten_keeps_other_axis() {
    let constraints = Constraints::loose(100.0, 100.0).tighten_width(40.0);
    assert_eq!(constraints.min_width, 40.0);
    assert_eq!(constraints.max_width, 40.0);
    assert_eq!(constraints.max_height, 100.0);
    let constraints = constraints.tighten_height(7.0);
    assert_eq!(constraints.min_height, 7.0);
    assert_eq!(constraints.max_width, 40.0);
}
