use anyhow::{ensure, Result};
use quarterturn_ui::{
    Constraints, IntrinsicSize, LayoutMeasurement, LayoutNode, Measurable, Modifier, Placeable,
};

/// A 12 tall bar stacked over a line of text 120 wide and 18 tall.
struct TestView;

impl TestView {
    const BAR_HEIGHT: f32 = 12.0;
    const TEXT_WIDTH: f32 = 120.0;
    const LINE_HEIGHT: f32 = 18.0;

    fn height_for(width: f32) -> f32 {
        let lines = (Self::TEXT_WIDTH / width.max(1.0)).ceil().max(1.0);
        Self::BAR_HEIGHT + lines * Self::LINE_HEIGHT
    }
}

struct ViewPlaceable {
    width: f32,
    height: f32,
}

impl Placeable for ViewPlaceable {
    fn place(&self, x: f32, y: f32) {
        log::debug!("test view placed at ({x}, {y})");
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }
}

impl Measurable for TestView {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        let width = Self::TEXT_WIDTH.clamp(constraints.min_width, constraints.max_width);
        let height =
            Self::height_for(width).clamp(constraints.min_height, constraints.max_height);
        Box::new(ViewPlaceable { width, height })
    }

    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        40.0
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        Self::TEXT_WIDTH
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        Self::height_for(width)
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        Self::height_for(width)
    }
}

fn report(label: &str, node: &LayoutNode, measurement: &LayoutMeasurement) {
    let visual = node.visual_content_bounds(measurement);
    log::info!(
        "{label}: size {}x{}, content at ({}, {}), drawn at ({}, {}) {}x{}",
        measurement.size.width,
        measurement.size.height,
        measurement.content_offset.x,
        measurement.content_offset.y,
        visual.x,
        visual.y,
        visual.width,
        visual.height,
    );
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let constraints = Constraints::loose(400.0, 400.0);
    let view = Modifier::empty()
        .width_intrinsic(IntrinsicSize::Max)
        .padding(4.0);

    let original = LayoutNode::with_modifier(&view);
    let upright = original.measure(&TestView, constraints);
    report("original", &original, &upright);

    let rotated =
        LayoutNode::with_modifier(&Modifier::empty().quarter_rotate(-1).then(view.clone()));
    let turned = rotated.measure(&TestView, constraints);
    report("quarter_rotate(-1)", &rotated, &turned);
    ensure!(
        turned.size == upright.size.transposed(),
        "rotated size {:?} is not the transposed upright size {:?}",
        turned.size,
        upright.size
    );

    // Same rotated view inside a box that limits its height.
    let squeezed_box = LayoutNode::with_modifier(&Modifier::empty().height(100.0).padding(4.0));
    let boxed = squeezed_box.measure(&rotated.bind(&TestView), constraints);
    report("quarter_rotate(-1) in a 100 tall box", &squeezed_box, &boxed);
    ensure!(
        boxed.size.height == 100.0,
        "box height {} does not honor its height modifier",
        boxed.size.height
    );

    // Plain rotation keeps the upright layout and draws outside of it.
    let spun = LayoutNode::with_modifier(&Modifier::empty().rotate(90.0).then(view));
    let spun_measurement = spun.measure(&TestView, constraints);
    report("rotate(90)", &spun, &spun_measurement);
    ensure!(
        spun_measurement.size == upright.size,
        "rotate(90) changed the layout size to {:?}",
        spun_measurement.size
    );

    Ok(())
}
