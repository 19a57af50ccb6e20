//! Core layout traits and types shared by layout modifier nodes.

use crate::constraints::Constraints;
use quarterturn_ui_graphics::Size;

/// Object capable of measuring a layout child and exposing intrinsic sizes.
pub trait Measurable {
    /// Measures the child with the provided constraints, returning a [`Placeable`].
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable>;

    /// Returns the minimum width achievable for the given height.
    fn min_intrinsic_width(&self, height: f32) -> f32;

    /// Returns the maximum width achievable for the given height.
    fn max_intrinsic_width(&self, height: f32) -> f32;

    /// Returns the minimum height achievable for the given width.
    fn min_intrinsic_height(&self, width: f32) -> f32;

    /// Returns the maximum height achievable for the given width.
    fn max_intrinsic_height(&self, width: f32) -> f32;
}

/// Result of running a measurement pass for a single child.
pub trait Placeable {
    /// Places the child at the provided coordinates relative to its parent.
    fn place(&self, x: f32, y: f32);

    /// Returns the measured width of the child.
    fn width(&self) -> f32;

    /// Returns the measured height of the child.
    fn height(&self) -> f32;

    /// Offset of the innermost content relative to this placeable's origin,
    /// accumulated through any layout modifiers it wraps.
    fn content_offset(&self) -> (f32, f32) {
        (0.0, 0.0)
    }
}

/// Outcome of a layout modifier's measure call: the size it reports to its
/// parent and where the wrapped content goes inside that size.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LayoutModifierMeasureResult {
    pub size: Size,
    pub placement_offset_x: f32,
    pub placement_offset_y: f32,
}

impl LayoutModifierMeasureResult {
    pub fn new(size: Size, placement_offset_x: f32, placement_offset_y: f32) -> Self {
        Self {
            size,
            placement_offset_x,
            placement_offset_y,
        }
    }

    /// Result that places the wrapped content at the origin.
    pub fn with_size(size: Size) -> Self {
        Self::new(size, 0.0, 0.0)
    }
}
