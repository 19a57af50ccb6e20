//! Size modifiers: preferred sizes and intrinsic sizing.

use super::{inspector_metadata, DimensionConstraint, Modifier, Size};
use crate::modifier_nodes::{IntrinsicSizeElement, SizeElement};
use quarterturn_ui_layout::IntrinsicSize;

impl Modifier {
    /// Declare the preferred size of the content.
    ///
    /// The incoming measurement constraints may override this value, forcing the content
    /// to be either smaller or larger.
    ///
    /// Example: `Modifier::empty().size(Size { width: 100.0, height: 200.0 })`
    pub fn size(self, size: Size) -> Self {
        let width = size.width;
        let height = size.height;
        let modifier = Self::with_element(SizeElement::new(Some(width), Some(height)))
            .with_inspector_metadata(inspector_metadata("size", move |info| {
                info.add_dimension("width", DimensionConstraint::Points(width));
                info.add_dimension("height", DimensionConstraint::Points(height));
            }));
        self.then(modifier)
    }

    /// Convenience method for `size(Size { width, height })`.
    pub fn size_points(self, width: f32, height: f32) -> Self {
        self.size(Size { width, height })
    }

    /// Declare the preferred width of the content.
    ///
    /// Example: `Modifier::empty().width(100.0).height(200.0)`
    pub fn width(self, width: f32) -> Self {
        let modifier = Self::with_element(SizeElement::new(Some(width), None))
            .with_inspector_metadata(inspector_metadata("width", move |info| {
                info.add_dimension("width", DimensionConstraint::Points(width));
            }));
        self.then(modifier)
    }

    /// Declare the preferred height of the content.
    pub fn height(self, height: f32) -> Self {
        let modifier = Self::with_element(SizeElement::new(None, Some(height)))
            .with_inspector_metadata(inspector_metadata("height", move |info| {
                info.add_dimension("height", DimensionConstraint::Points(height));
            }));
        self.then(modifier)
    }

    /// Declare the width of the content based on its intrinsic size.
    pub fn width_intrinsic(self, intrinsic: IntrinsicSize) -> Self {
        let modifier = Self::with_element(IntrinsicSizeElement::width(intrinsic))
            .with_inspector_metadata(inspector_metadata("widthIntrinsic", move |info| {
                info.add_dimension("width", DimensionConstraint::Intrinsic(intrinsic));
            }));
        self.then(modifier)
    }

    /// Declare the height of the content based on its intrinsic size.
    pub fn height_intrinsic(self, intrinsic: IntrinsicSize) -> Self {
        let modifier = Self::with_element(IntrinsicSizeElement::height(intrinsic))
            .with_inspector_metadata(inspector_metadata("heightIntrinsic", move |info| {
                info.add_dimension("height", DimensionConstraint::Intrinsic(intrinsic));
            }));
        self.then(modifier)
    }
}
