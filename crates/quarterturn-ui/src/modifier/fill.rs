use super::{inspector_metadata, DimensionConstraint, Modifier};
use crate::modifier_nodes::FillElement;

impl Modifier {
    /// Have the content fill the maximum available width.
    ///
    /// Example: `Modifier::empty().fill_max_width()`
    pub fn fill_max_width(self) -> Self {
        self.fill_max_width_fraction(1.0)
    }

    /// Fill a fraction of the maximum available width.
    ///
    /// Example: `Modifier::empty().fill_max_width_fraction(0.5)`
    pub fn fill_max_width_fraction(self, fraction: f32) -> Self {
        let clamped = fraction.clamp(0.0, 1.0);
        let modifier = Self::with_element(FillElement::width(clamped)).with_inspector_metadata(
            inspector_metadata("fillMaxWidth", move |info| {
                info.add_dimension("width", DimensionConstraint::Fraction(clamped));
            }),
        );
        self.then(modifier)
    }
}
