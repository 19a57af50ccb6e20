use super::{inspector_metadata, Modifier};
use crate::modifier_nodes::RotateElement;

impl Modifier {
    /// Rotates the drawn content by `degrees` around its center.
    ///
    /// Drawing only: the layout size is unchanged, so a rotated child may
    /// overlap its neighbours. Positive angles turn clockwise.
    ///
    /// Example: `Modifier::empty().rotate(90.0)`
    pub fn rotate(self, degrees: f32) -> Self {
        let modifier = Self::with_element(RotateElement::new(degrees)).with_inspector_metadata(
            inspector_metadata("rotate", move |info| {
                info.add_property("degrees", degrees.to_string());
            }),
        );
        self.then(modifier)
    }
}
