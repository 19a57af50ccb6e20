use super::{inspector_metadata, EdgeInsets, InspectorMetadata, Modifier};
use crate::modifier_nodes::PaddingElement;

impl Modifier {
    /// Add uniform padding to all sides.
    ///
    /// Example: `Modifier::empty().padding(16.0)`
    pub fn padding(self, p: f32) -> Self {
        self.padding_insets(EdgeInsets::uniform(p))
    }

    /// Add horizontal and vertical padding.
    ///
    /// Example: `Modifier::empty().padding_symmetric(16.0, 8.0)`
    pub fn padding_symmetric(self, horizontal: f32, vertical: f32) -> Self {
        self.padding_insets(EdgeInsets::symmetric(horizontal, vertical))
    }

    fn padding_insets(self, padding: EdgeInsets) -> Self {
        let modifier = Self::with_element(PaddingElement::new(padding))
            .with_inspector_metadata(padding_metadata(padding));
        self.then(modifier)
    }
}

fn padding_metadata(padding: EdgeInsets) -> InspectorMetadata {
    inspector_metadata("padding", |info| {
        info.add_property("paddingLeft", padding.left.to_string());
        info.add_property("paddingTop", padding.top.to_string());
        info.add_property("paddingRight", padding.right.to_string());
        info.add_property("paddingBottom", padding.bottom.to_string());
    })
}
