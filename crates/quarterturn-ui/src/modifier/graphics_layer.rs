use super::{inspector_metadata, GraphicsLayer, Modifier};
use crate::modifier_nodes::GraphicsLayerElement;

impl Modifier {
    /// Apply a graphics layer with transformations and alpha.
    ///
    /// Example: `Modifier::empty().graphics_layer(GraphicsLayer { alpha: 0.5, ..Default::default() })`
    pub fn graphics_layer(self, layer: GraphicsLayer) -> Self {
        let modifier = Self::with_element(GraphicsLayerElement::new(layer))
            .with_inspector_metadata(inspector_metadata("graphicsLayer", move |info| {
                info.add_property("alpha", layer.alpha.to_string());
                info.add_property("scale", layer.scale.to_string());
                info.add_property("rotationZ", layer.rotation_z.to_string());
                info.add_property("translationX", layer.translation_x.to_string());
                info.add_property("translationY", layer.translation_y.to_string());
            }));
        self.then(modifier)
    }
}
