//! Modifier system
//!
//! A [`Modifier`] is an immutable, cheaply cloned list of modifier elements
//! plus the inspector metadata recorded by the factories that produced them.
//! Factories chain: `Modifier::empty().padding(4.0).quarter_rotate(1)`.

use std::fmt;
use std::rc::Rc;

mod fill;
mod graphics_layer;
mod padding;
mod quarter_turn;
mod rotate;
mod size;

use quarterturn_foundation::ModifierNodeElement;
pub use quarterturn_foundation::{modifier_element, AnyModifierElement, DynModifierElement};
pub use quarterturn_ui_graphics::{EdgeInsets, GraphicsLayer, Point, Rect, Size};
use quarterturn_ui_layout::IntrinsicSize;

/// Minimal inspector metadata storage.
#[derive(Clone, Debug, Default)]
pub struct InspectorInfo {
    properties: Vec<InspectorProperty>,
}

impl InspectorInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_property<V: Into<String>>(&mut self, name: &'static str, value: V) {
        self.properties.push(InspectorProperty {
            name,
            value: value.into(),
        });
    }

    pub fn properties(&self) -> &[InspectorProperty] {
        &self.properties
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn add_dimension(&mut self, name: &'static str, constraint: DimensionConstraint) {
        self.add_property(name, describe_dimension(constraint));
    }

    /// Value recorded for `name`, if any.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|property| property.name == name)
            .map(|property| property.value.as_str())
    }

    pub fn describe(&self) -> String {
        self.properties
            .iter()
            .map(|property| format!("{}={}", property.name, property.value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Single inspector entry recording a property exposed by a modifier.
#[derive(Clone, Debug)]
pub struct InspectorProperty {
    pub name: &'static str,
    pub value: String,
}

/// Dimension requested by a sizing modifier, as shown to inspector tooling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DimensionConstraint {
    Points(f32),
    Fraction(f32),
    Intrinsic(IntrinsicSize),
}

fn describe_dimension(constraint: DimensionConstraint) -> String {
    match constraint {
        DimensionConstraint::Points(value) => value.to_string(),
        DimensionConstraint::Fraction(value) => format!("fraction({value})"),
        DimensionConstraint::Intrinsic(size) => format!("intrinsic({size:?})"),
    }
}

/// Metadata contributed by a modifier factory.
#[derive(Clone, Debug)]
pub(crate) struct InspectorMetadata {
    name: &'static str,
    info: InspectorInfo,
}

impl InspectorMetadata {
    fn append_to(&self, target: &mut InspectorInfo) {
        if self.info.is_empty() {
            target.add_property(self.name, "applied");
        } else {
            for property in self.info.properties() {
                target.add_property(property.name, property.value.clone());
            }
        }
    }
}

pub(crate) fn inspector_metadata<F>(name: &'static str, recorder: F) -> InspectorMetadata
where
    F: FnOnce(&mut InspectorInfo),
{
    let mut info = InspectorInfo::new();
    recorder(&mut info);
    InspectorMetadata { name, info }
}

#[derive(Clone, Default)]
pub struct Modifier {
    elements: Rc<Vec<DynModifierElement>>,
    inspector: Rc<Vec<InspectorMetadata>>,
}

impl Modifier {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends `next` after this modifier's elements.
    pub fn then(self, next: Modifier) -> Modifier {
        if self.is_empty() && self.inspector.is_empty() {
            return next;
        }
        if next.is_empty() && next.inspector.is_empty() {
            return self;
        }
        let mut elements = Vec::with_capacity(self.elements.len() + next.elements.len());
        elements.extend(self.elements.iter().cloned());
        elements.extend(next.elements.iter().cloned());
        let mut inspector = Vec::with_capacity(self.inspector.len() + next.inspector.len());
        inspector.extend(self.inspector.iter().cloned());
        inspector.extend(next.inspector.iter().cloned());
        Modifier {
            elements: Rc::new(elements),
            inspector: Rc::new(inspector),
        }
    }

    /// Elements in application order, outermost first.
    pub fn elements(&self) -> &[DynModifierElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Inspector names of the elements, outermost first.
    pub fn element_names(&self) -> Vec<&'static str> {
        self.elements
            .iter()
            .map(|element| element.inspector_name())
            .collect()
    }

    /// Collects the inspector metadata recorded by every factory in the chain.
    pub fn inspector_info(&self) -> InspectorInfo {
        let mut info = InspectorInfo::new();
        for metadata in self.inspector.iter() {
            metadata.append_to(&mut info);
        }
        info
    }

    pub(crate) fn with_element<E>(element: E) -> Self
    where
        E: ModifierNodeElement,
    {
        Self {
            elements: Rc::new(vec![modifier_element(element)]),
            inspector: Rc::new(Vec::new()),
        }
    }

    pub(crate) fn with_inspector_metadata(mut self, metadata: InspectorMetadata) -> Self {
        Rc::make_mut(&mut self.inspector).push(metadata);
        self
    }
}

impl PartialEq for Modifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.elements, &other.elements) && Rc::ptr_eq(&self.inspector, &other.inspector)
    }
}

impl Eq for Modifier {}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier")
            .field("elements", &self.element_names())
            .field("inspector_entries", &self.inspector.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/modifier_tests.rs"]
mod tests;
