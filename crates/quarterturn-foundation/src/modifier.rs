//! Modifier node scaffolding.
//!
//! Traits for modifier nodes and the elements that create them, together
//! with a chain container that reconciles nodes across updates. Elements
//! are compared structurally, so re-applying an equal element keeps the
//! existing node instance instead of rebuilding it.

use std::any::{type_name, Any, TypeId};
use std::cell::{Cell, RefCell};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitOr, BitOrAssign};
use std::rc::Rc;

pub use quarterturn_ui_graphics::{DrawScope, Size};
pub use quarterturn_ui_layout::{Constraints, LayoutModifierMeasureResult, Measurable};

/// Identifies which part of the rendering pipeline should be invalidated
/// after a modifier node changes state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidationKind {
    Layout,
    Draw,
}

/// Runtime services exposed to modifier nodes while attached to a tree.
pub trait ModifierNodeContext {
    /// Requests that a particular pipeline stage be invalidated.
    fn invalidate(&mut self, _kind: InvalidationKind) {}
}

/// Lightweight [`ModifierNodeContext`] implementation that records
/// invalidation requests.
///
/// Duplicate invalidations of the same kind are coalesced. Callers inspect
/// or drain the recorded state after driving a [`ModifierNodeChain`]
/// reconciliation pass.
#[derive(Default, Debug, Clone)]
pub struct BasicModifierNodeContext {
    invalidations: Vec<InvalidationKind>,
}

impl BasicModifierNodeContext {
    /// Creates a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ordered list of invalidation kinds requested since the
    /// last call to [`Self::clear_invalidations`].
    pub fn invalidations(&self) -> &[InvalidationKind] {
        &self.invalidations
    }

    /// Removes all currently recorded invalidation kinds.
    pub fn clear_invalidations(&mut self) {
        self.invalidations.clear();
    }

    /// Drains the recorded invalidations and returns them to the caller.
    pub fn take_invalidations(&mut self) -> Vec<InvalidationKind> {
        std::mem::take(&mut self.invalidations)
    }
}

impl ModifierNodeContext for BasicModifierNodeContext {
    fn invalidate(&mut self, kind: InvalidationKind) {
        if !self.invalidations.contains(&kind) {
            self.invalidations.push(kind);
        }
    }
}

/// Runtime state tracked for every [`ModifierNode`].
///
/// Managed by [`ModifierNodeChain`]; nodes only hand out a reference to it.
#[derive(Debug, Default)]
pub struct NodeState {
    capabilities: Cell<NodeCapabilities>,
    attached: Cell<bool>,
}

impl NodeState {
    pub const fn new() -> Self {
        Self {
            capabilities: Cell::new(NodeCapabilities::empty()),
            attached: Cell::new(false),
        }
    }

    pub fn set_capabilities(&self, capabilities: NodeCapabilities) {
        self.capabilities.set(capabilities);
    }

    pub fn capabilities(&self) -> NodeCapabilities {
        self.capabilities.get()
    }

    pub fn set_attached(&self, attached: bool) {
        self.attached.set(attached);
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }
}

/// Access to the chain-managed [`NodeState`] of a node.
pub trait DelegatableNode {
    fn node_state(&self) -> &NodeState;
}

/// Core trait implemented by modifier nodes.
///
/// Nodes declare their capabilities through
/// [`ModifierNodeElement::capabilities`] and implement the matching
/// specialized trait ([`LayoutModifierNode`], [`DrawModifierNode`]). The
/// `as_*` accessors are usually generated with
/// [`impl_modifier_node!`](crate::impl_modifier_node).
pub trait ModifierNode: Any + DelegatableNode {
    fn on_attach(&mut self, _context: &mut dyn ModifierNodeContext) {}

    fn on_detach(&mut self) {}

    /// Returns this node as a draw modifier if it implements the trait.
    fn as_draw_node(&self) -> Option<&dyn DrawModifierNode> {
        None
    }

    /// Returns this node as a layout modifier if it implements the trait.
    fn as_layout_node(&self) -> Option<&dyn LayoutModifierNode> {
        None
    }
}

/// Layout nodes participate in the measure pass. They intercept the
/// measurement of their wrapped content and decide where it is placed.
pub trait LayoutModifierNode: ModifierNode {
    /// Measures the wrapped content and returns both the size this modifier
    /// occupies and where the wrapped content should be placed.
    ///
    /// The default implementation passes the constraints through unchanged.
    fn measure(
        &self,
        _context: &mut dyn ModifierNodeContext,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> LayoutModifierMeasureResult {
        let placeable = measurable.measure(constraints);
        LayoutModifierMeasureResult::with_size(Size {
            width: placeable.width(),
            height: placeable.height(),
        })
    }

    fn min_intrinsic_width(&self, measurable: &dyn Measurable, height: f32) -> f32 {
        measurable.min_intrinsic_width(height)
    }

    fn max_intrinsic_width(&self, measurable: &dyn Measurable, height: f32) -> f32 {
        measurable.max_intrinsic_width(height)
    }

    fn min_intrinsic_height(&self, measurable: &dyn Measurable, width: f32) -> f32 {
        measurable.min_intrinsic_height(width)
    }

    fn max_intrinsic_height(&self, measurable: &dyn Measurable, width: f32) -> f32 {
        measurable.max_intrinsic_height(width)
    }
}

/// Draw nodes participate in the draw pass once layout is final.
///
/// Takes `&self`; nodes needing mutation during draw use interior mutability.
pub trait DrawModifierNode: ModifierNode {
    fn draw(&self, _draw_scope: &mut dyn DrawScope) {}
}

impl fmt::Debug for dyn ModifierNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierNode").finish_non_exhaustive()
    }
}

impl dyn ModifierNode {
    pub fn as_any(&self) -> &dyn Any {
        self
    }

    pub fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Strongly typed modifier elements that create and update nodes.
///
/// Equality and hashing decide node reuse: an element equal to the one that
/// produced an existing node keeps that node untouched.
pub trait ModifierNodeElement: fmt::Debug + Hash + PartialEq + 'static {
    type Node: ModifierNode;

    /// Creates a new modifier node instance for this element.
    fn create(&self) -> Self::Node;

    /// Brings an existing modifier node up to date with the element's data.
    fn update(&self, node: &mut Self::Node);

    /// Human readable name surfaced to inspector tooling.
    fn inspector_name(&self) -> &'static str {
        type_name::<Self>()
    }

    /// Records inspector properties for tooling.
    fn inspector_properties(&self, _inspector: &mut dyn FnMut(&'static str, String)) {}

    /// Returns the capabilities of nodes created by this element.
    fn capabilities(&self) -> NodeCapabilities {
        NodeCapabilities::default()
    }
}

/// Capability flags indicating which specialized traits a modifier node implements.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeCapabilities(u32);

impl NodeCapabilities {
    /// No capabilities.
    pub const NONE: Self = Self(0);
    /// Modifier participates in measure/layout.
    pub const LAYOUT: Self = Self(1 << 0);
    /// Modifier participates in draw.
    pub const DRAW: Self = Self(1 << 1);

    /// Returns an empty capability set.
    pub const fn empty() -> Self {
        Self::NONE
    }

    /// Returns whether all bits in `other` are present in `self`.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns whether any bit in `other` is present in `self`.
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Returns true when no capabilities are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the capability bit mask required for the given invalidation.
    pub const fn for_invalidation(kind: InvalidationKind) -> Self {
        match kind {
            InvalidationKind::Layout => Self::LAYOUT,
            InvalidationKind::Draw => Self::DRAW,
        }
    }
}

impl fmt::Debug for NodeCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeCapabilities")
            .field("layout", &self.contains(Self::LAYOUT))
            .field("draw", &self.contains(Self::DRAW))
            .finish()
    }
}

impl BitOr for NodeCapabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for NodeCapabilities {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Type-erased modifier element used by the runtime to reconcile chains.
pub trait AnyModifierElement: fmt::Debug {
    fn element_type(&self) -> TypeId;

    fn create_node(&self) -> Box<dyn ModifierNode>;

    fn update_node(&self, node: &mut dyn ModifierNode);

    fn capabilities(&self) -> NodeCapabilities {
        NodeCapabilities::default()
    }

    fn hash_code(&self) -> u64;

    fn equals_element(&self, other: &dyn AnyModifierElement) -> bool;

    fn inspector_name(&self) -> &'static str;

    fn record_inspector_properties(&self, visitor: &mut dyn FnMut(&'static str, String));

    fn as_any(&self) -> &dyn Any;
}

struct TypedModifierElement<E: ModifierNodeElement> {
    element: E,
}

impl<E> fmt::Debug for TypedModifierElement<E>
where
    E: ModifierNodeElement,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedModifierElement")
            .field("element", &self.element)
            .finish()
    }
}

impl<E> AnyModifierElement for TypedModifierElement<E>
where
    E: ModifierNodeElement,
{
    fn element_type(&self) -> TypeId {
        TypeId::of::<E>()
    }

    fn create_node(&self) -> Box<dyn ModifierNode> {
        Box::new(self.element.create())
    }

    fn update_node(&self, node: &mut dyn ModifierNode) {
        let typed = node
            .as_any_mut()
            .downcast_mut::<E::Node>()
            .expect("modifier node type mismatch");
        self.element.update(typed);
    }

    fn capabilities(&self) -> NodeCapabilities {
        self.element.capabilities()
    }

    fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.element.hash(&mut hasher);
        hasher.finish()
    }

    fn equals_element(&self, other: &dyn AnyModifierElement) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .map(|typed| typed.element == self.element)
            .unwrap_or(false)
    }

    fn inspector_name(&self) -> &'static str {
        self.element.inspector_name()
    }

    fn record_inspector_properties(&self, visitor: &mut dyn FnMut(&'static str, String)) {
        self.element.inspector_properties(visitor);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Convenience helper for callers to construct a type-erased modifier
/// element without having to mention the internal wrapper type.
pub fn modifier_element<E: ModifierNodeElement>(element: E) -> DynModifierElement {
    Rc::new(TypedModifierElement { element })
}

/// Shared type-erased modifier element.
pub type DynModifierElement = Rc<dyn AnyModifierElement>;

/// Shared handle to a node owned by a [`ModifierNodeChain`].
pub type ModifierNodeRc = Rc<RefCell<Box<dyn ModifierNode>>>;

#[derive(Debug)]
struct ModifierNodeEntry {
    element_type: TypeId,
    hash_code: u64,
    element: DynModifierElement,
    node: ModifierNodeRc,
    capabilities: NodeCapabilities,
}

/// Chain of modifier nodes attached to a layout node.
///
/// Nodes are reused across updates when the incoming element list still
/// contains an equal element, or failing that an element of the same type.
/// Removed nodes detach automatically.
#[derive(Default)]
pub struct ModifierNodeChain {
    entries: Vec<ModifierNodeEntry>,
    aggregated_capabilities: NodeCapabilities,
}

impl ModifierNodeChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the chain against the provided elements, attaching newly
    /// created nodes and detaching nodes that are no longer required.
    pub fn update_from_slice(
        &mut self,
        elements: &[DynModifierElement],
        context: &mut dyn ModifierNodeContext,
    ) {
        let mut old_entries: Vec<Option<ModifierNodeEntry>> =
            std::mem::take(&mut self.entries).into_iter().map(Some).collect();
        let mut new_entries = Vec::with_capacity(elements.len());

        for element in elements {
            let element_type = element.element_type();
            let hash_code = element.hash_code();
            let capabilities = element.capabilities();

            let exact = old_entries.iter().position(|slot| {
                slot.as_ref().is_some_and(|entry| {
                    entry.element_type == element_type
                        && entry.hash_code == hash_code
                        && entry.element.equals_element(element.as_ref())
                })
            });
            let matched = exact.or_else(|| {
                old_entries.iter().position(|slot| {
                    slot.as_ref()
                        .is_some_and(|entry| entry.element_type == element_type)
                })
            });

            match matched.and_then(|index| old_entries[index].take()) {
                Some(mut entry) => {
                    if !entry.element.equals_element(element.as_ref()) {
                        log::trace!("updating {} in place", element.inspector_name());
                        element.update_node(&mut **entry.node.borrow_mut());
                        entry.element = Rc::clone(element);
                        entry.hash_code = hash_code;
                        request_auto_invalidations(context, capabilities);
                    }
                    entry.capabilities = capabilities;
                    entry.node.borrow().node_state().set_capabilities(capabilities);
                    new_entries.push(entry);
                }
                None => {
                    log::trace!("creating node for {}", element.inspector_name());
                    let node = Rc::new(RefCell::new(element.create_node()));
                    {
                        let mut node = node.borrow_mut();
                        node.node_state().set_capabilities(capabilities);
                        node.node_state().set_attached(true);
                        node.on_attach(context);
                    }
                    request_auto_invalidations(context, capabilities);
                    new_entries.push(ModifierNodeEntry {
                        element_type,
                        hash_code,
                        element: Rc::clone(element),
                        node,
                        capabilities,
                    });
                }
            }
        }

        for entry in old_entries.into_iter().flatten() {
            log::trace!("detaching {}", entry.element.inspector_name());
            detach_node(&mut **entry.node.borrow_mut());
            request_auto_invalidations(context, entry.capabilities);
        }

        self.aggregated_capabilities = new_entries
            .iter()
            .fold(NodeCapabilities::empty(), |acc, entry| acc | entry.capabilities);
        self.entries = new_entries;
    }

    /// Detaches every node in the chain and clears internal storage.
    pub fn detach_all(&mut self) {
        for entry in std::mem::take(&mut self.entries) {
            detach_node(&mut **entry.node.borrow_mut());
        }
        self.aggregated_capabilities = NodeCapabilities::empty();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the aggregated capability mask for the entire chain.
    pub fn capabilities(&self) -> NodeCapabilities {
        self.aggregated_capabilities
    }

    /// Returns true if the chain contains any nodes matching the given invalidation kind.
    pub fn has_nodes_for_invalidation(&self, kind: InvalidationKind) -> bool {
        self.aggregated_capabilities
            .contains(NodeCapabilities::for_invalidation(kind))
    }

    /// Downcasts the node at `index` to the requested type.
    pub fn node<N: ModifierNode + 'static>(&self, index: usize) -> Option<std::cell::Ref<'_, N>> {
        self.entries.get(index).and_then(|entry| {
            std::cell::Ref::filter_map(entry.node.borrow(), |boxed_node| {
                boxed_node.as_any().downcast_ref::<N>()
            })
            .ok()
        })
    }

    /// Returns a shared handle to the node at the given index.
    pub fn get_node_rc(&self, index: usize) -> Option<ModifierNodeRc> {
        self.entries.get(index).map(|entry| Rc::clone(&entry.node))
    }

    /// Shared handles to every node carrying any capability from `mask`,
    /// in head-to-tail order.
    pub fn nodes_with_capability(
        &self,
        mask: NodeCapabilities,
    ) -> impl DoubleEndedIterator<Item = ModifierNodeRc> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.capabilities.intersects(mask))
            .map(|entry| Rc::clone(&entry.node))
    }

    /// Inspector names of the elements currently backing the chain.
    pub fn inspector_names(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .map(|entry| entry.element.inspector_name())
            .collect()
    }
}

impl fmt::Debug for ModifierNodeChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierNodeChain")
            .field("entries", &self.inspector_names())
            .field("capabilities", &self.aggregated_capabilities)
            .finish()
    }
}

fn detach_node(node: &mut dyn ModifierNode) {
    if node.node_state().is_attached() {
        node.on_detach();
        node.node_state().set_attached(false);
    }
}

fn request_auto_invalidations(
    context: &mut dyn ModifierNodeContext,
    capabilities: NodeCapabilities,
) {
    if capabilities.contains(NodeCapabilities::LAYOUT) {
        context.invalidate(InvalidationKind::Layout);
    }
    if capabilities.contains(NodeCapabilities::DRAW) {
        context.invalidate(InvalidationKind::Draw);
    }
}

#[cfg(test)]
#[path = "tests/modifier_tests.rs"]
mod tests;
