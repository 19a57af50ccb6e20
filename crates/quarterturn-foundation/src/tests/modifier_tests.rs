use super::*;
use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[derive(Clone, Default)]
struct TestContext {
    invalidations: Rc<RefCell<Vec<InvalidationKind>>>,
}

impl ModifierNodeContext for TestContext {
    fn invalidate(&mut self, kind: InvalidationKind) {
        self.invalidations.borrow_mut().push(kind);
    }
}

#[derive(Debug)]
struct LoggingNode {
    id: &'static str,
    log: Rc<RefCell<Vec<String>>>,
    value: i32,
    state: NodeState,
}

impl DelegatableNode for LoggingNode {
    fn node_state(&self) -> &NodeState {
        &self.state
    }
}

impl ModifierNode for LoggingNode {
    fn on_attach(&mut self, _context: &mut dyn ModifierNodeContext) {
        self.log.borrow_mut().push(format!("attach:{}", self.id));
    }

    fn on_detach(&mut self) {
        self.log.borrow_mut().push(format!("detach:{}", self.id));
    }
}

#[derive(Debug, Clone)]
struct LoggingElement {
    id: &'static str,
    value: i32,
    log: Rc<RefCell<Vec<String>>>,
}

impl PartialEq for LoggingElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.value == other.value
    }
}

impl Hash for LoggingElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.value.hash(state);
    }
}

impl ModifierNodeElement for LoggingElement {
    type Node = LoggingNode;

    fn create(&self) -> Self::Node {
        LoggingNode {
            id: self.id,
            log: self.log.clone(),
            value: self.value,
            state: NodeState::new(),
        }
    }

    fn update(&self, node: &mut Self::Node) {
        node.value = self.value;
        self.log
            .borrow_mut()
            .push(format!("update:{}:{}", self.id, self.value));
    }

    fn capabilities(&self) -> NodeCapabilities {
        NodeCapabilities::LAYOUT
    }
}

/// Zero-sized element: every instance equals every other one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MarkerElement;

#[derive(Debug, Default)]
struct MarkerNode {
    state: NodeState,
}

impl DelegatableNode for MarkerNode {
    fn node_state(&self) -> &NodeState {
        &self.state
    }
}

impl ModifierNode for MarkerNode {}

impl ModifierNodeElement for MarkerElement {
    type Node = MarkerNode;

    fn create(&self) -> Self::Node {
        MarkerNode::default()
    }

    fn update(&self, _node: &mut Self::Node) {
        panic!("equal marker elements must never trigger update");
    }

    fn inspector_name(&self) -> &'static str {
        "marker"
    }

    fn capabilities(&self) -> NodeCapabilities {
        NodeCapabilities::DRAW
    }
}

fn logging(id: &'static str, value: i32, log: &Rc<RefCell<Vec<String>>>) -> DynModifierElement {
    modifier_element(LoggingElement {
        id,
        value,
        log: log.clone(),
    })
}

#[test]
fn chain_attaches_updates_and_detaches_nodes() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut chain = ModifierNodeChain::new();
    let mut context = TestContext::default();

    let initial = vec![logging("a", 1, &log), logging("b", 2, &log)];
    chain.update_from_slice(&initial, &mut context);
    assert_eq!(chain.len(), 2);
    assert_eq!(&*log.borrow(), &["attach:a", "attach:b"]);

    log.borrow_mut().clear();
    let updated = vec![logging("a", 7, &log)];
    chain.update_from_slice(&updated, &mut context);
    assert_eq!(chain.len(), 1);
    assert_eq!(&*log.borrow(), &["update:a:7", "detach:b"]);
    assert_eq!(chain.node::<LoggingNode>(0).map(|node| node.value), Some(7));
}

#[test]
fn equal_element_keeps_node_instance() {
    let mut chain = ModifierNodeChain::new();
    let mut context = BasicModifierNodeContext::new();

    chain.update_from_slice(&[modifier_element(MarkerElement)], &mut context);
    let first = chain.get_node_rc(0).expect("marker node");
    context.clear_invalidations();

    chain.update_from_slice(&[modifier_element(MarkerElement)], &mut context);
    let second = chain.get_node_rc(0).expect("marker node");

    assert!(Rc::ptr_eq(&first, &second));
    assert!(context.invalidations().is_empty());
    assert!(second.borrow().node_state().is_attached());
}

#[test]
fn removed_nodes_are_detached_and_invalidate() {
    let mut chain = ModifierNodeChain::new();
    let mut context = BasicModifierNodeContext::new();

    chain.update_from_slice(&[modifier_element(MarkerElement)], &mut context);
    let node = chain.get_node_rc(0).expect("marker node");
    assert_eq!(context.take_invalidations(), vec![InvalidationKind::Draw]);

    chain.update_from_slice(&[], &mut context);
    assert!(chain.is_empty());
    assert!(!node.borrow().node_state().is_attached());
    assert_eq!(context.take_invalidations(), vec![InvalidationKind::Draw]);
    assert!(!chain.has_nodes_for_invalidation(InvalidationKind::Draw));
}

#[test]
fn capabilities_aggregate_across_entries() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut chain = ModifierNodeChain::new();
    let mut context = BasicModifierNodeContext::new();

    chain.update_from_slice(
        &[modifier_element(MarkerElement), logging("a", 1, &log)],
        &mut context,
    );

    assert!(chain.capabilities().contains(NodeCapabilities::DRAW | NodeCapabilities::LAYOUT));
    assert!(chain.has_nodes_for_invalidation(InvalidationKind::Layout));
    assert_eq!(chain.nodes_with_capability(NodeCapabilities::LAYOUT).count(), 1);
    assert_eq!(chain.inspector_names()[0], "marker");
    assert_eq!(
        context.invalidations(),
        &[InvalidationKind::Draw, InvalidationKind::Layout]
    );
}

#[test]
fn detach_all_clears_chain() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut chain = ModifierNodeChain::new();
    let mut context = TestContext::default();

    chain.update_from_slice(&[logging("a", 1, &log), logging("b", 1, &log)], &mut context);
    log.borrow_mut().clear();
    chain.detach_all();

    assert!(chain.is_empty());
    assert!(chain.capabilities().is_empty());
    assert_eq!(&*log.borrow(), &["detach:a", "detach:b"]);
}

#[test]
fn basic_context_coalesces_duplicate_invalidations() {
    let mut context = BasicModifierNodeContext::new();
    context.invalidate(InvalidationKind::Layout);
    context.invalidate(InvalidationKind::Draw);
    context.invalidate(InvalidationKind::Layout);

    assert_eq!(
        context.invalidations(),
        &[InvalidationKind::Layout, InvalidationKind::Draw]
    );
    assert_eq!(
        context.take_invalidations(),
        vec![InvalidationKind::Layout, InvalidationKind::Draw]
    );
    assert!(context.invalidations().is_empty());
}
