//! Tree nodes whose children can be attached after construction,
//! allowing shared subtrees and cycles

use parking_lot::Mutex;

use telepath_core::{ObjectRef, TelepathResult, Value};
use telepath_pack::{AdapterRegistry, ObjectAdapter};

pub const NODE_CONSTRUCTOR: &str = "tree.Node";

#[derive(Debug)]
pub struct Node {
    pub label: String,
    children: Mutex<Vec<ObjectRef>>,
}

impl Node {
    pub fn new(label: impl Into<String>) -> ObjectRef {
        ObjectRef::new(Node {
            label: label.into(),
            children: Mutex::new(Vec::new()),
        })
    }

    /// Attach `child` to the node behind `parent`
    ///
    /// Returns false when `parent` is not a node.
    pub fn attach(parent: &ObjectRef, child: ObjectRef) -> bool {
        match parent.downcast_ref::<Node>() {
            Some(node) => {
                node.children.lock().push(child);
                true
            }
            None => false,
        }
    }

    /// Drop all children, breaking any cycle through this node
    pub fn detach_all(parent: &ObjectRef) {
        if let Some(node) = parent.downcast_ref::<Node>() {
            node.children.lock().clear();
        }
    }
}

pub struct NodeAdapter;

impl ObjectAdapter<Node> for NodeAdapter {
    fn js_constructor(&self) -> &str {
        NODE_CONSTRUCTOR
    }

    fn js_args(&self, obj: &Node) -> TelepathResult<Vec<Value>> {
        let children = obj.children.lock().iter().cloned().map(Value::Object).collect();
        Ok(vec![obj.label.clone().into(), Value::List(children)])
    }
}

/// Fresh registry with the node adapter bound
pub fn tree_registry() -> AdapterRegistry {
    let registry = AdapterRegistry::new();
    registry.register::<Node, _>(NodeAdapter);
    registry
}
