//! In-memory document double for exercising the controller without a browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::dom;

/// Cloneable handle to an element held by a [`FakeDocument`].
///
/// The attribute map is shared across clones, so a write through the handle the
/// document hands out is visible through the handle a test kept around.
#[derive(Clone, Debug)]
pub struct FakeNode {
	id: String,
	classes: Vec<String>,
	attributes: Rc<RefCell<HashMap<String, String>>>,
}

impl FakeNode {
	fn new(id: &str, classes: &[&str]) -> Self {
		Self {
			id: id.to_string(),
			classes: classes.iter().map(|c| c.to_string()).collect(),
			attributes: Rc::new(RefCell::new(HashMap::new())),
		}
	}

	/// Whether the element's class list contains the token `class`.
	pub fn has_class(&self, class: &str) -> bool {
		self.classes.iter().any(|c| c == class)
	}
}

impl dom::Node for FakeNode {
	fn id(&self) -> String {
		self.id.clone()
	}

	fn attribute(&self, name: &str) -> Option<String> {
		self.attributes.borrow().get(name).cloned()
	}

	fn set_attribute(&self, name: &str, value: &str) {
		self.attributes
			.borrow_mut()
			.insert(name.to_string(), value.to_string());
	}
}

/// Flat element list standing in for a document tree; "document order" is
/// insertion order.
#[derive(Clone, Debug, Default)]
pub struct FakeDocument {
	nodes: Vec<FakeNode>,
}

impl FakeDocument {
	/// An empty document.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an element and return a handle to it.
	pub fn insert(&mut self, id: &str, classes: &[&str]) -> FakeNode {
		let node = FakeNode::new(id, classes);
		self.nodes.push(node.clone());
		node
	}

	/// Handle to the element with the given `id`, if any.
	pub fn node(&self, id: &str) -> Option<FakeNode> {
		self.nodes.iter().find(|n| n.id == id).cloned()
	}
}

impl dom::Document for FakeDocument {
	type Node = FakeNode;

	fn nodes_with_class(&self, class: &str) -> Vec<FakeNode> {
		self.nodes
			.iter()
			.filter(|n| n.has_class(class))
			.cloned()
			.collect()
	}
}
