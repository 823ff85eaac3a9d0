//! Abstractions over the host document tree.
//!
//! The elements the controller touches are owned by the surrounding document;
//! nothing here creates or destroys them. Adapters only have to expose an `id`,
//! attribute reads/writes, and class-token lookup.

/// A single graph element (vertex or edge) in the host document.
///
/// Receivers are `&self`: the host owns the mutation (the browser DOM mutates
/// in place, the in-memory fake goes through a `RefCell`).
pub trait Node {
	/// The element's unique `id` attribute, or an empty string when unset.
	fn id(&self) -> String;

	/// Read attribute `name`, if present.
	fn attribute(&self, name: &str) -> Option<String>;

	/// Create or replace attribute `name`.
	fn set_attribute(&self, name: &str, value: &str);
}

/// Class-based element lookup over the host document.
pub trait Document {
	/// The node handle type this document yields.
	type Node: Node;

	/// Every element whose class list contains the token `class`, in document
	/// order.
	fn nodes_with_class(&self, class: &str) -> Vec<Self::Node>;
}
