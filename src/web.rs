//! `web-sys` bindings for the document abstractions.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::dom;

impl dom::Node for Element {
	fn id(&self) -> String {
		Element::id(self)
	}

	fn attribute(&self, name: &str) -> Option<String> {
		Element::get_attribute(self, name)
	}

	fn set_attribute(&self, name: &str, value: &str) {
		let _ = Element::set_attribute(self, name, value);
	}
}

impl dom::Document for Document {
	type Node = Element;

	fn nodes_with_class(&self, class: &str) -> Vec<Element> {
		let Ok(list) = self.query_selector_all(&format!(".{class}")) else {
			return Vec::new();
		};
		(0..list.length())
			.filter_map(|i| list.get(i))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect()
	}
}
