//! Hover highlighting for graph nodes.
//!
//! Adjacency is pre-computed elsewhere and encoded as class tokens of the form
//! `neighbor-of-<id>`: an element carrying `neighbor-of-A` lights up and resets
//! together with the node whose id is `A`.

use log::debug;

use crate::dom::{Document, Node};

/// Stroke color applied to a hovered node and its neighbors.
pub const HIGHLIGHT_STROKE: &str = "lawngreen";
/// Stroke value that clears the highlight.
pub const CLEAR_STROKE: &str = "none";
/// Class prefix tagging an element as adjacent to the node with the given id.
pub const NEIGHBOR_CLASS_PREFIX: &str = "neighbor-of-";

/// Highlight `target` and every element tagged `neighbor-of-<target.id>`.
///
/// Idempotent; calling it again rewrites the same attribute values.
pub fn on_enter<D: Document>(document: &D, target: &D::Node) {
	set_stroke(document, target, HIGHLIGHT_STROKE);
}

/// Reset `target` and every element tagged `neighbor-of-<target.id>`.
pub fn on_leave<D: Document>(document: &D, target: &D::Node) {
	set_stroke(document, target, CLEAR_STROKE);
}

fn set_stroke<D: Document>(document: &D, target: &D::Node, stroke: &str) {
	target.set_attribute("stroke", stroke);

	// An element without an id can have no neighbor tags pointing at it
	let id = target.id();
	if id.is_empty() {
		return;
	}

	let neighbors = document.nodes_with_class(&format!("{NEIGHBOR_CLASS_PREFIX}{id}"));
	debug!("stroke={} on {} and {} neighbors", stroke, id, neighbors.len());
	for neighbor in neighbors {
		neighbor.set_attribute("stroke", stroke);
	}
}
