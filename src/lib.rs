//! Hover highlighting for SVG graph nodes.
//!
//! On pointer-enter, [`on_enter`] strokes the hovered node and every element
//! tagged with the class `neighbor-of-<id>` in `lawngreen`; on pointer-leave,
//! [`on_leave`] resets them to `none`. The controller is stateless and works
//! through the [`dom`] traits, so it runs against a real browser document
//! ([`web`]) or an in-memory one ([`fake`]).

use log::{Level, info};

pub mod dom;
pub mod fake;
pub mod highlight;
pub mod web;

pub use highlight::{on_enter, on_leave};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}
