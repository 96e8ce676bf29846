//! htmlgen
//!
//! Builds HTML as a tree of in-memory nodes and renders it to formatted text.
//! A [`Registry`] collects per-component CSS keyed by class names derived from
//! builder identifiers, and renders it into a stylesheet.
//!
//! ```text
//! Element / Text / Sequence → Node::render() → HTML fragment
//! Registry::style()         → render_stylesheet() → CSS
//! ```
//!
//! # Example
//!
//! ```
//! use htmlgen::{Element, Node, Registry};
//!
//! let mut registry = Registry::new();
//! let title = registry.styled("page_title", Some("font-weight: 700;"), |text: &str| {
//!     Element::new("h1").child(text)
//! });
//!
//! let html = Node::from(title("Demo")).render("", false);
//! assert_eq!(html, "<h1 class=\"page-title\">Demo</h1>");
//! assert_eq!(
//!     registry.render_stylesheet(),
//!     ".page-title {\n  font-weight: 700;\n}"
//! );
//! ```

pub mod attributes;
pub mod diagnostics;
pub mod escape;
pub mod node;
pub mod render;
pub mod style;
pub mod tags;

pub use attributes::{render_attributes, AttrValue, Attributes};
pub use diagnostics::{Diagnostic, Diagnostics, LogDiagnostics};
pub use escape::escape;
pub use node::{Element, Node, Sequence, Text};
pub use render::render_tag;
pub use style::{class_name_for, Registry, Style};

/// Error raised while building a node tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A `data-*` key contained something other than lowercase letters and hyphens.
    #[error("data key {key:?} doesn't match /{pattern}/")]
    InvalidDataKey { key: String, pattern: &'static str },
}
