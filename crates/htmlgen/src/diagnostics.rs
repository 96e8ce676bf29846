//! Non-fatal advisories raised while building and rendering.
//!
//! Nothing here aborts a build or render: a [`Diagnostic`] is handed to a
//! [`Diagnostics`] sink and execution carries on with a best-effort result.
//! The default sink, [`LogDiagnostics`], forwards to the `log` facade; tests
//! collect into a `Vec<Diagnostic>` instead.

use std::fmt;

/// A single advisory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A tag name outside the known HTML element set was rendered.
    UnknownElement { tag: String },
    /// Two builders normalized to the same CSS class name.
    DuplicateClassName { class_name: String },
    /// `class` was set through the attribute API; its value was merged into the class set.
    ClassAttribute { value: String },
    /// A builder operation that only applies to elements was called on another node kind.
    Ignored {
        operation: &'static str,
        node: &'static str,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownElement { tag } => {
                write!(f, "rendering unknown element name {tag:?}")
            }
            Diagnostic::DuplicateClassName { class_name } => {
                write!(f, "duplicate CSS class name {class_name:?} generated by style()")
            }
            Diagnostic::ClassAttribute { value } => {
                write!(f, "class {value:?} set as an attribute")
            }
            Diagnostic::Ignored { operation, node } => {
                write!(f, "{operation} ignored on {node} node")
            }
        }
    }
}

/// Receiver for advisories.
pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to `log::warn!` under the `htmlgen` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!(target: "htmlgen", "{diagnostic}");
    }
}

impl Diagnostics for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
