//! Error handling for hydoc-enhance
//!
//! All enhancement failures are non-fatal to the hosting page: callers either
//! skip the affected feature or surface the error at the WebAssembly boundary.
//! The split between [`EnhanceError`] and [`EnhanceErrorKind`] mirrors the
//! usual pattern of a small public error struct wrapping a categorised kind.

use alloc::boxed::Box;
use alloc::string::String;
use thiserror::Error;

/// Error type returned by enhancement setup and DOM adapter code.
///
/// `EnhanceError` implements the standard `Error` and `Display` traits and
/// integrates with the `?` operator. At the WebAssembly boundary it is
/// converted to a `JsValue` via its `Display` output.
#[derive(Debug, Error)]
#[error("hydoc-enhance: {kind}")]
pub struct EnhanceError {
    /// Categorised reason for the failure.
    #[source]
    pub kind: Box<EnhanceErrorKind>,
}

impl EnhanceError {
    /// Create a new error with the given kind.
    pub fn new<T: Into<EnhanceErrorKind>>(kind: T) -> Self {
        Self {
            kind: Box::new(kind.into()),
        }
    }
}

impl From<EnhanceErrorKind> for EnhanceError {
    fn from(kind: EnhanceErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Categorised failure reasons.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnhanceErrorKind {
    /// No global `window` object is available (non-browser environment).
    #[error("no global window is available")]
    MissingWindow,

    /// The window carries no `document`.
    #[error("window.document is not available")]
    MissingDocument,

    /// A configured selector was rejected by the selector engine.
    #[error("invalid selector `{selector}`: {details}")]
    InvalidSelector {
        /// The selector string that was rejected.
        selector: String,
        /// Diagnostic detail reported by the DOM.
        details: String,
    },

    /// A DOM mutation (create, insert, replace) failed.
    #[error("DOM operation failed: {details}")]
    DomOperation {
        /// Diagnostic detail reported by the DOM.
        details: String,
    },

    /// Registering an event listener failed.
    #[error("failed to attach `{event}` listener: {details}")]
    Listener {
        /// The event type being wired.
        event: String,
        /// Diagnostic detail reported by the DOM.
        details: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind() {
        let err = EnhanceError::new(EnhanceErrorKind::MissingDocument);
        assert_eq!(err.to_string(), "hydoc-enhance: window.document is not available");
    }

    #[test]
    fn selector_detail_is_reported() {
        let err = EnhanceError::new(EnhanceErrorKind::InvalidSelector {
            selector: ":::".to_owned(),
            details: "SyntaxError".to_owned(),
        });
        assert!(err.to_string().contains(":::"));
        assert!(err.to_string().contains("SyntaxError"));
    }
}
