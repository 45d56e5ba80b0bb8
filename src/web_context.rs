//! Shared web context cached during enhancement setup.
//!
//! Stores handles to the global `Window` and `Document` so the adapter code
//! avoids repeated `window()`/`document()` lookups while wiring listeners
//! and walking the content tree. All four enhancement features read the live
//! document through this context.

use crate::types::{EnhanceError, EnhanceErrorKind};

/// Cached browser globals passed through the adapter layer.
#[derive(Clone)]
pub struct WebContext {
    /// The global window.
    pub window: web_sys::Window,
    /// The window's document.
    pub document: web_sys::Document,
}

impl WebContext {
    /// Creates a new [`WebContext`] from the given window and document.
    #[must_use]
    pub fn new(window: web_sys::Window, document: web_sys::Document) -> Self {
        Self { window, document }
    }

    /// Attempts to construct a [`WebContext`] from the global `window`.
    ///
    /// Returns `None` in environments without a DOM, in which case the whole
    /// enhancement layer is skipped.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }

    /// Fallible variant of [`WebContext::from_window`] with a categorised
    /// error for the WebAssembly boundary.
    pub fn try_from_window() -> Result<Self, EnhanceError> {
        let window = web_sys::window().ok_or(EnhanceErrorKind::MissingWindow)?;
        let document = window
            .document()
            .ok_or(EnhanceErrorKind::MissingDocument)?;
        Ok(Self::new(window, document))
    }

    /// Current viewport width in CSS pixels, `None` when unavailable.
    #[must_use]
    pub fn viewport_width(&self) -> Option<u32> {
        self.window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .map(|w| w.max(0.0) as u32)
    }
}
