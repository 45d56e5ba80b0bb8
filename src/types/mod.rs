//! Shared types for hydoc-enhance
//!
//! Contains the [`EnhanceOptions`] configuration struct, the produced CSS
//! class names, and the error types used throughout the crate.

mod error;

pub use error::{EnhanceError, EnhanceErrorKind};

use alloc::string::{String, ToString as _};
use bon::bon;
use strum::{AsRefStr, Display};

/// Default selector for the content region scoped by search highlighting.
pub const CONTENT_SELECTOR: &str = ".content";

/// Default selector for the navigation sidebar.
pub const SIDEBAR_SELECTOR: &str = ".sidebar";

/// Default selector for rendered code blocks.
pub const CODE_SELECTOR: &str = "pre code";

/// Viewport width (CSS pixels) at or below which the layout is mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Duration the copy-feedback label stays visible before reverting.
pub const FEEDBACK_RESET_MS: u32 = 2000;

/// CSS class names produced by the enhancement layer.
///
/// The theme stylesheet keys off these exact strings, so they are centralised
/// here rather than scattered through the adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
pub enum CssClass {
    /// Copy control attached to each code block.
    #[strum(serialize = "code-copy-btn")]
    CodeCopyBtn,
    /// `<mark>` wrapper around a matched search term.
    #[strum(serialize = "search-highlight")]
    SearchHighlight,
    /// Toggle button injected into the sidebar on mobile layouts.
    #[strum(serialize = "mobile-menu-toggle")]
    MobileMenuToggle,
    /// Open-state marker applied to both the sidebar and the document body.
    #[strum(serialize = "sidebar-open")]
    SidebarOpen,
}

/// Configuration for the enhancement layer.
///
/// All fields have defaults matching the Hydoc theme markup; a host page with
/// different selectors can override them through the builder or, on the
/// WebAssembly side, through a plain JS options object.
///
/// # Examples
///
/// ```rust
/// use hydoc_enhance::EnhanceOptions;
///
/// let options = EnhanceOptions::builder()
///     .content_selector("main article")
///     .mobile_breakpoint(900)
///     .build();
/// assert_eq!(options.sidebar_selector, ".sidebar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceOptions {
    /// Selector for the content root scoped by search highlighting.
    pub content_selector: String,
    /// Selector for the navigation sidebar.
    pub sidebar_selector: String,
    /// Selector for code elements that receive a copy control.
    pub code_selector: String,
    /// Viewport width at or below which the mobile toggle is active.
    pub mobile_breakpoint: u32,
    /// Milliseconds the copy-feedback label stays before reverting.
    pub feedback_reset_ms: u32,
}

#[bon]
impl EnhanceOptions {
    /// Creates a new [`EnhanceOptions`] from optional configuration values,
    /// applying theme defaults for any value left unset.
    ///
    /// # Default Values
    /// - `content_selector`: `".content"`
    /// - `sidebar_selector`: `".sidebar"`
    /// - `code_selector`: `"pre code"`
    /// - `mobile_breakpoint`: `768`
    /// - `feedback_reset_ms`: `2000`
    #[must_use]
    #[builder(on(String, into))]
    pub fn new(
        /// Selector for the content root scoped by search highlighting.
        content_selector: Option<String>,
        /// Selector for the navigation sidebar.
        sidebar_selector: Option<String>,
        /// Selector for code elements that receive a copy control.
        code_selector: Option<String>,
        /// Viewport width at or below which the mobile toggle is active.
        mobile_breakpoint: Option<u32>,
        /// Milliseconds the copy-feedback label stays before reverting.
        feedback_reset_ms: Option<u32>,
    ) -> Self {
        Self {
            content_selector: content_selector.unwrap_or_else(|| CONTENT_SELECTOR.to_string()),
            sidebar_selector: sidebar_selector.unwrap_or_else(|| SIDEBAR_SELECTOR.to_string()),
            code_selector: code_selector.unwrap_or_else(|| CODE_SELECTOR.to_string()),
            mobile_breakpoint: mobile_breakpoint.unwrap_or(MOBILE_BREAKPOINT),
            feedback_reset_ms: feedback_reset_ms.unwrap_or(FEEDBACK_RESET_MS),
        }
    }
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
