//! hydoc-enhance - Progressive enhancements for the Hydoc documentation theme
//!
//! This is a Rust port of the theme's JavaScript enhancement layer: copy
//! buttons for code blocks, URL-driven search-term highlighting, smooth
//! scrolling for in-page anchors, and a mobile navigation toggle. The
//! decision logic is pure Rust and unit-testable natively; the `wasm`
//! feature adds the `web-sys` adapter layer and the JavaScript-facing
//! `init()` entry points. Every feature degrades to a silent no-op when the
//! capability it relies on (clipboard access, viewport width, its root
//! element) is unavailable.
#![warn(missing_docs)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::panic)]
#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::unwrap_in_result)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::unimplemented)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
// clippy exceptions
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::single_call_fn)]

extern crate alloc;

pub mod anchor;
pub mod clipboard;
pub mod highlight;
pub mod sidebar;
pub mod types;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod dom;
#[cfg(feature = "wasm")]
pub mod wasm;
#[cfg(feature = "wasm")]
pub mod web_context;

/// Configuration for the enhancement layer, with theme defaults and a
/// builder for overrides. See [`types::EnhanceOptions`].
pub use crate::types::EnhanceOptions;

/// Error type returned by enhancement setup. See [`types::EnhanceError`].
pub use crate::types::{EnhanceError, EnhanceErrorKind};

/// CSS class names the theme stylesheet keys off.
pub use crate::types::CssClass;

/// Ordered search-term set derived from a page URL query string.
pub use crate::highlight::SearchTerms;

/// Case-insensitive literal matcher for one search term.
pub use crate::highlight::TermMatcher;

/// Byte spans of every term occurrence in a text node's content.
pub use crate::highlight::compute_highlight_spans;

/// Replacement markup for a matched text node, or `None` without a match.
pub use crate::highlight::highlight_text;

/// Pure transition function for the mobile sidebar toggle.
pub use crate::sidebar::{SidebarEvent, SidebarPhase, next_phase};

/// Fragment-identifier parsing for same-page anchor links.
pub use crate::anchor::fragment_id;

/// Current version of the enhancement layer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
