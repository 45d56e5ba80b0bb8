//! Same-page anchor link parsing
//!
//! The smooth-scroll behavior only applies to links whose `href` is a bare
//! fragment identifier. Parsing lives here so the fail-open contract (an
//! unresolvable target falls back to default navigation) is testable; the
//! scroll and history updates are in the `dom` adapter.

/// Extracts the target element id from a same-page fragment href.
///
/// Returns `Some("section-2")` for `"#section-2"`. A bare `"#"` carries no
/// target and yields `None`, as do absolute or relative URLs; callers let
/// the browser handle those normally.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}
