//! Applies search-term highlighting to the live content tree.

use alloc::vec::Vec;

use crate::dom::{dom_err, query_one};
use crate::highlight::{SearchTerms, TermMatcher, highlight_text};
use crate::types::{EnhanceError, EnhanceOptions};
use crate::web_context::WebContext;

/// `NodeFilter.SHOW_TEXT`: restrict the tree walk to text nodes.
const SHOW_TEXT: u32 = 0x4;

/// Runs one highlight pass per search term found in the page URL.
///
/// No query parameter, no usable tokens, or a missing content root all
/// degrade to a silent no-op.
pub(crate) fn run_highlight_pass(
    ctx: &WebContext,
    options: &EnhanceOptions,
) -> Result<(), EnhanceError> {
    let search = ctx.window.location().search().unwrap_or_default();
    let terms = SearchTerms::from_query(&search);
    if terms.is_empty() {
        return Ok(());
    }
    let Some(content) = query_one(&ctx.document, &options.content_selector)? else {
        return Ok(());
    };

    for term in terms.terms() {
        let Some(matcher) = TermMatcher::new(term) else {
            continue;
        };
        highlight_term(ctx, &content, &matcher)?;
    }
    Ok(())
}

/// Wraps every occurrence of one term under `root`.
///
/// The text nodes are snapshotted before any mutation: wrapping replaces a
/// text node with a freshly parsed subtree, and nodes inserted mid-pass must
/// not be visited again. Each snapshot node is visited exactly once.
fn highlight_term(
    ctx: &WebContext,
    root: &web_sys::Element,
    matcher: &TermMatcher,
) -> Result<(), EnhanceError> {
    for node in collect_text_nodes(ctx, root)? {
        let Some(text) = node.text_content() else {
            continue;
        };
        let Some(markup) = highlight_text(&text, matcher) else {
            continue;
        };
        let Some(parent) = node.parent_node() else {
            continue;
        };
        let wrapper = ctx
            .document
            .create_element("span")
            .map_err(|e| dom_err(&e))?;
        wrapper.set_inner_html(&markup);
        parent
            .replace_child(&wrapper, &node)
            .map_err(|e| dom_err(&e))?;
    }
    Ok(())
}

/// Snapshot of the text nodes under `root`, excluding script/style content.
fn collect_text_nodes(
    ctx: &WebContext,
    root: &web_sys::Element,
) -> Result<Vec<web_sys::Node>, EnhanceError> {
    let walker = ctx
        .document
        .create_tree_walker_with_what_to_show(root, SHOW_TEXT)
        .map_err(|e| dom_err(&e))?;

    let mut nodes = Vec::new();
    while let Ok(Some(node)) = walker.next_node() {
        if let Some(parent) = node.parent_element() {
            let tag = parent.tag_name();
            if tag.eq_ignore_ascii_case("script") || tag.eq_ignore_ascii_case("style") {
                continue;
            }
        }
        nodes.push(node);
    }
    Ok(nodes)
}
