//! Smooth scrolling for same-page anchor links.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::anchor::fragment_id;
use crate::dom::{ListenerRegistry, query_all};
use crate::types::EnhanceError;
use crate::web_context::WebContext;

/// Intercepts clicks on every `a[href^="#"]` link present at attach time.
pub(crate) fn attach_anchor_scrolling(
    ctx: &WebContext,
    registry: &mut ListenerRegistry,
) -> Result<(), EnhanceError> {
    let links = query_all(&ctx.document, "a[href^=\"#\"]")?;
    for i in 0..links.length() {
        let Some(node) = links.get(i) else { continue };
        let Ok(link) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let closure = scroll_click_closure(ctx, link.clone());
        registry.add(link.as_ref(), "click", closure)?;
    }
    Ok(())
}

/// Click handler: when the fragment target exists, suppress the default jump,
/// scroll smoothly to it, and push the fragment onto the URL. A missing
/// target fails open to ordinary browser navigation.
fn scroll_click_closure(
    ctx: &WebContext,
    link: web_sys::Element,
) -> Closure<dyn FnMut(web_sys::Event)> {
    let ctx = ctx.clone();
    Closure::new(move |event: web_sys::Event| {
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(id) = fragment_id(&href) else {
            return;
        };
        let Some(target) = ctx.document.get_element_by_id(id) else {
            return;
        };

        event.prevent_default();

        let scroll_opts = web_sys::ScrollIntoViewOptions::new();
        scroll_opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        scroll_opts.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&scroll_opts);

        // Reflect the fragment in the URL without a second scroll jump.
        if let Ok(history) = ctx.window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href.as_str()));
        }
    })
}
