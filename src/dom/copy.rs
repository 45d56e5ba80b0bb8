//! Copy-control wiring for rendered code blocks.

use alloc::format;
use alloc::vec::Vec;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_futures::spawn_local;

use crate::clipboard::{COPY_ARIA_LABEL, COPY_LABEL, CopyOutcome, feedback};
use crate::dom::{ListenerRegistry, dom_err, query_all};
use crate::types::{CssClass, EnhanceError, EnhanceOptions};
use crate::web_context::WebContext;

/// Ensures exactly one copy control exists per code block.
///
/// Skipped entirely when `navigator.clipboard` is unavailable (insecure
/// context or very old engine). Re-running after controls already exist is a
/// no-op per block. Returns the buttons created by this call so that detach
/// can remove them again; a control whose listener was unwired must not
/// survive to block the next attach.
pub(crate) fn attach_copy_buttons(
    ctx: &WebContext,
    options: &EnhanceOptions,
    registry: &mut ListenerRegistry,
) -> Result<Vec<web_sys::HtmlElement>, EnhanceError> {
    let mut created = Vec::new();
    let Some(clipboard) = clipboard_capability(ctx) else {
        return Ok(created);
    };

    let blocks = query_all(&ctx.document, &options.code_selector)?;
    let existing_btn = format!(".{}", CssClass::CodeCopyBtn);

    for i in 0..blocks.length() {
        let Some(node) = blocks.get(i) else { continue };
        let Ok(code) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let Some(pre) = code.parent_element() else {
            continue;
        };
        if pre.query_selector(&existing_btn).ok().flatten().is_some() {
            continue;
        }

        let button = ctx
            .document
            .create_element("button")
            .map_err(|e| dom_err(&e))?;
        button.set_class_name(CssClass::CodeCopyBtn.as_ref());
        button.set_text_content(Some(COPY_LABEL));
        button
            .set_attribute("aria-label", COPY_ARIA_LABEL)
            .map_err(|e| dom_err(&e))?;
        button
            .set_attribute("type", "button")
            .map_err(|e| dom_err(&e))?;
        let Ok(button) = button.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };

        // The control is positioned absolutely inside its pre container.
        if let Ok(pre_html) = pre.clone().dyn_into::<web_sys::HtmlElement>() {
            let _ = pre_html.style().set_property("position", "relative");
        }
        pre.append_child(&button).map_err(|e| dom_err(&e))?;

        let closure = copy_click_closure(ctx, clipboard.clone(), code, button.clone(), options);
        registry.add(button.as_ref(), "click", closure)?;
        created.push(button);
    }
    Ok(created)
}

/// Typed handle to `navigator.clipboard`, or `None` when the capability is
/// absent. The lookup goes through `Reflect` because the generated binding
/// assumes the property always exists.
fn clipboard_capability(ctx: &WebContext) -> Option<web_sys::Clipboard> {
    let navigator = ctx.window.navigator();
    let value = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value.unchecked_into())
}

/// Click handler: read the block's text, await the clipboard write, then show
/// transient feedback. Failures surface as a console warning plus the error
/// feedback label; nothing propagates.
fn copy_click_closure(
    ctx: &WebContext,
    clipboard: web_sys::Clipboard,
    code: web_sys::HtmlElement,
    button: web_sys::HtmlElement,
    options: &EnhanceOptions,
) -> Closure<dyn FnMut(web_sys::Event)> {
    let window = ctx.window.clone();
    let reset_ms = options.feedback_reset_ms;
    Closure::new(move |_event: web_sys::Event| {
        let text = code.text_content().unwrap_or_default();
        let promise = clipboard.write_text(&text);
        let window = window.clone();
        let button = button.clone();
        spawn_local(async move {
            let outcome = match JsFuture::from(promise).await {
                Ok(_) => CopyOutcome::Copied,
                Err(err) => {
                    web_sys::console::warn_2(&JsValue::from_str("Failed to copy code:"), &err);
                    CopyOutcome::Failed
                }
            };
            apply_feedback(&window, &button, outcome, reset_ms);
        });
    })
}

/// Swaps the control's label and background for the feedback values, then
/// reverts after `reset_ms`. A rapid second click schedules a second revert
/// timer; the later one simply rewrites the same resting label.
fn apply_feedback(
    window: &web_sys::Window,
    button: &web_sys::HtmlElement,
    outcome: CopyOutcome,
    reset_ms: u32,
) {
    let fb = feedback(outcome);
    button.set_text_content(Some(fb.label));
    let _ = button.style().set_property("background-color", fb.background);

    let button = button.clone();
    let revert = Closure::once_into_js(move || {
        button.set_text_content(Some(COPY_LABEL));
        let _ = button.style().remove_property("background-color");
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        revert.unchecked_ref(),
        reset_ms as i32,
    );
}
