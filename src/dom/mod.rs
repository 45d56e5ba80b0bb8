//! DOM adapter layer (WebAssembly only)
//!
//! Applies the decisions made by the pure core modules to the live document
//! via `web-sys`: attaching copy controls, running the highlight pass, wiring
//! smooth scrolling, and driving the sidebar toggle. Every event listener
//! registered here is recorded in a [`ListenerRegistry`] so that
//! [`Enhancements::detach`] can unwire them all; repeated initialization in a
//! single-page navigation context therefore never accumulates handlers.

mod anchor;
mod copy;
mod highlight;
mod sidebar;

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::types::{EnhanceError, EnhanceErrorKind, EnhanceOptions};
use crate::web_context::WebContext;

/// Renders a `JsValue` error into a diagnostic string.
pub(crate) fn js_details(err: &JsValue) -> String {
    format!("{err:?}")
}

pub(crate) fn dom_err(err: &JsValue) -> EnhanceError {
    EnhanceError::new(EnhanceErrorKind::DomOperation {
        details: js_details(err),
    })
}

/// `document.querySelector` with a categorised error for bad selectors.
pub(crate) fn query_one(
    document: &web_sys::Document,
    selector: &str,
) -> Result<Option<web_sys::Element>, EnhanceError> {
    document.query_selector(selector).map_err(|e| {
        EnhanceError::new(EnhanceErrorKind::InvalidSelector {
            selector: String::from(selector),
            details: js_details(&e),
        })
    })
}

/// `document.querySelectorAll` with a categorised error for bad selectors.
pub(crate) fn query_all(
    document: &web_sys::Document,
    selector: &str,
) -> Result<web_sys::NodeList, EnhanceError> {
    document.query_selector_all(selector).map_err(|e| {
        EnhanceError::new(EnhanceErrorKind::InvalidSelector {
            selector: String::from(selector),
            details: js_details(&e),
        })
    })
}

struct ListenerEntry {
    target: web_sys::EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

/// Records every listener registration so attach/detach stay paired.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    entries: Vec<ListenerEntry>,
}

impl ListenerRegistry {
    /// Adds `closure` as a listener for `event_type` on `target` and records
    /// the registration for later removal.
    pub(crate) fn add(
        &mut self,
        target: &web_sys::EventTarget,
        event_type: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    ) -> Result<(), EnhanceError> {
        target
            .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
            .map_err(|e| {
                EnhanceError::new(EnhanceErrorKind::Listener {
                    event: String::from(event_type),
                    details: js_details(&e),
                })
            })?;
        self.entries.push(ListenerEntry {
            target: target.clone(),
            event_type,
            closure,
        });
        Ok(())
    }

    /// Removes every recorded listener and drops the closures.
    pub(crate) fn detach_all(&mut self) {
        for entry in self.entries.drain(..) {
            let _ = entry.target.remove_event_listener_with_callback(
                entry.event_type,
                entry.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// The attached enhancement layer.
///
/// Created by [`Enhancements::attach`], which wires all four features once.
/// Dropping the value (or calling [`Enhancements::detach`]) removes every
/// listener and tears the sidebar toggle down.
pub struct Enhancements {
    registry: ListenerRegistry,
    copy_buttons: Vec<web_sys::HtmlElement>,
    sidebar: Option<Rc<RefCell<sidebar::SidebarController>>>,
}

impl Enhancements {
    /// Wires all four enhancement features against the given document.
    ///
    /// Each feature silently no-ops when its prerequisites are missing: no
    /// clipboard capability skips the copy controls, a missing content root
    /// skips highlighting, and a missing sidebar skips the mobile toggle.
    /// Errors are reserved for invalid selectors and failed DOM wiring.
    pub fn attach(ctx: &WebContext, options: &EnhanceOptions) -> Result<Self, EnhanceError> {
        let mut registry = ListenerRegistry::default();
        let copy_buttons = copy::attach_copy_buttons(ctx, options, &mut registry)?;
        highlight::run_highlight_pass(ctx, options)?;
        anchor::attach_anchor_scrolling(ctx, &mut registry)?;
        let sidebar = sidebar::SidebarController::attach(ctx, options, &mut registry)?;
        Ok(Self {
            registry,
            copy_buttons,
            sidebar,
        })
    }

    /// Removes every listener added by [`Enhancements::attach`], removes the
    /// copy controls this attach created, and restores the sidebar to its
    /// unenhanced state. Leaving an unwired control in place would make the
    /// next attach skip its code block and strand a dead button. Idempotent.
    pub fn detach(&mut self) {
        self.registry.detach_all();
        for button in self.copy_buttons.drain(..) {
            button.remove();
        }
        if let Some(sidebar) = self.sidebar.take() {
            sidebar.borrow_mut().teardown();
        }
    }
}

impl Drop for Enhancements {
    fn drop(&mut self) {
        self.detach();
    }
}
