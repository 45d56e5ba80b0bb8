//! WebAssembly bindings for hydoc-enhance
//!
//! Exposes JavaScript-friendly entry points mirroring how the original theme
//! script was loaded: call `init()` (or `initWithOptions({...})`) once per
//! page load. Initialization is deferred until `DOMContentLoaded` when the
//! document is still parsing, and the returned handle can detach every
//! listener again for single-page navigation hosts.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use js_sys::{Object, Reflect};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;

use crate::dom::Enhancements;
use crate::types::EnhanceOptions;
use crate::utils::set_panic_hook;
use crate::web_context::WebContext;

struct ReadyListener {
    document: web_sys::Document,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

/// Handle to an attached (or pending) enhancement layer.
///
/// Keep it alive for the lifetime of the page, or call
/// [`EnhanceHandle::detach`] to unwire everything. Hosts that do not keep
/// the return value of `init()` must call [`EnhanceHandle::forget`] instead:
/// letting the JS garbage collector finalize the handle would detach the
/// enhancements at an arbitrary point.
#[wasm_bindgen]
pub struct EnhanceHandle {
    inner: Rc<RefCell<Option<Enhancements>>>,
    ready: Option<ReadyListener>,
}

#[wasm_bindgen]
impl EnhanceHandle {
    /// Removes every listener added during initialization and restores the
    /// sidebar to its unenhanced state. Safe to call more than once.
    pub fn detach(&mut self) {
        if let Some(ready) = self.ready.take() {
            let target: &web_sys::EventTarget = ready.document.as_ref();
            let _ = target.remove_event_listener_with_callback(
                "DOMContentLoaded",
                ready.closure.as_ref().unchecked_ref(),
            );
        }
        if let Some(mut enhancements) = self.inner.borrow_mut().take() {
            enhancements.detach();
        }
    }

    /// Leaks the enhancement layer so it stays attached for the rest of the
    /// page's lifetime, matching the fire-and-forget usage of the original
    /// theme script (`init().forget()`).
    ///
    /// The pending `DOMContentLoaded` closure, if any, is leaked too, so a
    /// deferred initialization still runs after the handle is gone.
    pub fn forget(mut self) {
        if let Some(ready) = self.ready.take() {
            ready.closure.forget();
        }
        core::mem::forget(Rc::clone(&self.inner));
    }
}

/// Initialize all four enhancements with theme defaults.
#[wasm_bindgen]
pub fn init() -> Result<EnhanceHandle, JsValue> {
    init_options(EnhanceOptions::default())
}

/// Initialize with options specified as a plain JS object.
///
/// Recognized keys: `contentSelector`, `sidebarSelector`, `codeSelector`,
/// `mobileBreakpoint`, `feedbackResetMs`.
#[wasm_bindgen(js_name = initWithOptions)]
pub fn init_with_options(js_options: JsValue) -> Result<EnhanceHandle, JsValue> {
    let options = parse_js_options(&js_options)?;
    init_options(options)
}

fn init_options(options: EnhanceOptions) -> Result<EnhanceHandle, JsValue> {
    set_panic_hook();
    let ctx = WebContext::try_from_window().map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let inner: Rc<RefCell<Option<Enhancements>>> = Rc::new(RefCell::new(None));

    if ctx.document.ready_state() == web_sys::DocumentReadyState::Loading {
        let slot = Rc::clone(&inner);
        let attach_ctx = ctx.clone();
        let closure = Closure::new(move |_event: web_sys::Event| {
            match Enhancements::attach(&attach_ctx, &options) {
                Ok(enhancements) => {
                    slot.borrow_mut().replace(enhancements);
                }
                Err(e) => {
                    web_sys::console::warn_1(&JsValue::from_str(&format!("{e}")));
                }
            }
        });
        let target: &web_sys::EventTarget = ctx.document.as_ref();
        target
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .map_err(|e| JsValue::from_str(&format!("{e:?}")))?;
        return Ok(EnhanceHandle {
            inner,
            ready: Some(ReadyListener {
                document: ctx.document,
                closure,
            }),
        });
    }

    let enhancements =
        Enhancements::attach(&ctx, &options).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    inner.borrow_mut().replace(enhancements);
    Ok(EnhanceHandle { inner, ready: None })
}

fn parse_js_options(js: &JsValue) -> Result<EnhanceOptions, JsValue> {
    if js.is_undefined() || js.is_null() {
        return Ok(EnhanceOptions::default());
    }
    if !js.is_object() {
        return Err(JsValue::from_str("options must be a plain object"));
    }
    let obj: Object = Object::from(js.clone());

    let get = |key: &str| -> Result<JsValue, JsValue> {
        Reflect::get(&obj, &JsValue::from_str(key))
            .map_err(|_| JsValue::from_str(&format!("failed to read option '{}'", key)))
    };
    let opt_string = |key: &str| -> Result<Option<String>, JsValue> {
        let v = get(key)?;
        if v.is_undefined() || v.is_null() {
            Ok(None)
        } else {
            v.as_string()
                .map(Some)
                .ok_or_else(|| JsValue::from_str(&format!("option '{}' must be a string", key)))
        }
    };
    let opt_u32 = |key: &str| -> Result<Option<u32>, JsValue> {
        let v = get(key)?;
        if v.is_undefined() || v.is_null() {
            return Ok(None);
        }
        let n = v
            .as_f64()
            .ok_or_else(|| JsValue::from_str(&format!("option '{}' must be a number", key)))?;
        if !n.is_finite() || n < 0.0 || n.fract().abs() > 0.0 {
            return Err(JsValue::from_str(&format!(
                "option '{}' must be a non-negative integer",
                key
            )));
        }
        Ok(Some(n as u32))
    };

    Ok(EnhanceOptions::builder()
        .maybe_content_selector(opt_string("contentSelector")?)
        .maybe_sidebar_selector(opt_string("sidebarSelector")?)
        .maybe_code_selector(opt_string("codeSelector")?)
        .maybe_mobile_breakpoint(opt_u32("mobileBreakpoint")?)
        .maybe_feedback_reset_ms(opt_u32("feedbackResetMs")?)
        .build())
}
