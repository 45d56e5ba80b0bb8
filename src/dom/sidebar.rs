//! Drives the mobile navigation toggle from the pure state machine.

use alloc::format;
use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;

use crate::dom::{ListenerRegistry, query_one};
use crate::sidebar::{SidebarEvent, SidebarPhase, next_phase};
use crate::types::{CssClass, EnhanceError, EnhanceOptions};
use crate::web_context::WebContext;

/// Accessible label announced for the mobile toggle.
const TOGGLE_ARIA_LABEL: &str = "切換導航選單";

struct ToggleHandle {
    button: web_sys::HtmlElement,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

/// Owns the toggle control and keeps the DOM in sync with [`SidebarPhase`].
///
/// All inputs (initial evaluation, resize, toggle click, outside click) are
/// funnelled through [`SidebarController::dispatch`], which computes the next
/// phase with the pure transition function and then applies it.
pub(crate) struct SidebarController {
    ctx: WebContext,
    sidebar: web_sys::Element,
    breakpoint: u32,
    phase: SidebarPhase,
    toggle: Option<ToggleHandle>,
}

impl SidebarController {
    /// Wires the resize and outside-click listeners and performs the initial
    /// width evaluation. Returns `None` when the page has no sidebar or the
    /// viewport width cannot be read.
    pub(crate) fn attach(
        ctx: &WebContext,
        options: &EnhanceOptions,
        registry: &mut ListenerRegistry,
    ) -> Result<Option<Rc<RefCell<Self>>>, EnhanceError> {
        let Some(sidebar) = query_one(&ctx.document, &options.sidebar_selector)? else {
            return Ok(None);
        };

        let controller = Rc::new(RefCell::new(Self {
            ctx: ctx.clone(),
            sidebar,
            breakpoint: options.mobile_breakpoint,
            phase: SidebarPhase::Absent,
            toggle: None,
        }));

        {
            let ctrl = Rc::clone(&controller);
            let resize = Closure::new(move |_event: web_sys::Event| {
                let width = ctrl.borrow().ctx.viewport_width();
                if let Some(width) = width {
                    Self::dispatch(&ctrl, SidebarEvent::Resized { width });
                }
            });
            registry.add(ctx.window.as_ref(), "resize", resize)?;
        }

        {
            let ctrl = Rc::clone(&controller);
            let outside = Closure::new(move |event: web_sys::Event| {
                let inside = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .is_some_and(|n| ctrl.borrow().sidebar.contains(Some(&n)));
                if !inside {
                    Self::dispatch(&ctrl, SidebarEvent::OutsideClick);
                }
            });
            registry.add(ctx.document.as_ref(), "click", outside)?;
        }

        if let Some(width) = ctx.viewport_width() {
            Self::dispatch(&controller, SidebarEvent::Resized { width });
        }
        Ok(Some(controller))
    }

    /// Feeds one event through the transition function and syncs the DOM.
    fn dispatch(controller: &Rc<RefCell<Self>>, event: SidebarEvent) {
        let mut ctrl = controller.borrow_mut();
        let next = next_phase(ctrl.phase, event, ctrl.breakpoint);
        ctrl.apply(next, controller);
    }

    /// Applying a phase is idempotent, so a Closed->Closed resize simply
    /// re-verifies that the toggle exists (matching the original behavior of
    /// re-adding on every narrow resize).
    fn apply(&mut self, next: SidebarPhase, controller: &Rc<RefCell<Self>>) {
        match next {
            SidebarPhase::Absent => {
                self.remove_toggle();
                self.set_open_markers(false);
            }
            SidebarPhase::Closed => {
                self.ensure_toggle(controller);
                self.set_open_markers(false);
            }
            SidebarPhase::Open => {
                self.ensure_toggle(controller);
                self.set_open_markers(true);
            }
        }
        self.phase = next;
    }

    /// Creates the toggle button unless one already exists, prepending it to
    /// the sidebar. A button left over from another initialization is left
    /// alone rather than duplicated.
    fn ensure_toggle(&mut self, controller: &Rc<RefCell<Self>>) {
        if self.toggle.is_some() {
            return;
        }
        let existing = format!(".{}", CssClass::MobileMenuToggle);
        if self.sidebar.query_selector(&existing).ok().flatten().is_some() {
            return;
        }

        let Ok(button) = self.ctx.document.create_element("button") else {
            return;
        };
        button.set_class_name(CssClass::MobileMenuToggle.as_ref());
        button.set_inner_html("☰");
        let _ = button.set_attribute("aria-label", TOGGLE_ARIA_LABEL);
        let _ = button.set_attribute("type", "button");
        let Ok(button) = button.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };

        let first = self.sidebar.first_child();
        if self.sidebar.insert_before(&button, first.as_ref()).is_err() {
            return;
        }

        let ctrl = Rc::clone(controller);
        let closure = Closure::new(move |_event: web_sys::Event| {
            Self::dispatch(&ctrl, SidebarEvent::ToggleClicked);
        });
        let target: &web_sys::EventTarget = button.as_ref();
        if target
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .is_err()
        {
            button.remove();
            return;
        }
        self.toggle = Some(ToggleHandle { button, closure });
    }

    /// Removes the toggle button and its click listener, if present.
    fn remove_toggle(&mut self) {
        if let Some(handle) = self.toggle.take() {
            let target: &web_sys::EventTarget = handle.button.as_ref();
            let _ = target.remove_event_listener_with_callback(
                "click",
                handle.closure.as_ref().unchecked_ref(),
            );
            handle.button.remove();
        }
    }

    /// Syncs the `sidebar-open` marker on the sidebar and the document body.
    fn set_open_markers(&self, open: bool) {
        let class = CssClass::SidebarOpen.as_ref();
        let body = self.ctx.document.body();
        if open {
            let _ = self.sidebar.class_list().add_1(class);
            if let Some(body) = body {
                let _ = body.class_list().add_1(class);
            }
        } else {
            let _ = self.sidebar.class_list().remove_1(class);
            if let Some(body) = body {
                let _ = body.class_list().remove_1(class);
            }
        }
    }

    /// Forces the unenhanced state: toggle removed, markers cleared.
    pub(crate) fn teardown(&mut self) {
        self.remove_toggle();
        self.set_open_markers(false);
        self.phase = SidebarPhase::Absent;
    }
}
