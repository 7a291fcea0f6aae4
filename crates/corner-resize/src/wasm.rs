//! WASM exports for the corner resizer
//!
//! Wires `CornerResizer` to DOM elements: `mousedown` on the four handles,
//! `mousemove`/`mouseup` on `window` while a drag is in progress.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::config::ResizeConfig;
use crate::corner::CornerKind;
use crate::error::ResizeError;
use crate::handle::HandleId;
use crate::input::InputResult;
use crate::resizer::CornerResizer;
use crate::surface::PointerSurface;
use crate::target::ResizeTarget;

#[wasm_bindgen]
extern "C" {
    /// Console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;

/// Container element, read through `getComputedStyle`
struct DomTarget {
    window: Window,
    element: HtmlElement,
}

impl ResizeTarget for DomTarget {
    fn computed_style(&self, property: &str) -> Option<String> {
        self.window
            .get_computed_style(&self.element)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(property).ok())
    }

    fn set_style(&mut self, property: &str, value: &str) {
        if let Err(e) = self.element.style().set_property(property, value) {
            log(&format!("[corner-resize] Failed to set {}: {:?}", property, e));
        }
    }
}

/// Move/release listeners on the global window
struct WindowListeners {
    window: Window,
    on_move: js_sys::Function,
    on_up: js_sys::Function,
    /// Listeners are currently registered on `window`
    attached: bool,
}

impl PointerSurface for WindowListeners {
    fn add_drag_listeners(&mut self) {
        let added = self
            .window
            .add_event_listener_with_callback("mousemove", &self.on_move)
            .and_then(|_| {
                self.window
                    .add_event_listener_with_callback("mouseup", &self.on_up)
            });
        match added {
            Ok(()) => self.attached = true,
            Err(e) => log(&format!("[corner-resize] Failed to add drag listeners: {:?}", e)),
        }
    }

    fn remove_drag_listeners(&mut self) {
        let removed = self
            .window
            .remove_event_listener_with_callback("mousemove", &self.on_move)
            .and_then(|_| {
                self.window
                    .remove_event_listener_with_callback("mouseup", &self.on_up)
            });
        match removed {
            Ok(()) => self.attached = false,
            Err(e) => log(&format!("[corner-resize] Failed to remove drag listeners: {:?}", e)),
        }
    }
}

/// State shared between the event closures
struct Shared {
    resizer: CornerResizer,
    target: DomTarget,
    /// Set once the window closures exist
    listeners: Option<WindowListeners>,
    log_sessions: bool,
}

impl Shared {
    fn press_start(&mut self, handle: HandleId, x: f32, y: f32) -> InputResult {
        let Some(listeners) = self.listeners.as_mut() else {
            return InputResult::Ignored;
        };
        let result = self.resizer.press_start(handle, x, y, &self.target, listeners);
        if self.log_sessions {
            match self.resizer.session() {
                Some(session) if result.is_handled() => log(&format!(
                    "[corner-resize] Start {:?} at ({}, {}) from {}x{}",
                    session.corner, x, y, session.start_size.width, session.start_size.height
                )),
                _ => log(&format!("[corner-resize] Ignored press on handle {}", handle)),
            }
        }
        result
    }

    fn press_move(&mut self, x: f32, y: f32) -> InputResult {
        self.resizer.press_move(x, y, &mut self.target)
    }

    fn press_end(&mut self) -> InputResult {
        let Some(listeners) = self.listeners.as_mut() else {
            return InputResult::Ignored;
        };
        let result = self.resizer.press_end(listeners);
        if self.log_sessions && result.is_handled() {
            let size = self.target.computed_size();
            log(&format!("[corner-resize] End at {}x{}", size.width, size.height));
        }
        result
    }
}

/// Resize controller for WASM - wraps CornerResizer with DOM listeners
#[wasm_bindgen]
pub struct ResizeController {
    shared: Rc<RefCell<Shared>>,
    /// Handle ids in `CornerKind::ALL` order
    handle_ids: [HandleId; 4],
    /// Handle elements and their `mousedown` closures
    handles: Vec<(HtmlElement, MouseClosure)>,
    /// Closures must be stored to prevent garbage collection
    _on_move: MouseClosure,
    _on_up: MouseClosure,
}

#[wasm_bindgen]
impl ResizeController {
    /// Attach to the container and handles named by `config_json`.
    ///
    /// An empty string uses the default `.resize-container` /
    /// `.resize-handle-*` selectors.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<ResizeController, JsValue> {
        console_error_panic_hook::set_once();

        let config = ResizeConfig::from_json(config_json).map_err(js_error)?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = query(&document, &config.container).map_err(js_error)?;

        let shared = Rc::new(RefCell::new(Shared {
            resizer: CornerResizer::new(),
            target: DomTarget {
                window: window.clone(),
                element: container,
            },
            listeners: None,
            log_sessions: config.log_sessions,
        }));

        let move_state = shared.clone();
        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
            move_state
                .borrow_mut()
                .press_move(event.client_x() as f32, event.client_y() as f32);
        }) as Box<dyn FnMut(MouseEvent)>);

        let up_state = shared.clone();
        let on_up = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
            up_state.borrow_mut().press_end();
        }) as Box<dyn FnMut(MouseEvent)>);

        shared.borrow_mut().listeners = Some(WindowListeners {
            window,
            on_move: on_move.as_ref().unchecked_ref::<js_sys::Function>().clone(),
            on_up: on_up.as_ref().unchecked_ref::<js_sys::Function>().clone(),
            attached: false,
        });

        let mut handle_ids = [0; 4];
        let mut handles = Vec::with_capacity(CornerKind::ALL.len());
        for (slot, corner) in handle_ids.iter_mut().zip(CornerKind::ALL) {
            let element = query(&document, config.handles.get(corner)).map_err(js_error)?;
            let id = shared.borrow_mut().resizer.register_handle(corner);
            *slot = id;

            let down_state = shared.clone();
            let on_down = Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                down_state
                    .borrow_mut()
                    .press_start(id, event.client_x() as f32, event.client_y() as f32);
            }) as Box<dyn FnMut(MouseEvent)>);
            element.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
            handles.push((element, on_down));
        }

        Ok(Self {
            shared,
            handle_ids,
            handles,
            _on_move: on_move,
            _on_up: on_up,
        })
    }

    // =========================================================================
    // Programmatic input
    // =========================================================================

    /// Start a drag from a corner ("top-left", "ne", "br", ...)
    #[wasm_bindgen]
    pub fn press_start(&mut self, corner: &str, x: f32, y: f32) -> bool {
        let Some(corner) = CornerKind::from_name(corner) else {
            return false;
        };
        let index = CornerKind::ALL
            .iter()
            .position(|c| *c == corner)
            .unwrap_or_default();
        let handle = self.handle_ids[index];
        self.shared.borrow_mut().press_start(handle, x, y).is_handled()
    }

    /// Move the pointer during a drag
    #[wasm_bindgen]
    pub fn press_move(&mut self, x: f32, y: f32) -> bool {
        self.shared.borrow_mut().press_move(x, y).is_handled()
    }

    /// Release the pointer
    #[wasm_bindgen]
    pub fn press_end(&mut self) -> bool {
        self.shared.borrow_mut().press_end().is_handled()
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Check if a drag is in progress
    #[wasm_bindgen]
    pub fn is_dragging(&self) -> bool {
        self.shared.borrow().resizer.is_dragging()
    }

    /// Get the active session as JSON (`null` when idle)
    #[wasm_bindgen]
    pub fn session_json(&self) -> String {
        serde_json::to_string(&self.shared.borrow().resizer.session())
            .unwrap_or_else(|_| "null".to_string())
    }

    /// Check if the window move/release listeners are registered
    #[wasm_bindgen]
    pub fn is_listening(&self) -> bool {
        self.shared
            .borrow()
            .listeners
            .as_ref()
            .map_or(false, |listeners| listeners.attached)
    }

    /// End any drag and remove every listener. Safe to call more than once.
    #[wasm_bindgen]
    pub fn detach(&mut self) {
        self.shared.borrow_mut().press_end();
        for (element, on_down) in self.handles.drain(..) {
            let removed = element
                .remove_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref());
            if let Err(e) = removed {
                log(&format!("[corner-resize] Failed to remove handle listener: {:?}", e));
            }
        }
    }
}

impl Drop for ResizeController {
    fn drop(&mut self) {
        // Listeners must be gone before their closures are freed
        self.detach();
    }
}

fn query(document: &Document, selector: &str) -> Result<HtmlElement, ResizeError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ResizeError::ElementNotFound(selector.to_string()))
}

fn js_error(err: ResizeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
