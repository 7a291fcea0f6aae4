//! Browser tests for ResizeController
//!
//! Run with `wasm-pack test --headless --chrome -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use corner_resize::ResizeController;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, EventTarget, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const HANDLES: [&str; 4] = [
    "resize-handle-top-left",
    "resize-handle-top-right",
    "resize-handle-bottom-left",
    "resize-handle-bottom-right",
];

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Build a fresh container with four handles, removing any previous one
fn mount(width: u32, height: u32) -> HtmlElement {
    let document = document();
    if let Some(old) = document.query_selector(".resize-container").unwrap() {
        old.remove();
    }

    let container: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    container.set_class_name("resize-container");
    let style = container.style();
    style.set_property("position", "absolute").unwrap();
    style.set_property("box-sizing", "border-box").unwrap();
    style.set_property("width", &format!("{}px", width)).unwrap();
    style.set_property("height", &format!("{}px", height)).unwrap();

    for class in HANDLES {
        let handle = document.create_element("div").unwrap();
        handle.set_class_name(class);
        container.append_child(&handle).unwrap();
    }

    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn mouse(target: &EventTarget, kind: &str, x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn handle(class: &str) -> EventTarget {
    document()
        .query_selector(&format!(".{}", class))
        .unwrap()
        .unwrap()
        .into()
}

fn window() -> EventTarget {
    web_sys::window().unwrap().into()
}

#[wasm_bindgen_test]
fn test_top_left_drag_in_dom() {
    let container = mount(200, 150);
    let mut controller = ResizeController::new("").unwrap();

    assert!(!controller.is_listening());
    mouse(&handle("resize-handle-top-left"), "mousedown", 100, 100);
    assert!(controller.is_dragging());
    assert!(controller.is_listening());

    mouse(&window(), "mousemove", 80, 130);
    assert_eq!(container.style().get_property_value("width").unwrap(), "220px");
    assert_eq!(container.style().get_property_value("height").unwrap(), "120px");

    mouse(&window(), "mouseup", 80, 130);
    assert!(!controller.is_dragging());
    assert!(!controller.is_listening());

    // A second release has nothing left to remove
    mouse(&window(), "mouseup", 80, 130);
    assert!(!controller.is_listening());

    controller.detach();
}

#[wasm_bindgen_test]
fn test_programmatic_bottom_right_drag() {
    let container = mount(200, 150);
    let mut controller = ResizeController::new("").unwrap();

    assert!(controller.press_start("bottom-right", 50.0, 50.0));
    assert!(controller.session_json().contains("\"corner\":\"bottom-right\""));
    assert!(controller.press_move(70.0, 40.0));
    assert!(controller.press_end());

    assert_eq!(container.style().get_property_value("width").unwrap(), "220px");
    assert_eq!(container.style().get_property_value("height").unwrap(), "140px");
    assert_eq!(controller.session_json(), "null");

    controller.detach();
}

#[wasm_bindgen_test]
fn test_missing_container_is_an_error() {
    mount(10, 10);
    let result = ResizeController::new(r##"{"container": "#does-not-exist"}"##);
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_detach_mid_drag_removes_listeners() {
    let container = mount(200, 150);
    let mut controller = ResizeController::new("").unwrap();

    mouse(&handle("resize-handle-bottom-right"), "mousedown", 50, 50);
    assert!(controller.is_listening());

    controller.detach();
    assert!(!controller.is_dragging());
    assert!(!controller.is_listening());

    // Handle listeners are gone too: a new press starts nothing
    mouse(&handle("resize-handle-bottom-right"), "mousedown", 50, 50);
    assert!(!controller.is_dragging());
    assert_eq!(container.style().get_property_value("width").unwrap(), "200px");
}

#[wasm_bindgen_test]
fn test_dropping_controller_mid_drag_unhooks_handles() {
    let container = mount(200, 150);
    let controller = ResizeController::new("").unwrap();

    mouse(&handle("resize-handle-bottom-right"), "mousedown", 50, 50);
    drop(controller);

    // Freed closures would throw if they were still registered
    mouse(&window(), "mousemove", 90, 90);
    mouse(&window(), "mouseup", 90, 90);
    mouse(&handle("resize-handle-top-left"), "mousedown", 0, 0);
    assert_eq!(container.style().get_property_value("width").unwrap(), "200px");
}
