//! Browser-side tests for the select widget.
//!
//! Each test mounts its own container div, builds a widget inside it, and
//! destroys the widget afterwards so option element ids never collide
//! across tests.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent, MouseEventInit};

use select_core::config::{ClassConfig, SelectConfig};
use select_core::error::SelectError;
use select_core::options::SelectOption;
use select_ui::widget::CustomSelect;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_container(id: &str) -> HtmlElement {
    let document = document();
    if let Some(stale) = document.get_element_by_id(id) {
        stale.remove();
    }
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn flavour_config() -> SelectConfig {
    SelectConfig {
        placeholder: "Select your favourite ice cream flavour".to_string(),
        options: vec![
            SelectOption::new("chocolate", "Chocolate"),
            SelectOption::new("strawberry", "Strawberry"),
            SelectOption::new("vanilla", "Vanilla"),
            SelectOption::new("spanish-delight", "Spanish Delight"),
            SelectOption::new("butter-scotch", "Butter Scotch"),
        ],
        classes: ClassConfig::default(),
    }
}

/// Dispatches a bubbling click, so the shared window listener sees it too.
fn click(target: &EventTarget) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn query(scope: &Element, selector: &str) -> Element {
    scope.query_selector(selector).unwrap().unwrap()
}

#[wasm_bindgen_test]
fn renders_placeholder_and_option_list() {
    let container = mount_container("t-render");
    let widget = CustomSelect::create("t-render", &flavour_config()).unwrap();

    assert!(container.class_list().contains("select-wrapper"));

    let list = query(&container, "ul.select-list");
    assert_eq!(list.child_element_count(), 6);
    assert_eq!(widget.item_count(), 6);
    assert!(list.class_list().contains("d-none"));

    let first = list.first_element_child().unwrap();
    assert_eq!(first.id(), "");
    assert_eq!(first.get_attribute("value").as_deref(), Some(""));
    assert_eq!(
        first.text_content().as_deref(),
        Some("Select your favourite ice cream flavour")
    );

    let title = query(&container, "div.select-title");
    assert!(title
        .text_content()
        .unwrap()
        .starts_with("Select your favourite ice cream flavour"));

    widget.destroy();
}

#[wasm_bindgen_test]
fn missing_container_is_an_error() {
    let err = CustomSelect::create("t-no-such-container", &flavour_config()).unwrap_err();
    assert_eq!(
        err,
        SelectError::MissingContainer("t-no-such-container".to_string())
    );
}

#[wasm_bindgen_test]
fn duplicate_option_values_rejected_at_construction() {
    mount_container("t-duplicates");
    let mut config = flavour_config();
    config.options.push(SelectOption::new("vanilla", "Vanilla Again"));

    let err = CustomSelect::create("t-duplicates", &config).unwrap_err();
    assert_eq!(err, SelectError::DuplicateValue("vanilla".to_string()));
}

#[wasm_bindgen_test]
fn title_click_toggles_the_list() {
    let container = mount_container("t-toggle");
    let widget = CustomSelect::create("t-toggle", &flavour_config()).unwrap();

    let title = query(&container, "div.select-title");
    let list = query(&container, "ul.select-list");
    assert!(!widget.is_open());

    click(&title.clone().into());
    assert!(widget.is_open());
    assert!(!list.class_list().contains("d-none"));

    click(&title.into());
    assert!(!widget.is_open());
    assert!(list.class_list().contains("d-none"));

    widget.destroy();
}

#[wasm_bindgen_test]
fn outside_click_closes_the_list() {
    let container = mount_container("t-outside");
    let widget = CustomSelect::create("t-outside", &flavour_config()).unwrap();

    widget.toggle(true);
    assert!(widget.is_open());

    let body = document().body().unwrap();
    click(&body.into());

    assert!(!widget.is_open());
    assert!(query(&container, "ul.select-list")
        .class_list()
        .contains("d-none"));

    widget.destroy();
}

#[wasm_bindgen_test]
fn clicking_an_option_selects_it() {
    let container = mount_container("t-select");
    let widget = CustomSelect::create("t-select", &flavour_config()).unwrap();

    let seen: Rc<RefCell<Vec<SelectOption>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    widget.on_change(move |selection| sink.borrow_mut().push(selection.clone()));

    widget.toggle(true);
    let item = query(&container, "li[value='vanilla']");
    click(&item.clone().into());

    assert_eq!(widget.value(), Some(SelectOption::new("vanilla", "Vanilla")));
    assert!(item.class_list().contains("selected-item"));
    assert!(!widget.is_open());

    let title = query(&container, "div.select-title");
    assert!(title.text_content().unwrap().starts_with("Vanilla"));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], SelectOption::new("vanilla", "Vanilla"));

    drop(seen);
    widget.destroy();
}

#[wasm_bindgen_test]
fn highlight_follows_the_latest_selection() {
    let container = mount_container("t-highlight");
    let widget = CustomSelect::create("t-highlight", &flavour_config()).unwrap();

    widget.set_value("chocolate").unwrap();
    widget.set_value("strawberry").unwrap();

    let highlighted = container.query_selector_all("li.selected-item").unwrap();
    assert_eq!(highlighted.length(), 1);
    let only = highlighted
        .item(0)
        .unwrap()
        .dyn_into::<Element>()
        .unwrap();
    assert_eq!(only.get_attribute("value").as_deref(), Some("strawberry"));

    widget.destroy();
}

#[wasm_bindgen_test]
fn set_value_with_unknown_value_is_a_clean_error() {
    let container = mount_container("t-unknown");
    let widget = CustomSelect::create("t-unknown", &flavour_config()).unwrap();

    widget.set_value("vanilla").unwrap();
    let err = widget.set_value("mint").unwrap_err();

    assert_eq!(err, SelectError::UnknownOption("mint".to_string()));
    assert_eq!(widget.value(), Some(SelectOption::new("vanilla", "Vanilla")));
    assert!(query(&container, "div.select-title")
        .text_content()
        .unwrap()
        .starts_with("Vanilla"));

    widget.destroy();
}

#[wasm_bindgen_test]
fn set_value_behaves_like_a_click() {
    let container = mount_container("t-setvalue");
    let widget = CustomSelect::create("t-setvalue", &flavour_config()).unwrap();

    let calls = Rc::new(RefCell::new(0u32));
    let sink = calls.clone();
    widget.on_change(move |_| *sink.borrow_mut() += 1);

    widget.toggle(true);
    let chosen = widget.set_value("butter-scotch").unwrap();

    assert_eq!(chosen, SelectOption::new("butter-scotch", "Butter Scotch"));
    assert_eq!(*calls.borrow(), 1);
    assert!(!widget.is_open());
    assert!(query(&container, "li[value='butter-scotch']")
        .class_list()
        .contains("selected-item"));

    widget.destroy();
}

#[wasm_bindgen_test]
fn later_callback_replaces_the_earlier_one() {
    mount_container("t-callbacks");
    let widget = CustomSelect::create("t-callbacks", &flavour_config()).unwrap();

    let first = Rc::new(RefCell::new(0u32));
    let second = Rc::new(RefCell::new(0u32));

    let sink = first.clone();
    widget.on_change(move |_| *sink.borrow_mut() += 1);
    let sink = second.clone();
    widget.on_change(move |_| *sink.borrow_mut() += 1);

    widget.set_value("chocolate").unwrap();

    assert_eq!(*first.borrow(), 0);
    assert_eq!(*second.borrow(), 1);

    widget.destroy();
}

#[wasm_bindgen_test]
fn destroy_removes_the_rendered_elements() {
    let container = mount_container("t-destroy");
    let widget = CustomSelect::create("t-destroy", &flavour_config()).unwrap();
    assert_eq!(container.child_element_count(), 2);

    widget.destroy();

    assert_eq!(container.child_element_count(), 0);
    assert!(!container.class_list().contains("select-wrapper"));
}
