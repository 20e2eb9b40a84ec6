//! DOM rendering and event wiring for the custom select widget.
//!
//! This crate provides:
//! - `widget`: the imperative `CustomSelect` built directly on `web-sys`
//! - `registry`: the page-wide outside-click dispatcher shared by all widgets
//! - `classes`: the structural class-name contract styling layers target
//! - `components`: RSX host for embedding the widget in Dioxus apps

pub mod classes;
pub mod components;
pub mod registry;
pub mod widget;

use select_core::error::SelectError;

pub(crate) fn js_error(err: wasm_bindgen::JsValue) -> SelectError {
    SelectError::Dom(format!("{err:?}"))
}
