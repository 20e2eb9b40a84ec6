//! Dioxus host that owns the container div and mounts a [`CustomSelect`].

use dioxus::prelude::*;
use log::error;

use select_core::config::SelectConfig;
use select_core::options::SelectOption;

use crate::widget::CustomSelect;

#[derive(Props, Clone, PartialEq)]
pub struct SelectHostProps {
    /// DOM id for the container div the widget renders into.
    pub container_id: String,
    pub config: SelectConfig,
    /// Slot the mounted widget is written into, so the parent can drive
    /// `set_value` / `value` programmatically.
    pub widget: Signal<Option<CustomSelect>>,
    /// Invoked after each selection.
    pub on_select: Option<EventHandler<SelectOption>>,
}

/// Renders an empty container div and mounts the imperative widget into it
/// once the div exists in the document (after the first render). The widget
/// is destroyed when the host leaves the tree.
#[component]
pub fn SelectHost(props: SelectHostProps) -> Element {
    let mut widget = props.widget;
    let container_id = props.container_id.clone();
    let config = props.config.clone();
    let on_select = props.on_select;

    use_effect(move || {
        if widget.peek().is_some() {
            return;
        }
        match CustomSelect::create(&container_id, &config) {
            Ok(select) => {
                if let Some(handler) = on_select {
                    select.on_change(move |selection| handler.call(selection.clone()));
                }
                widget.set(Some(select));
            }
            Err(err) => error!("failed to mount select widget in '{container_id}': {err}"),
        }
    });

    use_drop(move || {
        if let Some(select) = widget.take() {
            select.destroy();
        }
    });

    rsx! {
        div { id: "{props.container_id}" }
    }
}
