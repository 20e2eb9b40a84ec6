//! Ice cream flavour picker built on the custom select widget.
//!
//! Demonstrates the full widget surface:
//! 1. `SelectHost` renders the container div and mounts the widget on mount.
//! 2. The `on_select` callback logs each selection.
//! 3. The set-value button drives `set_value("vanilla")` and reads the
//!    selection back with `value()`.

use dioxus::prelude::*;
use log::{info, warn};

use select_core::config::{ClassConfig, SelectConfig};
use select_core::options::SelectOption;
use select_ui::components::SelectHost;
use select_ui::widget::CustomSelect;

/// DOM id for the widget container div.
const SELECT_CONTAINER_ID: &str = "custom-select";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("flavour-root"))
        .launch(App);
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

#[component]
fn App() -> Element {
    let widget: Signal<Option<CustomSelect>> = use_signal(|| None);

    let on_select = move |selection: SelectOption| {
        info!("From onchange callback: Label: {}", selection.label);
    };

    let on_set_value = move |_| {
        if let Some(select) = widget.read().as_ref() {
            match select.set_value("vanilla") {
                Ok(selection) => info!("set_value picked '{}'", selection.label),
                Err(err) => warn!("set_value failed: {err}"),
            }
            if let Some(current) = select.value() {
                info!("current selection: {} ({})", current.value, current.label);
            }
        }
    };

    rsx! {
        div {
            style: "max-width: 420px; margin: 40px auto; font-family: sans-serif;",
            h3 { "Custom select" }
            SelectHost {
                container_id: "{SELECT_CONTAINER_ID}",
                config: flavour_config(),
                widget,
                on_select,
            }
            button {
                id: "set-value",
                style: "margin-top: 16px;",
                onclick: on_set_value,
                "Set value to vanilla"
            }
        }
    }
}
