//! Reusable Dioxus RSX components for embedding the select widget.

mod select_host;

pub use select_host::SelectHost;
