//! Page-wide outside-click dispatch shared by every live widget.
//!
//! One `click` listener on `window` serves all widget instances instead of
//! one listener per instance. Each registered widget exposes a
//! contains-this-target predicate; a click closes every widget that does not
//! contain the click target, so the click that opens a menu never re-closes
//! it in the same dispatch turn and no `stopPropagation` ordering is needed.
//!
//! The listener is installed when the first widget registers and removed
//! when the last one unregisters, so no window listener outlives the
//! widgets it serves.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Node};

use select_core::error::{Result, SelectError};

use crate::js_error;

/// What the dispatcher needs from a widget.
pub(crate) trait OutsideClick {
    /// Whether the click target sits inside this widget's rendered elements.
    fn contains(&self, target: &Node) -> bool;
    /// Force the widget's list closed.
    fn close(&self);
}

struct Registry {
    entries: Vec<(u64, Weak<dyn OutsideClick>)>,
    listener: Option<Closure<dyn FnMut(Event)>>,
    next_id: u64,
}

impl Registry {
    const fn new() -> Self {
        Self {
            entries: Vec::new(),
            listener: None,
            next_id: 0,
        }
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::new());
}

/// Adds a widget to the dispatch list, installing the shared window listener
/// if this is the first live widget. Returns the id to unregister with.
pub(crate) fn register(widget: Weak<dyn OutsideClick>) -> Result<u64> {
    REGISTRY.with(|cell| {
        let mut registry = cell.borrow_mut();

        if registry.listener.is_none() {
            let window = web_sys::window()
                .ok_or_else(|| SelectError::Dom("no window in this context".to_string()))?;
            let closure = Closure::<dyn FnMut(Event)>::new(dispatch);
            window
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .map_err(js_error)?;
            registry.listener = Some(closure);
            debug!("installed shared outside-click listener");
        }

        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, widget));
        Ok(id)
    })
}

/// Drops a widget from the dispatch list, removing the shared listener once
/// no live widgets remain.
pub(crate) fn unregister(id: u64) {
    REGISTRY.with(|cell| {
        let mut registry = cell.borrow_mut();
        registry
            .entries
            .retain(|(entry_id, widget)| *entry_id != id && widget.upgrade().is_some());

        if registry.entries.is_empty() {
            if let Some(closure) = registry.listener.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "click",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                debug!("removed shared outside-click listener");
            }
        }
    });
}

/// Closes every live widget that does not contain the click target.
fn dispatch(event: Event) {
    let Some(target) = event.target() else {
        return;
    };
    let Some(node) = target.dyn_ref::<Node>() else {
        return;
    };

    // Collect strong handles first so widget borrows never overlap the
    // registry borrow.
    let live: Vec<Rc<dyn OutsideClick>> = REGISTRY.with(|cell| {
        cell.borrow()
            .entries
            .iter()
            .filter_map(|(_, widget)| widget.upgrade())
            .collect()
    });

    for widget in live {
        if !widget.contains(node) {
            widget.close();
        }
    }
}
