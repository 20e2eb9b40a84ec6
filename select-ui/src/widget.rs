//! The imperative select widget, rendered directly onto the DOM.
//!
//! `CustomSelect::create` builds a title element and an option list inside an
//! existing container, wires up the click handlers, and registers with the
//! shared outside-click dispatcher. All state transitions go through the
//! `SelectModel` first; the DOM is updated from the transition outcome, so
//! the rendered open/closed state can never drift from the recorded one.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Node};

use select_core::config::SelectConfig;
use select_core::error::{Result, SelectError};
use select_core::model::SelectModel;
use select_core::options::{OptionSet, SelectOption};

use crate::registry::{self, OutsideClick};
use crate::{classes, js_error};

/// Callback invoked synchronously after each selection.
pub type ChangeCallback = Box<dyn FnMut(&SelectOption)>;

type ClickClosure = Closure<dyn FnMut(Event)>;

pub(crate) struct Inner {
    model: SelectModel,
    document: Document,
    wrapper: Element,
    title: Element,
    list: Element,
    /// Rendered list items keyed by option value.
    items: HashMap<String, Element>,
    callback: Option<ChangeCallback>,
    /// Keeps the click handlers alive for the widget's lifetime.
    listeners: Vec<(EventTarget, ClickClosure)>,
    registry_id: Option<u64>,
}

impl Inner {
    /// Opens or closes the list, keeping the model and the `d-none` marker
    /// in lockstep.
    fn apply_visibility(&mut self, should_open: bool) {
        self.model.toggle(should_open);
        let class_list = self.list.class_list();
        let result = if should_open {
            class_list.remove_1(classes::HIDDEN)
        } else {
            class_list.add_1(classes::HIDDEN)
        };
        if let Err(err) = result {
            warn!("failed to update list visibility: {err:?}");
        }
    }

    /// Records the selection, moves the highlight marker, updates the title,
    /// and closes the list. Model first: an unknown value must leave the DOM
    /// untouched.
    fn apply_selection(&mut self, value: &str) -> Result<SelectOption> {
        let previous = self.model.selection().map(|sel| sel.value.clone());
        let chosen = self.model.select(value)?;

        if let Some(previous) = previous {
            if let Some(item) = self.items.get(&previous) {
                let _ = item.class_list().remove_1(classes::SELECTED_ITEM);
            }
        }
        if let Some(item) = self.items.get(&chosen.value) {
            let _ = item.class_list().add_1(classes::SELECTED_ITEM);
        }

        set_title_text(&self.document, &self.title, &chosen.label)?;
        self.apply_visibility(false);
        Ok(chosen)
    }
}

impl OutsideClick for RefCell<Inner> {
    fn contains(&self, target: &Node) -> bool {
        let inner = self.borrow();
        inner.title.contains(Some(target)) || inner.list.contains(Some(target))
    }

    fn close(&self) {
        self.borrow_mut().apply_visibility(false);
    }
}

/// A custom dropdown built from basic markup elements inside a caller-owned
/// container.
///
/// Handlers and the outside-click registry hold only weak references, so
/// dropping the widget (or calling [`CustomSelect::destroy`]) releases it.
pub struct CustomSelect {
    shared: Rc<RefCell<Inner>>,
}

impl std::fmt::Debug for CustomSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomSelect").finish_non_exhaustive()
    }
}

impl CustomSelect {
    /// Builds the widget inside the container with id `container_id`.
    ///
    /// Renders the title and the option list (placeholder first), attaches
    /// the click handlers, and joins the shared outside-click dispatch.
    /// Fails on a missing container, duplicate or empty option values, or a
    /// DOM error.
    pub fn create(container_id: &str, config: &SelectConfig) -> Result<Self> {
        let document = document()?;
        let wrapper = document
            .get_element_by_id(container_id)
            .ok_or_else(|| SelectError::MissingContainer(container_id.to_string()))?;

        let options = OptionSet::new(&config.placeholder, &config.options)?;
        let model = SelectModel::new(options);

        wrapper
            .class_list()
            .add_1(classes::WRAPPER)
            .map_err(js_error)?;

        // Title element with the placeholder text and the arrow icon.
        let title = document.create_element("div").map_err(js_error)?;
        title.class_list().add_1(classes::TITLE).map_err(js_error)?;
        if let Some(extra) = &config.classes.menu_title_class {
            title.class_list().add_1(extra).map_err(js_error)?;
        }
        set_title_text(&document, &title, &model.options().placeholder().label)?;

        // Option list, hidden until the title is clicked.
        let list = document.create_element("ul").map_err(js_error)?;
        list.class_list()
            .add_2(classes::LIST, classes::HIDDEN)
            .map_err(js_error)?;
        if let Some(extra) = &config.classes.menu_list_class {
            list.class_list().add_1(extra).map_err(js_error)?;
        }

        let mut items: HashMap<String, Element> = HashMap::new();
        let mut rendered: Vec<(String, Element)> = Vec::new();
        for option in model.options().iter() {
            let item = document.create_element("li").map_err(js_error)?;
            // The option value doubles as element id and attribute, so
            // styling layers can target individual options.
            item.set_id(&option.value);
            item.set_attribute("value", &option.value).map_err(js_error)?;
            item.class_list()
                .add_1(classes::LIST_ITEM)
                .map_err(js_error)?;
            if let Some(extra) = &config.classes.menu_list_item_class {
                item.class_list().add_1(extra).map_err(js_error)?;
            }
            item.set_text_content(Some(&option.label));
            list.append_child(&item).map_err(js_error)?;
            items.insert(option.value.clone(), item.clone());
            rendered.push((option.value.clone(), item));
        }

        wrapper.append_child(&title).map_err(js_error)?;
        wrapper.append_child(&list).map_err(js_error)?;

        let option_count = model.options().len();
        let shared = Rc::new(RefCell::new(Inner {
            model,
            document,
            wrapper,
            title,
            list,
            items,
            callback: None,
            listeners: Vec::new(),
            registry_id: None,
        }));

        // Title click toggles the list.
        {
            let weak = Rc::downgrade(&shared);
            let closure: ClickClosure = Closure::new(move |_event: Event| {
                if let Some(shared) = weak.upgrade() {
                    let mut inner = shared.borrow_mut();
                    let open = !inner.model.visibility().is_open();
                    inner.apply_visibility(open);
                }
            });
            let mut inner = shared.borrow_mut();
            inner
                .title
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .map_err(js_error)?;
            let target = EventTarget::from(inner.title.clone());
            inner.listeners.push((target, closure));
        }

        // One click handler per rendered item.
        for (value, item) in rendered {
            let weak = Rc::downgrade(&shared);
            let closure: ClickClosure = Closure::new(move |_event: Event| {
                if let Some(shared) = weak.upgrade() {
                    if let Err(err) = select_value(&shared, &value) {
                        warn!("option click ignored: {err}");
                    }
                }
            });
            item.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .map_err(js_error)?;
            shared
                .borrow_mut()
                .listeners
                .push((EventTarget::from(item), closure));
        }

        let weak = Rc::downgrade(&shared);
        let weak: Weak<dyn OutsideClick> = weak;
        let id = registry::register(weak)?;
        shared.borrow_mut().registry_id = Some(id);

        debug!("mounted select widget in '{container_id}' with {option_count} items");
        Ok(Self { shared })
    }

    /// Registers the change callback. A later registration replaces the
    /// earlier one; there is no fan-out.
    pub fn on_change(&self, callback: impl FnMut(&SelectOption) + 'static) {
        self.shared.borrow_mut().callback = Some(Box::new(callback));
    }

    /// Current selection, `None` before any option has been chosen.
    pub fn value(&self) -> Option<SelectOption> {
        self.shared.borrow().model.selection().cloned()
    }

    /// Selects the option with `value` exactly as if its rendered item had
    /// been clicked: highlight, title update, close, callback. An unknown
    /// value is a clean error and leaves the prior selection untouched.
    pub fn set_value(&self, value: &str) -> Result<SelectOption> {
        select_value(&self.shared, value)
    }

    /// Opens or closes the option list.
    pub fn toggle(&self, should_open: bool) {
        self.shared.borrow_mut().apply_visibility(should_open);
    }

    pub fn is_open(&self) -> bool {
        self.shared.borrow().model.visibility().is_open()
    }

    /// Number of rendered list items, placeholder included.
    pub fn item_count(&self) -> usize {
        self.shared.borrow().items.len()
    }

    /// Tears the widget down: removes its click handlers, leaves the shared
    /// outside-click dispatch, and removes the rendered elements from the
    /// container.
    pub fn destroy(self) {
        let mut inner = self.shared.borrow_mut();

        if let Some(id) = inner.registry_id.take() {
            registry::unregister(id);
        }
        for (target, closure) in inner.listeners.drain(..) {
            let _ = target
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
        let _ = inner.wrapper.remove_child(&inner.title);
        let _ = inner.wrapper.remove_child(&inner.list);
        let _ = inner.wrapper.class_list().remove_1(classes::WRAPPER);
        inner.items.clear();
        inner.callback = None;
    }
}

/// Runs the full selection sequence, invoking the registered callback with
/// the widget borrow released so the callback may call back into the widget.
fn select_value(shared: &Rc<RefCell<Inner>>, value: &str) -> Result<SelectOption> {
    let (chosen, mut taken) = {
        let mut inner = shared.borrow_mut();
        let chosen = inner.apply_selection(value)?;
        (chosen, inner.callback.take())
    };

    if let Some(callback) = taken.as_mut() {
        callback(&chosen);
    }

    // The callback may have registered a replacement; keep the newest one.
    if let Some(callback) = taken {
        let mut inner = shared.borrow_mut();
        if inner.callback.is_none() {
            inner.callback = Some(callback);
        }
    }

    Ok(chosen)
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SelectError::Dom("no document in this context".to_string()))
}

/// Sets the title text and re-appends the dropdown arrow icon.
fn set_title_text(document: &Document, title: &Element, text: &str) -> Result<()> {
    title.set_text_content(Some(text));
    let icon = document.create_element("i").map_err(js_error)?;
    icon.class_list()
        .add_2(classes::ICON_FONT, classes::ICON)
        .map_err(js_error)?;
    icon.set_text_content(Some(classes::ICON_GLYPH));
    title.append_child(&icon).map_err(js_error)?;
    Ok(())
}
