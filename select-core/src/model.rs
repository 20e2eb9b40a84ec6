//! Selection and visibility bookkeeping behind one select widget.
//!
//! The model owns the option set, the current selection, and the open/closed
//! flag. The DOM layer mirrors every transition, so the hidden/shown
//! rendering can never drift from the state recorded here.

use log::debug;

use crate::error::{Result, SelectError};
use crate::options::{OptionSet, SelectOption};
use crate::visibility::Visibility;

#[derive(Debug, Clone)]
pub struct SelectModel {
    options: OptionSet,
    selection: Option<SelectOption>,
    visibility: Visibility,
}

impl SelectModel {
    pub fn new(options: OptionSet) -> Self {
        Self {
            options,
            selection: None,
            visibility: Visibility::Closed,
        }
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Current selection, `None` before any option has been chosen.
    pub fn selection(&self) -> Option<&SelectOption> {
        self.selection.as_ref()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Sets the open/closed state.
    pub fn toggle(&mut self, should_open: bool) {
        self.visibility = Visibility::from_open(should_open);
    }

    /// Records the option with `value` as selected and closes the list.
    ///
    /// An unknown value leaves both selection and visibility untouched.
    pub fn select(&mut self, value: &str) -> Result<SelectOption> {
        let chosen = self
            .options
            .find(value)
            .cloned()
            .ok_or_else(|| SelectError::UnknownOption(value.to_string()))?;

        debug!("selected option '{}' ({})", chosen.value, chosen.label);
        self.selection = Some(chosen.clone());
        self.visibility = Visibility::Closed;
        Ok(chosen)
    }
}
