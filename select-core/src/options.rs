use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectError};

/// Title text used when no placeholder is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Select";

/// A single selectable value/label pair.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique identifier, also used as the rendered item's element id
    pub value: String,
    /// Display text
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// True for the synthesized zero-value placeholder entry.
    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// Ordered option list with the placeholder synthesized as the first entry.
///
/// Insertion order is display order. Construction rejects duplicate values
/// and the empty value, which is reserved for the placeholder.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OptionSet {
    options: Vec<SelectOption>,
}

impl OptionSet {
    /// Builds the set from the placeholder label and the user options.
    pub fn new(placeholder: &str, user_options: &[SelectOption]) -> Result<Self> {
        let placeholder = if placeholder.is_empty() {
            DEFAULT_PLACEHOLDER
        } else {
            placeholder
        };

        let mut options = Vec::with_capacity(user_options.len() + 1);
        options.push(SelectOption::new("", placeholder));

        let mut seen: HashSet<&str> = HashSet::with_capacity(user_options.len());
        for option in user_options {
            if option.value.is_empty() {
                return Err(SelectError::ReservedValue);
            }
            if !seen.insert(option.value.as_str()) {
                return Err(SelectError::DuplicateValue(option.value.clone()));
            }
            options.push(option.clone());
        }

        Ok(Self { options })
    }

    /// Looks up an option by value. Matches the placeholder for `""`.
    pub fn find(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// The synthesized placeholder entry.
    pub fn placeholder(&self) -> &SelectOption {
        &self.options[0]
    }

    /// All options in display order, placeholder first.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    /// Number of options, placeholder included.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
