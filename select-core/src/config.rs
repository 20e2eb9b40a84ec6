//! Construction configuration for a select widget.
//!
//! The shape matches the JS-facing config bundle, so a config object can be
//! deserialized straight from JSON with its original camelCase keys.

use serde::{Deserialize, Serialize};

use crate::options::SelectOption;

/// Extra class names applied to the rendered elements at render time.
///
/// Each key is optional and has no effect when omitted. Applied once during
/// construction; not mutable afterward.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassConfig {
    /// Additional class for the title element
    pub menu_title_class: Option<String>,
    /// Additional class for the list container
    pub menu_list_class: Option<String>,
    /// Additional class for each list item
    pub menu_list_item_class: Option<String>,
}

/// Construction bundle for one select widget.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectConfig {
    /// Title text shown before any selection; empty falls back to "Select"
    #[serde(default)]
    pub placeholder: String,
    /// Value/label pairs in display order
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub classes: ClassConfig,
}

#[cfg(test)]
mod tests {
    use super::{ClassConfig, SelectConfig};

    #[test]
    fn test_deserialize_camel_case_config() {
        let config: SelectConfig = serde_json::from_str(
            r#"{
                "placeholder": "Select your favourite ice cream flavour",
                "options": [
                    { "value": "chocolate", "label": "Chocolate" },
                    { "value": "vanilla", "label": "Vanilla" }
                ],
                "classes": {
                    "menuTitleClass": "title-extra",
                    "menuListClass": "list-extra"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.options.len(), 2);
        assert_eq!(config.classes.menu_title_class.as_deref(), Some("title-extra"));
        assert_eq!(config.classes.menu_list_class.as_deref(), Some("list-extra"));
        assert!(config.classes.menu_list_item_class.is_none());
    }

    #[test]
    fn test_missing_keys_default() {
        let config: SelectConfig =
            serde_json::from_str(r#"{ "options": [] }"#).unwrap();

        assert!(config.placeholder.is_empty());
        assert_eq!(config.classes, ClassConfig::default());
    }
}
