//! Structural class names the widget renders and styling layers target.
//!
//! These are part of the external contract: the open/closed display keys off
//! [`HIDDEN`] on the list element, and the highlight marker is
//! [`SELECTED_ITEM`]. Extra classes from `ClassConfig` are appended to these,
//! never substituted for them.

/// Added to the container element the widget renders into.
pub const WRAPPER: &str = "select-wrapper";

/// The title element showing the placeholder or the selected label.
pub const TITLE: &str = "select-title";

/// The `<ul>` option list.
pub const LIST: &str = "select-list";

/// Each `<li>` option item.
pub const LIST_ITEM: &str = "select-list__item";

/// Present on the list while it is closed.
pub const HIDDEN: &str = "d-none";

/// Highlight marker carried by at most one item at a time.
pub const SELECTED_ITEM: &str = "selected-item";

/// The dropdown arrow icon inside the title.
pub const ICON: &str = "select-icon";

/// Icon font class expected by the styling layer.
pub const ICON_FONT: &str = "material-icons";

/// Icon glyph name rendered as the arrow.
pub const ICON_GLYPH: &str = "arrow_drop_down";
