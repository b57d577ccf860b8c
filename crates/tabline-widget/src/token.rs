//! Structural classes and style tokens
//!
//! The classes below are the contract between the widget and its markup and
//! styling layers: selectors locate the structure, tokens drive presentation.

/// Header strip holding the tab row.
pub const TABS_HEADER: &str = "tabs-header";
/// One selectable header item.
pub const TAB: &str = "tab";
/// Container holding the content panels.
pub const TABS_BODY: &str = "tabs-body";
/// One content panel.
pub const TAB_CONTENT: &str = "tab-content";
/// The indicator line tracking the active tab.
pub const LINE: &str = "line";

/// Marks the single active tab and the single active panel.
pub const ACTIVE: &str = "is-active";
/// Transient marker on a panel during its entry window.
pub const ENTERING: &str = "enter";
/// Entry direction: the panel slides in from the left.
pub const FROM_LEFT: &str = "from-left";
/// Entry direction: the panel slides in from the right.
pub const FROM_RIGHT: &str = "from-right";

/// Attribute on a tab referencing its panel as `#<panel-id>`.
pub const TARGET_ATTR: &str = "data-target";
