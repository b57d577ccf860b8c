//! Color theme
//!
//! Four color slots, applied once at mount. Per-transition repainting of the
//! active/base tab colors is done by the state machine.

use serde::{Deserialize, Serialize};

use tabline_dom::Element;

use crate::locate::Located;
use crate::token;

pub(crate) const BACKGROUND_COLOR: &str = "background-color";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Base background for every tab.
    pub bg_tabs: String,
    /// Background for the active tab.
    pub bg_active_tab: String,
    /// Background for the panel body.
    pub bg_body: String,
    /// Color of the indicator line.
    pub line: String,
}

/// Paint the static theme colors onto the located structure.
pub(crate) fn apply(theme: &Theme, located: &Located, line: &Element) {
    for tab in &located.tabs {
        tab.set_style(BACKGROUND_COLOR, &theme.bg_tabs);
    }
    located.body.set_style(BACKGROUND_COLOR, &theme.bg_body);

    for tab in &located.tabs {
        if tab.has_class(token::ACTIVE) {
            tab.set_style(BACKGROUND_COLOR, &theme.bg_active_tab);
        }
    }

    line.set_style(BACKGROUND_COLOR, &theme.line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate;
    use crate::testutil::tab_group;

    fn sample_theme() -> Theme {
        Theme {
            bg_tabs: "#FFEB3B".to_string(),
            bg_active_tab: "#FBC02D".to_string(),
            bg_body: "#FAFAFA".to_string(),
            line: "#FF9B00".to_string(),
        }
    }

    #[test]
    fn test_apply_paints_all_slots() {
        let document = Element::new("body");
        document.append(tab_group("tabs-1", 3, Some(1)));
        let located = locate(&document, "tabs-1").unwrap();
        let line = Element::new("div").with_class(token::LINE);

        apply(&sample_theme(), &located, &line);

        assert_eq!(
            located.tabs[0].style(BACKGROUND_COLOR),
            Some("#FFEB3B".to_string())
        );
        assert_eq!(
            located.tabs[1].style(BACKGROUND_COLOR),
            Some("#FBC02D".to_string()),
            "pre-marked active tab gets the active color"
        );
        assert_eq!(
            located.body.style(BACKGROUND_COLOR),
            Some("#FAFAFA".to_string())
        );
        assert_eq!(line.style(BACKGROUND_COLOR), Some("#FF9B00".to_string()));
    }

    #[test]
    fn test_camel_case_field_names() {
        let theme: Theme = serde_json::from_str(
            r##"{
                "bgTabs": "#FFEB3B",
                "bgActiveTab": "#FBC02D",
                "bgBody": "#FAFAFA",
                "line": "#FF9B00"
            }"##,
        )
        .unwrap();

        assert_eq!(theme.bg_active_tab, "#FBC02D");
    }
}
