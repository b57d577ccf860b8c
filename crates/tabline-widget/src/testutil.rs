//! Shared test fixtures

use tabline_dom::Element;

use crate::token;

/// Build one widget container: a header strip with `count` tabs, a body with
/// `count` panels, each tab targeting its index-aligned panel. `active`
/// pre-marks that tab/panel pair.
pub(crate) fn tab_group(id: &str, count: usize, active: Option<usize>) -> Element {
    let root = Element::new("div").with_id(id);
    let header = Element::new("ul").with_class(token::TABS_HEADER);
    let body = Element::new("div").with_class(token::TABS_BODY);

    for i in 0..count {
        let panel_id = format!("{id}-panel-{i}");
        let tab = Element::new("li")
            .with_class(token::TAB)
            .with_attr(token::TARGET_ATTR, &format!("#{panel_id}"));
        let panel = Element::new("div")
            .with_class(token::TAB_CONTENT)
            .with_id(&panel_id);
        if active == Some(i) {
            tab.add_class(token::ACTIVE);
            panel.add_class(token::ACTIVE);
        }
        header.append(tab);
        body.append(panel);
    }

    root.append(header);
    root.append(body);
    root
}
