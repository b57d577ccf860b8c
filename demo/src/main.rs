//! Tabline demo
//!
//! Builds a document with four tab groups, mounts an independent widget over
//! each (the fourth one themed), and walks through a few transitions.

use std::thread;

use tabline_dom::Element;
use tabline_widget::{token, TabWidget, Theme, WidgetConfig, ENTER_DURATION};

/// One tab group: `count` headers targeting `count` panels, first pair
/// pre-marked active.
fn tab_group(id: &str, count: usize) -> Element {
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
        if i == 0 {
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

fn main() -> anyhow::Result<()> {
    tabline_widget::init_logging();

    let document = Element::new("body");
    document.append(tab_group("tabs-1", 3));
    document.append(tab_group("tabs-2", 4));
    document.append(tab_group("tabs-3", 5));
    document.append(tab_group("tabs-4", 4));

    let mut a = TabWidget::mount(&document, WidgetConfig::new("tabs-1"))?;
    let mut b = TabWidget::mount(&document, WidgetConfig::new("tabs-2"))?;
    let mut c = TabWidget::mount(&document, WidgetConfig::new("tabs-3"))?;

    let theme: Theme = serde_json::from_str(
        r##"{
            "bgTabs": "#FFEB3B",
            "bgActiveTab": "#FBC02D",
            "bgBody": "#FAFAFA",
            "line": "#FF9B00"
        }"##,
    )?;
    let mut d = TabWidget::mount(&document, WidgetConfig::new("tabs-4").with_theme(theme))?;

    b.click(2)?;
    c.click(4)?;
    c.click(1)?;
    d.click(3)?;
    a.click(1)?;

    // Let the last entry windows elapse, then strip the transient tokens.
    thread::sleep(ENTER_DURATION);
    for widget in [&mut a, &mut b, &mut c, &mut d] {
        widget.tick();
    }

    for (name, widget) in [("tabs-1", &a), ("tabs-2", &b), ("tabs-3", &c), ("tabs-4", &d)] {
        tracing::info!(
            container = name,
            active = ?widget.active_index(),
            indicator = ?widget.indicator_offset(),
            "final state"
        );
    }

    Ok(())
}
