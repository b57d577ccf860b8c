//! Element locator
//!
//! Resolves the structural parts of one widget under a container id and
//! validates them before anything is mounted. All configuration problems
//! surface here, at construction time; the state machine never re-checks
//! the structure.

use tabline_dom::Element;

use crate::error::WidgetError;
use crate::token;
use crate::Result;

/// The resolved structure of one widget container.
#[derive(Debug)]
pub struct Located {
    /// Container root.
    pub root: Element,
    /// Header strip holding the tab row.
    pub header: Element,
    /// Header items, in document order.
    pub tabs: Vec<Element>,
    /// Panel container.
    pub body: Element,
    /// Content panels, in document order, index-aligned with `tabs`.
    pub panels: Vec<Element>,
}

/// Resolve and validate the widget structure under `id`.
pub fn locate(document: &Element, id: &str) -> Result<Located> {
    let root = document
        .element_by_id(id)
        .ok_or_else(|| WidgetError::ContainerNotFound(id.to_string()))?;

    let header = root
        .select_class(token::TABS_HEADER)
        .into_iter()
        .next()
        .ok_or_else(|| WidgetError::MissingPart {
            container: id.to_string(),
            part: token::TABS_HEADER,
        })?;

    let tabs = root.select_class(token::TAB);
    if tabs.is_empty() {
        return Err(WidgetError::EmptyTabSet(id.to_string()));
    }

    let body = root
        .select_class(token::TABS_BODY)
        .into_iter()
        .next()
        .ok_or_else(|| WidgetError::MissingPart {
            container: id.to_string(),
            part: token::TABS_BODY,
        })?;

    let panels = root.select_class(token::TAB_CONTENT);
    if tabs.len() != panels.len() {
        return Err(WidgetError::CountMismatch {
            tabs: tabs.len(),
            panels: panels.len(),
        });
    }

    // A tab's target reference, when present, must point at its own panel.
    for (index, tab) in tabs.iter().enumerate() {
        if let Some(target) = tab.attr(token::TARGET_ATTR) {
            let target_id = target.strip_prefix('#').unwrap_or(&target);
            if panels[index].id().as_deref() != Some(target_id) {
                return Err(WidgetError::TargetMismatch { index, target });
            }
        }
    }

    tracing::debug!(container = %id, tabs = tabs.len(), "located widget structure");

    Ok(Located {
        root,
        header,
        tabs,
        body,
        panels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::tab_group;

    #[test]
    fn test_locate_resolves_in_order() {
        let document = Element::new("body");
        document.append(tab_group("tabs-1", 3, None));

        let located = locate(&document, "tabs-1").unwrap();
        assert_eq!(located.tabs.len(), 3);
        assert_eq!(located.panels.len(), 3);
        assert_eq!(
            located.panels[2].id(),
            Some("tabs-1-panel-2".to_string())
        );
    }

    #[test]
    fn test_missing_container() {
        let document = Element::new("body");

        let err = locate(&document, "tabs-1").unwrap_err();
        assert!(matches!(err, WidgetError::ContainerNotFound(_)));
    }

    #[test]
    fn test_zero_tabs_rejected() {
        let document = Element::new("body");
        let root = Element::new("div").with_id("tabs-1");
        root.append(Element::new("ul").with_class(token::TABS_HEADER));
        root.append(Element::new("div").with_class(token::TABS_BODY));
        document.append(root);

        let err = locate(&document, "tabs-1").unwrap_err();
        assert!(matches!(err, WidgetError::EmptyTabSet(_)));
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let document = Element::new("body");
        let root = tab_group("tabs-1", 3, None);
        // Unmark the last panel so only two remain selectable
        let last_panel = root.select_class(token::TAB_CONTENT).pop().unwrap();
        last_panel.remove_class(token::TAB_CONTENT);
        document.append(root);

        let err = locate(&document, "tabs-1").unwrap_err();
        assert!(matches!(
            err,
            WidgetError::CountMismatch { tabs: 3, panels: 2 }
        ));
    }

    #[test]
    fn test_target_mismatch_rejected() {
        let document = Element::new("body");
        let root = tab_group("tabs-1", 2, None);
        let tabs = root.select_class(token::TAB);
        tabs[0].set_attr(token::TARGET_ATTR, "#tabs-1-panel-1");
        document.append(root);

        let err = locate(&document, "tabs-1").unwrap_err();
        assert!(matches!(err, WidgetError::TargetMismatch { index: 0, .. }));
    }
}
