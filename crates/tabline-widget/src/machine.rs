//! Tab state machine
//!
//! Owns the active index for one tab set and is the only writer of it.
//! A transition deactivates the old tab/panel pair strictly before
//! activating the new one, so no observer ever sees two active pairs.
//! The animator and the indicator are held as passive observers; neither
//! holds a reference back.

use std::time::Instant;

use tabline_dom::Element;

use crate::animate::PanelAnimator;
use crate::error::WidgetError;
use crate::indicator::Indicator;
use crate::theme::{self, Theme};
use crate::token;
use crate::Result;

#[derive(Debug)]
pub struct TabMachine {
    tabs: Vec<Element>,
    panels: Vec<Element>,
    theme: Option<Theme>,
    animator: PanelAnimator,
    indicator: Indicator,
    /// The single active index, or None before the first activation when no
    /// tab was pre-marked active in the markup.
    active: Option<usize>,
}

impl TabMachine {
    /// Bind a machine over index-aligned tabs and panels.
    ///
    /// The initial active index is the position of a tab pre-marked with the
    /// active token, if any.
    pub fn new(
        tabs: Vec<Element>,
        panels: Vec<Element>,
        theme: Option<Theme>,
        indicator: Indicator,
    ) -> Self {
        let active = tabs.iter().position(|tab| tab.has_class(token::ACTIVE));

        Self {
            tabs,
            panels,
            theme,
            animator: PanelAnimator::new(),
            indicator,
            active,
        }
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Request activation of the tab at `index`.
    ///
    /// Re-selecting the active index is a no-op: nothing is re-rendered and
    /// no animation is re-triggered. Out-of-range indices fail and leave the
    /// active index unchanged.
    pub fn activate(&mut self, index: usize, now: Instant) -> Result<()> {
        let count = self.tabs.len();
        if index >= count {
            return Err(WidgetError::IndexOutOfRange { index, count });
        }

        if self.active == Some(index) {
            tracing::trace!(index, "tab already active, ignoring");
            return Ok(());
        }

        let previous = self.active;
        if let Some(prev) = previous {
            self.deactivate_tab(prev);
            self.animator.leave(&self.panels[prev]);
        }

        self.activate_tab(index);
        self.animator.enter(&self.panels[index], previous, index, now);

        self.active = Some(index);
        self.indicator.reposition(index);

        tracing::debug!(from = ?previous, to = index, "tab transition");

        Ok(())
    }

    /// Fire any panel entry cleanups due by `now`.
    pub fn tick(&mut self, now: Instant) {
        self.animator.tick(now);
    }

    pub(crate) fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    #[cfg(test)]
    pub(crate) fn pending_cleanups(&self) -> usize {
        self.animator.pending()
    }

    fn activate_tab(&self, index: usize) {
        let tab = &self.tabs[index];
        tab.add_class(token::ACTIVE);
        if let Some(t) = &self.theme {
            tab.set_style(theme::BACKGROUND_COLOR, &t.bg_active_tab);
        }
        tracing::trace!(index, "tab activated");
    }

    fn deactivate_tab(&self, index: usize) {
        let tab = &self.tabs[index];
        tab.remove_class(token::ACTIVE);
        if let Some(t) = &self.theme {
            tab.set_style(theme::BACKGROUND_COLOR, &t.bg_tabs);
        }
        tracing::trace!(index, "tab deactivated");
    }
}
