//! Widget assembly
//!
//! Mounts one widget over a container: locates the structure, creates and
//! inserts the indicator line, applies the theme, and binds the state
//! machine. Instances share no state; independent containers can be mounted
//! and driven independently.

use std::time::Instant;

use tabline_dom::Element;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::indicator::{self, format_percent, Indicator};
use crate::locate::locate;
use crate::machine::TabMachine;
use crate::theme;
use crate::token;
use crate::Result;

#[derive(Debug)]
pub struct TabWidget {
    root: Element,
    machine: TabMachine,
}

impl TabWidget {
    /// Mount a widget over the container named by `config.id`.
    ///
    /// Fails fast on any structural problem; a mounted widget never
    /// re-validates its structure.
    pub fn mount(document: &Element, config: WidgetConfig) -> Result<TabWidget> {
        let located = locate(document, &config.id)?;
        let count = located.tabs.len();

        // The line's width is fixed once, to one tab's rendered width.
        let line = Element::new("div").with_class(token::LINE);
        let width = located.tabs[0]
            .style(indicator::WIDTH)
            .unwrap_or_else(|| format_percent(100.0 / count as f64));
        line.set_style(indicator::WIDTH, &width);

        // The header strip may sit at any depth under the root; the line
        // becomes its next sibling either way.
        let inserted = located
            .root
            .parent_of(&located.header)
            .map(|parent| parent.insert_after(&located.header, line.clone()))
            .unwrap_or(false);
        if !inserted {
            return Err(WidgetError::MissingPart {
                container: config.id.clone(),
                part: token::TABS_HEADER,
            });
        }

        if let Some(theme) = &config.theme {
            theme::apply(theme, &located, &line);
        }

        let indicator = Indicator::new(line, count);
        let machine = TabMachine::new(located.tabs, located.panels, config.theme, indicator);

        tracing::info!(container = %config.id, tabs = count, "widget mounted");

        Ok(Self {
            root: located.root,
            machine,
        })
    }

    /// Handle a user interaction on the tab at `index`.
    pub fn click(&mut self, index: usize) -> Result<()> {
        self.machine.activate(index, Instant::now())
    }

    /// Programmatic activation with an explicit clock.
    pub fn activate(&mut self, index: usize, now: Instant) -> Result<()> {
        self.machine.activate(index, now)
    }

    /// Fire panel entry cleanups due by now.
    pub fn tick(&mut self) {
        self.machine.tick(Instant::now());
    }

    /// Fire panel entry cleanups due by `now`.
    pub fn tick_at(&mut self, now: Instant) {
        self.machine.tick(now);
    }

    pub fn active_index(&self) -> Option<usize> {
        self.machine.active_index()
    }

    pub fn tab_count(&self) -> usize {
        self.machine.tab_count()
    }

    /// The indicator line's current offset, if a transition has occurred.
    pub fn indicator_offset(&self) -> Option<String> {
        self.machine.indicator().offset()
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}
