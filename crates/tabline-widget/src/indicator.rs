//! Indicator positioner
//!
//! The indicator line's offset is derived state: a pure function of the
//! active index and the fixed tab count, applied as a percentage margin on
//! the line element. Repositioning is idempotent.

use tabline_dom::Element;

pub(crate) const MARGIN_LEFT: &str = "margin-left";
pub(crate) const WIDTH: &str = "width";

/// Offset of the line, as a percentage of the header strip's width.
pub fn offset_percent(index: usize, count: usize) -> f64 {
    (index as f64 * 100.0) / count as f64
}

pub(crate) fn format_percent(value: f64) -> String {
    format!("{value}%")
}

/// Observer keeping the line element in sync with the active index.
#[derive(Debug)]
pub struct Indicator {
    line: Element,
    count: usize,
}

impl Indicator {
    pub fn new(line: Element, count: usize) -> Self {
        Self { line, count }
    }

    /// Recompute the line's offset for the given active index.
    pub fn reposition(&self, index: usize) {
        let percent = offset_percent(index, self.count);
        self.line.set_style(MARGIN_LEFT, &format_percent(percent));
        tracing::trace!(index, percent, "indicator repositioned");
    }

    /// The line's current rendered offset, if one has been applied.
    pub fn offset(&self) -> Option<String> {
        self.line.style(MARGIN_LEFT)
    }

    pub fn line(&self) -> &Element {
        &self.line
    }
}
