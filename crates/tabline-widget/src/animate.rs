//! Panel transition animator
//!
//! Reacts to panel activation and deactivation. Entry applies the transient
//! `enter` token plus a direction token and schedules their removal after
//! [`ENTER_DURATION`]; exit is instantaneous. Scheduled removals are never
//! cancelled: each one fires at its own due time and strips the tokens by
//! name, and stripping an absent token is a no-op, so a stale removal after
//! a re-activation is harmless.

use std::time::{Duration, Instant};

use tabline_dom::Element;

use crate::token;

/// Length of a panel's entry window.
pub const ENTER_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug)]
struct PendingCleanup {
    panel: Element,
    due: Instant,
}

/// Observer writing transient animation state onto panels.
#[derive(Debug, Default)]
pub struct PanelAnimator {
    pending: Vec<PendingCleanup>,
}

impl PanelAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `panel` active and entering, tagged with its slide direction.
    ///
    /// The direction depends only on relative index: moving to a strictly
    /// higher index enters from the left, anything else, the first
    /// activation included, enters from the right.
    pub fn enter(&mut self, panel: &Element, from: Option<usize>, to: usize, now: Instant) {
        panel.add_class(token::ACTIVE);
        panel.add_class(token::ENTERING);

        let direction = match from {
            Some(from) if to > from => token::FROM_LEFT,
            _ => token::FROM_RIGHT,
        };
        panel.add_class(direction);

        self.pending.push(PendingCleanup {
            panel: panel.clone(),
            due: now + ENTER_DURATION,
        });

        tracing::trace!(from = ?from, to, direction, "panel entering");
    }

    /// Remove the active marker from `panel`. Exit does not animate.
    pub fn leave(&self, panel: &Element) {
        panel.remove_class(token::ACTIVE);
        tracing::trace!("panel deactivated");
    }

    /// Fire every cleanup whose entry window has elapsed by `now`.
    pub fn tick(&mut self, now: Instant) {
        let pending = std::mem::take(&mut self.pending);
        for cleanup in pending {
            if cleanup.due <= now {
                strip_entry_tokens(&cleanup.panel);
            } else {
                self.pending.push(cleanup);
            }
        }
    }

    /// Number of cleanups not yet fired.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

fn strip_entry_tokens(panel: &Element) {
    panel.remove_class(token::ENTERING);
    panel.remove_class(token::FROM_LEFT);
    panel.remove_class(token::FROM_RIGHT);
}
