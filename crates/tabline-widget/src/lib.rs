//! Tabline Widget
//!
//! A tabbed interface bound to a [`tabline_dom`] document: a row of
//! selectable headers, one content panel per header, and an indicator line
//! tracking the active header. Exactly one header/panel pair is active at a
//! time; switching panels applies a short directional entry animation and the
//! indicator offset is recomputed from the active index alone.

mod animate;
mod config;
mod error;
mod indicator;
mod locate;
mod machine;
mod theme;
pub mod token;
mod widget;

#[cfg(test)]
pub(crate) mod testutil;

pub use animate::{PanelAnimator, ENTER_DURATION};
pub use config::WidgetConfig;
pub use error::WidgetError;
pub use indicator::{offset_percent, Indicator};
pub use locate::{locate, Located};
pub use machine::TabMachine;
pub use theme::Theme;
pub use widget::TabWidget;

pub type Result<T> = std::result::Result<T, WidgetError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
