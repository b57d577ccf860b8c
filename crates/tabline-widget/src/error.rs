//! Widget error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Container not found: #{0}")]
    ContainerNotFound(String),

    #[error("Missing {part} under container #{container}")]
    MissingPart {
        container: String,
        part: &'static str,
    },

    #[error("Container #{0} has no tabs")]
    EmptyTabSet(String),

    #[error("Tab/panel count mismatch: {tabs} tabs, {panels} panels")]
    CountMismatch { tabs: usize, panels: usize },

    #[error("Tab {index} targets {target:?}, which is not the id of panel {index}")]
    TargetMismatch { index: usize, target: String },

    #[error("Tab index out of range: {index} (tab count {count})")]
    IndexOutOfRange { index: usize, count: usize },
}
