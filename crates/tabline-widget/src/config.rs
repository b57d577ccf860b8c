//! Widget configuration

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Id of the container holding the widget's markup.
    pub id: String,
    /// Optional color theme. Absent means only style tokens are toggled,
    /// no inline colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl WidgetConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            theme: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}
