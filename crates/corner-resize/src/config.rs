//! Resizer configuration

use serde::{Deserialize, Serialize};

use crate::corner::CornerKind;
use crate::error::ResizeError;

/// CSS selectors locating the four corner handles
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HandleSelectors {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
}

impl Default for HandleSelectors {
    fn default() -> Self {
        let class = |corner: CornerKind| format!(".{}", corner.handle_class());
        Self {
            top_left: class(CornerKind::TopLeft),
            top_right: class(CornerKind::TopRight),
            bottom_left: class(CornerKind::BottomLeft),
            bottom_right: class(CornerKind::BottomRight),
        }
    }
}

impl HandleSelectors {
    /// Selector for a corner
    pub fn get(&self, corner: CornerKind) -> &str {
        match corner {
            CornerKind::TopLeft => &self.top_left,
            CornerKind::TopRight => &self.top_right,
            CornerKind::BottomLeft => &self.bottom_left,
            CornerKind::BottomRight => &self.bottom_right,
        }
    }
}

/// Configuration for the browser binding
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResizeConfig {
    /// Selector of the element being resized
    pub container: String,
    /// Selectors of the corner handles
    pub handles: HandleSelectors,
    /// Log session start/end to the console
    pub log_sessions: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            container: ".resize-container".to_string(),
            handles: HandleSelectors::default(),
            log_sessions: false,
        }
    }
}

impl ResizeConfig {
    /// Parse a JSON config; an empty string yields the defaults
    pub fn from_json(json: &str) -> Result<Self, ResizeError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| ResizeError::InvalidConfig(e.to_string()))
    }
}
