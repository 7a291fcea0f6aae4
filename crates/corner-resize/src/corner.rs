//! Corner identity for resize handles

use serde::{Deserialize, Serialize};

/// Which corner of the element a drag resizes from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerKind {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

impl CornerKind {
    /// All four corners in registration order
    pub const ALL: [CornerKind; 4] = [
        CornerKind::TopLeft,
        CornerKind::TopRight,
        CornerKind::BottomLeft,
        CornerKind::BottomRight,
    ];

    /// Default CSS class of the handle element for this corner
    pub fn handle_class(self) -> &'static str {
        match self {
            CornerKind::TopLeft => "resize-handle-top-left",
            CornerKind::TopRight => "resize-handle-top-right",
            CornerKind::BottomLeft => "resize-handle-bottom-left",
            CornerKind::BottomRight => "resize-handle-bottom-right",
        }
    }

    /// Parse a corner name ("top-left", "tl", "nw", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top-left" | "tl" | "nw" => Some(CornerKind::TopLeft),
            "top-right" | "tr" | "ne" => Some(CornerKind::TopRight),
            "bottom-left" | "bl" | "sw" => Some(CornerKind::BottomLeft),
            "bottom-right" | "br" | "se" => Some(CornerKind::BottomRight),
            _ => None,
        }
    }
}
