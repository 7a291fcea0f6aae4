//! Drag session captured at press-start

use serde::Serialize;

use crate::corner::CornerKind;
use crate::math::{Size, Vec2};

/// Transient record of an in-progress corner drag
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSession {
    /// Corner being dragged
    pub corner: CornerKind,
    /// Pointer position at press (client coords)
    pub start_pointer: Vec2,
    /// Element size at press
    pub start_size: Size,
}

impl DragSession {
    /// Create a session from the press metrics
    pub fn new(corner: CornerKind, start_pointer: Vec2, start_size: Size) -> Self {
        Self {
            corner,
            start_pointer,
            start_size,
        }
    }

    /// Pointer displacement since the press
    #[inline]
    pub fn delta(&self, pointer: Vec2) -> Vec2 {
        pointer - self.start_pointer
    }

    /// Size the element should have with the pointer at `pointer`
    pub fn size_at(&self, pointer: Vec2) -> Size {
        super::calculate_resize(self.corner, self.start_size, self.delta(pointer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_delta() {
        let session = DragSession::new(
            CornerKind::TopLeft,
            Vec2::new(100.0, 100.0),
            Size::new(200.0, 150.0),
        );

        let delta = session.delta(Vec2::new(80.0, 130.0));
        assert!((delta.x - (-20.0)).abs() < 0.001);
        assert!((delta.y - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_session_size_at_start_is_unchanged() {
        let session = DragSession::new(
            CornerKind::BottomLeft,
            Vec2::new(40.0, 60.0),
            Size::new(320.0, 240.0),
        );

        assert_eq!(session.size_at(Vec2::new(40.0, 60.0)), Size::new(320.0, 240.0));
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let session = DragSession::new(
            CornerKind::TopRight,
            Vec2::new(1.0, 2.0),
            Size::new(3.0, 4.0),
        );

        let json: serde_json::Value = serde_json::to_value(session).unwrap();
        assert_eq!(json["corner"], "top-right");
        assert_eq!(json["startPointer"]["x"], 1.0);
        assert_eq!(json["startSize"]["height"], 4.0);
    }
}
