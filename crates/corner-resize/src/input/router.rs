//! Resize router state machine

use super::DragSession;
use crate::error::ResizeError;

/// Idle/Dragging state machine owning the current drag session
#[derive(Debug, Default)]
pub struct ResizeRouter {
    /// Active session; `None` while idle
    session: Option<DragSession>,
}

impl ResizeRouter {
    /// Create an idle router
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Get the active session
    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Idle -> Dragging. A second press while dragging is rejected.
    pub fn begin(&mut self, session: DragSession) -> Result<(), ResizeError> {
        if self.session.is_some() {
            return Err(ResizeError::SessionActive);
        }
        self.session = Some(session);
        Ok(())
    }

    /// Dragging -> Idle, returning the finished session
    pub fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corner::CornerKind;
    use crate::math::{Size, Vec2};

    fn session(corner: CornerKind) -> DragSession {
        DragSession::new(corner, Vec2::new(10.0, 10.0), Size::new(100.0, 100.0))
    }

    #[test]
    fn test_router_begin_end() {
        let mut router = ResizeRouter::new();
        assert!(!router.is_dragging());

        router.begin(session(CornerKind::TopLeft)).unwrap();
        assert!(router.is_dragging());
        assert_eq!(router.session().map(|s| s.corner), Some(CornerKind::TopLeft));

        let finished = router.end();
        assert_eq!(finished.map(|s| s.corner), Some(CornerKind::TopLeft));
        assert!(!router.is_dragging());
    }

    #[test]
    fn test_router_rejects_overlapping_begin() {
        let mut router = ResizeRouter::new();
        router.begin(session(CornerKind::TopLeft)).unwrap();

        let second = router.begin(session(CornerKind::BottomRight));
        assert_eq!(second, Err(ResizeError::SessionActive));
        assert_eq!(router.session().map(|s| s.corner), Some(CornerKind::TopLeft));
    }

    #[test]
    fn test_router_end_when_idle() {
        let mut router = ResizeRouter::new();
        assert!(router.end().is_none());
        assert!(!router.is_dragging());
    }
}
