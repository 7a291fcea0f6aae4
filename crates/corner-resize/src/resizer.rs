//! Corner drag resizer
//!
//! Ties the handle registry, the drag state machine and the element/surface
//! collaborators together. The three pointer entry points never fail; any
//! error is reported as `InputResult::Ignored` and leaves the element alone.

use crate::corner::CornerKind;
use crate::error::ResizeError;
use crate::handle::{HandleId, HandleRegistry};
use crate::input::{DragSession, InputResult, ResizeRouter};
use crate::math::{Size, Vec2};
use crate::surface::PointerSurface;
use crate::target::ResizeTarget;

/// Resizes one element from four corner handles
#[derive(Default)]
pub struct CornerResizer {
    /// Handle identity -> corner
    pub handles: HandleRegistry,
    /// Drag state machine
    router: ResizeRouter,
}

impl CornerResizer {
    /// Create a resizer with no handles
    pub fn new() -> Self {
        Self {
            handles: HandleRegistry::new(),
            router: ResizeRouter::new(),
        }
    }

    /// Create a resizer with one handle per corner, in `CornerKind::ALL` order
    pub fn with_corner_handles() -> (Self, [HandleId; 4]) {
        let (handles, ids) = HandleRegistry::with_all_corners();
        let resizer = Self {
            handles,
            router: ResizeRouter::new(),
        };
        (resizer, ids)
    }

    /// Register an extra handle for a corner
    pub fn register_handle(&mut self, corner: CornerKind) -> HandleId {
        self.handles.register(corner)
    }

    /// Active drag session, if any
    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.router.session()
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.router.is_dragging()
    }

    /// Handle a press on a handle: snapshot metrics and start listening
    pub fn press_start<T, S>(
        &mut self,
        handle: HandleId,
        x: f32,
        y: f32,
        target: &T,
        surface: &mut S,
    ) -> InputResult
    where
        T: ResizeTarget + ?Sized,
        S: PointerSurface + ?Sized,
    {
        match self.try_press_start(handle, Vec2::new(x, y), target) {
            Ok(()) => {
                surface.add_drag_listeners();
                InputResult::Handled
            }
            Err(_) => InputResult::Ignored,
        }
    }

    /// Same as `press_start` without touching a surface, reporting why a
    /// press was rejected
    pub fn try_press_start<T>(
        &mut self,
        handle: HandleId,
        pointer: Vec2,
        target: &T,
    ) -> Result<(), ResizeError>
    where
        T: ResizeTarget + ?Sized,
    {
        // Rejected before the computed style is read; in a browser that read
        // forces a layout pass.
        if self.router.is_dragging() {
            return Err(ResizeError::SessionActive);
        }
        let corner = self.handles.corner(handle)?;
        let start_size = target.computed_size();
        self.router.begin(DragSession::new(corner, pointer, start_size))
    }

    /// Handle pointer movement: recompute and apply the size
    pub fn press_move<T>(&mut self, x: f32, y: f32, target: &mut T) -> InputResult
    where
        T: ResizeTarget + ?Sized,
    {
        match self.size_at(Vec2::new(x, y)) {
            Some(size) => {
                target.apply_size(size);
                InputResult::Handled
            }
            None => InputResult::Ignored,
        }
    }

    /// Size for a pointer position in the active session
    pub fn size_at(&self, pointer: Vec2) -> Option<Size> {
        self.router.session().map(|session| session.size_at(pointer))
    }

    /// Handle release: end the session and stop listening
    pub fn press_end<S>(&mut self, surface: &mut S) -> InputResult
    where
        S: PointerSurface + ?Sized,
    {
        match self.router.end() {
            Some(_) => {
                surface.remove_drag_listeners();
                InputResult::Handled
            }
            None => InputResult::Ignored,
        }
    }
}
