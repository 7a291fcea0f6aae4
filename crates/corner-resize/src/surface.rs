//! Global pointer surface abstraction
//!
//! Move and release listeners live on the global surface only while a drag
//! is in progress.

/// Surface on which drag listeners are added and removed
pub trait PointerSurface {
    /// Start delivering pointer move/release events to the resizer
    fn add_drag_listeners(&mut self);

    /// Stop delivering pointer move/release events
    fn remove_drag_listeners(&mut self);
}

/// Surface that only counts listener registrations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerCounter {
    /// Times listeners were added
    pub added: u32,
    /// Times listeners were removed
    pub removed: u32,
}

impl ListenerCounter {
    /// Create a counter with no registrations
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners are currently attached
    #[inline]
    pub fn is_listening(&self) -> bool {
        self.added > self.removed
    }
}

impl PointerSurface for ListenerCounter {
    fn add_drag_listeners(&mut self) {
        self.added += 1;
    }

    fn remove_drag_listeners(&mut self) {
        self.removed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_counter() {
        let mut surface = ListenerCounter::new();
        assert!(!surface.is_listening());

        surface.add_drag_listeners();
        assert!(surface.is_listening());

        surface.remove_drag_listeners();
        assert!(!surface.is_listening());
        assert_eq!(surface, ListenerCounter { added: 1, removed: 1 });
    }
}
