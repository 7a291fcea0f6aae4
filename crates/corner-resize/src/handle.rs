//! Handle registry mapping handle identities to corners

use std::collections::HashMap;

use crate::corner::CornerKind;
use crate::error::ResizeError;

/// Unique handle identifier
pub type HandleId = u64;

/// Registry of the interactive regions that start a resize drag
pub struct HandleRegistry {
    /// Corner assigned to each handle
    corners: HashMap<HandleId, CornerKind>,
    /// Next handle ID
    next_id: u64,
}

impl Default for HandleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            corners: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create a registry with one handle per corner, in `CornerKind::ALL` order
    pub fn with_all_corners() -> (Self, [HandleId; 4]) {
        let mut registry = Self::new();
        let ids = CornerKind::ALL.map(|corner| registry.register(corner));
        (registry, ids)
    }

    /// Register a handle for a corner
    pub fn register(&mut self, corner: CornerKind) -> HandleId {
        let id = self.next_id;
        self.next_id += 1;
        self.corners.insert(id, corner);
        id
    }

    /// Look up the corner of a handle
    pub fn corner(&self, id: HandleId) -> Result<CornerKind, ResizeError> {
        self.corners
            .get(&id)
            .copied()
            .ok_or(ResizeError::UnknownHandle(id))
    }
}
