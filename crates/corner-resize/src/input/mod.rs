//! Input routing module
//!
//! Provides the Idle/Dragging state machine for corner resizes.

mod drag;
mod result;
mod router;

pub use drag::DragSession;
pub use result::InputResult;
pub use router::ResizeRouter;

use crate::corner::CornerKind;
use crate::math::{Size, Vec2};

/// Calculate the new size after moving a corner by `delta`.
///
/// No clamping is applied; dragging past the opposite edge yields zero or
/// negative dimensions.
pub fn calculate_resize(corner: CornerKind, start_size: Size, delta: Vec2) -> Size {
    let mut new_size = start_size;

    match corner {
        CornerKind::TopLeft => {
            new_size.width = start_size.width - delta.x;
            new_size.height = start_size.height - delta.y;
        }
        CornerKind::TopRight => {
            new_size.width = start_size.width + delta.x;
            new_size.height = start_size.height - delta.y;
        }
        CornerKind::BottomLeft => {
            new_size.width = start_size.width - delta.x;
            new_size.height = start_size.height + delta.y;
        }
        CornerKind::BottomRight => {
            new_size.width = start_size.width + delta.x;
            new_size.height = start_size.height + delta.y;
        }
    }

    new_size
}
