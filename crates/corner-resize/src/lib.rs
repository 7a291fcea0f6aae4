//! Corner drag-handle resizing
//!
//! Resizes a rectangular element from four corner handles:
//! - press on a handle snapshots the pointer and the element size
//! - pointer movement recomputes width/height from the drag delta
//! - release ends the session and drops the global listeners
//!
//! ## Architecture
//!
//! - [`math`]: `Vec2` pointer positions and `Size` dimensions
//! - [`corner`]: `CornerKind` corner identity
//! - [`handle`]: handle identity -> corner registry
//! - [`input`]: `DragSession` and the Idle/Dragging router
//! - [`target`] / [`surface`]: element and pointer-surface seams
//! - [`resizer`]: `CornerResizer`, the entry point
//!
//! ## Example
//!
//! ```rust
//! use corner_resize::{CornerResizer, ListenerCounter, ResizeTarget, Size, StyleBox};
//!
//! let (mut resizer, [top_left, ..]) = CornerResizer::with_corner_handles();
//! let mut element = StyleBox::new(200.0, 150.0);
//! let mut surface = ListenerCounter::new();
//!
//! resizer.press_start(top_left, 100.0, 100.0, &element, &mut surface);
//! resizer.press_move(80.0, 130.0, &mut element);
//! resizer.press_end(&mut surface);
//!
//! assert_eq!(element.computed_size(), Size::new(220.0, 120.0));
//! ```
//!
//! The pure core has no browser dependencies; the `wasm` feature adds a
//! `ResizeController` that wires it to DOM elements.

pub mod config;
pub mod corner;
pub mod error;
pub mod handle;
pub mod input;
pub mod math;
pub mod resizer;
pub mod style;
pub mod surface;
pub mod target;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use config::{HandleSelectors, ResizeConfig};
pub use corner::CornerKind;
pub use error::ResizeError;
pub use handle::{HandleId, HandleRegistry};
pub use input::{calculate_resize, DragSession, InputResult, ResizeRouter};
pub use math::{Size, Vec2};
pub use resizer::CornerResizer;
pub use style::{format_px, parse_px};
pub use surface::{ListenerCounter, PointerSurface};
pub use target::{ResizeTarget, StyleBox};
