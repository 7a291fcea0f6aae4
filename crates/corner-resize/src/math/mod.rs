//! Geometry types shared by the resizer
//!
//! Pointer coordinates are `Vec2`, element dimensions are `Size`.

mod size;
mod vec2;

pub use size::Size;
pub use vec2::Vec2;
