//! 2D vector type for pointer positions and drag deltas

use serde::{Deserialize, Serialize};

/// 2D vector for pointer positions and deltas (client pixels)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_delta() {
        let start = Vec2::new(100.0, 100.0);
        let now = Vec2::new(80.0, 130.0);

        let delta = now - start;
        assert!((delta.x - (-20.0)).abs() < 0.001);
        assert!((delta.y - 30.0).abs() < 0.001);

        let back = start + delta;
        assert_eq!(back, now);
    }
}
