//! Axis-aligned body shared by the player and platforms
//!
//! Screen space: origin at the top-left, y grows downward. `pos` is the
//! top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Position, size and velocity of a rectangular entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Body {
    /// Create a resting body. Sizes must be positive and finite.
    pub fn new(pos: Vec2, size: Vec2) -> Result<Self> {
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(Error::InvalidSize {
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self {
            pos,
            size,
            vel: Vec2::ZERO,
        })
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Move vertically so the bottom edge sits at `y`
    #[inline]
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Keep the body fully inside `[0, width]` horizontally
    pub fn clamp_x(&mut self, width: f32) {
        if self.left() < 0.0 {
            self.pos.x = 0.0;
        } else if self.right() > width {
            self.pos.x = width - self.size.x;
        }
    }

    /// Whether the horizontal extents touch (edges count as touching)
    #[inline]
    pub fn overlaps_x(&self, other: &Body) -> bool {
        self.right() >= other.left() && self.left() <= other.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_sizes() {
        assert!(Body::new(Vec2::ZERO, Vec2::new(-1.0, 10.0)).is_err());
        assert!(Body::new(Vec2::ZERO, Vec2::new(10.0, 0.0)).is_err());
        assert!(Body::new(Vec2::ZERO, Vec2::new(f32::NAN, 10.0)).is_err());
        assert!(Body::new(Vec2::ZERO, Vec2::new(10.0, 10.0)).is_ok());
    }

    #[test]
    fn test_edges() {
        let mut body = Body::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 5.0)).unwrap();
        assert_eq!(body.right(), 40.0);
        assert_eq!(body.bottom(), 25.0);

        body.set_bottom(100.0);
        assert_eq!(body.top(), 95.0);
    }

    #[test]
    fn test_clamp_x() {
        let mut body = Body::new(Vec2::new(-5.0, 0.0), Vec2::new(20.0, 20.0)).unwrap();
        body.clamp_x(400.0);
        assert_eq!(body.left(), 0.0);

        body.pos.x = 395.0;
        body.clamp_x(400.0);
        assert_eq!(body.right(), 400.0);
    }

    #[test]
    fn test_overlaps_x_touching_edges() {
        let a = Body::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0)).unwrap();
        let b = Body::new(Vec2::new(20.0, 50.0), Vec2::new(60.0, 10.0)).unwrap();
        let c = Body::new(Vec2::new(21.0, 50.0), Vec2::new(60.0, 10.0)).unwrap();
        assert!(a.overlaps_x(&b));
        assert!(!a.overlaps_x(&c));
    }
}
