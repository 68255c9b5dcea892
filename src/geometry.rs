//! Screen-space geometry shared by the touch pipeline.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen units (origin = top-left corner).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(right - left, bottom - top),
        }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not.
    pub fn contains(&self, point: Vec2) -> bool {
        !self.is_empty()
            && point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Position of `point` as a fraction of the rect on each axis, clamped to [0, 1].
    pub fn fraction_of(&self, point: Vec2) -> Vec2 {
        if self.is_empty() {
            return Vec2::splat(0.5);
        }
        ((point - self.origin) / self.size).clamp(Vec2::ZERO, Vec2::ONE)
    }
}
