//! Shared physics state

use macroquad::prelude::*;

/// The physics state every moving entity carries: an axis-aligned box
/// (origin top-left, y grows downward) plus a velocity. Owned by the
/// entity and mutated in place each tick.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Body {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            vel: Vec2::ZERO,
        }
    }

    /// Build a body with its box centered on (cx, cy)
    pub fn centered_at(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }
}

/// Horizontal facing, shared by the player and attack spawning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Unit sign along x: -1 for left, +1 for right
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}
