//! Skeleton enemies
//!
//! Deterministic back-and-forth patrol. Enemies hold their spawn height
//! (no platform collision) and never react to the player.

use super::body::Body;

/// Enemy collision box size
pub const ENEMY_W: f32 = 30.0;
pub const ENEMY_H: f32 = 30.0;

pub struct Enemy {
    pub body: Body,
    /// Patrol heading: +1.0 right, -1.0 left
    pub direction: f32,
    /// Left end of the patrol span
    pub start_x: f32,
    /// Patrol span length
    pub range: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, range: f32) -> Self {
        Self {
            body: Body::new(x, y, ENEMY_W, ENEMY_H),
            direction: 1.0,
            start_x: x,
            range,
        }
    }

    /// March one step, reversing exactly at the patrol boundaries
    pub fn update(&mut self, speed: f32) {
        self.body.rect.x += self.direction * speed;

        let max = self.start_x + self.range;
        if self.body.rect.x >= max {
            self.body.rect.x = max;
            self.direction = -1.0;
        } else if self.body.rect.x <= self.start_x {
            self.body.rect.x = self.start_x;
            self.direction = 1.0;
        }
    }
}
