//! Procedural level generation
//!
//! Extends the platform strip ahead of the player in both directions and
//! retires entities that drift too far away. The frontier only grows:
//! `rightmost_x` is non-decreasing and `leftmost_x` non-increasing for
//! the life of a session.

use macroquad::prelude::*;
use macroquad::rand::gen_range;

use crate::settings::GameSettings;

use super::attack::Attack;
use super::enemy::{Enemy, ENEMY_H, ENEMY_W};

/// A static platform
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }
}

/// Frontier state of the generated platform span
pub struct LevelGen {
    /// Right edge of the rightmost generated platform
    pub rightmost_x: f32,
    /// Left edge of the leftmost generated platform
    pub leftmost_x: f32,
}

impl LevelGen {
    /// The fixed starting layout: a full-width ground slab, two ledges,
    /// and one skeleton patrolling the first ledge.
    pub fn initial_layout(settings: &GameSettings) -> (Self, Vec<Platform>, Vec<Enemy>) {
        let h = settings.screen_height;
        let platforms = vec![
            Platform::new(
                0.0,
                h - settings.ground_height,
                settings.screen_width,
                settings.ground_height,
            ),
            Platform::new(200.0, h - 150.0, 150.0, 20.0),
            Platform::new(450.0, h - 250.0, 100.0, 20.0),
        ];
        let enemies = vec![Enemy::new(220.0, h - 150.0 - ENEMY_H, settings.patrol_range)];
        let gen = Self {
            rightmost_x: settings.screen_width,
            leftmost_x: 0.0,
        };
        (gen, platforms, enemies)
    }

    /// Generate one platform past either frontier the player is closing
    /// in on (within one screen width of it).
    pub fn extend(
        &mut self,
        player: &Rect,
        platforms: &mut Vec<Platform>,
        enemies: &mut Vec<Enemy>,
        settings: &GameSettings,
    ) {
        if player.right() + settings.screen_width > self.rightmost_x {
            let gap = gen_range(settings.platform_gap.0, settings.platform_gap.1);
            let rect = random_platform(self.rightmost_x + gap, settings);
            self.rightmost_x = rect.right();
            maybe_spawn_enemy(&rect, enemies, settings);
            platforms.push(Platform { rect });
        }

        if player.x - settings.screen_width < self.leftmost_x {
            let gap = gen_range(settings.platform_gap.0, settings.platform_gap.1);
            let width = gen_range(settings.platform_width.0, settings.platform_width.1);
            let rect = Rect::new(
                self.leftmost_x - gap - width,
                random_platform_top(settings),
                width,
                settings.platform_thickness,
            );
            self.leftmost_x = rect.x;
            maybe_spawn_enemy(&rect, enemies, settings);
            platforms.push(Platform { rect });
        }
    }
}

fn random_platform(x: f32, settings: &GameSettings) -> Rect {
    let width = gen_range(settings.platform_width.0, settings.platform_width.1);
    Rect::new(
        x,
        random_platform_top(settings),
        width,
        settings.platform_thickness,
    )
}

/// Base generation height with vertical jitter
fn random_platform_top(settings: &GameSettings) -> f32 {
    settings.screen_height - settings.ground_height
        + gen_range(-settings.platform_jitter, settings.platform_jitter)
}

/// Roll the enemy spawn chance; a spawned skeleton stands centered on
/// the platform's top edge.
fn maybe_spawn_enemy(platform: &Rect, enemies: &mut Vec<Enemy>, settings: &GameSettings) {
    if gen_range(0.0, 1.0) < settings.enemy_spawn_chance {
        let x = platform.x + platform.w / 2.0 - ENEMY_W / 2.0;
        enemies.push(Enemy::new(x, platform.y - ENEMY_H, settings.patrol_range));
    }
}

/// Retire platforms, enemies, and attacks farther than the cull distance
/// from the player's box on either side.
pub fn cull(
    player: &Rect,
    platforms: &mut Vec<Platform>,
    enemies: &mut Vec<Enemy>,
    attacks: &mut Vec<Attack>,
    settings: &GameSettings,
) {
    let keep = |rect: &Rect| {
        rect.right() > player.x - settings.cull_distance
            && rect.x < player.right() + settings.cull_distance
    };
    platforms.retain(|p| keep(&p.rect));
    enemies.retain(|e| keep(&e.body.rect));
    attacks.retain(|a| keep(&a.body.rect));
}
