//! Immediate-mode rendering
//!
//! One pass over the world per frame. Everything draws in world space
//! shifted by the camera offset; the camera keeps the player centered.

use macroquad::prelude::*;

use crate::asset::{SpriteId, SpriteSheet};

use super::attack::{Attack, AttackKind};
use super::body::Facing;
use super::enemy::Enemy;
use super::level::Platform;
use super::player::Player;
use super::world::{GameWorld, SessionState};

const BROWN: Color = Color::new(139.0 / 255.0, 69.0 / 255.0, 19.0 / 255.0, 1.0);
const DARK_BROWN: Color = Color::new(101.0 / 255.0, 67.0 / 255.0, 33.0 / 255.0, 1.0);

/// A drawable view of any entity. Render dispatch is a match on this
/// rather than a virtual call.
pub enum Sprite<'a> {
    Player(&'a Player),
    Enemy(&'a Enemy),
    Platform(&'a Platform),
    Attack(&'a Attack),
}

/// Draw the whole world for this frame
pub fn draw(world: &GameWorld, sheet: &SpriteSheet, show_overlay: bool) {
    clear_background(BLACK);
    let cam = world.camera_x();

    for platform in &world.platforms {
        draw_sprite(Sprite::Platform(platform), cam, sheet);
    }
    for enemy in &world.enemies {
        draw_sprite(Sprite::Enemy(enemy), cam, sheet);
    }
    draw_sprite(Sprite::Player(&world.player), cam, sheet);
    for attack in &world.attacks {
        draw_sprite(Sprite::Attack(attack), cam, sheet);
    }

    if let SessionState::GameOver { .. } = world.state {
        draw_lose_banner(world);
    }
    if show_overlay {
        draw_overlay(world);
    }
}

fn draw_sprite(sprite: Sprite, cam: f32, sheet: &SpriteSheet) {
    match sprite {
        Sprite::Platform(platform) => {
            // dirt slab with a lighter walking surface
            let r = platform.rect;
            draw_rectangle(r.x - cam, r.y, r.w, r.h, DARK_BROWN);
            draw_rectangle(r.x - cam, r.y, r.w, (r.h - 5.0).max(0.0), BROWN);
        }
        Sprite::Enemy(enemy) => {
            // skeleton: skull, eye sockets, ribcage
            let r = enemy.body.rect;
            let x = r.x - cam;
            draw_circle(x + 15.0, r.y + 8.0, 8.0, WHITE);
            draw_circle(x + 12.0, r.y + 6.0, 2.0, BLACK);
            draw_circle(x + 18.0, r.y + 6.0, 2.0, BLACK);
            draw_rectangle(x + 10.0, r.y + 16.0, 10.0, 14.0, WHITE);
        }
        Sprite::Player(player) => {
            let id = match player.facing {
                Facing::Right => SpriteId::PlayerRight,
                Facing::Left => SpriteId::PlayerLeft,
            };
            blit(sheet, id, player.body.rect, cam, 0.0);
        }
        Sprite::Attack(attack) => {
            let id = match attack.kind {
                AttackKind::Sword { .. } => SpriteId::Sword,
                AttackKind::Dagger => SpriteId::Dagger,
            };
            blit(sheet, id, attack.body.rect, cam, attack.angle);
        }
    }
}

fn blit(sheet: &SpriteSheet, id: SpriteId, dest: Rect, cam: f32, rotation: f32) {
    draw_texture_ex(
        &sheet.texture,
        dest.x - cam,
        dest.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(dest.w, dest.h)),
            source: Some(id.region()),
            rotation,
            ..Default::default()
        },
    );
}

fn draw_lose_banner(world: &GameWorld) {
    let settings = &world.settings;
    let text = "YOU LOSE!";
    let size = 74;
    let dims = measure_text(text, None, size, 1.0);
    draw_text(
        text,
        (settings.screen_width - dims.width) / 2.0,
        settings.screen_height / 2.0,
        size as f32,
        RED,
    );
}

fn draw_overlay(world: &GameWorld) {
    let player = &world.player;
    let lines = [
        format!("fps: {}", get_fps()),
        format!(
            "pos: ({:.0}, {:.0})  vel: ({:.1}, {:.1})",
            player.body.rect.x, player.body.rect.y, player.body.vel.x, player.body.vel.y
        ),
        format!("weapon: {}", player.weapon().label()),
        format!(
            "platforms: {}  enemies: {}  attacks: {}",
            world.platforms.len(),
            world.enemies.len(),
            world.attacks.len()
        ),
        format!(
            "frontier: [{:.0}, {:.0}]",
            world.generator.leftmost_x, world.generator.rightmost_x
        ),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 8.0, 16.0 + 16.0 * i as f32, 16.0, GREEN);
    }
}
