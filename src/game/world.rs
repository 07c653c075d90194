//! World state and the fixed tick
//!
//! All entity collections, the session clock, and the session state
//! machine, threaded explicitly through update and render. One tick runs
//! the full fixed order: input, player, enemies, attacks, generation,
//! cull, collisions. A tick always runs to completion; quit takes effect
//! at the tick boundary.

use crate::input::InputFrame;
use crate::settings::{GameSettings, TICK_DT};

use super::attack::Attack;
use super::collision;
use super::enemy::Enemy;
use super::level::{self, LevelGen, Platform};
use super::player::Player;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    Running,
    /// Lost; the banner stays up until the hold time passes
    GameOver { since: f64 },
    /// The main loop should exit
    Terminated,
}

pub struct GameWorld {
    pub settings: GameSettings,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub attacks: Vec<Attack>,
    pub generator: LevelGen,
    /// Session time, advanced 1/60 s per tick. Every ability timer
    /// compares against this, which keeps the simulation deterministic.
    pub clock: f64,
    pub state: SessionState,
}

impl GameWorld {
    pub fn new(settings: GameSettings) -> Self {
        let (generator, platforms, enemies) = LevelGen::initial_layout(&settings);
        Self {
            player: Player::new(&settings),
            platforms,
            enemies,
            attacks: Vec::new(),
            generator,
            clock: 0.0,
            state: SessionState::Running,
            settings,
        }
    }

    /// Camera x offset keeping the player horizontally centered
    pub fn camera_x(&self) -> f32 {
        self.player.body.rect.center().x - self.settings.screen_width / 2.0
    }

    /// Advance the session by one fixed tick
    pub fn tick(&mut self, frame: &InputFrame) {
        self.clock += TICK_DT;
        let now = self.clock;

        match self.state {
            SessionState::Terminated => return,
            SessionState::GameOver { since } => {
                if frame.quit || now - since >= self.settings.game_over_hold {
                    self.state = SessionState::Terminated;
                }
                return;
            }
            SessionState::Running => {}
        }

        if frame.quit {
            self.state = SessionState::Terminated;
            return;
        }

        if frame.jump {
            self.player.jump(&self.settings);
        }
        if frame.dash {
            self.player.dash(now, &self.settings);
        }
        if frame.switch_weapon {
            self.player.switch_weapon();
        }
        if frame.attack {
            self.attacks.push(self.player.attack(now, &self.settings));
        }

        self.player.update(frame, &self.platforms, now, &self.settings);
        for enemy in &mut self.enemies {
            enemy.update(self.settings.enemy_speed);
        }
        let player = &self.player;
        let settings = &self.settings;
        self.attacks.retain_mut(|a| a.advance(player, now, settings));

        let player_rect = self.player.body.rect;
        self.generator.extend(
            &player_rect,
            &mut self.platforms,
            &mut self.enemies,
            &self.settings,
        );
        level::cull(
            &player_rect,
            &mut self.platforms,
            &mut self.enemies,
            &mut self.attacks,
            &self.settings,
        );

        // mark first, remove from the back so indices stay valid
        let (hit_attacks, hit_enemies) = collision::resolve_attack_hits(&self.attacks, &self.enemies);
        for &i in hit_attacks.iter().rev() {
            self.attacks.remove(i);
        }
        let mut dead_enemies = hit_enemies;
        dead_enemies.sort_unstable_by(|a, b| b.cmp(a));
        for i in dead_enemies {
            self.enemies.remove(i);
        }

        if collision::player_hit(&self.player.body.rect, &self.enemies) {
            self.state = SessionState::GameOver { since: now };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::attack::{AttackKind, Weapon};
    use crate::game::enemy::ENEMY_H;

    fn world() -> GameWorld {
        GameWorld::new(GameSettings::default())
    }

    fn press(set: impl Fn(&mut InputFrame)) -> InputFrame {
        let mut frame = InputFrame::default();
        set(&mut frame);
        frame
    }

    #[test]
    fn test_quit_terminates_without_game_over() {
        let mut w = world();
        w.tick(&press(|f| f.quit = true));
        assert_eq!(w.state, SessionState::Terminated);
    }

    #[test]
    fn test_enemy_contact_loses_the_session() {
        let mut w = world();
        let rect = w.player.body.rect;
        w.enemies.push(Enemy::new(rect.x, rect.y, 100.0));

        w.tick(&InputFrame::default());
        assert!(matches!(w.state, SessionState::GameOver { .. }));

        // banner holds for the configured time, then the session ends
        let hold_ticks = (w.settings.game_over_hold / TICK_DT).ceil() as usize + 1;
        for _ in 0..hold_ticks {
            w.tick(&InputFrame::default());
        }
        assert_eq!(w.state, SessionState::Terminated);
    }

    #[test]
    fn test_quit_skips_the_game_over_hold() {
        let mut w = world();
        let rect = w.player.body.rect;
        w.enemies.push(Enemy::new(rect.x, rect.y, 100.0));
        w.tick(&InputFrame::default());
        assert!(matches!(w.state, SessionState::GameOver { .. }));

        w.tick(&press(|f| f.quit = true));
        assert_eq!(w.state, SessionState::Terminated);
    }

    #[test]
    fn test_attack_input_spawns_selected_weapon() {
        let mut w = world();
        w.tick(&press(|f| f.attack = true));
        assert_eq!(w.attacks.len(), 1);
        assert!(matches!(w.attacks[0].kind, AttackKind::Sword { .. }));

        // swords expire quickly; wait them out, then throw a dagger
        for _ in 0..20 {
            w.tick(&InputFrame::default());
        }
        assert!(w.attacks.is_empty());

        w.tick(&press(|f| {
            f.switch_weapon = true;
            f.attack = true;
        }));
        assert_eq!(w.player.weapon(), Weapon::Dagger);
        assert_eq!(w.attacks.len(), 1);
        assert!(matches!(w.attacks[0].kind, AttackKind::Dagger));
    }

    #[test]
    fn test_sword_kills_adjacent_enemy_same_tick() {
        let mut w = world();
        let rect = w.player.body.rect;
        // just off the player's right edge, inside sword reach
        let target_x = rect.right() + 5.0;
        w.enemies.push(Enemy::new(
            target_x,
            rect.center().y - ENEMY_H / 2.0,
            100.0,
        ));

        w.tick(&press(|f| f.attack = true));
        // the generator may have spawned fresh enemies this tick, so look
        // for the victim specifically
        assert!(w.enemies.iter().all(|e| e.start_x != target_x));
        assert!(w.attacks.is_empty());
        assert_eq!(w.state, SessionState::Running);
    }

    #[test]
    fn test_walking_right_extends_and_culls_the_level() {
        let mut w = world();
        let frame = press(|f| f.right = true);
        for _ in 0..1200 {
            w.tick(&frame);
        }

        // the strip followed the player: frontier moved out, start culled
        assert!(w.generator.rightmost_x > 800.0);
        assert!(w
            .platforms
            .iter()
            .all(|p| p.rect.right() > w.player.body.rect.x - w.settings.cull_distance));
    }

    #[test]
    fn test_clock_advances_per_tick() {
        let mut w = world();
        for _ in 0..60 {
            w.tick(&InputFrame::default());
        }
        assert!((w.clock - 1.0).abs() < 1e-9);
    }
}
