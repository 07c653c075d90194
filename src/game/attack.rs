//! Attack entities
//!
//! Short-lived weapon entities: a sword swing anchored to the player and
//! a thrown dagger projectile. Destruction on enemy contact is handled by
//! the collision pass; `advance` only covers motion and expiry.

use crate::settings::{GameSettings, TICK_DT};

use super::body::{Body, Facing};
use super::player::Player;

/// Sword swing hitbox size
pub const SWORD_W: f32 = 40.0;
pub const SWORD_H: f32 = 20.0;

/// Dagger hitbox size
pub const DAGGER_W: f32 = 20.0;
pub const DAGGER_H: f32 = 10.0;

/// The carried weapons, in switch order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weapon {
    Sword,
    Dagger,
}

impl Weapon {
    pub fn label(&self) -> &'static str {
        match self {
            Weapon::Sword => "Sword",
            Weapon::Dagger => "Dagger",
        }
    }
}

/// Variant payload for a live attack
#[derive(Debug, Clone, Copy)]
pub enum AttackKind {
    /// Swing anchored to the player's box, times out after the sword lifetime
    Sword { spawned: f64 },
    /// Free projectile, despawns once out of range of the player
    Dagger,
}

#[derive(Debug, Clone, Copy)]
pub struct Attack {
    pub body: Body,
    pub kind: AttackKind,
    /// Visual rotation in radians; the collision box stays axis-aligned
    pub angle: f32,
}

impl Attack {
    /// Spawn a sword swing on the player's facing side
    pub fn sword(player: &Player, now: f64) -> Self {
        let mut attack = Self {
            body: Body::new(0.0, 0.0, SWORD_W, SWORD_H),
            kind: AttackKind::Sword { spawned: now },
            angle: 0.0,
        };
        attack.anchor_to(player);
        attack
    }

    /// Throw a dagger from the player's center in the facing direction
    pub fn dagger(player: &Player, speed: f32) -> Self {
        let center = player.body.rect.center();
        let mut body = Body::centered_at(center.x, center.y, DAGGER_W, DAGGER_H);
        body.vel.x = player.facing.sign() * speed;
        Self {
            body,
            kind: AttackKind::Dagger,
            angle: 0.0,
        }
    }

    /// Recenter a sword on the player's current box, on the facing side
    fn anchor_to(&mut self, player: &Player) {
        let center = player.body.rect.center();
        self.body.rect.y = center.y - self.body.rect.h / 2.0;
        self.body.rect.x = match player.facing {
            Facing::Right => player.body.rect.right(),
            Facing::Left => player.body.rect.x - self.body.rect.w,
        };
    }

    /// Advance one tick. Returns false once the attack has expired.
    pub fn advance(&mut self, player: &Player, now: f64, settings: &GameSettings) -> bool {
        match self.kind {
            AttackKind::Sword { spawned } => {
                // the swing follows the player even while they move
                self.anchor_to(player);
                self.angle -= player.facing.sign() * settings.sword_spin_speed * TICK_DT as f32;
                now - spawned <= settings.sword_lifetime
            }
            AttackKind::Dagger => {
                self.body.rect.x += self.body.vel.x;
                self.angle += self.body.vel.x.signum() * settings.dagger_spin_speed * TICK_DT as f32;
                let offset = self.body.rect.center().x - player.body.rect.center().x;
                offset.abs() <= settings.dagger_range
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputFrame;
    use crate::settings::TICK_DT;

    fn player() -> (Player, GameSettings) {
        let settings = GameSettings::default();
        (Player::new(&settings), settings)
    }

    #[test]
    fn test_sword_spawns_on_facing_side() {
        let (mut p, _s) = player();
        let sword = Attack::sword(&p, 0.0);
        assert_eq!(sword.body.rect.x, p.body.rect.right());

        p.facing = Facing::Left;
        let sword = Attack::sword(&p, 0.0);
        assert_eq!(sword.body.rect.right(), p.body.rect.x);
        // vertically centered on the player
        assert_eq!(sword.body.rect.center().y, p.body.rect.center().y);
    }

    #[test]
    fn test_sword_follows_player() {
        let (mut p, s) = player();
        let mut sword = Attack::sword(&p, 0.0);

        let held_right = InputFrame {
            right: true,
            ..Default::default()
        };
        p.update(&held_right, &[], TICK_DT, &s);
        assert!(sword.advance(&p, TICK_DT, &s));
        assert_eq!(sword.body.rect.x, p.body.rect.right());
    }

    #[test]
    fn test_sword_expires_after_lifetime() {
        let (p, s) = player();
        let mut sword = Attack::sword(&p, 0.0);
        assert!(sword.advance(&p, s.sword_lifetime, &s));
        assert!(!sword.advance(&p, s.sword_lifetime + TICK_DT, &s));
    }

    #[test]
    fn test_dagger_flies_in_facing_direction() {
        let (mut p, s) = player();
        let mut dagger = Attack::dagger(&p, s.dagger_speed);
        let x0 = dagger.body.rect.x;
        assert!(dagger.advance(&p, TICK_DT, &s));
        assert_eq!(dagger.body.rect.x, x0 + s.dagger_speed);

        p.facing = Facing::Left;
        let mut dagger = Attack::dagger(&p, s.dagger_speed);
        let x0 = dagger.body.rect.x;
        assert!(dagger.advance(&p, TICK_DT, &s));
        assert_eq!(dagger.body.rect.x, x0 - s.dagger_speed);
    }

    #[test]
    fn test_dagger_despawns_out_of_range() {
        let (p, s) = player();
        let mut dagger = Attack::dagger(&p, s.dagger_speed);

        let mut now = 0.0;
        let mut alive_ticks = 0;
        loop {
            now += TICK_DT;
            if !dagger.advance(&p, now, &s) {
                break;
            }
            alive_ticks += 1;
            assert!(alive_ticks < 1000, "dagger never expired");
        }
        // flies out to dagger_range at dagger_speed per tick
        let expected = (s.dagger_range / s.dagger_speed) as i32;
        assert!((alive_ticks - expected).abs() <= 1);
    }
}
