//! Player controller
//!
//! Held-key movement, gravity and platform landing, plus the two
//! time-gated abilities: the dash state machine and weapon attacks.

use crate::input::InputFrame;
use crate::settings::GameSettings;

use super::attack::{Attack, Weapon};
use super::body::{Body, Facing};
use super::collision::overlaps;
use super::level::Platform;

/// Player collision box size
pub const PLAYER_W: f32 = 30.0;
pub const PLAYER_H: f32 = 40.0;

/// Dash ability state. The cooldown is measured from the dash *start*,
/// so the start timestamp carries across the Active -> Cooling edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashState {
    /// Dash available
    Ready,
    /// Mid-dash since `started`
    Active { started: f64 },
    /// Dash over, cooldown still running from the same start time
    Cooling { started: f64 },
}

pub struct Player {
    pub body: Body,
    pub facing: Facing,
    /// Set by `jump`, cleared on landing; gates double jumps
    pub jumping: bool,
    /// Carried weapons; fixed and non-empty by construction
    pub weapons: Vec<Weapon>,
    pub weapon_index: usize,
    pub dash_state: DashState,
}

impl Player {
    /// Spawn the player at the center of the screen
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            body: Body::centered_at(
                settings.screen_width / 2.0,
                settings.screen_height / 2.0,
                PLAYER_W,
                PLAYER_H,
            ),
            facing: Facing::Right,
            jumping: false,
            weapons: vec![Weapon::Sword, Weapon::Dagger],
            weapon_index: 0,
            dash_state: DashState::Ready,
        }
    }

    /// The currently selected weapon
    pub fn weapon(&self) -> Weapon {
        self.weapons[self.weapon_index]
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self.dash_state, DashState::Active { .. })
    }

    /// Advance one tick: dash state, held movement, gravity, landing.
    pub fn update(
        &mut self,
        frame: &InputFrame,
        platforms: &[Platform],
        now: f64,
        settings: &GameSettings,
    ) {
        self.dash_state = match self.dash_state {
            DashState::Active { started } if now - started >= settings.dash_duration => {
                DashState::Cooling { started }
            }
            DashState::Cooling { started } if now - started >= settings.dash_cooldown => {
                DashState::Ready
            }
            state => state,
        };

        if self.is_dashing() {
            // a dash overrides held movement; gravity still applies
            self.body.rect.x += self.facing.sign() * settings.dash_speed;
            self.body.vel.y += settings.gravity;
            self.body.rect.y += self.body.vel.y;
            if !settings.dash_ignores_platforms {
                self.land_on(platforms);
            }
            return;
        }

        self.body.vel.x = 0.0;
        if frame.left {
            self.body.vel.x -= settings.move_speed;
            self.facing = Facing::Left;
        }
        if frame.right {
            self.body.vel.x += settings.move_speed;
            self.facing = Facing::Right;
        }
        self.body.rect.x += self.body.vel.x;

        self.body.vel.y += settings.gravity;
        self.body.rect.y += self.body.vel.y;

        self.land_on(platforms);
    }

    /// Falling onto a platform clamps the feet to its top and kills the
    /// fall. Upward motion passes through (one-way platforms).
    fn land_on(&mut self, platforms: &[Platform]) {
        if self.body.vel.y <= 0.0 {
            return;
        }
        for platform in platforms {
            if overlaps(&self.body.rect, &platform.rect) {
                self.body.rect.y = platform.rect.y - self.body.rect.h;
                self.body.vel.y = 0.0;
                self.jumping = false;
                break;
            }
        }
    }

    /// Start a jump unless one is already in progress
    pub fn jump(&mut self, settings: &GameSettings) {
        if self.jumping {
            return;
        }
        self.body.vel.y = settings.jump_velocity;
        self.jumping = true;
    }

    /// Start a dash if the cooldown allows; otherwise silently ignored
    pub fn dash(&mut self, now: f64, settings: &GameSettings) {
        let ready = match self.dash_state {
            DashState::Ready => true,
            DashState::Active { started } | DashState::Cooling { started } => {
                now - started > settings.dash_cooldown
            }
        };
        if ready {
            self.dash_state = DashState::Active { started: now };
        }
    }

    /// Spawn an attack of the selected weapon at the player
    pub fn attack(&self, now: f64, settings: &GameSettings) -> Attack {
        match self.weapon() {
            Weapon::Sword => Attack::sword(self, now),
            Weapon::Dagger => Attack::dagger(self, settings.dagger_speed),
        }
    }

    /// Cycle to the next weapon
    pub fn switch_weapon(&mut self) {
        self.weapon_index = (self.weapon_index + 1) % self.weapons.len();
    }
}
