//! Input polling
//!
//! Maps raw keys to game actions and snapshots them once per frame.
//! Game logic only ever sees an [`InputFrame`], so the simulation never
//! touches macroquad input directly and tests can fabricate frames.

use macroquad::prelude::*;

/// All actions the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Held movement
    MoveLeft,
    MoveRight,

    // Discrete presses
    Jump,
    Attack,
    SwitchWeapon,
    Dash,
    ToggleOverlay,
    Quit,
}

impl Action {
    /// Keys bound to this action (any of them triggers it)
    fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::MoveLeft => &[KeyCode::Left, KeyCode::A],
            Action::MoveRight => &[KeyCode::Right, KeyCode::D],
            Action::Jump => &[KeyCode::Space, KeyCode::W, KeyCode::Up],
            Action::Attack => &[KeyCode::F],
            Action::SwitchWeapon => &[KeyCode::Q],
            Action::Dash => &[KeyCode::LeftShift, KeyCode::RightShift],
            Action::ToggleOverlay => &[KeyCode::F3],
            Action::Quit => &[KeyCode::Escape],
        }
    }

    /// Is the action currently held down?
    pub fn down(self) -> bool {
        self.keys().iter().any(|k| is_key_down(*k))
    }

    /// Was the action pressed this frame?
    pub fn pressed(self) -> bool {
        self.keys().iter().any(|k| is_key_pressed(*k))
    }
}

/// One frame's worth of input, consumed by the world tick
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    /// Held: move left
    pub left: bool,
    /// Held: move right
    pub right: bool,
    pub jump: bool,
    pub attack: bool,
    pub switch_weapon: bool,
    pub dash: bool,
    pub toggle_overlay: bool,
    pub quit: bool,
}

impl InputFrame {
    /// Snapshot the current macroquad input state
    pub fn poll() -> Self {
        Self {
            left: Action::MoveLeft.down(),
            right: Action::MoveRight.down(),
            jump: Action::Jump.pressed(),
            attack: Action::Attack.pressed(),
            switch_weapon: Action::SwitchWeapon.pressed(),
            dash: Action::Dash.pressed(),
            toggle_overlay: Action::ToggleOverlay.pressed(),
            quit: Action::Quit.pressed(),
        }
    }
}
