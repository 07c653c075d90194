//! Game tuning settings
//!
//! Every tuning constant lives here rather than inline at its point of
//! use. Defaults carry the shipped values; `assets/settings.ron` can
//! override them without touching code.
//!
//! Distances are in pixels, velocities in pixels per tick (the game runs
//! a fixed 60 Hz tick), and ability timers in seconds of session time.

use serde::{Serialize, Deserialize};

/// Duration of one fixed simulation tick (60 Hz)
pub const TICK_DT: f64 = 1.0 / 60.0;

/// All gameplay tuning values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Logical screen width
    pub screen_width: f32,
    /// Logical screen height
    pub screen_height: f32,

    /// Gravity acceleration (pixels per tick, added to vertical velocity each tick)
    pub gravity: f32,
    /// Horizontal speed while a movement key is held
    pub move_speed: f32,
    /// Initial vertical velocity of a jump (negative = up)
    pub jump_velocity: f32,

    /// Horizontal speed during a dash
    pub dash_speed: f32,
    /// How long a dash lasts (seconds)
    pub dash_duration: f64,
    /// Minimum time between dash starts (seconds, measured start to start)
    pub dash_cooldown: f64,
    /// Skip platform resolution while dashing (lets a dash carry through floors)
    pub dash_ignores_platforms: bool,

    /// How long a sword swing stays active (seconds)
    pub sword_lifetime: f64,
    /// Sword swing angular speed (radians per second)
    pub sword_spin_speed: f32,
    /// Horizontal speed of a thrown dagger
    pub dagger_speed: f32,
    /// Dagger tumble angular speed (radians per second)
    pub dagger_spin_speed: f32,
    /// Distance from the player at which a dagger despawns
    pub dagger_range: f32,

    /// Enemy patrol speed
    pub enemy_speed: f32,
    /// Horizontal span an enemy patrols from its spawn point
    pub patrol_range: f32,
    /// Chance that a generated platform carries an enemy
    pub enemy_spawn_chance: f32,

    /// Horizontal gap between a frontier platform and the next (min, max)
    pub platform_gap: (f32, f32),
    /// Generated platform width (min, max)
    pub platform_width: (f32, f32),
    /// Vertical jitter applied around the base platform height
    pub platform_jitter: f32,
    /// Thickness of generated platforms
    pub platform_thickness: f32,
    /// Height of the starting ground slab; also sets the base generation height
    pub ground_height: f32,

    /// Distance from the player past which entities are retired.
    /// Must exceed the generation look-ahead (one screen plus the largest
    /// gap and platform width), or fresh terrain would be culled unreached.
    pub cull_distance: f32,

    /// How long the lose banner stays up before the session ends (seconds)
    pub game_over_hold: f64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,

            gravity: 0.5,
            move_speed: 5.0,
            jump_velocity: -15.0,

            dash_speed: 15.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            dash_ignores_platforms: false,

            sword_lifetime: 0.1,
            sword_spin_speed: 12.0,
            dagger_speed: 20.0,
            dagger_spin_speed: 9.0,
            dagger_range: 800.0,

            enemy_speed: 1.0,
            patrol_range: 100.0,
            enemy_spawn_chance: 0.7,

            platform_gap: (150.0, 300.0),
            platform_width: (150.0, 250.0),
            platform_jitter: 100.0,
            platform_thickness: 20.0,
            ground_height: 40.0,

            cull_distance: 1600.0,

            game_over_hold: 2.0,
        }
    }
}

impl GameSettings {
    /// Parse settings from RON text
    pub fn from_ron(text: &str) -> Result<Self, String> {
        ron::from_str(text).map_err(|e| format!("settings parse error: {}", e))
    }

    /// Load settings from `assets/settings.ron`, falling back to defaults
    /// if the file is missing or malformed.
    pub async fn load() -> Self {
        match macroquad::file::load_string("assets/settings.ron").await {
            Ok(text) => match Self::from_ron(&text) {
                Ok(settings) => {
                    println!("Loaded settings from assets/settings.ron");
                    settings
                }
                Err(e) => {
                    eprintln!("{}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                println!("No settings file ({}), using defaults", e);
                Self::default()
            }
        }
    }
}
