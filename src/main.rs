//! PIRATE PARKOUR: a tiny procedural side-scrolling platformer
//!
//! A pirate with a sword, a dagger, and a dash runs an endless strip of
//! generated platforms patrolled by skeletons. One touch loses the run.
//!
//! Controls: arrows/AD move, space/W/up jumps, shift dashes, F attacks,
//! Q switches weapon, F3 toggles the debug overlay, escape quits.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod asset;
mod game;
mod input;
mod settings;

use macroquad::prelude::*;

use asset::SpriteSheet;
use game::renderer;
use game::{GameWorld, SessionState};
use input::InputFrame;
use settings::GameSettings;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Pirate Parkour v{}", VERSION),
        window_width: 800,
        window_height: 600,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    macroquad::rand::srand(miniquad::date::now() as u64);

    let settings = GameSettings::load().await;

    let sheet = match SpriteSheet::load() {
        Ok(sheet) => {
            println!("Loaded sprite sheet");
            sheet
        }
        Err(e) => {
            eprintln!("Failed to load sprite sheet: {}", e);
            return;
        }
    };

    let mut world = GameWorld::new(settings);
    let mut show_overlay = false;

    loop {
        let frame_start = get_time();

        let frame = InputFrame::poll();
        if frame.toggle_overlay {
            show_overlay = !show_overlay;
        }

        world.tick(&frame);
        if world.state == SessionState::Terminated {
            break;
        }

        renderer::draw(&world, &sheet, show_overlay);

        // Cap at the fixed tick rate: sleep in 1ms steps, spin the rest
        #[cfg(not(target_arch = "wasm32"))]
        {
            let target = settings::TICK_DT;
            let spin_margin = 0.002;
            while get_time() - frame_start + spin_margin < target {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - frame_start < target {}
        }
        // WASM: just spin-wait (no thread::sleep available)
        #[cfg(target_arch = "wasm32")]
        {
            while get_time() - frame_start < settings::TICK_DT {}
        }

        next_frame().await;
    }
}
