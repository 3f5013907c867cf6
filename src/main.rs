//! HOPKIN: a one-button platformer with a built-in skin editor
//!
//! Two tools behind one fixed-size window, toggled with Tab:
//! - the game: menu/play state machine, one-shot jump, a platform that is
//!   traversable from below, a patrolling enemy with a stomp rule, a coin
//!   and a scrolling camera over a 2000px world
//! - the skin editor: paints the 32x32 player skin PNG the game textures
//!   the player with

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod game;
mod input;
mod skin;
mod ui;

use std::path::Path;

use macroquad::prelude::*;

use app::{texture_from_grid, AppState, Tool};
use game::{FrameActions, SceneAssets, Tuning};
use input::Action;
use skin::{EditorAction, SkinGrid, SKIN_FILE};
use ui::Rect;

/// Fixed tick rate for the whole app
const TARGET_FRAME_TIME: f64 = 1.0 / 60.0;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("HOPKIN v{}", VERSION),
        window_width: 800,
        window_height: 600,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let tuning = Tuning::load_or_default(Path::new("tuning.ron"));

    // The skin file is optional; without it the player keeps the built-in
    // placeholder face until something is painted in the editor
    let skin_path = Path::new(SKIN_FILE);
    let had_skin = skin_path.exists();
    let skin = SkinGrid::load_or_default(skin_path);
    let skin_texture = had_skin.then(|| texture_from_grid(&skin));

    let assets = SceneAssets::build(&tuning);
    let mut app = AppState::new(tuning, skin, skin_texture);

    println!("=== HOPKIN v{} ===", VERSION);

    loop {
        let frame_start = get_time();

        if input::pressed(Action::SwitchTool) {
            app.active_tool = app.active_tool.other();
        }

        let quit = match app.active_tool {
            Tool::Game => {
                let actions = FrameActions::poll();
                let quit = app.game.update(actions);
                app.game.draw(&assets, app.skin_texture.as_ref());
                quit
            }
            Tool::SkinEditor => {
                let screen = Rect::screen(screen_width(), screen_height());
                match app.skin_editor.frame(&mut app.skin, screen) {
                    EditorAction::Edited => app.refresh_skin_texture(),
                    EditorAction::SaveRequested => {
                        match app.skin.export(skin_path) {
                            Ok(()) => {
                                println!("Saved skin to {}", SKIN_FILE);
                                app.skin_editor.set_status(&format!("Saved {}", SKIN_FILE));
                                app.refresh_skin_texture();
                            }
                            Err(e) => {
                                // Non-fatal: report and keep editing
                                eprintln!("Failed to save {}: {}", SKIN_FILE, e);
                                app.skin_editor.set_status("Save failed");
                            }
                        }
                    }
                    EditorAction::None => {}
                }
                false
            }
        };
        if quit {
            break;
        }

        wait_for_tick(frame_start);
        next_frame().await;
    }
}

/// Hold the frame to the fixed tick rate. Native: sleep for the bulk,
/// then spin-wait the last stretch for precision. WASM can only spin.
fn wait_for_tick(frame_start: f64) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002;
        while get_time() - frame_start + spin_margin < TARGET_FRAME_TIME {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
    }
    while get_time() - frame_start < TARGET_FRAME_TIME {
        // spin
    }
}
