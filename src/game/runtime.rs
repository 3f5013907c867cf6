//! Game tool: session state machine and scene rendering
//!
//! Two states, menu and play. Confirm starts a fresh session, cancel (or
//! defeat) falls back to the menu, cancel in the menu asks the host loop
//! to quit. Transitions are driven by a plain `FrameActions` value so the
//! machine stays testable away from the window.

use macroquad::prelude::*;

use super::collision::TickInput;
use super::tuning::Tuning;
use super::world::PlayWorld;
use crate::input::{self, Action};
use crate::ui;

const SKY_TOP: Color = Color::new(0.53, 0.81, 0.98, 1.0);
const SKY_BOTTOM: Color = Color::new(0.0, 0.47, 1.0, 1.0);
const TEXT_DIM: Color = Color::new(1.0, 1.0, 1.0, 0.7);

/// Session state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Play,
}

/// Input sampled once per frame for the game tool
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameActions {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub confirm: bool,
    pub cancel: bool,
}

impl FrameActions {
    /// Sample the keyboard. Movement and jump are held, the rest are edges.
    pub fn poll() -> Self {
        Self {
            left: input::down(Action::MoveLeft),
            right: input::down(Action::MoveRight),
            jump: input::down(Action::Jump),
            confirm: input::pressed(Action::Confirm),
            cancel: input::pressed(Action::Cancel),
        }
    }
}

/// State for the game tool
pub struct GameToolState {
    pub mode: Mode,
    pub world: PlayWorld,
    pub tuning: Tuning,
}

impl GameToolState {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            mode: Mode::Menu,
            world: PlayWorld::reset(&tuning),
            tuning,
        }
    }

    /// Advance one frame. Returns true when the player asked to quit.
    pub fn update(&mut self, actions: FrameActions) -> bool {
        match self.mode {
            Mode::Menu => {
                if actions.confirm {
                    self.world = PlayWorld::reset(&self.tuning);
                    self.mode = Mode::Play;
                } else if actions.cancel {
                    return true;
                }
            }
            Mode::Play => {
                if actions.cancel {
                    self.mode = Mode::Menu;
                } else {
                    let events = self.world.tick(
                        &self.tuning,
                        TickInput {
                            left: actions.left,
                            right: actions.right,
                            jump: actions.jump,
                        },
                    );
                    if events.defeated {
                        self.mode = Mode::Menu;
                    }
                }
            }
        }
        false
    }

    pub fn draw(&self, assets: &SceneAssets, skin: Option<&Texture2D>) {
        let t = &self.tuning;
        draw_texture_ex(
            &assets.sky,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(t.screen_w, t.screen_h)),
                ..Default::default()
            },
        );

        match self.mode {
            Mode::Menu => self.draw_menu(),
            Mode::Play => self.draw_scene(skin),
        }
    }

    fn draw_menu(&self) {
        let t = &self.tuning;
        let cx = t.screen_w * 0.5;
        ui::draw_text_centered("HOPKIN", cx, t.screen_h / 3.0, 48.0, WHITE);
        ui::draw_text_centered("Press Enter to play", cx, t.screen_h * 0.5, 28.0, WHITE);
        ui::draw_text_centered(
            "Escape to quit",
            cx,
            t.screen_h * 0.5 + 40.0,
            22.0,
            TEXT_DIM,
        );
        ui::draw_text_centered(
            "Tab for the skin editor",
            cx,
            t.screen_h * 0.5 + 70.0,
            22.0,
            TEXT_DIM,
        );
    }

    fn draw_scene(&self, skin: Option<&Texture2D>) {
        let t = &self.tuning;
        let cam = self.world.camera_x;

        // World floor band
        draw_rectangle(-cam, t.ground_y, t.world_w, t.screen_h - t.ground_y, WHITE);

        for platform in &self.world.platforms {
            let r = platform.rect;
            draw_rectangle(r.x - cam, r.y, r.w, r.h, WHITE);
        }

        for coin in &self.world.coins {
            draw_circle(
                coin.rect.center_x() - cam,
                coin.rect.center_y(),
                t.coin_radius,
                YELLOW,
            );
        }

        for enemy in &self.world.enemies {
            let r = enemy.rect;
            draw_rectangle(r.x - cam, r.y, r.w, r.h, RED);
            draw_face(r.x - cam, r.y, r.w, r.h, 6.0, 8.0, 10.0, 5.0);
        }

        let p = self.world.player.rect;
        match skin {
            Some(texture) => draw_texture_ex(
                texture,
                p.x - cam,
                p.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(p.w, p.h)),
                    ..Default::default()
                },
            ),
            None => {
                // Same green as the untouched skin grid
                draw_rectangle(p.x - cam, p.y, p.w, p.h, Color::from_rgba(0, 255, 0, 255));
                draw_face(p.x - cam, p.y, p.w, p.h, 8.0, 10.0, 15.0, 8.0);
            }
        }

        ui::draw_text_centered(
            &format!("Score: {}", self.world.score),
            t.screen_w - 70.0,
            20.0,
            28.0,
            WHITE,
        );
    }
}

/// Minimalist two-eyes-and-a-mouth face for untextured entities
fn draw_face(x: f32, y: f32, w: f32, h: f32, eye: f32, inset: f32, eye_y: f32, mouth_inset: f32) {
    draw_rectangle(x + inset, y + eye_y, eye, eye, WHITE);
    draw_rectangle(x + w - inset - eye, y + eye_y, eye, eye, WHITE);
    draw_rectangle(
        x + mouth_inset,
        y + h - 15.0,
        w - mouth_inset * 2.0,
        5.0,
        BLACK,
    );
}

/// Render resources built once at startup
pub struct SceneAssets {
    pub sky: Texture2D,
}

impl SceneAssets {
    /// Vertical sky gradient, stretched over the screen each frame
    pub fn build(t: &Tuning) -> Self {
        let h = t.screen_h as u16;
        let mut img = Image::gen_image_color(1, h, WHITE);
        for y in 0..h as u32 {
            let k = y as f32 / t.screen_h;
            img.set_pixel(
                0,
                y,
                Color::new(
                    SKY_TOP.r + (SKY_BOTTOM.r - SKY_TOP.r) * k,
                    SKY_TOP.g + (SKY_BOTTOM.g - SKY_TOP.g) * k,
                    SKY_TOP.b + (SKY_BOTTOM.b - SKY_TOP.b) * k,
                    1.0,
                ),
            );
        }
        let sky = Texture2D::from_image(&img);
        sky.set_filter(FilterMode::Linear);
        Self { sky }
    }
}
