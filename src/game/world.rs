//! Session world
//!
//! Owns the entity set, score and camera for one play session. `reset`
//! spawns the cast (enemy and coin at randomized positions), `tick`
//! advances everything by one fixed step and reports what happened so the
//! runtime and tests never have to re-derive it.

use macroquad::rand::gen_range;

use super::collision::{self, Contact, StepEvents, TickInput};
use super::entities::{Coin, Enemy, Platform, Player};
use super::tuning::{DamageModel, Tuning};
use crate::ui::Rect;

/// Summary of one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickEvents {
    pub jumped: bool,
    pub landed: bool,
    pub coins_collected: u32,
    pub stomped: u32,
    pub hit: bool,
    /// The session is over; the world was left untouched past the hit
    pub defeated: bool,
}

/// All state for one play session
#[derive(Debug, Clone)]
pub struct PlayWorld {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub platforms: Vec<Platform>,
    pub score: u32,
    pub camera_x: f32,
}

impl PlayWorld {
    /// Fresh session: player at the fixed spawn point, one enemy and one
    /// coin at randomized positions, the platform at its fixed position.
    pub fn reset(t: &Tuning) -> Self {
        let player = Player::spawn(t.screen_w * 0.5, t.ground_y, t);

        let enemy_x = gen_range(t.enemy_spawn_margin, t.world_w - t.enemy_spawn_margin);
        let coin_x = gen_range(t.coin_spawn_margin, t.world_w - t.coin_spawn_margin);

        Self {
            player,
            enemies: vec![Enemy::spawn(enemy_x, t)],
            coins: vec![Coin::spawn(coin_x, t.screen_h * 0.5, t)],
            platforms: vec![Platform::new(Rect::new(
                t.screen_w * 0.5 - t.platform_w * 0.5,
                t.ground_y - t.platform_rise,
                t.platform_w,
                t.platform_h,
            ))],
            score: 0,
            camera_x: 0.0,
        }
    }

    /// Advance the session by one tick. On the defeat tick the world
    /// returns immediately: no coin pickup, no camera update.
    pub fn tick(&mut self, t: &Tuning, input: TickInput) -> TickEvents {
        let StepEvents { jumped, landed } =
            collision::step_player(t, &mut self.player, &self.platforms, input);

        for enemy in &mut self.enemies {
            enemy.advance(t);
        }

        let mut ev = TickEvents {
            jumped,
            landed,
            ..Default::default()
        };

        let mut i = 0;
        while i < self.enemies.len() {
            match collision::enemy_contact(t, &self.player, &self.enemies[i].rect) {
                Some(Contact::Stomp) => {
                    self.enemies.remove(i);
                    self.player.vel.y = -t.jump_velocity * t.stomp_rebound;
                    ev.stomped += 1;
                }
                Some(Contact::Hit) => {
                    ev.hit = true;
                    match t.damage_model {
                        DamageModel::InstantDefeat => ev.defeated = true,
                        DamageModel::Health => {
                            self.player.health = (self.player.health - t.hit_damage).max(0);
                            ev.defeated = self.player.health == 0;
                        }
                    }
                    // At most one hit per tick
                    break;
                }
                None => i += 1,
            }
        }
        if ev.defeated {
            return ev;
        }

        let player_rect = self.player.rect;
        let mut collected = 0u32;
        self.coins.retain(|coin| {
            if coin.rect.overlaps(&player_rect) {
                collected += 1;
                false
            } else {
                true
            }
        });
        self.score += collected;
        ev.coins_collected = collected;

        self.camera_x = collision::camera_x(t, self.player.rect.center_x());
        ev
    }
}
