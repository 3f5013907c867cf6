//! Session tuning
//!
//! Every physics and layout constant lives in one immutable struct that is
//! passed into the resolver and spawn code at session-reset time. An
//! optional `tuning.ron` next to the binary can override individual fields;
//! a missing or malformed file falls back to the compiled defaults.

use serde::Deserialize;
use std::path::Path;

/// How platforms interact with the falling player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PlatformMode {
    /// Solid only while descending onto the top from above (default).
    /// A rising player passes through the platform bottom.
    OneWay,
    /// Vertically solid both ways: land on top, bonk the head underneath
    Solid,
    /// Drawn but ignored by the resolver
    Decorative,
}

/// What an enemy hit does to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DamageModel {
    /// Any non-stomp contact ends the session (default)
    InstantDefeat,
    /// Each contact tick subtracts `hit_damage`; the session ends at zero
    Health,
}

/// Immutable physics/session configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_w: f32,
    pub screen_h: f32,
    /// Width of the virtual level; the camera scrolls across it
    pub world_w: f32,
    /// Top edge of the world floor
    pub ground_y: f32,

    pub player_w: f32,
    pub player_h: f32,
    /// Horizontal speed in pixels per tick
    pub player_speed: f32,
    /// Upward impulse applied on jump
    pub jump_velocity: f32,
    /// Added to vertical velocity every tick, uncapped
    pub gravity: f32,

    pub enemy_w: f32,
    pub enemy_h: f32,
    pub enemy_speed: f32,
    /// Keep-out distance from the world edges when randomizing the spawn
    pub enemy_spawn_margin: f32,

    pub coin_radius: f32,
    pub coin_spawn_margin: f32,

    pub platform_w: f32,
    pub platform_h: f32,
    /// Height of the platform top above the ground line
    pub platform_rise: f32,

    /// Player bottom must be within this distance above the enemy top
    /// for a descending contact to count as a stomp
    pub stomp_tolerance: f32,
    /// Fraction of the jump impulse applied as rebound after a stomp
    pub stomp_rebound: f32,

    pub max_health: i32,
    /// Health lost per contact tick under `DamageModel::Health`
    pub hit_damage: i32,

    pub platform_mode: PlatformMode,
    pub damage_model: DamageModel,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_w: 800.0,
            screen_h: 600.0,
            world_w: 2000.0,
            ground_y: 560.0,

            player_w: 40.0,
            player_h: 60.0,
            player_speed: 5.0,
            jump_velocity: 16.0,
            gravity: 0.8,

            enemy_w: 40.0,
            enemy_h: 60.0,
            enemy_speed: 2.0,
            enemy_spawn_margin: 200.0,

            coin_radius: 10.0,
            coin_spawn_margin: 100.0,

            platform_w: 120.0,
            platform_h: 20.0,
            platform_rise: 150.0,

            stomp_tolerance: 10.0,
            stomp_rebound: 0.5,

            max_health: 100,
            hit_damage: 25,

            platform_mode: PlatformMode::OneWay,
            damage_model: DamageModel::InstantDefeat,
        }
    }
}

impl Tuning {
    /// Load overrides from a RON file, falling back to defaults.
    /// The file is optional; only a present-but-broken file is reported.
    pub fn load_or_default(path: &Path) -> Tuning {
        match std::fs::read_to_string(path) {
            Ok(text) => match ron::from_str(&text) {
                Ok(tuning) => {
                    println!("Loaded tuning overrides from {}", path.display());
                    tuning
                }
                Err(e) => {
                    eprintln!("Ignoring malformed {}: {}", path.display(), e);
                    Tuning::default()
                }
            },
            Err(_) => Tuning::default(),
        }
    }
}
