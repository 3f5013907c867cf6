//! Entity records
//!
//! Plain structs, one per entity kind. Each kind has a fixed, small update
//! routine; there is no shared sprite base and no dynamic dispatch. The
//! player's movement is resolved in `collision`, the enemy patrol lives
//! here because it is pure translation.

use macroquad::math::Vec2;

use super::tuning::Tuning;
use crate::ui::Rect;

/// The controllable player
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    /// Set by the resolver on ground/platform contact; gates the jump
    pub on_ground: bool,
    /// Only consulted under `DamageModel::Health`
    pub health: i32,
}

impl Player {
    /// Spawn standing with the bottom-center at (cx, bottom)
    pub fn spawn(cx: f32, bottom: f32, t: &Tuning) -> Self {
        Self {
            rect: Rect::from_midbottom(cx, bottom, t.player_w, t.player_h),
            vel: Vec2::ZERO,
            on_ground: false,
            health: t.max_health,
        }
    }
}

/// Patrolling enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    /// Patrol heading: -1.0 or +1.0
    pub direction: f32,
}

impl Enemy {
    /// Spawn on the ground line with the bottom-center at cx, heading right
    pub fn spawn(cx: f32, t: &Tuning) -> Self {
        Self {
            rect: Rect::from_midbottom(cx, t.ground_y, t.enemy_w, t.enemy_h),
            direction: 1.0,
        }
    }

    /// One patrol tick: pure translation, direction flips at world edges
    pub fn advance(&mut self, t: &Tuning) {
        self.rect.x += t.enemy_speed * self.direction;
        if self.rect.x <= 0.0 || self.rect.right() >= t.world_w {
            self.direction = -self.direction;
        }
    }
}

/// Collectible coin; destroyed on first overlap with the player
#[derive(Debug, Clone)]
pub struct Coin {
    pub rect: Rect,
}

impl Coin {
    /// Spawn centered on (cx, cy); the hitbox is the circle's bounding box
    pub fn spawn(cx: f32, cy: f32, t: &Tuning) -> Self {
        let d = t.coin_radius * 2.0;
        Self {
            rect: Rect::from_center(cx, cy, d, d),
        }
    }
}

/// Static platform; solidity policy comes from `Tuning::platform_mode`
#[derive(Debug, Clone)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_patrol_is_linear_between_edges() {
        let t = Tuning::default();
        let mut e = Enemy::spawn(1000.0, &t);
        let x0 = e.rect.x;
        e.advance(&t);
        assert_eq!(e.rect.x, x0 + t.enemy_speed);
        e.advance(&t);
        assert_eq!(e.rect.x, x0 + 2.0 * t.enemy_speed);
        assert_eq!(e.direction, 1.0);
    }

    #[test]
    fn enemy_flips_exactly_at_world_edges() {
        let t = Tuning::default();
        let mut e = Enemy::spawn(1000.0, &t);
        // Place so the next step reaches the right boundary
        e.rect.x = t.world_w - t.enemy_w - 1.0;
        e.advance(&t);
        assert!(e.rect.right() >= t.world_w);
        assert_eq!(e.direction, -1.0);

        // Next tick walks back in
        let x = e.rect.x;
        e.advance(&t);
        assert_eq!(e.rect.x, x - t.enemy_speed);
        assert_eq!(e.direction, -1.0);
    }

    #[test]
    fn enemy_flips_at_left_edge() {
        let t = Tuning::default();
        let mut e = Enemy::spawn(1000.0, &t);
        e.direction = -1.0;
        e.rect.x = 1.0;
        e.advance(&t);
        assert!(e.rect.x <= 0.0);
        assert_eq!(e.direction, 1.0);
    }

    #[test]
    fn player_spawns_on_the_line_with_full_health() {
        let t = Tuning::default();
        let p = Player::spawn(400.0, t.ground_y, &t);
        assert_eq!(p.rect.bottom(), t.ground_y);
        assert_eq!(p.health, t.max_health);
        assert!(!p.on_ground);
    }
}
