//! Movement and collision resolution
//!
//! The deterministic core of the game: one fixed-rate step for the player
//! against the ground line and the platform list, plus the AABB
//! interaction rules (stomp/hit, coin pickup) and the camera clamp.
//!
//! Resolution order per tick:
//! 1. horizontal velocity, clamped to the world bounds
//! 2. gravity (unconditional, uncapped)
//! 3. vertical velocity
//! 4. ground test
//! 5. platform test (policy-dependent, first qualifying platform wins)
//!
//! The ground test runs before the platform pass; a platform flush with
//! the ground can never steal the contact. The jump is gated on the ground
//! flag left by the previous tick's resolution, so there is exactly one
//! jump per ground contact.

use super::entities::{Platform, Player};
use super::tuning::{PlatformMode, Tuning};
use crate::ui::Rect;

/// Held inputs for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// What the movement step did
#[derive(Debug, Clone, Copy, Default)]
pub struct StepEvents {
    pub jumped: bool,
    pub landed: bool,
}

/// Player-enemy contact classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Descending contact on the enemy's head: enemy dies, player rebounds
    Stomp,
    /// Anything else: the player takes the consequences
    Hit,
}

/// Advance the player by one tick against the static world.
pub fn step_player(
    t: &Tuning,
    player: &mut Player,
    platforms: &[Platform],
    input: TickInput,
) -> StepEvents {
    let mut ev = StepEvents::default();

    // Held keys set the horizontal velocity outright; holding both cancels
    player.vel.x = 0.0;
    if input.left {
        player.vel.x -= t.player_speed;
    }
    if input.right {
        player.vel.x += t.player_speed;
    }

    // One-shot jump, gated on the previous tick's ground contact
    if input.jump && player.on_ground {
        player.vel.y = -t.jump_velocity;
        player.on_ground = false;
        ev.jumped = true;
    }
    let was_grounded = player.on_ground;

    // 1. horizontal movement, clamped (not bounced) at the world bounds
    player.rect.x += player.vel.x;
    if player.rect.x < 0.0 {
        player.rect.x = 0.0;
    }
    if player.rect.right() > t.world_w {
        player.rect.x = t.world_w - player.rect.w;
    }

    // 2-3. gravity, then vertical movement
    player.vel.y += t.gravity;
    player.rect.y += player.vel.y;

    // 4. ground line
    player.on_ground = false;
    if player.rect.bottom() >= t.ground_y {
        player.rect.y = t.ground_y - player.rect.h;
        player.vel.y = 0.0;
        player.on_ground = true;
    }

    // 5. platforms
    match t.platform_mode {
        PlatformMode::OneWay => {
            // Only while stationary-or-falling; a rising player passes through
            if player.vel.y >= 0.0 {
                for platform in platforms {
                    if player.rect.overlaps(&platform.rect) {
                        // Was the player above the platform before this
                        // tick's vertical displacement?
                        let prev_bottom = player.rect.bottom() - player.vel.y;
                        if prev_bottom <= platform.rect.y {
                            player.rect.y = platform.rect.y - player.rect.h;
                            player.vel.y = 0.0;
                            player.on_ground = true;
                            break;
                        }
                    }
                }
            }
        }
        PlatformMode::Solid => {
            if player.vel.y >= 0.0 {
                for platform in platforms {
                    if player.rect.overlaps(&platform.rect) {
                        player.rect.y = platform.rect.y - player.rect.h;
                        player.vel.y = 0.0;
                        player.on_ground = true;
                        break;
                    }
                }
            } else {
                for platform in platforms {
                    if player.rect.overlaps(&platform.rect) {
                        player.rect.y = platform.rect.bottom();
                        player.vel.y = 0.0;
                        break;
                    }
                }
            }
        }
        PlatformMode::Decorative => {}
    }

    ev.landed = player.on_ground && !was_grounded;
    ev
}

/// Stomp rule: descending, with the player's bottom edge within the
/// tolerance above the enemy's top edge. Exact edge contact stomps.
pub fn is_stomp(t: &Tuning, player_vel_y: f32, player_bottom: f32, enemy_top: f32) -> bool {
    player_vel_y > 0.0 && player_bottom <= enemy_top + t.stomp_tolerance
}

/// Classify a player-enemy interaction, if their boxes overlap at all
pub fn enemy_contact(t: &Tuning, player: &Player, enemy_rect: &Rect) -> Option<Contact> {
    if !player.rect.overlaps(enemy_rect) {
        return None;
    }
    if is_stomp(t, player.vel.y, player.rect.bottom(), enemy_rect.y) {
        Some(Contact::Stomp)
    } else {
        Some(Contact::Hit)
    }
}

/// Camera follows the player's center, clamped to the world
pub fn camera_x(t: &Tuning, player_center_x: f32) -> f32 {
    (player_center_x - t.screen_w * 0.5).clamp(0.0, t.world_w - t.screen_w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::Enemy;

    fn approx(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "expected {b}, got {a}");
    }

    fn airborne_player(t: &Tuning, cx: f32, bottom: f32) -> Player {
        Player::spawn(cx, bottom, t)
    }

    fn default_platform(t: &Tuning) -> Platform {
        Platform::new(Rect::new(
            t.screen_w * 0.5 - t.platform_w * 0.5,
            t.ground_y - t.platform_rise,
            t.platform_w,
            t.platform_h,
        ))
    }

    #[test]
    fn gravity_accumulates_unbounded_while_airborne() {
        let t = Tuning::default();
        let mut p = airborne_player(&t, 400.0, 300.0);
        step_player(&t, &mut p, &[], TickInput::default());
        approx(p.vel.y, t.gravity);
        step_player(&t, &mut p, &[], TickInput::default());
        approx(p.vel.y, 2.0 * t.gravity);
        assert!(!p.on_ground);
    }

    #[test]
    fn falling_player_snaps_to_the_ground_line() {
        let t = Tuning::default();
        let mut p = airborne_player(&t, 400.0, t.ground_y - 0.5);
        let ev = step_player(&t, &mut p, &[], TickInput::default());
        approx(p.rect.bottom(), t.ground_y);
        approx(p.vel.y, 0.0);
        assert!(p.on_ground);
        assert!(ev.landed);
    }

    #[test]
    fn jump_only_fires_from_the_ground_and_clears_the_flag() {
        let t = Tuning::default();
        let mut p = airborne_player(&t, 400.0, t.ground_y);
        // Settle onto the ground first
        step_player(&t, &mut p, &[], TickInput::default());
        assert!(p.on_ground);

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        let ev = step_player(&t, &mut p, &[], jump);
        assert!(ev.jumped);
        assert!(!p.on_ground);
        approx(p.vel.y, -t.jump_velocity + t.gravity);

        // Held jump must not fire again mid-air
        let ev = step_player(&t, &mut p, &[], jump);
        assert!(!ev.jumped);
        approx(p.vel.y, -t.jump_velocity + 2.0 * t.gravity);
    }

    #[test]
    fn horizontal_movement_clamps_at_world_bounds() {
        let t = Tuning::default();
        let mut p = airborne_player(&t, 400.0, 300.0);
        p.rect.x = 2.0;
        step_player(
            &t,
            &mut p,
            &[],
            TickInput {
                left: true,
                ..Default::default()
            },
        );
        approx(p.rect.x, 0.0);

        p.rect.x = t.world_w - p.rect.w - 2.0;
        step_player(
            &t,
            &mut p,
            &[],
            TickInput {
                right: true,
                ..Default::default()
            },
        );
        approx(p.rect.right(), t.world_w);
    }

    #[test]
    fn holding_both_directions_cancels_out() {
        let t = Tuning::default();
        let mut p = airborne_player(&t, 400.0, 300.0);
        let x = p.rect.x;
        step_player(
            &t,
            &mut p,
            &[],
            TickInput {
                left: true,
                right: true,
                ..Default::default()
            },
        );
        approx(p.rect.x, x);
    }

    #[test]
    fn rising_player_passes_through_a_one_way_platform() {
        let t = Tuning::default();
        let platform = default_platform(&t);
        // Fully overlapping the platform band, moving upward
        let mut p = airborne_player(&t, 400.0, platform.rect.bottom() + 10.0);
        p.vel.y = -10.0;
        let y0 = p.rect.y;
        step_player(&t, &mut p, &[platform], TickInput::default());
        assert!(!p.on_ground);
        approx(p.vel.y, -10.0 + t.gravity);
        approx(p.rect.y, y0 - 10.0 + t.gravity);
    }

    #[test]
    fn descending_from_above_lands_on_a_one_way_platform() {
        let t = Tuning::default();
        let platform = default_platform(&t);
        let mut p = airborne_player(&t, 400.0, platform.rect.y - 5.0);
        p.vel.y = 10.0;
        let ev = step_player(&t, &mut p, &[platform.clone()], TickInput::default());
        approx(p.rect.bottom(), platform.rect.y);
        approx(p.vel.y, 0.0);
        assert!(p.on_ground);
        assert!(ev.landed);
    }

    #[test]
    fn already_past_the_top_keeps_falling_through() {
        let t = Tuning::default();
        let platform = default_platform(&t);
        // Bottom already below the platform top: it has passed through
        let mut p = airborne_player(&t, 400.0, platform.rect.y + 5.0);
        p.vel.y = 2.0;
        step_player(&t, &mut p, &[platform.clone()], TickInput::default());
        assert!(!p.on_ground);
        assert!(p.rect.bottom() > platform.rect.y);
        approx(p.vel.y, 2.0 + t.gravity);
    }

    #[test]
    fn first_qualifying_platform_wins_in_slice_order() {
        let t = Tuning::default();
        let upper = Platform::new(Rect::new(300.0, 400.0, 200.0, 20.0));
        let lower = Platform::new(Rect::new(300.0, 410.0, 200.0, 20.0));
        let land = |platforms: &[Platform]| {
            let mut p = airborne_player(&t, 400.0, 395.0);
            p.vel.y = 30.0;
            step_player(&t, &mut p, platforms, TickInput::default());
            p.rect.bottom()
        };
        approx(land(&[upper.clone(), lower.clone()]), 400.0);
        approx(land(&[lower, upper]), 410.0);
    }

    #[test]
    fn ground_wins_over_a_platform_flush_with_it() {
        let t = Tuning::default();
        let flush = Platform::new(Rect::new(300.0, t.ground_y, 200.0, 20.0));
        let mut p = airborne_player(&t, 400.0, t.ground_y - 5.0);
        p.vel.y = 10.0;
        step_player(&t, &mut p, &[flush], TickInput::default());
        approx(p.rect.bottom(), t.ground_y);
        assert!(p.on_ground);
    }

    #[test]
    fn solid_platform_lands_without_the_previous_bottom_gate() {
        let mut t = Tuning::default();
        t.platform_mode = PlatformMode::Solid;
        let platform = default_platform(&t);
        let mut p = airborne_player(&t, 400.0, platform.rect.y + 5.0);
        p.vel.y = 2.0;
        step_player(&t, &mut p, &[platform.clone()], TickInput::default());
        approx(p.rect.bottom(), platform.rect.y);
        assert!(p.on_ground);
    }

    #[test]
    fn solid_platform_bonks_a_rising_head() {
        let mut t = Tuning::default();
        t.platform_mode = PlatformMode::Solid;
        let platform = default_platform(&t);
        let mut p = airborne_player(&t, 400.0, platform.rect.bottom() + t.player_h + 10.0);
        p.vel.y = -20.0;
        step_player(&t, &mut p, &[platform.clone()], TickInput::default());
        approx(p.rect.y, platform.rect.bottom());
        approx(p.vel.y, 0.0);
        assert!(!p.on_ground);
    }

    #[test]
    fn decorative_platforms_are_ignored() {
        let mut t = Tuning::default();
        t.platform_mode = PlatformMode::Decorative;
        let platform = default_platform(&t);
        let mut p = airborne_player(&t, 400.0, platform.rect.y - 5.0);
        p.vel.y = 10.0;
        step_player(&t, &mut p, &[platform.clone()], TickInput::default());
        assert!(!p.on_ground);
        assert!(p.rect.bottom() > platform.rect.y);
    }

    #[test]
    fn exact_edge_contact_classifies_as_stomp() {
        let t = Tuning::default();
        assert!(is_stomp(&t, 5.0, 500.0, 500.0));
    }

    #[test]
    fn stomp_requires_descent() {
        let t = Tuning::default();
        assert!(!is_stomp(&t, 0.0, 500.0, 500.0));
        assert!(!is_stomp(&t, -5.0, 500.0, 500.0));
    }

    #[test]
    fn deep_overlap_is_a_hit() {
        let t = Tuning::default();
        let enemy = Enemy::spawn(400.0, &t);
        let mut p = Player::spawn(400.0, t.ground_y, &t);
        p.vel.y = 5.0;
        // Bottoms aligned: far below the tolerance band
        assert_eq!(enemy_contact(&t, &p, &enemy.rect), Some(Contact::Hit));
    }

    #[test]
    fn head_overlap_within_tolerance_is_a_stomp() {
        let t = Tuning::default();
        let enemy = Enemy::spawn(400.0, &t);
        let mut p = Player::spawn(400.0, enemy.rect.y + 5.0, &t);
        p.vel.y = 5.0;
        assert_eq!(enemy_contact(&t, &p, &enemy.rect), Some(Contact::Stomp));
    }

    #[test]
    fn separated_boxes_are_no_contact() {
        let t = Tuning::default();
        let enemy = Enemy::spawn(1500.0, &t);
        let p = Player::spawn(400.0, t.ground_y, &t);
        assert_eq!(enemy_contact(&t, &p, &enemy.rect), None);
    }

    #[test]
    fn camera_clamps_to_both_ends_of_the_world() {
        let t = Tuning::default();
        approx(camera_x(&t, 100.0), 0.0);
        approx(camera_x(&t, 1000.0), 600.0);
        approx(camera_x(&t, 1900.0), t.world_w - t.screen_w);
    }
}
