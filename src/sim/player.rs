//! The player-controlled block

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::{landing_on, within_scan_window};
use super::platform::Platform;
use crate::consts::{MAX_HEALTH, PLAYER_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::Tuning;

/// The player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// True only while resting on a platform this tick
    pub on_ground: bool,
    pub health: u32,
    /// Platform layers cleared
    pub level: u32,
    /// Top of the highest layer cleared this run, scrolled along with the platforms
    #[serde(default)]
    pub cleared_y: Option<f32>,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body {
                pos,
                size: Vec2::splat(PLAYER_SIZE),
                vel: Vec2::ZERO,
            },
            on_ground: false,
            health: MAX_HEALTH,
            level: 0,
            cleared_y: None,
        }
    }

    pub fn apply_gravity(&mut self, tuning: &Tuning) {
        self.body.vel.y = (self.body.vel.y + tuning.gravity).min(tuning.max_fall_speed);
    }

    /// Move by the current velocity and keep inside the side walls
    pub fn integrate(&mut self) {
        self.body.pos += self.body.vel;
        self.body.clamp_x(SCREEN_WIDTH);
    }

    /// Jump if standing on something. Returns whether the jump happened.
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if !self.on_ground {
            return false;
        }
        self.body.vel.y = tuning.jump_power;
        true
    }

    pub fn move_left(&mut self, tuning: &Tuning) {
        self.body.vel.x = -tuning.move_speed;
    }

    pub fn move_right(&mut self, tuning: &Tuning) {
        self.body.vel.x = tuning.move_speed;
    }

    pub fn stop(&mut self) {
        self.body.vel.x = 0.0;
    }

    /// Find the platform the player lands on this tick, if any
    ///
    /// Platforms are scanned in container order and the first one that
    /// passes the landing test wins, even if a later one is closer. On a hit
    /// the player is grounded and snapped onto the platform's top.
    pub fn check_collision(&mut self, platforms: &[Platform], tuning: &Tuning) -> Option<usize> {
        self.on_ground = false;

        let window = SCREEN_HEIGHT / 2.0;
        let (index, landing) = platforms
            .iter()
            .enumerate()
            .filter(|(_, p)| within_scan_window(&self.body, &p.body, window))
            .find_map(|(i, p)| {
                landing_on(&self.body, &p.body, tuning.landing_tolerance).map(|l| (i, l))
            })?;

        self.on_ground = true;
        self.body.vel.y = 0.0;
        self.body.set_bottom(landing.surface_y);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::platform::PlatformKind;

    #[test]
    fn test_gravity_clamps_to_terminal_velocity() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::ZERO);
        player.apply_gravity(&tuning);
        assert_eq!(player.body.vel.y, 0.5);

        for _ in 0..100 {
            player.apply_gravity(&tuning);
        }
        assert_eq!(player.body.vel.y, tuning.max_fall_speed);
    }

    #[test]
    fn test_integrate_clamps_to_walls() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::new(2.0, 100.0));
        player.move_left(&tuning);
        player.integrate();
        assert_eq!(player.body.left(), 0.0);

        player.body.pos.x = SCREEN_WIDTH - PLAYER_SIZE - 1.0;
        player.move_right(&tuning);
        player.integrate();
        assert_eq!(player.body.right(), SCREEN_WIDTH);

        player.stop();
        assert_eq!(player.body.vel.x, 0.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.body.vel.y = 3.0;

        assert!(!player.jump(&tuning));
        assert_eq!(player.body.vel.y, 3.0);

        player.on_ground = true;
        assert!(player.jump(&tuning));
        assert_eq!(player.body.vel.y, tuning.jump_power);
    }

    #[test]
    fn test_lands_on_first_match_in_order() {
        let tuning = Tuning::default();
        // Both platforms satisfy the landing test; the lower one comes first
        let platforms = vec![
            Platform::new(1, 90.0, 306.0, PlatformKind::Normal),
            Platform::new(2, 90.0, 300.0, PlatformKind::Normal),
        ];
        let mut player = Player::new(Vec2::new(100.0, 0.0));
        player.body.set_bottom(308.0);
        player.body.vel.y = 4.0;

        assert_eq!(player.check_collision(&platforms, &tuning), Some(0));
        assert!(player.on_ground);
        assert_eq!(player.body.vel.y, 0.0);
        assert_eq!(player.body.bottom(), 306.0);
    }

    #[test]
    fn test_miss_clears_ground_flag() {
        let tuning = Tuning::default();
        let platforms = vec![Platform::new(1, 300.0, 300.0, PlatformKind::Normal)];
        let mut player = Player::new(Vec2::new(100.0, 0.0));
        player.body.set_bottom(305.0);
        player.body.vel.y = 4.0;
        player.on_ground = true;

        assert_eq!(player.check_collision(&platforms, &tuning), None);
        assert!(!player.on_ground);
        assert_eq!(player.body.vel.y, 4.0);
    }

    #[test]
    fn test_ignores_platforms_outside_scan_window() {
        let tuning = Tuning::default();
        // A very tall player would reach this platform, but it's too far away to scan
        let platforms = vec![Platform::new(1, 90.0, 400.0, PlatformKind::Normal)];
        let mut player = Player::new(Vec2::new(100.0, 50.0));
        player.body.size.y = 355.0;
        player.body.vel.y = 1.0;

        assert_eq!(player.check_collision(&platforms, &tuning), None);
    }
}
