//! Game state and core simulation types
//!
//! Everything the presentation layer reads lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::platform::{Platform, PlatformKind};
use super::player::Player;
use crate::consts::*;
use crate::error::Result;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen until unpaused
    Paused,
    /// Run ended, waiting for restart
    GameOver,
}

/// Advisory notifications for audio/UI, produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player jumped off a platform
    Jump,
    /// Player landed on a Breaking platform and started its countdown
    PlatformBreakArmed { id: u32 },
    /// Player was launched by a Bouncy platform
    PlatformBounce { id: u32 },
    /// Run ended
    GameOver { score: u64 },
}

/// Values a HUD shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub health: u32,
    pub level: u32,
    pub score: u64,
    pub platform_speed: f32,
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed of the current run
    pub seed: u64,
    /// World RNG (layout and spawns)
    pub rng: Pcg32,
    /// Balance values
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    /// Score
    pub score: u64,
    /// Scroll speed (pixels per tick)
    pub platform_speed: f32,
    /// The player
    pub player: Player,
    /// Active platforms, in spawn order
    pub platforms: Vec<Platform>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new game state with custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            platform_speed: tuning.platform_speed,
            tuning,
            phase: GamePhase::Playing,
            time_ticks: 0,
            score: 0,
            player: Player::new(Vec2::ZERO),
            platforms: Vec::new(),
            next_id: 1,
        };
        state.seed_platforms();
        log::info!("New run (seed {seed})");
        state
    }

    /// Start over with a fresh layout, keeping the tuning
    pub fn restart(&mut self) {
        let seed = self.rng.random::<u64>();
        log::info!("Restarting (previous score {}, new seed {seed})", self.score);
        *self = Self::build(seed, self.tuning.clone());
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Toggle between Playing and Paused. Has no effect once the run is over.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            GamePhase::GameOver => GamePhase::GameOver,
        };
    }

    pub fn hud(&self) -> Hud {
        Hud {
            health: self.player.health,
            level: self.player.level,
            score: self.score,
            platform_speed: self.platform_speed,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a platform at the given position
    pub fn push_platform(&mut self, x: f32, y: f32, kind: PlatformKind) -> u32 {
        let id = self.next_entity_id();
        self.platforms.push(Platform::new(id, x, y, kind));
        id
    }

    /// Pick a kind uniformly from all four
    pub fn random_kind(&mut self) -> PlatformKind {
        PlatformKind::ALL[self.rng.random_range(0..PlatformKind::ALL.len())]
    }

    /// Random whole-pixel x that keeps a platform on screen
    fn random_platform_x(&mut self) -> f32 {
        self.rng.random_range(0..=(SCREEN_WIDTH - PLATFORM_WIDTH) as i32) as f32
    }

    /// Spawn one platform just above the top edge
    pub fn spawn_platform(&mut self) -> u32 {
        let x = self.random_platform_x();
        let y = self.rng.random_range(SPAWN_Y_MIN..=SPAWN_Y_MAX) as f32;
        let kind = self.random_kind();
        let id = self.push_platform(x, y, kind);
        log::debug!("Spawned {kind:?} platform {id} at ({x}, {y})");
        id
    }

    /// Initial layout: a Bouncy start platform under the player plus a stack
    /// of random platforms, the lowest few forced to Normal
    fn seed_platforms(&mut self) {
        let start_x = SCREEN_WIDTH / 2.0 - PLATFORM_WIDTH / 2.0;
        let start_y = SCREEN_HEIGHT - START_PLATFORM_OFFSET;
        self.push_platform(start_x, start_y, PlatformKind::Bouncy);

        self.player.body.pos = Vec2::new(
            start_x + PLATFORM_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
            start_y - PLAYER_SIZE,
        );
        self.player.on_ground = true;
        self.player.body.vel.y = 0.0;

        let band_top = (SCREEN_HEIGHT / 2.0) as i32;
        let band_bottom = (SCREEN_HEIGHT - 150.0) as i32;
        for i in 0..SEED_PLATFORMS {
            let x = self.random_platform_x();
            let y = self.rng.random_range(band_top..=band_bottom) as f32 - i as f32 * SEED_SPACING;
            let kind = if i < SEED_NORMAL_PLATFORMS {
                PlatformKind::Normal
            } else {
                self.random_kind()
            };
            self.push_platform(x, y, kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(12345);
        assert_eq!(state.platforms.len(), 1 + SEED_PLATFORMS as usize);

        let start = &state.platforms[0];
        assert_eq!(start.kind, PlatformKind::Bouncy);
        assert_eq!(start.body.pos, Vec2::new(170.0, 500.0));

        // Player stands centered on the start platform
        assert!(state.player.on_ground);
        assert_eq!(state.player.body.bottom(), start.body.top());
        assert_eq!(state.player.body.center_x(), start.body.center_x());
        assert_eq!(state.player.body.vel, Vec2::ZERO);

        for platform in &state.platforms[1..4] {
            assert_eq!(platform.kind, PlatformKind::Normal);
        }
        for (i, platform) in state.platforms[1..].iter().enumerate() {
            let lowest = 300.0 - i as f32 * SEED_SPACING;
            let highest = 450.0 - i as f32 * SEED_SPACING;
            assert!(platform.body.top() >= lowest && platform.body.top() <= highest);
            assert!(platform.body.left() >= 0.0 && platform.body.right() <= SCREEN_WIDTH);
        }
    }

    #[test]
    fn test_fresh_state_values() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.health, MAX_HEALTH);
        assert_eq!(state.player.level, 0);
        assert_eq!(state.platform_speed, state.tuning.platform_speed);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(777);
        let b = GameState::new(777);
        assert_eq!(a.platforms, b.platforms);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut state = GameState::new(5);
        let id = state.spawn_platform();
        let ids: HashSet<u32> = state.platforms.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), state.platforms.len());
        assert_eq!(state.platforms.last().map(|p| p.id), Some(id));
    }

    #[test]
    fn test_spawn_band() {
        let mut state = GameState::new(42);
        for _ in 0..200 {
            state.spawn_platform();
        }
        for platform in &state.platforms[11..] {
            assert!(platform.body.top() >= SPAWN_Y_MIN as f32);
            assert!(platform.body.top() <= SPAWN_Y_MAX as f32);
            assert!(platform.body.right() <= SCREEN_WIDTH);
        }
        // All four kinds show up in a large sample
        for kind in PlatformKind::ALL {
            assert!(state.platforms.iter().any(|p| p.kind == kind));
        }
    }

    #[test]
    fn test_pause_toggle_ignored_after_game_over() {
        let mut state = GameState::new(9);
        state.toggle_pause();
        assert!(state.paused());
        state.toggle_pause();
        assert!(!state.paused());

        state.phase = GamePhase::GameOver;
        state.toggle_pause();
        assert!(state.game_over());
        assert!(!state.paused());
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = GameState::new(3);
        state.score = 250;
        state.player.health = 20;
        state.player.level = 25;
        state.platform_speed = 1.4;
        state.phase = GamePhase::GameOver;
        state.platforms.clear();

        state.restart();

        assert_eq!(state.score, 0);
        assert_eq!(state.player.health, MAX_HEALTH);
        assert_eq!(state.player.level, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.platform_speed, state.tuning.platform_speed);
        assert_eq!(state.platforms.len(), 11);
        assert_eq!(state.platforms[0].kind, PlatformKind::Bouncy);
    }

    #[test]
    fn test_with_tuning_validates() {
        let bad = Tuning {
            gravity: -1.0,
            ..Default::default()
        };
        assert!(GameState::with_tuning(1, bad).is_err());

        let good = Tuning {
            max_platforms: 20,
            ..Default::default()
        };
        let state = GameState::with_tuning(1, good).unwrap();
        assert_eq!(state.tuning.max_platforms, 20);
    }
}
