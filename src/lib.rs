//! Shaft Fall - A single-screen falling-platform arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, platforms, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation capabilities (audio/background availability)
//! - `audio`: Maps simulation events to sound cues for the presentation layer
//! - `error`: Crate error type

pub mod audio;
pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const FPS: u32 = 60;

    /// Playfield dimensions (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player is a square
    pub const PLAYER_SIZE: f32 = 20.0;

    /// Platform dimensions (all kinds share them)
    pub const PLATFORM_WIDTH: f32 = 60.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;

    /// Number of stacked platforms seeded above the start platform
    pub const SEED_PLATFORMS: u32 = 10;
    /// How many of the seeded platforms are forced to Normal
    pub const SEED_NORMAL_PLATFORMS: u32 = 3;
    /// Vertical spacing between seeded platforms
    pub const SEED_SPACING: f32 = 60.0;
    /// Start platform distance from the bottom edge
    pub const START_PLATFORM_OFFSET: f32 = 100.0;

    /// Spawn band above the top edge (inclusive)
    pub const SPAWN_Y_MIN: i32 = -50;
    pub const SPAWN_Y_MAX: i32 = 0;

    /// Score awarded per platform layer cleared
    pub const LAYER_SCORE: u64 = 10;
    /// Difficulty steps fire on multiples of this score
    pub const SPEED_UP_SCORE_STEP: u64 = 100;

    /// Starting and maximum health
    pub const MAX_HEALTH: u32 = 100;
}
