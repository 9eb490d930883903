//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (platforms kept in spawn order)
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod collision;
pub mod platform;
pub mod player;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{Landing, landing_on, within_scan_window};
pub use platform::{Contact, Platform, PlatformKind, PlatformUpdate};
pub use player::Player;
pub use state::{GameEvent, GamePhase, GameState, Hud};
pub use tick::{Command, Horizontal, TickInput, tick};
