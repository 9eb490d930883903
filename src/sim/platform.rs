//! Platforms and their per-kind behavior

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::{PLATFORM_HEIGHT, PLATFORM_WIDTH, SCREEN_WIDTH};
use crate::error::{Error, Result};
use crate::tuning::Tuning;

/// Platform types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Normal,
    Moving,
    Breaking,
    Bouncy,
}

impl PlatformKind {
    pub const ALL: [PlatformKind; 4] = [
        PlatformKind::Normal,
        PlatformKind::Moving,
        PlatformKind::Breaking,
        PlatformKind::Bouncy,
    ];

    /// Display color (RGB) for renderers
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            PlatformKind::Normal => [0, 255, 0],
            PlatformKind::Moving => [0, 0, 255],
            PlatformKind::Breaking => [255, 0, 0],
            PlatformKind::Bouncy => [255, 255, 0],
        }
    }
}

impl TryFrom<u8> for PlatformKind {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        PlatformKind::ALL
            .get(tag as usize)
            .copied()
            .ok_or(Error::UnknownPlatformKind(tag))
    }
}

/// What a platform does when the player lands on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Plain landing
    Solid,
    /// A Breaking platform just started its countdown
    BreakArmed,
    /// Launch the player upward
    Bounce,
}

/// Outcome of a platform's per-tick update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformUpdate {
    Stay,
    Gone,
}

/// A platform entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub kind: PlatformKind,
    pub body: Body,
    /// +1 right, -1 left (Moving only)
    pub move_direction: f32,
    /// Ticks until removal, 0 while untriggered (Breaking only)
    pub break_timer: u32,
    /// Set on the tick the break timer is armed; the countdown starts next update
    #[serde(default)]
    armed_this_tick: bool,
}

impl Platform {
    pub fn new(id: u32, x: f32, y: f32, kind: PlatformKind) -> Self {
        Self {
            id,
            kind,
            body: Body {
                pos: Vec2::new(x, y),
                size: Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT),
                vel: Vec2::ZERO,
            },
            move_direction: 1.0,
            break_timer: 0,
            armed_this_tick: false,
        }
    }

    /// Advance per-kind behavior by one tick
    pub fn update(&mut self, tuning: &Tuning) -> PlatformUpdate {
        match self.kind {
            PlatformKind::Normal | PlatformKind::Bouncy => PlatformUpdate::Stay,
            PlatformKind::Moving => {
                self.body.pos.x += self.move_direction * tuning.platform_move_speed;
                if self.body.left() <= 0.0 || self.body.right() >= SCREEN_WIDTH {
                    self.move_direction = -self.move_direction;
                }
                PlatformUpdate::Stay
            }
            PlatformKind::Breaking => {
                if self.armed_this_tick {
                    self.armed_this_tick = false;
                    return PlatformUpdate::Stay;
                }
                if self.break_timer > 0 {
                    self.break_timer -= 1;
                    if self.break_timer == 0 {
                        return PlatformUpdate::Gone;
                    }
                }
                PlatformUpdate::Stay
            }
        }
    }

    /// React to the player landing on this platform
    pub fn on_collision(&mut self, tuning: &Tuning) -> Contact {
        match self.kind {
            PlatformKind::Breaking if self.break_timer == 0 => {
                self.break_timer = tuning.break_delay_ticks;
                self.armed_this_tick = true;
                Contact::BreakArmed
            }
            PlatformKind::Bouncy => Contact::Bounce,
            _ => Contact::Solid,
        }
    }
}
