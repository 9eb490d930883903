//! Data-driven game balance
//!
//! Every number that shapes how the game plays lives here so it can be tweaked
//! from a JSON file without touching simulation code. Screen geometry stays in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::FPS;
use crate::error::{Error, Result};

/// Balance values for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative = up)
    pub jump_power: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    /// Horizontal speed of Moving platforms
    pub platform_move_speed: f32,
    /// Initial scroll speed
    pub platform_speed: f32,
    /// Scroll speed cap
    pub max_platform_speed: f32,
    /// Scroll speed added per difficulty step
    pub speed_increment: f32,
    /// Active platform cap; spawning stops at this count
    pub max_platforms: usize,
    /// Health lost per tick spent above the ceiling
    pub ceiling_damage: u32,
    /// Downward velocity applied when the ceiling pushes the player back
    pub ceiling_push: f32,
    /// Ticks between landing on a Breaking platform and its removal
    pub break_delay_ticks: u32,
    /// Bouncy platforms launch at `jump_power * bounce_multiplier`
    pub bounce_multiplier: f32,
    /// How far below a platform's top the player's feet may be and still land
    pub landing_tolerance: f32,
    /// How far above the top edge the player may go before the run ends
    pub ceiling_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_power: -12.0,
            max_fall_speed: 15.0,
            move_speed: 5.0,
            platform_move_speed: 2.0,
            platform_speed: 1.0,
            max_platform_speed: 1.5,
            speed_increment: 0.1,
            max_platforms: 15,
            ceiling_damage: 10,
            ceiling_push: 5.0,
            break_delay_ticks: FPS,
            bounce_multiplier: 1.5,
            landing_tolerance: 10.0,
            ceiling_margin: 50.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Velocity given to the player by a Bouncy platform
    pub fn bounce_power(&self) -> f32 {
        self.jump_power * self.bounce_multiplier
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<()> {
        fn positive(field: &'static str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidTuning {
                    field,
                    reason: "must be positive and finite",
                })
            }
        }

        positive("gravity", self.gravity)?;
        positive("max_fall_speed", self.max_fall_speed)?;
        positive("move_speed", self.move_speed)?;
        positive("platform_move_speed", self.platform_move_speed)?;
        positive("platform_speed", self.platform_speed)?;
        positive("max_platform_speed", self.max_platform_speed)?;
        positive("speed_increment", self.speed_increment)?;
        positive("ceiling_push", self.ceiling_push)?;
        positive("bounce_multiplier", self.bounce_multiplier)?;
        positive("landing_tolerance", self.landing_tolerance)?;
        positive("ceiling_margin", self.ceiling_margin)?;

        if !(self.jump_power.is_finite() && self.jump_power < 0.0) {
            return Err(Error::InvalidTuning {
                field: "jump_power",
                reason: "must be negative (upward) and finite",
            });
        }
        if self.max_platform_speed < self.platform_speed {
            return Err(Error::InvalidTuning {
                field: "max_platform_speed",
                reason: "must not be below platform_speed",
            });
        }
        if self.max_platforms == 0 {
            return Err(Error::InvalidTuning {
                field: "max_platforms",
                reason: "must be at least 1",
            });
        }
        if self.break_delay_ticks == 0 {
            return Err(Error::InvalidTuning {
                field: "break_delay_ticks",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.break_delay_ticks, 60);
        assert_eq!(tuning.bounce_power(), -18.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.75, "max_platforms": 8 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.75);
        assert_eq!(tuning.max_platforms, 8);
        assert_eq!(tuning.jump_power, -12.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "jump_power": 4.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTuning {
                field: "jump_power",
                ..
            }
        ));

        let tuning = Tuning {
            max_platform_speed: 0.5,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = Tuning {
            max_platforms: 0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(Error::Json(_))));
    }
}
