//! Sound cue planning
//!
//! Turns the events a tick returns into the sound effects a frontend should
//! play, at what gain. Playback itself belongs to the frontend.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player jumped
    Jump,
    /// Bouncy platform launch
    Bounce,
    /// Breaking platform starts crumbling
    Break,
    /// Run ended
    GameOver,
}

impl SoundEffect {
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Jump => SoundEffect::Jump,
            GameEvent::PlatformBounce { .. } => SoundEffect::Bounce,
            GameEvent::PlatformBreakArmed { .. } => SoundEffect::Break,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
        }
    }

    /// Mix level relative to the other effects
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundEffect::Jump => 0.5,
            SoundEffect::Bounce => 0.6,
            SoundEffect::Break => 0.4,
            SoundEffect::GameOver => 0.7,
        }
    }

    /// Asset a frontend loads for this effect
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump.wav",
            SoundEffect::Bounce => "bounce.wav",
            SoundEffect::Break => "break.wav",
            SoundEffect::GameOver => "game_over.wav",
        }
    }
}

/// Background music track
pub const MUSIC_FILE: &str = "background_music.mp3";

/// A sound to play this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub effect: SoundEffect,
    pub volume: f32,
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    settings: Settings,
    muted: bool,
    music_playing: bool,
}

impl AudioManager {
    pub fn new(settings: Settings) -> Self {
        if !settings.sound_effects && !settings.music {
            log::info!("Audio disabled");
        }
        Self {
            settings,
            muted: false,
            music_playing: false,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Effects to play for a tick's events
    pub fn cues(&self, events: &[GameEvent]) -> Vec<Cue> {
        let gain = self.settings.effective_sfx_volume();
        if self.muted || gain <= 0.0 {
            return Vec::new();
        }
        events
            .iter()
            .map(|event| {
                let effect = SoundEffect::for_event(event);
                Cue {
                    effect,
                    volume: effect.base_volume() * gain,
                }
            })
            .collect()
    }

    /// Music gain for the current run state; `None` means music should be stopped
    ///
    /// Music plays while the run is live, pauses with the game and stops on
    /// game over.
    pub fn music_volume(&mut self, paused: bool, game_over: bool) -> Option<f32> {
        let gain = self.settings.effective_music_volume();
        let should_play = !self.muted && gain > 0.0 && !paused && !game_over;
        if should_play != self.music_playing {
            log::debug!("Music {}", if should_play { "on" } else { "off" });
            self.music_playing = should_play;
        }
        should_play.then_some(gain)
    }
}
