//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::platform::{Contact, PlatformUpdate};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Held horizontal input, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Horizontal {
    #[default]
    Stop,
    Left,
    Right,
}

/// Commands the presentation layer forwards from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    StopHorizontal,
    Jump,
    TogglePause,
    Restart,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held direction
    pub horizontal: Horizontal,
    /// Jump (space/up)
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
    /// Start a new run
    pub restart: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

impl TickInput {
    /// Fold a command into this tick's input
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.horizontal = Horizontal::Left,
            Command::MoveRight => self.horizontal = Horizontal::Right,
            Command::StopHorizontal => self.horizontal = Horizontal::Stop,
            Command::Jump => self.jump = true,
            Command::TogglePause => self.pause = !self.pause,
            Command::Restart => self.restart = true,
        }
    }

    pub fn from_commands(commands: impl IntoIterator<Item = Command>) -> Self {
        let mut input = Self::default();
        for command in commands {
            input.apply(command);
        }
        input
    }

    /// Clear one-shot inputs after they've been consumed, keeping held ones
    pub fn clear_edges(&mut self) {
        self.jump = false;
        self.pause = false;
        self.restart = false;
    }
}

/// Advance the game state by one tick, returning the events it produced
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        state.restart();
        return events;
    }

    if input.pause {
        state.toggle_pause();
    }

    // Don't tick if paused or game over
    if state.phase != GamePhase::Playing {
        return events;
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }

    match input.horizontal {
        Horizontal::Left => state.player.move_left(&state.tuning),
        Horizontal::Right => state.player.move_right(&state.tuning),
        Horizontal::Stop => state.player.stop(),
    }

    if input.jump && state.player.jump(&state.tuning) {
        events.push(GameEvent::Jump);
    }

    step(state, &mut events);
    events
}

/// One simulation step: player motion, landing, platform lifecycle,
/// difficulty and end conditions
fn step(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.time_ticks += 1;
    let tuning = &state.tuning;

    // Player motion
    state.player.apply_gravity(tuning);
    state.player.integrate();

    // Landing
    if let Some(index) = state.player.check_collision(&state.platforms, tuning) {
        let platform = &mut state.platforms[index];
        match platform.on_collision(tuning) {
            Contact::Bounce => {
                state.player.body.vel.y = tuning.bounce_power();
                events.push(GameEvent::PlatformBounce { id: platform.id });
            }
            Contact::BreakArmed => {
                events.push(GameEvent::PlatformBreakArmed { id: platform.id });
            }
            Contact::Solid => {}
        }

        // Landing in the upper half above every layer cleared so far clears a new one
        let top = platform.body.top();
        if top < SCREEN_HEIGHT / 2.0 && state.player.cleared_y.is_none_or(|y| top < y) {
            state.player.cleared_y = Some(top);
            state.player.level += 1;
            state.score += LAYER_SCORE;
        }
    }

    // Scroll, update and prune platforms
    let speed = state.platform_speed;
    if let Some(y) = state.player.cleared_y.as_mut() {
        *y += speed;
    }
    state.platforms.retain_mut(|platform| {
        platform.body.pos.y += speed;
        if platform.update(tuning) == PlatformUpdate::Gone {
            log::debug!("Platform {} crumbled", platform.id);
            return false;
        }
        platform.body.top() <= SCREEN_HEIGHT
    });

    // Keep the shaft stocked
    if state.platforms.len() < state.tuning.max_platforms {
        state.spawn_platform();
    }

    // Difficulty: fires on every tick the score sits on a multiple of the step
    let tuning = &state.tuning;
    if state.score > 0
        && state.score % SPEED_UP_SCORE_STEP == 0
        && state.platform_speed < tuning.max_platform_speed
    {
        state.platform_speed =
            (state.platform_speed + tuning.speed_increment).min(tuning.max_platform_speed);
        log::debug!(
            "Platform speed -> {:.2} (score {})",
            state.platform_speed,
            state.score
        );
    }

    // End conditions
    let player_top = state.player.body.top();
    if player_top > SCREEN_HEIGHT
        || player_top < -tuning.ceiling_margin
        || state.player.health == 0
    {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over: score {}, level {}, health {}",
            state.score,
            state.player.level,
            state.player.health
        );
    }

    // Ceiling spikes
    if state.player.body.top() < 0.0 {
        state.player.health = state.player.health.saturating_sub(tuning.ceiling_damage);
        state.player.body.vel.y = tuning.ceiling_push;
    }
}

/// Demo-mode steering: head for the nearest platform below, hop when
/// there's nothing to drop onto
fn autopilot(state: &GameState, input: &mut TickInput) {
    let player = &state.player.body;
    let target = state
        .platforms
        .iter()
        .filter(|p| p.body.top() >= player.bottom() && p.body.top() < SCREEN_HEIGHT - PLATFORM_HEIGHT)
        .min_by(|a, b| {
            a.body
                .top()
                .partial_cmp(&b.body.top())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match target {
        Some(platform) => {
            let dx = platform.body.center_x() - player.center_x();
            input.horizontal = if dx > state.tuning.move_speed {
                Horizontal::Right
            } else if dx < -state.tuning.move_speed {
                Horizontal::Left
            } else {
                Horizontal::Stop
            };
        }
        None => {
            input.horizontal = Horizontal::Stop;
            input.jump = true;
        }
    }
}
