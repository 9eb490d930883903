//! Shaft Fall headless runner
//!
//! Drives the simulation without a window: the autopilot plays (or the player
//! stands still with `--manual`), events and the sounds a frontend would play
//! are logged. Set `RUST_LOG=debug` for spawn/removal detail.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use shaft_fall::audio::AudioManager;
use shaft_fall::sim::{GameEvent, GameState, TickInput, tick};
use shaft_fall::{Settings, Tuning};

#[derive(Debug, Parser)]
#[command(name = "shaft-fall", about = "Run the Shaft Fall simulation headless")]
struct Args {
    /// World seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of ticks to simulate
    #[arg(long, default_value_t = 60 * 60)]
    ticks: u64,

    /// Balance overrides (JSON)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Frontend settings (JSON); only affects the logged sound cues
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Disable the autopilot
    #[arg(long)]
    manual: bool,

    /// Start a new run this many times after a game over
    #[arg(long, default_value_t = 0)]
    restarts: u32,
}

/// Game instance holding all state
struct Game {
    state: GameState,
    input: TickInput,
    audio: AudioManager,
    restarts_left: u32,
    best_score: u64,
}

impl Game {
    fn new(args: &Args) -> shaft_fall::Result<Self> {
        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let settings = args
            .settings
            .as_ref()
            .map(Settings::load)
            .unwrap_or_else(Settings::default);
        let seed = args.seed.unwrap_or_else(rand::random);

        Ok(Self {
            state: GameState::with_tuning(seed, tuning)?,
            input: TickInput {
                idle_mode: !args.manual,
                ..Default::default()
            },
            audio: AudioManager::new(settings),
            restarts_left: args.restarts,
            best_score: 0,
        })
    }

    /// Run one tick. Returns false once the last run has ended.
    fn update(&mut self) -> bool {
        let events = tick(&mut self.state, &self.input);
        self.input.clear_edges();

        for event in &events {
            match event {
                GameEvent::Jump => log::debug!("Jump"),
                GameEvent::PlatformBounce { id } => log::debug!("Bounce off platform {id}"),
                GameEvent::PlatformBreakArmed { id } => log::debug!("Platform {id} cracking"),
                GameEvent::GameOver { score } => {
                    self.best_score = self.best_score.max(*score);
                }
            }
        }
        for cue in self.audio.cues(&events) {
            log::trace!("Play {} at {:.2}", cue.effect.file_name(), cue.volume);
        }
        self.audio
            .music_volume(self.state.paused(), self.state.game_over());

        if self.state.game_over() {
            if self.restarts_left == 0 {
                return false;
            }
            self.restarts_left -= 1;
            self.input.restart = true;
        }
        true
    }

    fn report(&self) {
        let hud = self.state.hud();
        log::info!(
            "Tick {}: health {}, level {}, score {}, speed {:.1}, {} platforms",
            self.state.time_ticks,
            hud.health,
            hud.level,
            hud.score,
            hud.platform_speed,
            self.state.platforms.len()
        );
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Shaft Fall (headless) starting...");

    let mut game = match Game::new(&args) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to start: {e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for t in 1..=args.ticks {
        if !game.update() {
            break;
        }
        if t % 600 == 0 {
            game.report();
        }
    }

    game.report();
    println!(
        "score {} (best {}), level {}, {} ticks",
        game.state.score,
        game.best_score.max(game.state.score),
        game.state.player.level,
        game.state.time_ticks
    );
    ExitCode::SUCCESS
}
