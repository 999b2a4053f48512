//! Game session: state machine and tick ownership
//!
//! A session owns one run's worth of entities plus the timers that drive it.
//! Exactly one tick timer is live at a time: starting a run cancels any prior
//! timer before scheduling its own, and a collision cancels the tick timer on
//! the spot. Input arrives as a queued jump command drained once per tick, so
//! a jump can never tear a tick or apply twice.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::{AudioCue, AudioSink};
use crate::config::{ConfigError, GameConfig};
use crate::consts::{SUMMARY_DELAY_MS, TICK_PERIOD_MS};
use crate::driver::{TimerHandle, TimerService};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Score display boundary
pub trait ScoreSink {
    fn render(&mut self, points: u32);
}

/// Game-over summary boundary. Invoked once per game over with the final
/// score; the host answers by calling [`GameSession::restart`].
pub trait SummarySink {
    fn show(&mut self, final_score: u32);
}

/// State machine driving one player through Menu -> Playing -> GameOver and
/// around again.
pub struct GameSession<T: TimerService> {
    config: GameConfig,
    timers: T,
    audio: Box<dyn AudioSink>,
    score_display: Box<dyn ScoreSink>,
    summary: Box<dyn SummarySink>,
    state: GameState,
    tick_timer: Option<TimerHandle>,
    summary_timer: Option<TimerHandle>,
    pending_jump: bool,
    /// Draws a fresh run seed per start, reproducible from the root seed
    seed_rng: Pcg32,
}

impl<T: TimerService> GameSession<T> {
    /// Validate the config and set up a session sitting on the menu.
    pub fn new(
        config: GameConfig,
        seed: u64,
        timers: T,
        mut audio: Box<dyn AudioSink>,
        score_display: Box<dyn ScoreSink>,
        summary: Box<dyn SummarySink>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut seed_rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&config, seed_rng.random());
        audio.play(AudioCue::MenuMusic);
        log::info!("session ready (root seed {seed})");
        Ok(Self {
            config,
            timers,
            audio,
            score_display,
            summary,
            state,
            tick_timer: None,
            summary_timer: None,
            pending_jump: false,
            seed_rng,
        })
    }

    /// Begin a run: fresh entities, fresh seed, one live tick timer.
    pub fn start(&mut self) {
        // The old timer must be dead before the new one exists; two live
        // timers would double-advance physics.
        if let Some(handle) = self.tick_timer.take() {
            self.timers.cancel(handle);
        }
        if let Some(handle) = self.summary_timer.take() {
            self.timers.cancel(handle);
        }

        self.state = GameState::new(&self.config, self.seed_rng.random());
        self.state.phase = GamePhase::Playing;
        self.pending_jump = false;

        self.audio.stop(AudioCue::MenuMusic);
        self.audio.stop(AudioCue::GameOverMusic);
        self.audio.play(AudioCue::GameMusic);
        self.score_display.render(0);

        self.tick_timer = Some(self.timers.schedule_repeating(TICK_PERIOD_MS));
        log::info!("run started (seed {})", self.state.seed);
    }

    /// Queue a jump for the next tick. Ignored outside of play; repeat
    /// requests before the next tick coalesce into one.
    pub fn jump(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        self.pending_jump = true;
        self.audio.play(AudioCue::Jump);
    }

    /// Timer delivery entry point. Stale handles (cancelled or replaced) are
    /// ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) {
        if self.tick_timer == Some(handle) {
            self.run_tick();
        } else if self.summary_timer == Some(handle) {
            self.summary_timer = None;
            self.show_summary();
        }
    }

    /// Leave the game-over screen and start a fresh run.
    pub fn restart(&mut self) {
        if self.state.phase != GamePhase::GameOver {
            return;
        }
        self.audio.stop(AudioCue::GameOverMusic);
        self.start();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score.points()
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    fn run_tick(&mut self) {
        let input = TickInput {
            jump: std::mem::take(&mut self.pending_jump),
        };
        for event in tick(&mut self.state, &input) {
            match event {
                GameEvent::Crossed { .. } => {
                    self.score_display.render(self.state.score.points());
                    self.audio.play(AudioCue::Point);
                }
                GameEvent::Collided => self.on_collision(),
            }
        }
    }

    fn on_collision(&mut self) {
        // Simulation stops instantly; the summary follows after the hit
        // reaction has had its moment.
        if let Some(handle) = self.tick_timer.take() {
            self.timers.cancel(handle);
        }
        self.audio.stop(AudioCue::GameMusic);
        self.audio.play(AudioCue::Hit);
        self.summary_timer = Some(self.timers.schedule_once(SUMMARY_DELAY_MS));
        log::info!(
            "run over after {} ticks, score {}",
            self.state.tick_count,
            self.state.score.points()
        );
    }

    fn show_summary(&mut self) {
        self.audio.play(AudioCue::Die);
        self.audio.play(AudioCue::GameOverMusic);
        self.summary.show(self.state.score.points());
    }
}
