//! Flappy Duck - a side-scrolling obstacle-dodging game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle field, collisions)
//! - `session`: Game state machine, tick scheduling and boundary sinks
//! - `driver`: Timer service abstraction for the fixed-period tick
//! - `audio`: Audio cue sink
//! - `config`: Game geometry and tuning
//! - `highscores`: Local leaderboard

pub mod audio;
pub mod config;
pub mod driver;
pub mod highscores;
pub mod session;
pub mod sim;

pub use audio::{AudioCue, AudioSink};
pub use config::{ConfigError, GameConfig};
pub use highscores::HighScores;
pub use session::{GameSession, ScoreSink, SummarySink};
pub use sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick period
    pub const TICK_PERIOD_MS: u64 = 20;
    /// Delay between the hit reaction and the game-over summary
    pub const SUMMARY_DELAY_MS: u64 = 500;

    /// Upward velocity applied by a jump (units per tick)
    pub const JUMP_VELOCITY: f32 = 10.0;
    /// Gravity (velocity lost per tick)
    pub const GRAVITY: f32 = 1.0;
    /// Falling faster than this tips the player into the diving pose
    pub const DIVE_THRESHOLD: f32 = -8.0;
    /// Pose right after a jump (degrees, nose up)
    pub const JUMP_ROTATION_DEG: f32 = -20.0;
    /// Diving pose (degrees, nose down)
    pub const DIVE_ROTATION_DEG: f32 = 20.0;
}
