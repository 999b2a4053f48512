//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::field::ObstacleField;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start menu
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// The player's body: vertical physics under constant gravity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Left edge of the bounding box (fixed; the world scrolls, not the player)
    pub x: f32,
    /// Distance from the floor
    pub y: f32,
    /// Vertical velocity (units per tick)
    pub velocity: f32,
    /// Current pose in degrees (negative = nose up)
    pub rotation_deg: f32,
    pub width: f32,
    pub height: f32,
    /// Highest `y` the body can reach without leaving the play area
    pub max_height: f32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: (config.area_width - config.player_width) / 2.0,
            y: config.area_height / 2.0,
            velocity: 0.0,
            rotation_deg: 0.0,
            width: config.player_width,
            height: config.player_height,
            max_height: config.area_height - config.player_height,
        }
    }

    /// Apply the jump impulse. Overrides any prior velocity.
    pub fn jump(&mut self) {
        self.velocity = JUMP_VELOCITY;
        self.rotation_deg = JUMP_ROTATION_DEG;
    }

    /// Advance one tick of gravity integration.
    ///
    /// The diving pose is a one-way ratchet: once the fall is fast enough the
    /// rotation stays nose-down until the next jump.
    pub fn step(&mut self) {
        self.velocity -= GRAVITY;
        if self.velocity < DIVE_THRESHOLD {
            self.rotation_deg = DIVE_ROTATION_DEG;
        }

        let new_y = self.y + self.velocity;
        if new_y <= 0.0 {
            // Floor stop
            self.y = 0.0;
            self.velocity = 0.0;
        } else if new_y >= self.max_height {
            // Ceiling stop
            self.y = self.max_height;
            self.velocity = 0.0;
        } else {
            self.y = new_y;
        }
    }

    /// Current bounding box for collision queries
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }
}

/// Monotone score counter fed by obstacle crossings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    points: u32,
}

impl ScoreTracker {
    /// Record one crossing; returns the new total.
    pub fn on_crossing(&mut self) -> u32 {
        self.points += 1;
        self.points
    }

    pub fn points(&self) -> u32 {
        self.points
    }
}

/// Complete game state for one run (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub tick_count: u64,
    pub player: Player,
    pub field: ObstacleField,
    pub score: ScoreTracker,
    /// Seeded RNG driving obstacle gap draws
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh run with the given seed.
    ///
    /// The config must have passed [`GameConfig::validate`];
    /// [`GameSession::new`](crate::session::GameSession::new) does this once
    /// for all runs it constructs.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let field = ObstacleField::new(config, &mut rng);
        Self {
            seed,
            phase: GamePhase::Menu,
            tick_count: 0,
            player: Player::new(config),
            field,
            score: ScoreTracker::default(),
            rng,
        }
    }
}
