//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::{Aabb, collided};
pub use field::{Obstacle, ObstacleField};
pub use state::{GamePhase, GameState, Player, ScoreTracker};
pub use tick::{GameEvent, TickInput, tick};
