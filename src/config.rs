//! Game geometry and tuning
//!
//! Everything the simulation needs to know about the play area and the
//! obstacle field. Validated once at session construction; a bad config is a
//! fatal setup error, never a tick-time error.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play area width
    pub area_width: f32,
    /// Play area height
    pub area_height: f32,
    /// Size of the obstacle pool (the field recycles, it never allocates more)
    pub obstacle_count: usize,
    /// Smallest vertical opening an obstacle may leave
    pub min_opening: f32,
    /// Largest vertical opening an obstacle may leave
    pub max_opening: f32,
    /// Horizontal distance between consecutive obstacles
    pub spacing: f32,
    /// Horizontal scroll speed (units per tick)
    pub displacement: f32,
    /// Obstacle barrier width
    pub obstacle_width: f32,
    /// Player bounding box width
    pub player_width: f32,
    /// Player bounding box height
    pub player_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            area_width: 1200.0,
            area_height: 600.0,
            obstacle_count: 99,
            min_opening: 200.0,
            max_opening: 300.0,
            spacing: 400.0,
            displacement: 3.0,
            obstacle_width: 120.0,
            player_width: 60.0,
            player_height: 40.0,
        }
    }
}

impl GameConfig {
    /// Check that the configuration describes a playable field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.area_width <= 0.0 || self.area_height <= 0.0 {
            return Err(ConfigError::NonPositiveArea {
                width: self.area_width,
                height: self.area_height,
            });
        }
        if self.obstacle_count == 0 {
            return Err(ConfigError::EmptyObstaclePool);
        }
        if self.max_opening >= self.area_height {
            return Err(ConfigError::OpeningTooLarge {
                max_opening: self.max_opening,
                area_height: self.area_height,
            });
        }
        if self.min_opening <= 0.0 || self.min_opening > self.max_opening {
            return Err(ConfigError::BadOpeningRange {
                min: self.min_opening,
                max: self.max_opening,
            });
        }
        if self.spacing <= 0.0 {
            return Err(ConfigError::NonPositiveSpacing(self.spacing));
        }
        if self.displacement <= 0.0 {
            return Err(ConfigError::NonPositiveDisplacement(self.displacement));
        }
        if self.obstacle_width <= 0.0 {
            return Err(ConfigError::NonPositiveObstacleWidth(self.obstacle_width));
        }
        if self.player_width <= 0.0
            || self.player_height <= 0.0
            || self.player_height >= self.area_height
        {
            return Err(ConfigError::BadPlayerBox {
                width: self.player_width,
                height: self.player_height,
            });
        }

        // The crossing edge test only sees a window `displacement` wide; a
        // step larger than the obstacle could skip it entirely.
        if self.displacement >= self.obstacle_width {
            log::warn!(
                "displacement {} >= obstacle width {}; crossings may be skipped",
                self.displacement,
                self.obstacle_width
            );
        }

        Ok(())
    }

    /// Vertical reference line obstacles are scored against
    pub fn midpoint(&self) -> f32 {
        self.area_width / 2.0
    }

    /// Load a config from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring malformed config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save the config as JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("Failed to save config to {}: {err}", path.display());
                } else {
                    log::info!("Config saved to {}", path.display());
                }
            }
            Err(err) => log::warn!("Failed to serialize config: {err}"),
        }
    }
}

/// Fatal configuration errors, surfaced at session construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonPositiveArea { width: f32, height: f32 },
    EmptyObstaclePool,
    OpeningTooLarge { max_opening: f32, area_height: f32 },
    BadOpeningRange { min: f32, max: f32 },
    NonPositiveSpacing(f32),
    NonPositiveDisplacement(f32),
    NonPositiveObstacleWidth(f32),
    BadPlayerBox { width: f32, height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveArea { width, height } => {
                write!(f, "play area {width}x{height} must have positive dimensions")
            }
            ConfigError::EmptyObstaclePool => write!(f, "obstacle pool must not be empty"),
            ConfigError::OpeningTooLarge {
                max_opening,
                area_height,
            } => write!(
                f,
                "opening {max_opening} must be smaller than the play area height {area_height}"
            ),
            ConfigError::BadOpeningRange { min, max } => {
                write!(f, "opening range [{min}, {max}] is not a positive range")
            }
            ConfigError::NonPositiveSpacing(s) => write!(f, "spacing {s} must be positive"),
            ConfigError::NonPositiveDisplacement(d) => {
                write!(f, "displacement {d} must be positive")
            }
            ConfigError::NonPositiveObstacleWidth(w) => {
                write!(f, "obstacle width {w} must be positive")
            }
            ConfigError::BadPlayerBox { width, height } => write!(
                f,
                "player box {width}x{height} must be positive and fit the play area"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
