//! Obstacle field: a fixed pool of recycled barrier pairs
//!
//! The field simulates an unbounded scrolling world with O(1) memory: when an
//! obstacle scrolls fully off-screen it wraps to the back of the ring and
//! draws a fresh gap, it is never reallocated.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::config::GameConfig;

/// One barrier pair: a top and a bottom barrier leaving a passable opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Height of the barrier hanging from the ceiling
    pub top_height: f32,
    /// Height of the barrier standing on the floor
    pub bottom_height: f32,
    /// Vertical gap between the two barriers
    pub opening: f32,
}

impl Obstacle {
    /// Draw a fresh opening and gap split.
    ///
    /// Keeps `top_height + bottom_height + opening == area_height`.
    fn randomize<R: Rng>(&mut self, area_height: f32, min_opening: f32, max_opening: f32, rng: &mut R) {
        let opening = rng.random_range(min_opening..=max_opening);
        let top_height = rng.random_range(0.0..(area_height - opening));
        self.opening = opening;
        self.top_height = top_height;
        self.bottom_height = area_height - opening - top_height;
    }

    /// Bounding box of the top barrier
    pub fn top_aabb(&self, area_height: f32) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.x, area_height - self.top_height),
            Vec2::new(self.width, self.top_height),
        )
    }

    /// Bounding box of the bottom barrier
    pub fn bottom_aabb(&self) -> Aabb {
        Aabb::from_pos_size(Vec2::new(self.x, 0.0), Vec2::new(self.width, self.bottom_height))
    }
}

/// Ordered pool of obstacles spaced at a constant interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    spacing: f32,
    displacement: f32,
    area_width: f32,
    area_height: f32,
    min_opening: f32,
    max_opening: f32,
}

impl ObstacleField {
    /// Allocate the pool with staggered initial positions off-screen right.
    ///
    /// The config must have passed [`GameConfig::validate`]: the gap draws
    /// assume `min_opening <= max_opening < area_height`.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "obstacle field built from invalid config"
        );
        let obstacles = (0..config.obstacle_count)
            .map(|i| {
                let mut obstacle = Obstacle {
                    x: config.area_width + config.spacing * i as f32,
                    width: config.obstacle_width,
                    top_height: 0.0,
                    bottom_height: 0.0,
                    opening: 0.0,
                };
                obstacle.randomize(config.area_height, config.min_opening, config.max_opening, rng);
                obstacle
            })
            .collect();

        Self {
            obstacles,
            spacing: config.spacing,
            displacement: config.displacement,
            area_width: config.area_width,
            area_height: config.area_height,
            min_opening: config.min_opening,
            max_opening: config.max_opening,
        }
    }

    /// Scroll the field one tick; returns the slots that crossed the midpoint.
    ///
    /// The crossing test compares pre- and post-move positions against the
    /// field midpoint, so each obstacle reports exactly one crossing per
    /// traversal without any has-crossed flag.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> Vec<usize> {
        let midpoint = self.area_width / 2.0;
        let ring_width = self.spacing * self.obstacles.len() as f32;
        let mut crossings = Vec::new();

        for (slot, obstacle) in self.obstacles.iter_mut().enumerate() {
            obstacle.x -= self.displacement;
            if obstacle.x < -obstacle.width {
                // Recycle in place: wrap to the back of the ring, fresh gap
                obstacle.x += ring_width;
                obstacle.randomize(self.area_height, self.min_opening, self.max_opening, rng);
            }

            if obstacle.x + self.displacement >= midpoint && obstacle.x < midpoint {
                crossings.push(slot);
            }
        }

        crossings
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn area_width(&self) -> f32 {
        self.area_width
    }

    pub fn area_height(&self) -> f32 {
        self.area_height
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }
}
