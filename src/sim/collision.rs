//! Axis-aligned collision detection
//!
//! The player and both barriers of every obstacle are plain rectangles, so
//! the whole check is AABB intersection. Touching edges count as contact.

use glam::Vec2;

use super::field::ObstacleField;
use super::state::Player;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Non-strict overlap test: shared edges and corners count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// True iff the player's box overlaps either barrier of any obstacle.
///
/// Short-circuits on the first hit; iteration order only affects performance,
/// never the result.
pub fn collided(player: &Player, field: &ObstacleField) -> bool {
    let body = player.aabb();
    let area_height = field.area_height();
    field.obstacles().iter().any(|obstacle| {
        body.overlaps(&obstacle.top_aabb(area_height)) || body.overlaps(&obstacle.bottom_aabb())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn overlapping_rects() {
        assert!(aabb(0.0, 0.0, 10.0, 10.0).overlaps(&aabb(5.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn disjoint_rects() {
        assert!(!aabb(0.0, 0.0, 10.0, 10.0).overlaps(&aabb(20.0, 0.0, 10.0, 10.0)));
        assert!(!aabb(0.0, 0.0, 10.0, 10.0).overlaps(&aabb(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn touching_edge_counts_as_contact() {
        // Right edge of A exactly on the left edge of B
        assert!(aabb(0.0, 0.0, 10.0, 10.0).overlaps(&aabb(10.0, 0.0, 10.0, 10.0)));
        // Corner touch
        assert!(aabb(0.0, 0.0, 10.0, 10.0).overlaps(&aabb(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn containment_counts_as_contact() {
        assert!(aabb(0.0, 0.0, 100.0, 100.0).overlaps(&aabb(40.0, 40.0, 10.0, 10.0)));
    }

    #[test]
    fn player_through_gap_is_safe() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut field = ObstacleField::new(&config, &mut rng);
        let mut player = Player::new(&config);

        // Put an obstacle over the player with the opening centered on them
        let obstacle = &mut field.obstacles_mut()[0];
        obstacle.x = player.x;
        obstacle.opening = 300.0;
        obstacle.bottom_height = 150.0;
        obstacle.top_height = 150.0;
        player.y = 300.0;
        assert!(!collided(&player, &field));

        // Drop into the bottom barrier
        player.y = 100.0;
        assert!(collided(&player, &field));

        // Rise into the top barrier
        player.y = 460.0;
        assert!(collided(&player, &field));
    }

    #[test]
    fn off_screen_obstacles_never_hit() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(6);
        let field = ObstacleField::new(&config, &mut rng);
        let player = Player::new(&config);

        // Freshly initialized field starts entirely off-screen right
        assert!(!collided(&player, &field));
    }
}
