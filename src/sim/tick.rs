//! Fixed timestep simulation tick
//!
//! One tick advances the obstacle field (collecting crossings), then the
//! player, then runs collision detection. Scoring therefore always reflects
//! pre-collision positions, and a crossing and a collision can land on the
//! same tick.

use super::collision::collided;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Apply the jump impulse this tick
    pub jump: bool,
}

/// Events produced by one tick, in the order they occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle's reference point passed the field midpoint
    Crossed { slot: usize },
    /// The player hit a barrier; the run is over
    Collided,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    if state.phase != GamePhase::Playing {
        return Vec::new();
    }

    state.tick_count += 1;
    let mut events = Vec::new();

    if input.jump {
        state.player.jump();
    }

    for slot in state.field.advance(&mut state.rng) {
        state.score.on_crossing();
        events.push(GameEvent::Crossed { slot });
    }

    state.player.step();

    if collided(&state.player, &state.field) {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::Collided);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use proptest::prelude::*;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(&GameConfig::default(), seed);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn menu_and_game_over_ticks_are_inert() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 1);
        let before = state.clone();

        assert!(tick(&mut state, &TickInput { jump: true }).is_empty());
        assert_eq!(state.tick_count, before.tick_count);
        assert_eq!(state.player, before.player);

        state.phase = GamePhase::GameOver;
        assert!(tick(&mut state, &TickInput::default()).is_empty());
        assert_eq!(state.player, before.player);
    }

    #[test]
    fn jump_applies_before_integration() {
        let mut state = playing_state(2);
        tick(&mut state, &TickInput { jump: true });
        // Impulse 10, one tick of gravity
        assert_eq!(state.player.velocity, 9.0);
        assert_eq!(state.player.y, 309.0);
    }

    #[test]
    fn crossings_feed_the_score() {
        let mut state = playing_state(3);
        let mut expected = 0;
        for _ in 0..5000 {
            let input = TickInput { jump: state.tick_count % 6 == 0 };
            for event in tick(&mut state, &input) {
                if matches!(event, GameEvent::Crossed { .. }) {
                    expected += 1;
                }
            }
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
        assert_eq!(state.score.points(), expected);
    }

    #[test]
    fn collision_ends_the_run_and_stops_the_sim() {
        let mut state = playing_state(4);
        // Park an obstacle on top of the player
        let player_x = state.player.x;
        let obstacle = &mut state.field.obstacles_mut()[0];
        obstacle.x = player_x;
        obstacle.bottom_height = 600.0;
        obstacle.top_height = 0.0;
        obstacle.opening = 0.0;

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::Collided));
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen = state.clone();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player, frozen.player);
        assert_eq!(state.tick_count, frozen.tick_count);
    }

    proptest! {
        #[test]
        fn player_never_leaves_bounds(seed in any::<u64>(), jumps in prop::collection::vec(any::<bool>(), 1..300)) {
            let mut state = playing_state(seed);
            for jump in jumps {
                tick(&mut state, &TickInput { jump });
                prop_assert!(state.player.y >= 0.0);
                prop_assert!(state.player.y <= state.player.max_height);
                if state.phase == GamePhase::GameOver {
                    break;
                }
            }
        }

        #[test]
        fn gap_sum_invariant_holds(seed in any::<u64>(), ticks in 1usize..400) {
            let mut state = playing_state(seed);
            let area_height = state.field.area_height();
            for _ in 0..ticks {
                tick(&mut state, &TickInput::default());
                for obstacle in state.field.obstacles() {
                    let sum = obstacle.top_height + obstacle.bottom_height + obstacle.opening;
                    prop_assert!((sum - area_height).abs() < 1e-2);
                }
            }
        }
    }
}
