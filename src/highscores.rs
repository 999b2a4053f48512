//! High score leaderboard
//!
//! Tracks the top 10 runs, persisted as JSON next to the binary. Persistence
//! failures are logged and swallowed; losing a leaderboard must never take
//! the game down.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score of the run
    pub score: u32,
    /// Run seed, so a notable run can be replayed
    pub seed: u64,
    /// Unix timestamp (seconds) when achieved
    pub timestamp: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score (if it qualifies). Returns the 1-indexed rank.
    pub fn add_score(&mut self, score: u32, seed: u64, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            seed,
            timestamp,
        };

        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the leaderboard from a JSON file, empty on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(err) => {
                    log::warn!("Ignoring malformed high scores: {err}");
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save the leaderboard as JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("Failed to save high scores: {err}");
                } else {
                    log::info!("High scores saved ({} entries)", self.entries.len());
                }
            }
            Err(err) => log::warn!("Failed to serialize high scores: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn keeps_entries_sorted_and_capped() {
        let mut scores = HighScores::new();
        for s in 1..=15u32 {
            scores.add_score(s, u64::from(s), 0);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(15));
        assert!(scores.entries.windows(2).all(|w| w[0].score >= w[1].score));
        // 1..=5 fell off the bottom
        assert!(!scores.qualifies(6));
        assert!(scores.qualifies(7));
    }

    #[test]
    fn rank_is_one_indexed() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(10, 0, 0), Some(1));
        assert_eq!(scores.add_score(20, 0, 0), Some(1));
        assert_eq!(scores.add_score(15, 0, 0), Some(2));
        assert_eq!(scores.add_score(5, 0, 0), Some(4));
    }
}
