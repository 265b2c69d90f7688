//! High score leaderboard
//!
//! Lives for the duration of the process only and tracks the top 10 runs.

use serde::{Deserialize, Serialize};

use crate::sim::RunSummary;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u64,
    /// Level reached
    pub level: u32,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u64, level: u32) -> Self {
        Self {
            name: name.into(),
            score,
            level,
        }
    }
}

impl From<&RunSummary> for LeaderboardEntry {
    fn from(summary: &RunSummary) -> Self {
        Self::new(summary.name.clone(), summary.score, summary.level)
    }
}

/// High score leaderboard, sorted by score descending
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<LeaderboardEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Leaderboard pre-filled with the house scores shown on first launch
    pub fn seeded() -> Self {
        Self {
            entries: vec![
                LeaderboardEntry::new("Cookie Pro", 5000, 10),
                LeaderboardEntry::new("Sweet Runner", 3500, 7),
                LeaderboardEntry::new("Golden Baker", 2100, 5),
            ],
        }
    }

    /// Check if a score would make the table
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a finished run to the leaderboard (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if didn't qualify.
    /// Ties rank below the entries already on the board.
    pub fn record(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let rank = self.potential_rank(entry.score)?;
        log::info!("{} placed #{} with {} (level {})", entry.name, rank, entry.score, entry.level);

        self.entries.insert(rank - 1, entry);
        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
