//! Leaderboard store
//!
//! The engine writes here exactly once per completed-and-submitted session;
//! durable persistence of the serialized board belongs to the caller.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Entries retained after every append
pub const LEADERBOARD_CAPACITY: usize = 10;

/// One saved score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Monotonic per-board id; doubles as insertion order
    pub id: u64,
    pub name: String,
    pub score: i32,
    /// Unix timestamp (seconds) of the submission
    pub timestamp: u64,
}

/// Top-N score table, ordered by score descending
///
/// Ties keep insertion order: an equal score submitted later ranks below the
/// earlier one (stable sort over the append sequence).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    #[serde(default)]
    next_id: u64,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a board from previously persisted entries
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id + 1).max().unwrap_or(0);
        entries.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        entries.truncate(LEADERBOARD_CAPACITY);
        Self { entries, next_id }
    }

    /// Append a score and re-rank, keeping the top entries
    ///
    /// Returns the created entry even when it does not make the cut.
    pub fn append(&mut self, name: &str, score: i32) -> LeaderboardEntry {
        let entry = LeaderboardEntry {
            id: self.next_id,
            name: name.to_string(),
            score,
            timestamp: unix_timestamp(),
        };
        self.next_id += 1;

        self.entries.push(entry.clone());
        // Stable sort: equal scores stay in insertion order.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(LEADERBOARD_CAPACITY);

        log::debug!("leaderboard: {} scored {}", entry.name, entry.score);
        entry
    }

    /// Ranked entries, best first
    #[inline]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// The `count` best entries (home-screen preview)
    pub fn top(&self, count: usize) -> &[LeaderboardEntry] {
        &self.entries[..count.min(self.entries.len())]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_ranks_descending() {
        let mut board = Leaderboard::new();
        board.append("Ruth", 300);
        board.append("Esther", 700);
        board.append("Boaz", 500);

        let scores: Vec<i32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![700, 500, 300]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut board = Leaderboard::new();
        board.append("first", 400);
        board.append("second", 400);
        board.append("third", 400);

        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut board = Leaderboard::new();
        for i in 0..15 {
            board.append(&format!("player{i}"), i * 10);
        }
        assert_eq!(board.entries().len(), LEADERBOARD_CAPACITY);
        // The weakest five were dropped.
        assert!(board.entries().iter().all(|e| e.score >= 50));
    }

    #[test]
    fn test_append_returns_entry_even_when_cut() {
        let mut board = Leaderboard::new();
        for i in 0..LEADERBOARD_CAPACITY {
            board.append(&format!("player{i}"), 1000 + i as i32);
        }

        let entry = board.append("straggler", -50);
        assert_eq!(entry.name, "straggler");
        assert_eq!(entry.score, -50);
        assert!(board.entries().iter().all(|e| e.name != "straggler"));
    }

    #[test]
    fn test_top_preview() {
        let mut board = Leaderboard::new();
        board.append("a", 1);
        board.append("b", 2);
        assert_eq!(board.top(3).len(), 2);
        assert_eq!(board.top(1)[0].name, "b");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut board = Leaderboard::new();
        board.append("Ruth", 300);
        board.append("Esther", 700);

        let json = serde_json::to_string(&board).unwrap();
        let restored: Leaderboard = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.entries(), board.entries());

        let rebuilt = Leaderboard::from_entries(board.entries().to_vec());
        assert_eq!(rebuilt.entries(), board.entries());
        // Fresh ids never collide with restored ones.
        let entry = {
            let mut rebuilt = rebuilt;
            rebuilt.append("Boaz", 100)
        };
        assert!(board.entries().iter().all(|e| e.id != entry.id));
    }
}
