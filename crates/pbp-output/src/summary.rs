//! `DatasetSummary` — running tallies for the post-run console report.

use std::collections::HashMap;
use std::hash::Hash;

use pbp_core::{GameId, PlayResult, PlayType};
use pbp_engine::{GameObserver, PlayRecord};

/// Counts rows, games, and the play-type and result distributions of a run.
#[derive(Debug, Default)]
pub struct DatasetSummary {
    rows:         u64,
    games:        u64,
    last_game:    Option<GameId>,
    play_types:   HashMap<PlayType, u64>,
    play_results: HashMap<PlayResult, u64>,
}

impl DatasetSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Games that contributed at least one row.
    pub fn games(&self) -> u64 {
        self.games
    }

    /// `(play type, count)` pairs, most frequent first.  Ties keep
    /// vocabulary order.  Types that never occurred are omitted.
    pub fn play_type_distribution(&self) -> Vec<(PlayType, u64)> {
        distribution(PlayType::ALL, &self.play_types)
    }

    /// `(result, count)` pairs, most frequent first.
    pub fn result_distribution(&self) -> Vec<(PlayResult, u64)> {
        distribution(PlayResult::ALL, &self.play_results)
    }

    /// `count` as a percentage of all rows; `0.0` for an empty summary.
    pub fn percent(&self, count: u64) -> f64 {
        if self.rows == 0 {
            return 0.0;
        }
        count as f64 / self.rows as f64 * 100.0
    }
}

fn distribution<T: Copy + Eq + Hash>(order: &[T], counts: &HashMap<T, u64>) -> Vec<(T, u64)> {
    let mut out: Vec<(T, u64)> = order
        .iter()
        .filter_map(|k| counts.get(k).map(|&n| (*k, n)))
        .collect();
    // Stable: equal counts stay in vocabulary order.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

impl GameObserver for DatasetSummary {
    fn on_play(&mut self, record: &PlayRecord) {
        self.rows += 1;
        if self.last_game != Some(record.game_id) {
            self.games += 1;
            self.last_game = Some(record.game_id);
        }
        *self.play_types.entry(record.play_type).or_default() += 1;
        *self.play_results.entry(record.play_result).or_default() += 1;
    }
}
