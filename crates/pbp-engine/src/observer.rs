//! Generator observer trait for progress reporting and data collection.

use pbp_core::GameId;

use crate::{GameState, PlayRecord};

/// Callbacks invoked by [`Generator::run`][crate::Generator::run] as rows
/// are emitted.
///
/// Hooks are always called from the driver's thread, in game order and in
/// play order within a game, even when games were simulated in parallel.
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl GameObserver for ProgressPrinter {
///     fn on_game_end(&mut self, game: GameId, last: &GameState, _truncated: bool) {
///         println!("game {game}: {} plays", last.play_count);
///     }
/// }
/// ```
pub trait GameObserver {
    /// Called before the first row of each game.  `opening` is the kickoff
    /// state.
    fn on_game_start(&mut self, _game: GameId, _opening: &GameState) {}

    /// Called once per emitted row.
    fn on_play(&mut self, _record: &PlayRecord) {}

    /// Called after the last row of each game.
    ///
    /// `last` is the state after the final play of regulation.  When the run
    /// reached its row target mid-game, `truncated` is `true` and `last` is
    /// still the full-game final state.
    fn on_game_end(&mut self, _game: GameId, _last: &GameState, _truncated: bool) {}

    /// Called once after the final row, with the number of rows emitted.
    fn on_run_end(&mut self, _rows: u64) {}
}

/// Fan every hook out to both observers, first `A` then `B`.
impl<A: GameObserver, B: GameObserver> GameObserver for (A, B) {
    fn on_game_start(&mut self, game: GameId, opening: &GameState) {
        self.0.on_game_start(game, opening);
        self.1.on_game_start(game, opening);
    }

    fn on_play(&mut self, record: &PlayRecord) {
        self.0.on_play(record);
        self.1.on_play(record);
    }

    fn on_game_end(&mut self, game: GameId, last: &GameState, truncated: bool) {
        self.0.on_game_end(game, last, truncated);
        self.1.on_game_end(game, last, truncated);
    }

    fn on_run_end(&mut self, rows: u64) {
        self.0.on_run_end(rows);
        self.1.on_run_end(rows);
    }
}

/// A [`GameObserver`] that does nothing.
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// Collects every emitted row into a `Vec`.
#[derive(Debug, Default)]
pub struct RowCollector {
    pub rows: Vec<PlayRecord>,
}

impl RowCollector {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { rows: Vec::with_capacity(capacity) }
    }

    pub fn into_rows(self) -> Vec<PlayRecord> {
        self.rows
    }
}

impl GameObserver for RowCollector {
    fn on_play(&mut self, record: &PlayRecord) {
        self.rows.push(*record);
    }
}
