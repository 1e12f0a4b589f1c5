//! `PlayOutputObserver<W>` — bridges `GameObserver` to an `OutputWriter`.

use log::{debug, warn};
use pbp_core::GameId;
use pbp_engine::{GameObserver, GameState, PlayRecord};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`GameObserver`] that writes every emitted row to any [`OutputWriter`]
/// backend (CSV, SQLite, Parquet, …).
///
/// Rows are buffered per game and handed to the writer as one batch when
/// the game ends, so SQLite commits one transaction and Parquet one record
/// batch per game.  The writer is finished when the run ends.
///
/// Errors from the writer are stored internally because `GameObserver`
/// methods have no return value.  After `generator.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct PlayOutputObserver<W: OutputWriter> {
    pub(crate) writer: W,
    pending:           Vec<PlayRecord>,
    written:           u64,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> PlayOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pending: Vec::new(), written: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `generator.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows successfully handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.written
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_plays(&self.pending);
        if result.is_ok() {
            self.written += self.pending.len() as u64;
        }
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> GameObserver for PlayOutputObserver<W> {
    fn on_play(&mut self, record: &PlayRecord) {
        self.pending.push(*record);
    }

    fn on_game_end(&mut self, _game: GameId, _last: &GameState, _truncated: bool) {
        self.flush_pending();
    }

    fn on_run_end(&mut self, _rows: u64) {
        self.flush_pending();
        let result = self.writer.finish();
        self.store_err(result);
        debug!("output finished: {} rows written", self.written);
    }
}
