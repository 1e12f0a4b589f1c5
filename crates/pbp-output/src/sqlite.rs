//! SQLite output backend (feature `sqlite`).
//!
//! Creates (or reuses) a database file with a single `plays` table whose
//! columns follow `PlayRecord::COLUMNS`.  Enum columns are stored as their
//! dataset labels, booleans as `0`/`1`.

use std::path::Path;

use pbp_engine::PlayRecord;
use rusqlite::Connection;

use crate::OutputResult;
use crate::writer::OutputWriter;

const SCHEMA: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous  = NORMAL;
    CREATE TABLE IF NOT EXISTS plays (
        game_id            INTEGER NOT NULL,
        play_id            INTEGER PRIMARY KEY,
        offense_team       TEXT    NOT NULL,
        defense_team       TEXT    NOT NULL,
        quarter            INTEGER NOT NULL,
        time_remaining_sec INTEGER NOT NULL,
        down               INTEGER NOT NULL,
        distance           INTEGER NOT NULL,
        yardline           INTEGER NOT NULL,
        score_offense      INTEGER NOT NULL,
        score_defense      INTEGER NOT NULL,
        play_type          TEXT    NOT NULL,
        play_result        TEXT    NOT NULL,
        yards_gained       INTEGER NOT NULL,
        turnover           INTEGER NOT NULL,
        penalty            INTEGER NOT NULL,
        weather            TEXT    NOT NULL
    );";

const INSERT: &str = "INSERT INTO plays (
        game_id, play_id, offense_team, defense_team, quarter,
        time_remaining_sec, down, distance, yardline, score_offense,
        score_defense, play_type, play_result, yards_gained, turnover,
        penalty, weather
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)";

/// Writes plays to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_plays(&mut self, rows: &[PlayRecord]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(INSERT)?;
            for row in rows {
                // SQLite INTEGER is signed 64-bit; play ids beyond i64::MAX
                // are not reachable in practice.
                stmt.execute(rusqlite::params![
                    row.game_id.0,
                    row.play_id.0 as i64,
                    row.offense_team.as_str(),
                    row.defense_team.as_str(),
                    row.quarter,
                    row.time_remaining_sec,
                    row.down,
                    row.distance,
                    row.yardline,
                    row.score_offense,
                    row.score_defense,
                    row.play_type.as_str(),
                    row.play_result.as_str(),
                    row.yards_gained,
                    row.turnover as i64,
                    row.penalty as i64,
                    row.weather.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
