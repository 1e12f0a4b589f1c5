//! CSV output backend.
//!
//! One file: the header row (`PlayRecord::COLUMNS`) followed by one record
//! per play.  Enum columns use their dataset labels; `turnover` and
//! `penalty` are written as `0`/`1`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use pbp_engine::PlayRecord;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes plays to a CSV stream.
pub struct CsvWriter<W: Write = File> {
    plays:    Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any byte sink and write the header row.
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        let mut plays = Writer::from_writer(sink);
        plays.write_record(PlayRecord::COLUMNS)?;
        Ok(Self { plays, finished: false })
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.plays.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_plays(&mut self, rows: &[PlayRecord]) -> OutputResult<()> {
        for row in rows {
            self.plays.write_record(row.to_fields())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.plays.flush()?;
        Ok(())
    }
}
