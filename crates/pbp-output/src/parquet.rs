//! Parquet output backend (feature `parquet`).
//!
//! One snappy-compressed file whose schema mirrors `PlayRecord::COLUMNS`.
//! Enum columns are UTF-8 labels; `turnover` and `penalty` are booleans.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, BooleanBuilder, Int32Builder, StringBuilder, UInt8Builder, UInt32Builder,
    UInt64Builder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use pbp_engine::PlayRecord;

use crate::OutputResult;
use crate::writer::OutputWriter;

fn play_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("game_id",            DataType::UInt32,  false),
        Field::new("play_id",            DataType::UInt64,  false),
        Field::new("offense_team",       DataType::Utf8,    false),
        Field::new("defense_team",       DataType::Utf8,    false),
        Field::new("quarter",            DataType::UInt8,   false),
        Field::new("time_remaining_sec", DataType::UInt32,  false),
        Field::new("down",               DataType::UInt8,   false),
        Field::new("distance",           DataType::Int32,   false),
        Field::new("yardline",           DataType::Int32,   false),
        Field::new("score_offense",      DataType::UInt32,  false),
        Field::new("score_defense",      DataType::UInt32,  false),
        Field::new("play_type",          DataType::Utf8,    false),
        Field::new("play_result",        DataType::Utf8,    false),
        Field::new("yards_gained",       DataType::Int32,   false),
        Field::new("turnover",           DataType::Boolean, false),
        Field::new("penalty",            DataType::Boolean, false),
        Field::new("weather",            DataType::Utf8,    false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes plays to a Parquet file.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    plays:  Option<ArrowWriter<File>>,
    schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create (or truncate) the Parquet file at `path`.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let schema = play_schema();
        let file = File::create(path)?;
        let plays = ArrowWriter::try_new(file, Arc::clone(&schema), Some(snappy_props()))?;
        Ok(Self { plays: Some(plays), schema })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_plays(&mut self, rows: &[PlayRecord]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.plays.as_mut() else {
            return Ok(());
        };

        let mut game_ids       = UInt32Builder::new();
        let mut play_ids       = UInt64Builder::new();
        let mut offense_teams  = StringBuilder::new();
        let mut defense_teams  = StringBuilder::new();
        let mut quarters       = UInt8Builder::new();
        let mut times          = UInt32Builder::new();
        let mut downs          = UInt8Builder::new();
        let mut distances      = Int32Builder::new();
        let mut yardlines      = Int32Builder::new();
        let mut scores_offense = UInt32Builder::new();
        let mut scores_defense = UInt32Builder::new();
        let mut play_types     = StringBuilder::new();
        let mut play_results   = StringBuilder::new();
        let mut yards          = Int32Builder::new();
        let mut turnovers      = BooleanBuilder::new();
        let mut penalties      = BooleanBuilder::new();
        let mut weathers       = StringBuilder::new();

        for row in rows {
            game_ids.append_value(row.game_id.0);
            play_ids.append_value(row.play_id.0);
            offense_teams.append_value(row.offense_team.as_str());
            defense_teams.append_value(row.defense_team.as_str());
            quarters.append_value(row.quarter);
            times.append_value(row.time_remaining_sec);
            downs.append_value(row.down);
            distances.append_value(row.distance);
            yardlines.append_value(row.yardline);
            scores_offense.append_value(row.score_offense);
            scores_defense.append_value(row.score_defense);
            play_types.append_value(row.play_type.as_str());
            play_results.append_value(row.play_result.as_str());
            yards.append_value(row.yards_gained);
            turnovers.append_value(row.turnover);
            penalties.append_value(row.penalty);
            weathers.append_value(row.weather.as_str());
        }

        let columns: Vec<ArrayRef> = vec![
            Arc::new(game_ids.finish()),
            Arc::new(play_ids.finish()),
            Arc::new(offense_teams.finish()),
            Arc::new(defense_teams.finish()),
            Arc::new(quarters.finish()),
            Arc::new(times.finish()),
            Arc::new(downs.finish()),
            Arc::new(distances.finish()),
            Arc::new(yardlines.finish()),
            Arc::new(scores_offense.finish()),
            Arc::new(scores_defense.finish()),
            Arc::new(play_types.finish()),
            Arc::new(play_results.finish()),
            Arc::new(yards.finish()),
            Arc::new(turnovers.finish()),
            Arc::new(penalties.finish()),
            Arc::new(weathers.finish()),
        ];
        let batch = RecordBatch::try_new(Arc::clone(&self.schema), columns)?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.plays.take() {
            w.close()?;
        }
        Ok(())
    }
}
