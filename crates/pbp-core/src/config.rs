//! Top-level run configuration.

use crate::error::check_probability;
use crate::{PbpError, PbpResult};

/// Dataset generation settings.
///
/// Built by the application crate (from CLI flags or a config file) and
/// passed to the generator builder, which calls [`validate`][Self::validate]
/// before any game is simulated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenConfig {
    /// Exact number of play rows to produce.  Must be at least 1.
    pub target_rows: u64,

    /// Master RNG seed.  The same seed always produces identical rows.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,

    /// Games simulated per batch before rows are emitted.  Larger batches
    /// keep more threads busy at the cost of simulating a few surplus games
    /// at the end of the run.
    pub games_per_batch: usize,

    /// Probability that a row carries a penalty flag.
    pub penalty_rate: f64,

    /// Probability that the weather changes at the start of the third quarter.
    pub weather_change_rate: f64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            target_rows:         12_000,
            seed:                42,
            num_threads:         None,
            games_per_batch:     64,
            penalty_rate:        0.08,
            weather_change_rate: 0.2,
        }
    }
}

impl GenConfig {
    /// Default settings for `target_rows` rows with `seed`.
    pub fn new(target_rows: u64, seed: u64) -> Self {
        Self { target_rows, seed, ..Self::default() }
    }

    /// Reject settings that would make the run meaningless.
    pub fn validate(&self) -> PbpResult<()> {
        if self.target_rows == 0 {
            return Err(PbpError::Config("target row count must be at least 1".into()));
        }
        if self.games_per_batch == 0 {
            return Err(PbpError::Config("games_per_batch must be at least 1".into()));
        }
        if self.num_threads == Some(0) {
            return Err(PbpError::Config("num_threads must be at least 1 when set".into()));
        }
        check_probability("penalty_rate", self.penalty_rate)?;
        check_probability("weather_change_rate", self.weather_change_rate)?;
        Ok(())
    }
}
