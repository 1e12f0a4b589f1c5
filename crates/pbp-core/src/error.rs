//! Generator error type.
//!
//! Everything here is a configuration-authoring defect caught before the
//! simulation loop starts; the engine itself has no recoverable runtime
//! failures.  Sub-crates wrap `PbpError` as one variant of their own enums.

use thiserror::Error;

/// The top-level error type for `pbp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PbpError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("probability `{name}` is {value}, expected a value in [0, 1]")]
    InvalidProbability {
        name:  String,
        value: f64,
    },

    #[error("parse error: unknown {kind} `{value}`")]
    Parse {
        kind:  &'static str,
        value: String,
    },
}

/// Shorthand result type for all `pbp-*` crates.
pub type PbpResult<T> = Result<T, PbpError>;

/// Check that `value` is a valid probability, naming it in the error.
pub fn check_probability(name: impl Into<String>, value: f64) -> PbpResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PbpError::InvalidProbability { name: name.into(), value })
    }
}
