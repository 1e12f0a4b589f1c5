//! `pbp-core` — foundational types for the `rust_pbp` play-by-play generator.
//!
//! This crate is a dependency of every other `pbp-*` crate.  It intentionally
//! has no `pbp-*` dependencies and minimal external ones (`rand`,
//! `rand_distr` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `GameId`, `PlayId`                                    |
//! | [`play`]        | `PlayType`, `PlayResult`, `Weather`, `Team`           |
//! | [`tables`]      | `PlayStats`, `WeatherModifiers`, table validation     |
//! | [`clock`]       | `GameClock`, quarter constants                        |
//! | [`config`]      | `GenConfig`                                           |
//! | [`rng`]         | `GameRng` (per-game), `SimRng` (run-level)            |
//! | [`error`]       | `PbpError`, `PbpResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod clock;
pub mod config;
pub mod error;
pub mod ids;
pub mod play;
pub mod rng;
pub mod tables;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{GameClock, QUARTER_SECS, REGULATION_QUARTERS};
pub use config::GenConfig;
pub use error::{PbpError, PbpResult};
pub use ids::{GameId, PlayId};
pub use play::{PlayResult, PlayType, Team, Weather};
pub use rng::{GameRng, SimRng};
pub use tables::{PlayStats, WeatherModifiers, validate_tables};
