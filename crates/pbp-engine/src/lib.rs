//! `pbp-engine` — the play simulation engine.
//!
//! # One play
//!
//! ```text
//! while !state.clock.is_final():
//!   ① Weather   — at the first snap of Q3, maybe draw new conditions.
//!   ② Call      — PlayCaller::call_play picks a PlayType from the situation.
//!   ③ Resolve   — outcome::resolve turns (play, weather, yardline) into a
//!                 tagged PlayOutcome.
//!   ④ Record    — snapshot the pre-play state into a PlayRecord.
//!   ⑤ Advance   — GameState::advance applies the outcome: clock, score,
//!                 possession, down & distance, field position.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`sampler`]  | Middle-weighted yardage sampler                            |
//! | [`outcome`]  | `PlayOutcome`, `PlayEvent`, `resolve`                      |
//! | [`selector`] | `PlayCaller` trait, `SituationalCaller`                    |
//! | [`state`]    | `GameState` and its transition function                    |
//! | [`record`]   | `PlayRecord` output row                                    |
//! | [`game`]     | One game from kickoff to the end of regulation             |
//! | [`driver`]   | `Generator`: games until the row target is met            |
//! | [`builder`]  | `GeneratorBuilder`                                         |
//! | [`observer`] | `GameObserver` hooks, `NoopObserver`, `RowCollector`, pairs |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Simulates each batch of games on Rayon's thread pool.  |
//! | `serde`    | Serde derives on state, outcome, and row types.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pbp_core::GenConfig;
//! use pbp_engine::GeneratorBuilder;
//!
//! let mut generator = GeneratorBuilder::new(GenConfig::new(12_000, 42)).build()?;
//! let rows = generator.generate()?;
//! assert_eq!(rows.len(), 12_000);
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod game;
pub mod observer;
pub mod outcome;
pub mod record;
pub mod sampler;
pub mod selector;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::GeneratorBuilder;
pub use driver::{Generator, generate};
pub use error::{EngineError, EngineResult};
pub use game::{GamePlay, SimulatedGame, simulate_game};
pub use observer::{GameObserver, NoopObserver, RowCollector};
pub use outcome::{PlayEvent, PlayOutcome, resolve};
pub use record::PlayRecord;
pub use selector::{PlayCaller, SituationalCaller, select};
pub use state::GameState;
