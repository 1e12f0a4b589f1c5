//! Outcome determinator: play call + conditions → what happened.
//!
//! Each play type is resolved as an ordered cascade of independent checks.
//! The first check that fires wins, so order matters: a pass is sacked
//! before it can fall incomplete, and falls incomplete before it can be
//! intercepted.
//!
//! Besides the dataset triple `(result, yards, turnover)` every outcome
//! carries a [`PlayEvent`] tag naming the possession consequence, which is
//! all the state machine looks at.

use pbp_core::{GameRng, PlayResult, PlayType, Weather};

use crate::sampler::sample_range;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Yardage reported on a made field goal.  A row convention, not a distance.
pub const FIELD_GOAL_MADE_YARDS: i32 = 3;

/// Kicks longer than this lose [`LONG_KICK_PENALTY`] from the make rate.
const LONG_KICK_YARDS: i32 = 40;
const LONG_KICK_PENALTY: f64 = 0.15;
/// Kicks longer than this (but not long) lose [`MID_KICK_PENALTY`].
const MID_KICK_YARDS: i32 = 30;
const MID_KICK_PENALTY: f64 = 0.05;

/// Chance a clean punt is returned all the way.
const PUNT_RETURN_TD_PCT: f64 = 0.02;

const KNEEL_YARDS: (i32, i32) = (-2, -1);
const RUN_FUMBLE_YARDS: (i32, i32) = (-5, 5);
const SACK_YARDS: (i32, i32) = (-12, -3);
const INT_RETURN_YARDS: (i32, i32) = (-10, 20);
const CATCH_FUMBLE_YARDS: (i32, i32) = (0, 10);
/// Redraw range for a completion whose weather-scaled yardage went negative.
const SHORT_COMPLETION_YARDS: (i32, i32) = (1, 5);

/// Goal line on the absolute 0–100 scale.
const GOAL_LINE: i32 = 100;

// ── PlayEvent ─────────────────────────────────────────────────────────────────

/// What a play means for possession and scoring.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayEvent {
    /// Ball stays with the offense; down and distance move.
    Normal,
    /// Fumble lost or interception: the defense takes over at the spot.
    Turnover,
    /// Offensive touchdown (PAT assumed good).
    Touchdown,
    FieldGoalMade,
    /// Missed kick: the defense takes over at the spot.
    FieldGoalMissed,
    /// Clean punt: the receiving team takes over.
    Punt,
    /// Punt return score.  Scored like [`Touchdown`][Self::Touchdown]; kept
    /// apart because the row carries punt yards, not the distance to goal.
    ReturnTouchdown,
}

// ── PlayOutcome ───────────────────────────────────────────────────────────────

/// The resolved result of one snap.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayOutcome {
    pub result:   PlayResult,
    pub yards:    i32,
    pub turnover: bool,
    pub event:    PlayEvent,
}

impl PlayOutcome {
    /// A play that leaves the ball with the offense.
    pub const fn normal(result: PlayResult, yards: i32) -> Self {
        Self { result, yards, turnover: false, event: PlayEvent::Normal }
    }

    /// Fumble lost or interception.
    pub const fn turnover(result: PlayResult, yards: i32) -> Self {
        Self { result, yards, turnover: true, event: PlayEvent::Turnover }
    }

    pub const fn touchdown(yards: i32) -> Self {
        Self { result: PlayResult::Touchdown, yards, turnover: false, event: PlayEvent::Touchdown }
    }

    pub const fn field_goal_made() -> Self {
        Self {
            result:   PlayResult::Gain,
            yards:    FIELD_GOAL_MADE_YARDS,
            turnover: false,
            event:    PlayEvent::FieldGoalMade,
        }
    }

    pub const fn field_goal_missed() -> Self {
        Self { result: PlayResult::Loss, yards: 0, turnover: false, event: PlayEvent::FieldGoalMissed }
    }

    pub const fn punt(yards: i32) -> Self {
        Self { result: PlayResult::Gain, yards, turnover: false, event: PlayEvent::Punt }
    }

    pub const fn return_touchdown(yards: i32) -> Self {
        Self { result: PlayResult::Touchdown, yards, turnover: false, event: PlayEvent::ReturnTouchdown }
    }

    /// The `(result, yards, turnover)` triple written to the dataset.
    #[inline]
    pub fn triple(&self) -> (PlayResult, i32, bool) {
        (self.result, self.yards, self.turnover)
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Resolve one snap of `play` in `weather` from `yardline`.
pub fn resolve(play: PlayType, weather: Weather, yardline: i32, rng: &mut GameRng) -> PlayOutcome {
    match play {
        PlayType::Kneel => {
            PlayOutcome::normal(PlayResult::Loss, rng.gen_range(KNEEL_YARDS.0..=KNEEL_YARDS.1))
        }
        PlayType::Spike => PlayOutcome::normal(PlayResult::Incomplete, 0),
        PlayType::FieldGoal => {
            if rng.chance(field_goal_make_pct(yardline, weather)) {
                PlayOutcome::field_goal_made()
            } else {
                PlayOutcome::field_goal_missed()
            }
        }
        PlayType::Punt => resolve_punt(weather, rng),
        PlayType::Run | PlayType::QbSneak => resolve_run(play, weather, yardline, rng),
        PlayType::Pass | PlayType::DeepPass | PlayType::Screen => {
            resolve_pass(play, weather, yardline, rng)
        }
    }
}

/// Weather- and distance-adjusted probability that a kick from `yardline`
/// is good.
pub fn field_goal_make_pct(yardline: i32, weather: Weather) -> f64 {
    let distance = GOAL_LINE - yardline;
    let mut pct = PlayType::FieldGoal.stats().make_pct;
    if distance > LONG_KICK_YARDS {
        pct -= LONG_KICK_PENALTY;
    } else if distance > MID_KICK_YARDS {
        pct -= MID_KICK_PENALTY;
    }
    pct * weather.modifiers().kick
}

fn resolve_punt(weather: Weather, rng: &mut GameRng) -> PlayOutcome {
    let stats = PlayType::Punt.stats();
    let yards = sample_range(rng, stats.yards);

    // Muffed by the returner.
    if rng.chance(stats.fumble_pct * weather.modifiers().fumble) {
        return PlayOutcome::turnover(PlayResult::Fumble, yards);
    }
    if rng.chance(PUNT_RETURN_TD_PCT) {
        return PlayOutcome::return_touchdown(yards);
    }
    PlayOutcome::punt(yards)
}

fn resolve_run(play: PlayType, weather: Weather, yardline: i32, rng: &mut GameRng) -> PlayOutcome {
    let stats = play.stats();
    let mods = weather.modifiers();

    if rng.chance(stats.fumble_pct * mods.fumble) {
        let yards = rng.gen_range(RUN_FUMBLE_YARDS.0..=RUN_FUMBLE_YARDS.1);
        return PlayOutcome::turnover(PlayResult::Fumble, yards);
    }

    let yards = scale(sample_range(rng, stats.yards), mods.run);
    if let Some(td) = touchdown_from(yardline, yards) {
        return td;
    }
    if yards > 0 {
        PlayOutcome::normal(PlayResult::Gain, yards)
    } else {
        PlayOutcome::normal(PlayResult::Loss, yards)
    }
}

fn resolve_pass(play: PlayType, weather: Weather, yardline: i32, rng: &mut GameRng) -> PlayOutcome {
    let stats = play.stats();
    let mods = weather.modifiers();

    if rng.chance(stats.sack_pct) {
        let yards = rng.gen_range(SACK_YARDS.0..=SACK_YARDS.1);
        return PlayOutcome::normal(PlayResult::Sack, yards);
    }
    // Division: adverse weather (modifier < 1) raises the drop rate.
    if rng.chance(stats.incomplete_pct / mods.pass) {
        return PlayOutcome::normal(PlayResult::Incomplete, 0);
    }
    if rng.chance(stats.int_pct) {
        let yards = rng.gen_range(INT_RETURN_YARDS.0..=INT_RETURN_YARDS.1);
        return PlayOutcome::turnover(PlayResult::Interception, yards);
    }
    if rng.chance(stats.fumble_pct * mods.fumble) {
        let yards = rng.gen_range(CATCH_FUMBLE_YARDS.0..=CATCH_FUMBLE_YARDS.1);
        return PlayOutcome::turnover(PlayResult::Fumble, yards);
    }

    let mut yards = scale(sample_range(rng, stats.yards), mods.pass);
    if yards < 0 {
        // Only a sack loses yardage on a pass play.
        yards = rng.gen_range(SHORT_COMPLETION_YARDS.0..=SHORT_COMPLETION_YARDS.1);
    }
    touchdown_from(yardline, yards).unwrap_or(PlayOutcome::normal(PlayResult::Gain, yards))
}

/// Apply a yardage modifier, truncating toward zero.
#[inline]
fn scale(yards: i32, modifier: f64) -> i32 {
    (f64::from(yards) * modifier) as i32
}

/// A scoring outcome if `yards` from `yardline` reaches the goal line.  The
/// reported yardage is clamped to exactly the distance to the goal.
#[inline]
fn touchdown_from(yardline: i32, yards: i32) -> Option<PlayOutcome> {
    (yardline + yards >= GOAL_LINE).then(|| PlayOutcome::touchdown(GOAL_LINE - yardline))
}
