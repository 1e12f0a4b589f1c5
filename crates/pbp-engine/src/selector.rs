//! Play selection: the `PlayCaller` extension point and the default
//! situational play caller.

use pbp_core::{GameRng, PlayType};

use crate::GameState;

/// Pluggable play calling.
///
/// Implement this trait to change how plays are chosen; the driver is
/// generic over it.  Implementations must be `Send + Sync` because the
/// `parallel` feature calls them from several worker threads at once.  Any
/// per-game memory belongs in [`GameState`], not in the caller.
pub trait PlayCaller: Send + Sync {
    /// Choose the next play for the current situation.
    fn call_play(&self, state: &GameState, rng: &mut GameRng) -> PlayType;
}

/// Hand-authored situational heuristics: clock management first, then
/// fourth down, short yardage, third and long, red zone, and a balanced
/// default mix.  See [`select`].
#[derive(Copy, Clone, Debug, Default)]
pub struct SituationalCaller;

impl PlayCaller for SituationalCaller {
    #[inline]
    fn call_play(&self, state: &GameState, rng: &mut GameRng) -> PlayType {
        select(state, rng)
    }
}

// ── Thresholds ────────────────────────────────────────────────────────────────

/// Fourth-quarter window in which a leading offense starts bleeding clock.
const CLOCK_KILL_SECS: i32 = 120;
/// Inside this the leading offense kneels every snap.
const KNEEL_OUT_SECS: i32 = 45;
/// End-of-half window for clock-stopping calls.
const HURRY_UP_SECS: i32 = 30;
const SHORT_YARDAGE: i32 = 2;
const LONG_YARDAGE: i32 = 8;
/// Go for it on 4th and short from here on.
const GO_FOR_IT_YARDLINE: i32 = 60;
const FIELD_GOAL_RANGE: i32 = 65;
const RED_ZONE: i32 = 80;

const BLEED_CLOCK: [PlayType; 3] = [PlayType::Run, PlayType::Run, PlayType::Kneel];
const HURRY_UP: [PlayType; 3] = [PlayType::Pass, PlayType::DeepPass, PlayType::Spike];
const SHORT_YARDAGE_MIX: [PlayType; 4] =
    [PlayType::Run, PlayType::Run, PlayType::QbSneak, PlayType::Pass];
const THIRD_AND_LONG_MIX: [PlayType; 4] =
    [PlayType::Pass, PlayType::Pass, PlayType::DeepPass, PlayType::Screen];
const RED_ZONE_MIX: [PlayType; 4] =
    [PlayType::Run, PlayType::Pass, PlayType::Pass, PlayType::Screen];
const DEFAULT_MIX: [(PlayType, u32); 4] = [
    (PlayType::Run,      35),
    (PlayType::Pass,     40),
    (PlayType::DeepPass, 15),
    (PlayType::Screen,   10),
];

/// Choose a play for `state`.  The first matching rule wins:
///
/// 1. Q4, under 2:00, offense leading → kneel inside 0:45, else run/run/kneel.
/// 2. Q2 or Q4, under 0:30 → pass/deep pass/spike.
/// 3. 4th down → sneak on 4th-and-short past the 60, field goal past the
///    65, otherwise punt.
/// 4. Distance ≤ 2 → run/run/sneak/pass.
/// 5. 3rd and 8+ → pass/pass/deep pass/screen.
/// 6. Red zone (80+) → run/pass/pass/screen.
/// 7. Otherwise run 35, pass 40, deep pass 15, screen 10.
pub fn select(state: &GameState, rng: &mut GameRng) -> PlayType {
    let clock = &state.clock;

    if clock.is_final_stretch(CLOCK_KILL_SECS) && state.score_diff() > 0 {
        if clock.time_remaining < KNEEL_OUT_SECS {
            return PlayType::Kneel;
        }
        return pick(rng, &BLEED_CLOCK);
    }

    if clock.is_end_of_half_quarter() && clock.time_remaining < HURRY_UP_SECS {
        return pick(rng, &HURRY_UP);
    }

    if state.down == 4 {
        if state.distance <= SHORT_YARDAGE && state.yardline >= GO_FOR_IT_YARDLINE {
            return PlayType::QbSneak;
        }
        if state.yardline >= FIELD_GOAL_RANGE {
            return PlayType::FieldGoal;
        }
        return PlayType::Punt;
    }

    if state.distance <= SHORT_YARDAGE {
        return pick(rng, &SHORT_YARDAGE_MIX);
    }

    if state.down == 3 && state.distance >= LONG_YARDAGE {
        return pick(rng, &THIRD_AND_LONG_MIX);
    }

    if state.yardline >= RED_ZONE {
        return pick(rng, &RED_ZONE_MIX);
    }

    rng.choose_weighted(&DEFAULT_MIX).copied().unwrap_or(PlayType::Pass)
}

/// Uniform choice from a fixed, non-empty option list (duplicates weight).
#[inline]
fn pick<const N: usize>(rng: &mut GameRng, options: &[PlayType; N]) -> PlayType {
    options[rng.gen_range(0..N)]
}
