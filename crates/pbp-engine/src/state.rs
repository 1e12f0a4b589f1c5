//! Per-game state and the transition function that advances it one play.
//!
//! # Orientation
//!
//! `yardline` is measured from the *offense's* own goal line (0) to the
//! opponent's (100).  Score fields travel with the role, not the team:
//! `score_offense` is always the score of whoever has the ball.  Every
//! possession change therefore swaps both team identities and score fields
//! and re-expresses field position from the new offense's side.
//!
//! # Invariants between plays
//!
//! - `down` ∈ [1, 4]; a fifth down is converted into a turnover on downs
//!   inside [`GameState::advance`] and never observed outside it.
//! - `yardline` ∈ [1, 99]; reaching 100 is a touchdown, never a resting spot.
//! - `distance` ≥ 1.
//! - Scores never decrease.

use pbp_core::{GameClock, GameId, GameRng, Team, Weather};

use crate::outcome::{PlayEvent, PlayOutcome};

/// Yards needed for a fresh set of downs.
pub const FIRST_DOWN_DISTANCE: i32 = 10;
/// Spot after a kickoff touchback (and at the opening kickoff).
pub const TOUCHBACK_YARDLINE: i32 = 25;
/// A punt never pins the receiving team deeper than this.
pub const PUNT_FLOOR_YARDLINE: i32 = 20;
pub const TOUCHDOWN_POINTS: u32 = 7;
pub const FIELD_GOAL_POINTS: u32 = 3;

const MIN_YARDLINE: i32 = 1;
const MAX_YARDLINE: i32 = 99;
const LAST_DOWN: u8 = 4;

/// Seconds of clock a clock-stopping play takes.
const STOPPED_CLOCK_RUNOFF: (u32, u32) = (3, 8);
/// Seconds of clock every other play takes, huddle included.
const RUNNING_CLOCK_RUNOFF: (u32, u32) = (25, 45);

/// Mutable state of one game, owned by the driver for that game only.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub game_id:       GameId,
    pub clock:         GameClock,
    pub down:          u8,
    pub distance:      i32,
    pub yardline:      i32,
    pub score_offense: u32,
    pub score_defense: u32,
    pub offense:       Team,
    pub defense:       Team,
    pub weather:       Weather,
    /// Plays run so far in this game.
    pub play_count:    u32,
}

impl GameState {
    /// Opening state: Q1 15:00, 1st & 10 at the offense's 25, 0–0.
    pub fn kickoff(game_id: GameId, offense: Team, defense: Team, weather: Weather) -> Self {
        Self {
            game_id,
            clock:         GameClock::kickoff(),
            down:          1,
            distance:      FIRST_DOWN_DISTANCE,
            yardline:      TOUCHBACK_YARDLINE,
            score_offense: 0,
            score_defense: 0,
            offense,
            defense,
            weather,
            play_count:    0,
        }
    }

    #[inline]
    pub fn quarter(&self) -> u8 {
        self.clock.quarter
    }

    #[inline]
    pub fn time_remaining(&self) -> i32 {
        self.clock.time_remaining
    }

    /// Offense score minus defense score.
    #[inline]
    pub fn score_diff(&self) -> i64 {
        i64::from(self.score_offense) - i64::from(self.score_defense)
    }

    /// `true` once regulation has expired.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.clock.is_final()
    }

    /// Score of `team`, whichever side of the ball it is on.
    ///
    /// In a self-matchup both roles are the same franchise; the offense's
    /// score is returned.
    pub fn score_of(&self, team: Team) -> Option<u32> {
        if team == self.offense {
            Some(self.score_offense)
        } else if team == self.defense {
            Some(self.score_defense)
        } else {
            None
        }
    }

    /// Apply one play's outcome and return the next state.
    ///
    /// Order: play counter, clock runoff, then the possession consequence
    /// named by `outcome.event`.  Only a play that keeps the ball with the
    /// offense rolls the quarter; after a possession change an expired clock
    /// carries into the next snap, which then reports 0 seconds left.
    pub fn advance(mut self, outcome: &PlayOutcome, rng: &mut GameRng) -> GameState {
        self.play_count += 1;

        let (lo, hi) = if outcome.result.stops_clock() {
            STOPPED_CLOCK_RUNOFF
        } else {
            RUNNING_CLOCK_RUNOFF
        };
        self.clock.run_off(rng.gen_range(lo..=hi));

        match outcome.event {
            PlayEvent::Turnover | PlayEvent::FieldGoalMissed => {
                let spot = mirror(self.yardline);
                self.change_possession(spot);
            }
            // A punt returned for a score is booked like any touchdown:
            // the side listed as offense scores and kicks off.
            PlayEvent::Touchdown | PlayEvent::ReturnTouchdown => {
                self.score_offense += TOUCHDOWN_POINTS;
                self.change_possession(TOUCHBACK_YARDLINE);
            }
            PlayEvent::FieldGoalMade => {
                self.score_offense += FIELD_GOAL_POINTS;
                self.change_possession(TOUCHBACK_YARDLINE);
            }
            PlayEvent::Punt => {
                let spot = (100 - outcome.yards).max(PUNT_FLOOR_YARDLINE);
                self.change_possession(spot);
            }
            PlayEvent::Normal => {
                self.move_chains(outcome.yards);
                self.clock.roll_quarter();
            }
        }

        self
    }

    /// Gain or lose `yards` without a possession event.
    fn move_chains(&mut self, yards: i32) {
        self.yardline = (self.yardline + yards).clamp(MIN_YARDLINE, MAX_YARDLINE);

        if yards >= self.distance {
            self.down = 1;
            self.distance = FIRST_DOWN_DISTANCE;
            return;
        }

        self.down += 1;
        self.distance = (self.distance - yards).max(1);
        if self.down > LAST_DOWN {
            // Turnover on downs.
            let spot = mirror(self.yardline);
            self.change_possession(spot);
        }
    }

    /// Hand the ball to the other team with a fresh series at `yardline`
    /// (already expressed from the new offense's side).
    fn change_possession(&mut self, yardline: i32) {
        std::mem::swap(&mut self.offense, &mut self.defense);
        std::mem::swap(&mut self.score_offense, &mut self.score_defense);
        self.new_series(yardline);
    }

    fn new_series(&mut self, yardline: i32) {
        self.yardline = yardline.clamp(MIN_YARDLINE, MAX_YARDLINE);
        self.down = 1;
        self.distance = FIRST_DOWN_DISTANCE;
    }
}

/// The same spot seen from the other end of the field.
#[inline]
fn mirror(yardline: i32) -> i32 {
    100 - yardline
}
