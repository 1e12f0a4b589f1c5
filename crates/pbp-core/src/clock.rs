//! Game clock: quarter plus seconds left in it.
//!
//! # Design
//!
//! The clock is a plain `(quarter, time_remaining)` pair.  Play runoff is
//! subtracted first and the quarter rolled afterwards, and only after plays
//! that keep possession, so `time_remaining` can stay below zero into the
//! next snap.  Everything that reports the clock goes through
//! [`GameClock::display_secs`], which floors at zero.
//!
//! Regulation is four 15-minute quarters.  There is no overtime: the game is
//! over as soon as the quarter counter passes [`REGULATION_QUARTERS`].

use std::fmt;

/// Length of one quarter in seconds.
pub const QUARTER_SECS: i32 = 900;

/// Number of quarters in regulation.
pub const REGULATION_QUARTERS: u8 = 4;

/// Quarter and seconds remaining in it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameClock {
    /// 1–4 during live play; 5 once regulation has expired.
    pub quarter:        u8,
    /// Seconds left in `quarter`.  Can be negative until the next
    /// [`roll_quarter`].
    ///
    /// [`roll_quarter`]: GameClock::roll_quarter
    pub time_remaining: i32,
}

impl GameClock {
    /// Start of the first quarter.
    pub const fn kickoff() -> Self {
        Self { quarter: 1, time_remaining: QUARTER_SECS }
    }

    /// A clock at an arbitrary point, mostly for tests and scenarios.
    pub const fn at(quarter: u8, time_remaining: i32) -> Self {
        Self { quarter, time_remaining }
    }

    /// Subtract `secs` of game time.
    #[inline]
    pub fn run_off(&mut self, secs: u32) {
        self.time_remaining -= secs as i32;
    }

    /// Start the next quarter if this one has expired.
    ///
    /// Returns `true` when the quarter changed.
    pub fn roll_quarter(&mut self) -> bool {
        if self.time_remaining > 0 {
            return false;
        }
        self.quarter += 1;
        self.time_remaining = QUARTER_SECS;
        true
    }

    /// Seconds remaining, floored at zero for reporting.
    #[inline]
    pub fn display_secs(&self) -> u32 {
        self.time_remaining.max(0) as u32
    }

    /// `true` once regulation is over.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.quarter > REGULATION_QUARTERS
    }

    /// `true` in the second or fourth quarter, the end of each half.
    #[inline]
    pub fn is_end_of_half_quarter(&self) -> bool {
        matches!(self.quarter, 2 | 4)
    }

    /// `true` in the fourth quarter with fewer than `secs` remaining.
    #[inline]
    pub fn is_final_stretch(&self, secs: i32) -> bool {
        self.quarter == REGULATION_QUARTERS && self.time_remaining < secs
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::kickoff()
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.display_secs();
        write!(f, "Q{} {:02}:{:02}", self.quarter, secs / 60, secs % 60)
    }
}
