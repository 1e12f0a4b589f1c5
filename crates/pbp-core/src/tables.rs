//! Static probability tables: per-play yardage ranges and event rates, plus
//! the weather modifiers that scale them.
//!
//! Pure data.  The outcome determinator in `pbp-engine` reads these through
//! [`PlayType::stats`] and [`Weather::modifiers`]; nothing mutates them.
//! [`validate_tables`] is run once when a generator is built so an authoring
//! mistake (a rate of `1.3`, an inverted yard range) fails fast instead of
//! skewing a dataset.

use crate::error::check_probability;
use crate::{PbpError, PbpResult, PlayType, Weather};

// ── PlayStats ─────────────────────────────────────────────────────────────────

/// Outcome parameters for one play type.
///
/// Rates that do not apply to a play type are `0.0` (a screen is never
/// sacked, a run is never intercepted).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayStats {
    /// Inclusive yardage range sampled on a normal outcome.
    pub yards:          (i32, i32),
    pub fumble_pct:     f64,
    pub int_pct:        f64,
    pub incomplete_pct: f64,
    pub sack_pct:       f64,
    /// Base make probability (field goals only).
    pub make_pct:       f64,
}

impl PlayStats {
    const fn new(yards: (i32, i32), fumble_pct: f64) -> Self {
        Self {
            yards,
            fumble_pct,
            int_pct:        0.0,
            incomplete_pct: 0.0,
            sack_pct:       0.0,
            make_pct:       0.0,
        }
    }

    const fn passing(yards: (i32, i32), fumble_pct: f64, int_pct: f64, incomplete_pct: f64, sack_pct: f64) -> Self {
        Self { yards, fumble_pct, int_pct, incomplete_pct, sack_pct, make_pct: 0.0 }
    }

    /// Every named base probability, for validation and diagnostics.
    pub fn probabilities(&self) -> [(&'static str, f64); 5] {
        [
            ("fumble_pct",     self.fumble_pct),
            ("int_pct",        self.int_pct),
            ("incomplete_pct", self.incomplete_pct),
            ("sack_pct",       self.sack_pct),
            ("make_pct",       self.make_pct),
        ]
    }
}

const RUN:        PlayStats = PlayStats::new((-5, 15), 0.03);
const PASS:       PlayStats = PlayStats::passing((-10, 30), 0.01, 0.04, 0.35, 0.06);
const DEEP_PASS:  PlayStats = PlayStats::passing((-10, 50), 0.01, 0.08, 0.55, 0.08);
const SCREEN:     PlayStats = PlayStats::passing((-5, 20), 0.02, 0.02, 0.20, 0.0);
const QB_SNEAK:   PlayStats = PlayStats::new((-2, 3), 0.05);
const KNEEL:      PlayStats = PlayStats::new((-2, -1), 0.0);
const SPIKE:      PlayStats = PlayStats::new((0, 0), 0.0);
/// Punt "yards" are the net change of field position handed to the returner.
const PUNT:       PlayStats = PlayStats::new((30, 50), 0.02);
const FIELD_GOAL: PlayStats = PlayStats { make_pct: 0.82, ..PlayStats::new((0, 0), 0.0) };

impl PlayType {
    /// Outcome parameters for this play type.
    pub fn stats(self) -> &'static PlayStats {
        match self {
            PlayType::Run       => &RUN,
            PlayType::Pass      => &PASS,
            PlayType::DeepPass  => &DEEP_PASS,
            PlayType::Screen    => &SCREEN,
            PlayType::QbSneak   => &QB_SNEAK,
            PlayType::Kneel     => &KNEEL,
            PlayType::Spike     => &SPIKE,
            PlayType::Punt      => &PUNT,
            PlayType::FieldGoal => &FIELD_GOAL,
        }
    }
}

// ── WeatherModifiers ──────────────────────────────────────────────────────────

/// Scalars applied to base rates and yardage for one weather condition.
///
/// `run` and `pass` multiply sampled yardage; `pass` also *divides* the
/// incompletion rate, so a modifier below 1 makes drops more likely.
/// `fumble` multiplies every fumble rate and `kick` the field-goal make rate.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherModifiers {
    pub run:    f64,
    pub pass:   f64,
    pub fumble: f64,
    pub kick:   f64,
}

impl WeatherModifiers {
    const fn new(run: f64, pass: f64, fumble: f64, kick: f64) -> Self {
        Self { run, pass, fumble, kick }
    }

    pub fn as_array(&self) -> [(&'static str, f64); 4] {
        [("run", self.run), ("pass", self.pass), ("fumble", self.fumble), ("kick", self.kick)]
    }
}

const CLEAR: WeatherModifiers = WeatherModifiers::new(1.0, 1.0, 1.0, 1.0);
const RAIN:  WeatherModifiers = WeatherModifiers::new(0.9, 0.8, 1.5, 0.85);
const SNOW:  WeatherModifiers = WeatherModifiers::new(0.8, 0.7, 1.8, 0.75);
const COLD:  WeatherModifiers = WeatherModifiers::new(0.95, 0.9, 1.2, 0.9);
const HOT:   WeatherModifiers = WeatherModifiers::new(1.0, 1.0, 1.0, 1.0);
const WINDY: WeatherModifiers = WeatherModifiers::new(1.0, 0.75, 1.0, 0.7);

impl Weather {
    /// Modifier table row for this condition.
    pub fn modifiers(self) -> &'static WeatherModifiers {
        match self {
            Weather::Clear => &CLEAR,
            Weather::Rain  => &RAIN,
            Weather::Snow  => &SNOW,
            Weather::Cold  => &COLD,
            Weather::Hot   => &HOT,
            Weather::Windy => &WINDY,
        }
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Check every table entry, including the weather-adjusted rates the
/// outcome determinator will actually draw against.
pub fn validate_tables() -> PbpResult<()> {
    for &weather in Weather::ALL {
        for (name, value) in weather.modifiers().as_array() {
            if !(value.is_finite() && value > 0.0) {
                return Err(PbpError::Config(format!(
                    "weather modifier {weather}.{name} must be positive, got {value}"
                )));
            }
        }
    }

    for &play in PlayType::ALL {
        let stats = play.stats();
        let (min, max) = stats.yards;
        if min > max {
            return Err(PbpError::Config(format!(
                "{play} yard range is inverted: ({min}, {max})"
            )));
        }
        for (name, value) in stats.probabilities() {
            check_probability(format!("{play}.{name}"), value)?;
        }
        for &weather in Weather::ALL {
            let m = weather.modifiers();
            check_probability(format!("{play}.fumble_pct@{weather}"), stats.fumble_pct * m.fumble)?;
            check_probability(format!("{play}.incomplete_pct@{weather}"), stats.incomplete_pct / m.pass)?;
            check_probability(format!("{play}.make_pct@{weather}"), stats.make_pct * m.kick)?;
        }
    }
    Ok(())
}
