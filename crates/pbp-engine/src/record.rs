//! The dataset row.

use pbp_core::{GameId, PlayId, PlayResult, PlayType, Team, Weather};

use crate::{GameState, PlayOutcome};

/// One play: the game situation *before* the snap, the call, and the result.
///
/// Built by the driver once the play id is known and never mutated after.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayRecord {
    pub game_id:            GameId,
    pub play_id:            PlayId,
    pub offense_team:       Team,
    pub defense_team:       Team,
    pub quarter:            u8,
    /// Floored at zero.
    pub time_remaining_sec: u32,
    pub down:               u8,
    pub distance:           i32,
    pub yardline:           i32,
    pub score_offense:      u32,
    pub score_defense:      u32,
    pub play_type:          PlayType,
    pub play_result:        PlayResult,
    pub yards_gained:       i32,
    pub turnover:           bool,
    /// Independent flag; never feeds back into the game state.
    pub penalty:            bool,
    pub weather:            Weather,
}

impl PlayRecord {
    /// Output column names, in order.
    pub const COLUMNS: [&'static str; 17] = [
        "game_id",
        "play_id",
        "offense_team",
        "defense_team",
        "quarter",
        "time_remaining_sec",
        "down",
        "distance",
        "yardline",
        "score_offense",
        "score_defense",
        "play_type",
        "play_result",
        "yards_gained",
        "turnover",
        "penalty",
        "weather",
    ];

    /// Snapshot `before` together with the call and its outcome.
    pub fn new(
        play_id:   PlayId,
        before:    &GameState,
        play_type: PlayType,
        outcome:   &PlayOutcome,
        penalty:   bool,
    ) -> Self {
        Self {
            game_id:            before.game_id,
            play_id,
            offense_team:       before.offense,
            defense_team:       before.defense,
            quarter:            before.clock.quarter,
            time_remaining_sec: before.clock.display_secs(),
            down:               before.down,
            distance:           before.distance,
            yardline:           before.yardline,
            score_offense:      before.score_offense,
            score_defense:      before.score_defense,
            play_type,
            play_result:        outcome.result,
            yards_gained:       outcome.yards,
            turnover:           outcome.turnover,
            penalty,
            weather:            before.weather,
        }
    }

    /// Every field rendered as its dataset text, in [`COLUMNS`][Self::COLUMNS]
    /// order.  Booleans are `0`/`1`.
    pub fn to_fields(&self) -> [String; 17] {
        [
            self.game_id.to_string(),
            self.play_id.to_string(),
            self.offense_team.to_string(),
            self.defense_team.to_string(),
            self.quarter.to_string(),
            self.time_remaining_sec.to_string(),
            self.down.to_string(),
            self.distance.to_string(),
            self.yardline.to_string(),
            self.score_offense.to_string(),
            self.score_defense.to_string(),
            self.play_type.to_string(),
            self.play_result.to_string(),
            self.yards_gained.to_string(),
            u8::from(self.turnover).to_string(),
            u8::from(self.penalty).to_string(),
            self.weather.to_string(),
        ]
    }
}
