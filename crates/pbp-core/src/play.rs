//! Play, result, weather, and team vocabulary shared by every crate.
//!
//! Each enum carries its dataset label via `as_str()`; `Display` and
//! `FromStr` round-trip through that label so CSV columns and CLI flags use
//! the same spelling.

use std::fmt;
use std::str::FromStr;

use crate::PbpError;

/// Generate `as_str`, `ALL`, `Display`, and `FromStr` for a fieldless enum.
macro_rules! labelled_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $( $(#[$vattr:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $( $(#[$vattr])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Dataset label used in output columns.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = PbpError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok($name::$variant), )+
                    other => Err(PbpError::Parse { kind: $kind, value: other.to_owned() }),
                }
            }
        }
    };
}

labelled_enum! {
    /// The call made before the snap.
    pub enum PlayType: "play type" {
        Run       => "run",
        Pass      => "pass",
        DeepPass  => "deep_pass",
        Screen    => "screen",
        QbSneak   => "qb_sneak",
        /// Victory formation: burns clock, always loses a yard or two.
        Kneel     => "kneel",
        /// Clock-stopping incompletion.
        Spike     => "spike",
        Punt      => "punt",
        FieldGoal => "field_goal",
    }
}

labelled_enum! {
    /// How a play ended.
    pub enum PlayResult: "play result" {
        Gain         => "gain",
        Loss         => "loss",
        Incomplete   => "incomplete",
        Interception => "interception",
        Sack         => "sack",
        Fumble       => "fumble",
        Touchdown    => "touchdown",
    }
}

impl PlayResult {
    /// Results that stop the game clock almost immediately.
    #[inline]
    pub fn stops_clock(self) -> bool {
        matches!(self, PlayResult::Incomplete)
    }
}

labelled_enum! {
    /// Game-day conditions.  Scales run/pass/fumble/kick rates via
    /// [`WeatherModifiers`][crate::WeatherModifiers].
    pub enum Weather: "weather" {
        Clear => "clear",
        Rain  => "rain",
        Snow  => "snow",
        Cold  => "cold",
        Hot   => "hot",
        Windy => "windy",
    }
}

labelled_enum! {
    /// The ten franchises games are drawn from.
    pub enum Team: "team" {
        Bills    => "Bills",
        Chiefs   => "Chiefs",
        Dolphins => "Dolphins",
        Patriots => "Patriots",
        Steelers => "Steelers",
        Niners   => "49ers",
        Cowboys  => "Cowboys",
        Eagles   => "Eagles",
        Packers  => "Packers",
        Rams     => "Rams",
    }
}
