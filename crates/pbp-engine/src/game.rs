//! One game from kickoff to the end of regulation.
//!
//! A game is fully self-contained: it draws every random number from its own
//! [`GameRng`] (seeded from the run seed and the game id) and touches no
//! shared state, which is what lets the driver simulate a batch of games on
//! several threads and still emit identical rows.

use log::{debug, trace};
use pbp_core::{GameId, GameRng, GenConfig, PlayType, Team, Weather};

use crate::outcome::{PlayOutcome, resolve};
use crate::{GameState, PlayCaller};

/// Quarter in which the weather may change.
const WEATHER_CHANGE_QUARTER: u8 = 3;

/// One snap, before a play id has been assigned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GamePlay {
    /// State before the snap.
    pub before:    GameState,
    pub play_type: PlayType,
    pub outcome:   PlayOutcome,
    pub penalty:   bool,
}

/// Every play of one game plus its final state.
#[derive(Clone, Debug)]
pub struct SimulatedGame {
    pub game_id: GameId,
    pub opening: GameState,
    pub plays:   Vec<GamePlay>,
    /// State after the last play (quarter past regulation).
    pub last:    GameState,
}

/// Simulate game `game_id` under `config` with play calls from `caller`.
///
/// Matchup and weather are drawn uniformly; a team may play itself.
pub fn simulate_game<C: PlayCaller + ?Sized>(
    game_id: GameId,
    config:  &GenConfig,
    caller:  &C,
) -> SimulatedGame {
    let mut rng = GameRng::new(config.seed, game_id);

    let offense = draw(&mut rng, Team::ALL, Team::Bills);
    let defense = draw(&mut rng, Team::ALL, Team::Bills);
    let weather = draw(&mut rng, Weather::ALL, Weather::Clear);
    let opening = GameState::kickoff(game_id, offense, defense, weather);

    let mut state = opening;
    let mut weather_checked = false;
    let mut plays = Vec::new();

    while !state.is_over() {
        if !weather_checked && state.quarter() == WEATHER_CHANGE_QUARTER {
            weather_checked = true;
            if rng.chance(config.weather_change_rate) {
                let next = draw(&mut rng, Weather::ALL, state.weather);
                debug!("game {game_id}: weather {} -> {next} at halftime", state.weather);
                state.weather = next;
            }
        }

        let play_type = caller.call_play(&state, &mut rng);
        let outcome = resolve(play_type, state.weather, state.yardline, &mut rng);
        let penalty = rng.chance(config.penalty_rate);
        trace!(
            "game {game_id} {} {}&{} at {}: {play_type} -> {} {}",
            state.clock, state.down, state.distance, state.yardline, outcome.result, outcome.yards,
        );

        plays.push(GamePlay { before: state, play_type, outcome, penalty });
        state = state.advance(&outcome, &mut rng);
    }

    debug!(
        "game {game_id}: {} plays, final {} {} - {} {}",
        plays.len(), state.offense, state.score_offense, state.defense, state.score_defense,
    );

    SimulatedGame { game_id, opening, plays, last: state }
}

/// Uniform draw from a non-empty vocabulary list.
#[inline]
fn draw<T: Copy>(rng: &mut GameRng, options: &[T], fallback: T) -> T {
    rng.choose(options).copied().unwrap_or(fallback)
}
