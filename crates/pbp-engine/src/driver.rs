//! The `Generator` and its game loop.

use log::{debug, info};
use pbp_core::{GameId, GenConfig, PlayId};

use crate::game::{SimulatedGame, simulate_game};
use crate::{EngineResult, GameObserver, GeneratorBuilder, PlayCaller, PlayRecord, RowCollector};

/// Generous plays-per-game figure used to size batches near the end of a run
/// so only a handful of surplus games are simulated.
const PLAYS_PER_GAME_ESTIMATE: u64 = 160;

/// Dataset generator.
///
/// `Generator<C>` drives games from kickoff to the end of regulation, one
/// batch at a time, and emits one [`PlayRecord`] per snap until
/// `config.target_rows` rows exist:
///
/// 1. **Simulate** a batch of consecutive game ids (in parallel with the
///    `parallel` feature).  Each game owns its RNG, so the batch result does
///    not depend on scheduling.
/// 2. **Emit** the batch sequentially in game order: assign play ids from a
///    run-wide counter starting at 0 and hand each row to the observer.
///    The last game is cut off as soon as the target is reached.
///
/// Create via [`GeneratorBuilder`].
pub struct Generator<C: PlayCaller> {
    /// Validated run configuration.
    pub config: GenConfig,

    /// The play caller.  Called once per snap.
    pub caller: C,

    #[cfg(feature = "parallel")]
    pub(crate) pool: rayon::ThreadPool,
}

impl<C: PlayCaller> Generator<C> {
    /// Generate the full dataset, handing every row to `observer`.
    ///
    /// Returns the number of rows emitted, which always equals
    /// `config.target_rows`.
    pub fn run<O: GameObserver>(&mut self, observer: &mut O) -> EngineResult<u64> {
        let target = self.config.target_rows;
        info!("generating {target} plays (seed {})", self.config.seed);

        let mut next_game = GameId::FIRST;
        let mut next_play = PlayId(0);
        let mut games = 0u64;

        while next_play.0 < target {
            let remaining = target - next_play.0;
            let count = remaining
                .div_ceil(PLAYS_PER_GAME_ESTIMATE)
                .min(self.config.games_per_batch as u64) as u32;

            let batch = self.simulate_batch(next_game, count.max(1));
            next_game = GameId(next_game.0 + batch.len() as u32);

            for game in &batch {
                if next_play.0 >= target {
                    break;
                }
                next_play = emit_game(game, next_play, target, observer);
                games += 1;
            }
            debug!("batch done: {} rows, {games} games", next_play.0);
        }

        observer.on_run_end(next_play.0);
        info!("generated {} plays across {games} games", next_play.0);
        Ok(next_play.0)
    }

    /// Generate the full dataset into memory.
    pub fn generate(&mut self) -> EngineResult<Vec<PlayRecord>> {
        let capacity = usize::try_from(self.config.target_rows).unwrap_or(0);
        let mut collector = RowCollector::with_capacity(capacity);
        self.run(&mut collector)?;
        Ok(collector.into_rows())
    }

    /// Simulate games `first .. first + count`, returned in id order.
    fn simulate_batch(&self, first: GameId, count: u32) -> Vec<SimulatedGame> {
        let ids = (first.0..first.0 + count).map(GameId);

        #[cfg(not(feature = "parallel"))]
        {
            ids.map(|id| simulate_game(id, &self.config, &self.caller)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let ids: Vec<GameId> = ids.collect();
            let config = &self.config;
            let caller = &self.caller;
            self.pool.install(|| {
                ids.into_par_iter()
                    .map(|id| simulate_game(id, config, caller))
                    .collect()
            })
        }
    }
}

/// Emit the rows of one game starting at `first_play`, stopping at
/// `target`.  Returns the next unused play id.
fn emit_game<O: GameObserver>(
    game:       &SimulatedGame,
    first_play: PlayId,
    target:     u64,
    observer:   &mut O,
) -> PlayId {
    observer.on_game_start(game.game_id, &game.opening);

    let mut play_id = first_play;
    for play in &game.plays {
        if play_id.0 >= target {
            break;
        }
        let record = PlayRecord::new(play_id, &play.before, play.play_type, &play.outcome, play.penalty);
        observer.on_play(&record);
        play_id = play_id.next();
    }

    let emitted = (play_id.0 - first_play.0) as usize;
    observer.on_game_end(game.game_id, &game.last, emitted < game.plays.len());
    play_id
}

/// Generate `target_rows` plays with the default situational play caller
/// and default rates.
pub fn generate(target_rows: u64, seed: u64) -> EngineResult<Vec<PlayRecord>> {
    GeneratorBuilder::new(GenConfig::new(target_rows, seed))
        .build()?
        .generate()
}
