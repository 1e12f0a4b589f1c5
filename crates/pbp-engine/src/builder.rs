//! Fluent builder for constructing a [`Generator`].

use pbp_core::{GenConfig, validate_tables};

use crate::{EngineResult, Generator, PlayCaller, SituationalCaller};

/// Fluent builder for [`Generator<C>`].
///
/// # Required inputs
///
/// - [`GenConfig`]: row target, seed, thread count, rates
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default               |
/// |---------------|-----------------------|
/// | `.caller(c)`  | [`SituationalCaller`] |
///
/// # Example
///
/// ```rust,ignore
/// let mut generator = GeneratorBuilder::new(config)
///     .caller(SituationalCaller)
///     .build()?;
/// let rows = generator.generate()?;
/// ```
pub struct GeneratorBuilder<C: PlayCaller = SituationalCaller> {
    config: GenConfig,
    caller: C,
}

impl GeneratorBuilder<SituationalCaller> {
    /// Create a builder using the default play caller.
    pub fn new(config: GenConfig) -> Self {
        Self { config, caller: SituationalCaller }
    }
}

impl<C: PlayCaller> GeneratorBuilder<C> {
    /// Replace the play caller.
    pub fn caller<D: PlayCaller>(self, caller: D) -> GeneratorBuilder<D> {
        GeneratorBuilder { config: self.config, caller }
    }

    /// Validate the configuration and the probability tables and return a
    /// ready-to-run [`Generator`].
    pub fn build(self) -> EngineResult<Generator<C>> {
        self.config.validate()?;
        validate_tables()?;

        #[cfg(feature = "parallel")]
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.num_threads.unwrap_or(0))
            .build()?;

        Ok(Generator {
            config: self.config,
            caller: self.caller,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
