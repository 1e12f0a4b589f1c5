use pbp_core::PbpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("generator configuration error: {0}")]
    Config(#[from] PbpError),

    #[cfg(feature = "parallel")]
    #[error("could not start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type EngineResult<T> = Result<T, EngineError>;
