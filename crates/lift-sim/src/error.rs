use lift_engine::EngineError;
use lift_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Raised only for failures that doom the run: metadata submission and
    /// the final flush.  Per-record submission failures are logged and
    /// counted instead.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type SimResult<T> = Result<T, SimError>;
