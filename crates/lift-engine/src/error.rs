use lift_core::{CoreError, Floor};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A floor outside the served range was enqueued.  Rejects the call,
    /// not the simulation.
    #[error("invalid floor {floor}: outside served range {floor_min}..={floor_max}")]
    InvalidFloor {
        floor:     Floor,
        floor_min: Floor,
        floor_max: Floor,
    },

    /// A label arrived with no snapshot waiting for it.  The agent always
    /// re-captures before the next arrival, so this is an invariant
    /// violation in the scheduling order, not a recoverable condition.
    #[error("no pending snapshot to label")]
    NoPendingSnapshot,

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type EngineResult<T> = Result<T, EngineError>;
