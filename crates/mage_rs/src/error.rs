use mage_base::MageError;
use mage_time::TimeError;
use thiserror::Error;

/// Errors from the convenience layer.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AstromageError {
    /// `init` has not been called yet.
    #[error("compatibility matrix not initialized; call mage_rs::init first")]
    NotInitialized,
    /// `init` was called a second time.
    #[error("compatibility matrix already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Calc(#[from] MageError),
}

impl From<TimeError> for AstromageError {
    fn from(err: TimeError) -> Self {
        Self::Calc(MageError::Time(err))
    }
}
