//! Process-wide compatibility matrix.

use std::sync::OnceLock;

use mage_base::CompatibilityMatrix;
use tracing::debug;

use crate::error::AstromageError;

static MATRIX: OnceLock<CompatibilityMatrix> = OnceLock::new();

/// Generate the compatibility matrix from `seed`. Callable once per process.
pub fn init(seed: u64) -> Result<(), AstromageError> {
    let mut fresh = false;
    MATRIX.get_or_init(|| {
        fresh = true;
        CompatibilityMatrix::from_seed(seed)
    });
    if !fresh {
        return Err(AstromageError::AlreadyInitialized);
    }
    debug!(seed, "compatibility matrix initialized");
    Ok(())
}

pub fn is_initialized() -> bool {
    MATRIX.get().is_some()
}

pub(crate) fn matrix() -> Result<&'static CompatibilityMatrix, AstromageError> {
    MATRIX.get().ok_or(AstromageError::NotInitialized)
}
