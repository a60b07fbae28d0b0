use crate::model::DomainError;

/// Failure reported by a store gateway. Opaque to callers; the only
/// recovery is discarding the local roster and re-fetching.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(i32),
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(error))
    }
}

/// A proposed assignment collides with one held by another taster. Carries
/// the display name so the collision can be reported to the operator.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("already taken by {with}")]
pub struct Conflict {
    pub with: String,
}

#[derive(thiserror::Error, Debug)]
pub enum AllocationError {
    #[error("assignment conflict: {0}")]
    Conflict(#[from] Conflict),
    #[error("invalid assignment value: {0}")]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
