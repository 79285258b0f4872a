use thiserror::Error;

/// Failures of the durable store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("employee store is corrupt: {0}")]
    Corrupt(String),
    #[error("failed to read employee store: {0}")]
    ReadFailed(String),
    #[error("failed to write employee store: {0}")]
    WriteFailed(String),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(#[from] models::ValidationError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("no employee id left above {0}")]
    IdsExhausted(i64),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: &str) -> Self { Self::NotFound(format!("{} {} not found", entity, id)) }

    pub fn is_validation(&self) -> bool { matches!(self, Self::Validation(_)) }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}
