use thiserror::Error;

/// Failure reported by a [`CarStore`](crate::store::CarStore).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
