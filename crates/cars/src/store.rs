//! The persistence contract the seeder writes through.

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::{Car, CarDraft, CarKey, CarUpdate};

/// Keyed upsert access to the car table.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Inserts the car built from `create` when `key` is absent, otherwise
    /// applies `update` to the existing row. Returns the row as stored.
    async fn upsert_car(
        &self,
        key: &CarKey,
        create: &CarDraft,
        update: &CarUpdate,
    ) -> Result<Car, StoreError>;

    /// Releases the underlying connection(s).
    async fn close(&self);
}
