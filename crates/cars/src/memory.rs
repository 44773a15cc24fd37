use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::errors::StoreError;
use crate::models::{Car, CarDraft, CarKey, CarUpdate};
use crate::store::CarStore;

/// In-memory car store for development/testing.
#[derive(Default)]
pub struct InMemoryCarStore {
    cars: Mutex<HashMap<String, Car>>,
    closes: AtomicUsize,
}

impl InMemoryCarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `car` as-is, replacing any row with the same id.
    pub fn insert(&self, car: Car) {
        self.rows().insert(car.id.clone(), car);
    }

    pub fn get(&self, key: &CarKey) -> Option<Car> {
        self.rows().get(key.as_str()).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of times [`CarStore::close`] has been called.
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    fn rows(&self) -> std::sync::MutexGuard<'_, HashMap<String, Car>> {
        // A poisoned map is still consistent: every write is a single insert.
        self.cars.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl CarStore for InMemoryCarStore {
    async fn upsert_car(
        &self,
        key: &CarKey,
        create: &CarDraft,
        update: &CarUpdate,
    ) -> Result<Car, StoreError> {
        let mut rows = self.rows();

        let car = rows
            .entry(key.as_str().to_string())
            .and_modify(|car| car.apply_update(update))
            .or_insert_with(|| Car::from_draft(key, create));

        debug!(key = %key, "Upserted in-memory car");
        Ok(car.clone())
    }

    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BodyType, CarDetails, CarStatus, FuelType, Transmission};

    fn details(price: f64) -> CarDetails {
        CarDetails {
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2023,
            price,
            mileage: 5000,
            color: "Blue".to_string(),
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Manual,
            body_type: BodyType::Hatchback,
            images: vec![],
        }
    }

    async fn upsert(store: &InMemoryCarStore, key: &CarKey, price: f64) -> Car {
        store
            .upsert_car(
                key,
                &CarDraft::featured(details(price)),
                &CarUpdate::featured(details(price)),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_upsert_creates_then_updates_same_row() {
        let store = InMemoryCarStore::new();
        let key = CarKey::from(3);

        let created = upsert(&store, &key, 21000.0).await;
        let updated = upsert(&store, &key, 19500.0).await;

        assert_eq!(store.len(), 1);
        assert_eq!(updated.price, 19500.0);
        assert_eq!(updated.id, created.id);
        assert_eq!(store.get(&key), Some(updated));
    }

    #[tokio::test]
    async fn test_update_leaves_description_and_status() {
        let store = InMemoryCarStore::new();
        let key = CarKey::from(3);

        let mut edited = upsert(&store, &key, 21000.0).await;
        edited.description = "Dealer maintained".to_string();
        edited.status = CarStatus::Unavailable;
        edited.featured = false;
        store.insert(edited);

        let car = upsert(&store, &key, 21000.0).await;

        assert_eq!(car.description, "Dealer maintained");
        assert_eq!(car.status, CarStatus::Unavailable);
        assert!(car.featured);
    }

    #[tokio::test]
    async fn test_close_is_counted() {
        let store = InMemoryCarStore::new();
        assert!(store.is_empty());
        store.close().await;
        assert_eq!(store.close_count(), 1);
    }
}
