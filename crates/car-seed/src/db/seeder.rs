//! Database seeding utilities.

use cars::models::{Car, CarDraft, CarKey, CarUpdate};
use cars::{CarStore, StoreError};
use thiserror::Error;
use tracing::info;

use crate::data::SeedCar;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to upsert car {key}")]
    Upsert {
        key: CarKey,
        #[source]
        source: StoreError,
    },
}

/// Keys written by a completed run, in the order they were upserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub upserted: Vec<CarKey>,
}

impl SeedReport {
    pub fn len(&self) -> usize {
        self.upserted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upserted.is_empty()
    }
}

/// Upserts catalog cars through a [`CarStore`].
pub struct Seeder<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: CarStore + ?Sized> Seeder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Seeds `cars` in order, one upsert at a time.
    ///
    /// The first failure stops the run; cars after it are not attempted and
    /// the completion line is not logged.
    pub async fn seed(&self, cars: &[SeedCar]) -> Result<SeedReport, SeedError> {
        info!("Seeding cars...");

        let mut report = SeedReport::default();
        for car in cars {
            let stored = self.upsert_car(car).await?;
            report.upserted.push(CarKey::from(stored.id));
        }

        info!("Seeding completed.");
        Ok(report)
    }

    /// Creates the car if its key is new, otherwise refreshes its catalog
    /// fields and marks it featured.
    pub async fn upsert_car(&self, car: &SeedCar) -> Result<Car, SeedError> {
        let key = car.key();
        let details = car.details();
        let create = CarDraft::featured(details.clone());
        let update = CarUpdate::featured(details);

        let stored = self
            .store
            .upsert_car(&key, &create, &update)
            .await
            .map_err(|source| SeedError::Upsert {
                key: key.clone(),
                source,
            })?;

        info!("Upserted: {} {}", stored.make, stored.model);
        Ok(stored)
    }
}

/// Seeds `cars` and then closes `store`, whether or not seeding succeeded.
pub async fn run<S: CarStore + ?Sized>(
    store: &S,
    cars: &[SeedCar],
) -> Result<SeedReport, SeedError> {
    let result = Seeder::new(store).seed(cars).await;
    store.close().await;
    result
}
