use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::debug;

use crate::errors::StoreError;
use crate::models::{Car, CarDraft, CarKey, CarUpdate};
use crate::store::CarStore;

/// Select list for reading a row back into [`Car`]. `price` may be stored as
/// `numeric` and `status` as the `"CarStatus"` enum, so both are cast to the
/// types `Car` decodes from.
const CAR_COLUMNS: &str = r#"
    id, make, model, year, price::float8 AS price, mileage, color,
    "fuelType", transmission, "bodyType",
    description, status::text AS status, featured, images
"#;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    pub async fn get_car(&self, key: &CarKey) -> Result<Option<Car>, StoreError> {
        let car = sqlx::query_as(&format!(r#"SELECT {CAR_COLUMNS} FROM "Car" WHERE id = $1"#))
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    pub async fn count_cars(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Car""#)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl CarStore for Database {
    async fn upsert_car(
        &self,
        key: &CarKey,
        create: &CarDraft,
        update: &CarUpdate,
    ) -> Result<Car, StoreError> {
        let c = &create.details;
        let u = &update.details;

        // The conflict branch only touches the update field set; description
        // and status keep whatever the row already has.
        let car = sqlx::query_as(&format!(
            r#"
            INSERT INTO "Car" (
                id, make, model, year, price, mileage, color,
                "fuelType", transmission, "bodyType",
                description, status, featured, images
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7,
                $8, $9, $10,
                $11, $12::"CarStatus", $13, $14
            )
            ON CONFLICT (id) DO UPDATE SET
                make = $15,
                model = $16,
                year = $17,
                price = $18,
                mileage = $19,
                color = $20,
                "fuelType" = $21,
                transmission = $22,
                "bodyType" = $23,
                featured = $24,
                images = $25
            RETURNING {CAR_COLUMNS}
            "#
        ))
        .bind(key.as_str())
        .bind(&c.make)
        .bind(&c.model)
        .bind(c.year)
        .bind(c.price)
        .bind(c.mileage)
        .bind(&c.color)
        .bind(c.fuel_type.as_str())
        .bind(c.transmission.as_str())
        .bind(c.body_type.as_str())
        .bind(&create.description)
        .bind(create.status.as_str())
        .bind(create.featured)
        .bind(&c.images)
        .bind(&u.make)
        .bind(&u.model)
        .bind(u.year)
        .bind(u.price)
        .bind(u.mileage)
        .bind(&u.color)
        .bind(u.fuel_type.as_str())
        .bind(u.transmission.as_str())
        .bind(u.body_type.as_str())
        .bind(update.featured)
        .bind(&u.images)
        .fetch_one(&self.pool)
        .await?;

        debug!(key = %key, "Upserted car row");
        Ok(car)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_list_casts_to_decoded_types() {
        // `f64` does not decode from `numeric`, nor `String` from a Postgres enum.
        assert!(CAR_COLUMNS.contains("price::float8 AS price"));
        assert!(CAR_COLUMNS.contains("status::text AS status"));
    }

    #[test]
    fn test_select_list_matches_row_fields() {
        let columns: Vec<&str> = CAR_COLUMNS
            .split(',')
            .map(|c| c.split_whitespace().last().unwrap_or_default())
            .collect();

        assert_eq!(
            columns,
            [
                "id",
                "make",
                "model",
                "year",
                "price",
                "mileage",
                "color",
                "\"fuelType\"",
                "transmission",
                "\"bodyType\"",
                "description",
                "status",
                "featured",
                "images",
            ]
        );
    }
}
