//! Seeds the showroom car catalog.
//!
//! Every featured car is upserted by id: new cars are created with an empty
//! description and `AVAILABLE` status, existing ones get their catalog fields
//! refreshed and are marked featured again.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use car_seed::prelude::*;
//!
//! let config = SeedConfig::from_env();
//! let db = Database::connect(&config.database_url, config.max_connections).await?;
//! let report = run(&db, &featured_cars()).await?;
//! ```

pub mod config;
pub mod data;
pub mod db;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::data::{SeedCar, featured_cars};
    pub use crate::db::{SeedError, SeedReport, Seeder, run};
    pub use cars::database::Database;
    pub use cars::memory::InMemoryCarStore;
    pub use cars::CarStore;
}
