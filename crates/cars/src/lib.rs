//! Car catalog models and persistence for the showroom.
//!
//! [`store::CarStore`] is the narrow contract the rest of the workspace writes
//! through. [`database::Database`] implements it over PostgreSQL and
//! [`memory::InMemoryCarStore`] keeps rows in a map for tests and dry runs.

pub mod database;
pub mod errors;
pub mod memory;
pub mod models;
pub mod store;

pub use errors::StoreError;
pub use store::CarStore;
