//! Database integration for seeding the catalog.
//!
//! The [`Seeder`] writes catalog cars through any [`cars::CarStore`], one
//! upsert at a time, and [`run`] wraps a full pass so the store is always
//! closed afterwards.

mod seeder;

pub use seeder::{SeedError, SeedReport, Seeder, run};
