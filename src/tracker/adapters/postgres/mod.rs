//! `PostgreSQL` adapters for project and task persistence.

mod models;
mod schema;
mod store;

pub use store::{PostgresTrackerStore, SCHEMA_SQL, TrackerPgPool, apply_schema, connect_pool};
