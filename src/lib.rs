//! Tasklane: a small project and task tracker.
//!
//! Projects hold up to a configurable number of tasks, and each task moves
//! freely between `todo`, `doing`, and `done`, recording when it was
//! closed.
//!
//! # Architecture
//!
//! Tasklane follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Capacity, uniqueness, and lookup rules over the ports
//!
//! # Modules
//!
//! - [`tracker`]: Projects, tasks, and the services that manage them
//! - [`config`]: Environment-driven settings

pub mod config;
pub mod tracker;
