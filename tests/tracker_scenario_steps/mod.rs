//! Step definitions for tracker behaviour scenarios.

mod given;
mod then;
mod when;
pub mod world;
