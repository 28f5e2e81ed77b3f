//! Unit tests for the tracker module.
//!
//! Tests are organised by layer: domain validation, the in-memory store
//! contract, service rules, and failure propagation through mocked
//! repositories.

mod mock_repository_tests;
