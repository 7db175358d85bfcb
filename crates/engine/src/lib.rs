//! Ember Hall engine library.
//!
//! This crate contains all server-side game logic for Ember Hall.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over the domain aggregates
//! - `infrastructure/` - Port traits and their in-process adapters
//! - `app` - Application composition
//!
//! The engine is storage-agnostic: every use case talks to the repository
//! ports, and [`App::with_memory_store`] wires the bundled in-memory adapter
//! for embedding and testing.

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for integration testing.
#[cfg(test)]
pub mod test_fixtures;

/// E2E integration tests run against the in-memory store.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
