//! Testability ports for injecting time and randomness.

use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of uniform draws for reward and drop rolls.
pub trait RandomPort: Send + Sync {
    /// One uniform draw in `[0, 1)`.
    fn draw(&self) -> f64;
}
