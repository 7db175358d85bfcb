//! Clock and random implementations.

use crate::infrastructure::ports::{ClockPort, RandomPort};
use chrono::{DateTime, Utc};

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn draw(&self) -> f64 {
        use rand::Rng;
        rand::thread_rng().gen::<f64>()
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fixed random for testing: every draw returns the same value.
#[cfg(test)]
pub struct FixedRandom(pub f64);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn draw(&self) -> f64 {
        self.0
    }
}

/// Scripted random for testing: draws come from a queue, in order.
/// Once the queue is exhausted every further draw returns 0.99, which
/// fails any roll short of a sure thing.
#[cfg(test)]
pub struct ScriptedRandom {
    draws: std::sync::Mutex<std::collections::VecDeque<f64>>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: std::sync::Mutex::new(draws.into_iter().collect()),
        }
    }
}

#[cfg(test)]
impl RandomPort for ScriptedRandom {
    fn draw(&self) -> f64 {
        self.draws.lock().unwrap().pop_front().unwrap_or(0.99)
    }
}
