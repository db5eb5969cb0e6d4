//! Blocking delay abstraction
//!
//! Panel initialization sequences need fixed settle times (power-on wait,
//! reset pulse width). The drivers take a delay provider rather than
//! assuming any particular timer peripheral.

/// Blocking millisecond delay
pub trait DelayMs {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
