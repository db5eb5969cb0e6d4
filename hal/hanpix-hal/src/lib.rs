//! Hanpix Hardware Abstraction Layer
//!
//! This crate defines the bus transport traits consumed by the hanpix panel
//! drivers. It contains no hardware code of its own: board support crates
//! (STM32, RP2040, ...) implement these traits on top of their peripheral
//! drivers, which lets the same rendering and driver code run anywhere.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Panel drivers (hanpix-drivers)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hanpix-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  board crate  │       │  board crate  │
//! │   (STM32F4)   │       │   (RP2040)    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C master operations (monochrome panel)
//! - [`spi::SpiBus`] - SPI write operations (color panel)
//! - [`gpio::OutputPin`] - D/C, CS and RESET control lines
//! - [`delay::DelayMs`] - blocking millisecond delays for init sequences

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use spi::SpiBus;
