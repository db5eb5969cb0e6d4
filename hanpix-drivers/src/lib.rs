//! Panel drivers
//!
//! Thin adapters between a display controller and the `hanpix-gfx`
//! rendering core. Each driver owns its bus handle, implements
//! [`hanpix_gfx::Plane`] and [`hanpix_gfx::TextPlane`], and thereby picks
//! up every shape and text operation through the blanket extension traits.
//!
//! Two plane strategies are represented:
//!
//! - [`ssd1306::Ssd1306`] - monochrome, buffered: drawing mutates an
//!   in-memory page buffer and `update` streams it over I2C
//! - [`ssd1331::Ssd1331`] - color, direct: every pixel write is an
//!   immediate SPI transaction, there is no buffer
//!
//! Bus errors are only surfaced during initialization, where a missing or
//! dead panel is worth reporting. After that the drivers are fire and
//! forget; a failed write costs at worst a stale pixel and there is no
//! sensible recovery a caller could do per pixel.

#![no_std]
#![deny(unsafe_code)]

pub mod ssd1306;
pub mod ssd1331;

pub use ssd1306::Ssd1306;
pub use ssd1331::Ssd1331;
