//! Bus-agnostic rendering core for small dot-matrix panels
//!
//! This crate contains everything that does not depend on a specific panel
//! controller or bus:
//!
//! - [`plane::Plane`] - the logical pixel plane a panel driver exposes
//! - [`raster::Draw`] - line/rectangle/triangle/circle rasterization
//! - [`font`] - the three-tier font model (fixed, proportional, combinable)
//! - [`hangul`] - syllable decomposition and the glyph compositor
//! - [`text::TextDraw`] - UTF-8 text layout with ordered font fallback
//!
//! Panel drivers (see `hanpix-drivers`) implement [`plane::Plane`] and
//! [`plane::TextPlane`] and get the whole drawing surface for free through
//! the blanket extension traits.
//!
//! # Hangul rendering
//!
//! Precomposed Hangul covers 11,172 syllables; storing one bitmap per
//! syllable is out of the question on a microcontroller. The combinable
//! font instead stores a few hundred jamo *component* glyphs in several
//! typographic variant groups, and [`hangul::compose`] assembles the
//! initial consonant, medial vowel and optional final consonant into one
//! glyph bitmap at render time.

#![no_std]
#![deny(unsafe_code)]

pub mod font;
pub mod fonts;
pub mod hangul;
pub mod plane;
pub mod raster;
pub mod text;

// Re-export key types at crate root for convenience
pub use font::{Font, FontSet, Glyphs};
pub use plane::{Cursor, Mono, Plane, Rgb, TextPlane};
pub use raster::Draw;
pub use text::TextDraw;
