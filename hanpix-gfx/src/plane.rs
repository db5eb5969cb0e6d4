//! Logical pixel plane
//!
//! A panel driver exposes its pixel surface through [`Plane`]. There are two
//! plane strategies: a packed in-memory buffer that is streamed to the panel
//! by an explicit update call (monochrome panels), and a direct plane where
//! every pixel write is an immediate bus transaction (color panels). Both
//! look identical to the rasterizer and the text renderer.

/// Monochrome pixel value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mono {
    /// Pixel dark
    Off,
    /// Pixel lit
    On,
}

impl Mono {
    /// Logical negation, used by the packed plane's inversion flag
    pub fn invert(self) -> Self {
        match self {
            Mono::Off => Mono::On,
            Mono::On => Mono::Off,
        }
    }
}

/// 24-bit packed RGB color
///
/// Stored as `0x00RRGGBB`. Color panels truncate each channel to its top
/// 6 bits at transmission time; the full 8-bit channels are kept here so
/// color constants read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const WHITE: Rgb = Rgb(0xFFFFFF);
    pub const RED: Rgb = Rgb(0xFF0000);
    pub const GREEN: Rgb = Rgb(0x00FF00);
    pub const BLUE: Rgb = Rgb(0x0000FF);

    /// Build a color from 8-bit channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The three channel bytes truncated to 6 bits, in R, G, B wire order
    pub const fn channels6(self) -> [u8; 3] {
        [
            (((self.0 >> 16) & 0xFF) >> 2) as u8,
            (((self.0 >> 8) & 0xFF) >> 2) as u8,
            ((self.0 & 0xFF) >> 2) as u8,
        ]
    }
}

/// Text cursor position, in panel pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub x: u16,
    pub y: u16,
}

/// Logical pixel plane backing a panel
///
/// `set_pixel` must silently discard out-of-bounds coordinates; a display
/// has no error channel back to the caller, so the policy everywhere is
/// clip or skip, never crash.
pub trait Plane {
    /// Pixel value type (1-bit for monochrome panels, RGB for color)
    type Color: Copy;

    /// Plane width in pixels
    fn width(&self) -> u16;

    /// Plane height in pixels
    fn height(&self) -> u16;

    /// Set one pixel; no-op if `x >= width()` or `y >= height()`
    fn set_pixel(&mut self, x: u16, y: u16, color: Self::Color);
}

/// A plane that carries a text cursor
///
/// The cursor advances on every character drawn by
/// [`crate::text::TextDraw::put_string`] and is repositioned with
/// [`crate::text::TextDraw::goto`].
pub trait TextPlane: Plane {
    /// Current cursor position
    fn cursor(&self) -> Cursor;

    /// Move the cursor
    fn set_cursor(&mut self, cursor: Cursor);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_invert_round_trips() {
        assert_eq!(Mono::On.invert(), Mono::Off);
        assert_eq!(Mono::On.invert().invert(), Mono::On);
    }

    #[test]
    fn rgb_channels_truncate_to_6_bits() {
        assert_eq!(Rgb::WHITE.channels6(), [0x3F, 0x3F, 0x3F]);
        assert_eq!(Rgb::BLACK.channels6(), [0, 0, 0]);
        assert_eq!(Rgb::new(0xFF, 0x00, 0x83).channels6(), [0x3F, 0x00, 0x20]);
    }
}
